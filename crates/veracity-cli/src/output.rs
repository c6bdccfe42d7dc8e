//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use veracity_domain::{Claim, EvidenceDocument, Verdict, VerdictClass};
use veracity_extractor::RankedPhrase;

/// Characters of document content shown in the evidence table.
const PREVIEW_CHARS: usize = 120;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a verdict for a claim.
    pub fn format_verdict(&self, claim: &Claim, verdict: &Verdict) -> Result<String> {
        let class = verdict.class();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "claim": claim.text(),
                "verdict": verdict.text(),
                "style": class.style(),
                "failed": verdict.is_failure(),
            }))?),
            OutputFormat::Table => {
                let (icon, color) = match class {
                    VerdictClass::Affirmative => ("✅", "green"),
                    VerdictClass::Negative => ("❌", "red"),
                    VerdictClass::Neutral => ("💡", "blue"),
                };
                let label = if self.color_enabled {
                    "Verdict:".bold().to_string()
                } else {
                    "Verdict:".to_string()
                };
                Ok(format!(
                    "{} {} {}",
                    icon,
                    label,
                    self.colorize(verdict.text(), color)
                ))
            }
        }
    }

    /// Format ranked topic phrases; the first `selected` are the topics used.
    pub fn format_topics(&self, phrases: &[RankedPhrase], selected: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = phrases
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        serde_json::json!({
                            "rank": i + 1,
                            "phrase": p.phrase,
                            "score": p.score,
                            "selected": i < selected,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if phrases.is_empty() {
                    return Ok(self.colorize("No topic found for the claim.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Rank", "Phrase", "Score", "Topic"]);
                for (i, p) in phrases.iter().enumerate() {
                    builder.push_record([
                        (i + 1).to_string(),
                        p.phrase.clone(),
                        format!("{:.2}", p.score),
                        if i < selected { "✓" } else { "" }.to_string(),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format retrieved documents.
    pub fn format_documents(&self, documents: &[EvidenceDocument]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = documents
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "title": d.title,
                            "source": d.source,
                            "content": d.content,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if documents.is_empty() {
                    return Ok(self.colorize("No document found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Title", "Source", "Content"]);
                for d in documents {
                    builder.push_record([d.title.clone(), d.source.clone(), preview(&d.content)]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Whether output is machine-readable.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// First line of a document, shortened for a table cell.
fn preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    if first_line.chars().count() <= PREVIEW_CHARS {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veracity_domain::ErrorKind;

    fn claim() -> Claim {
        Claim::parse("Mount Everest is the tallest mountain").unwrap()
    }

    fn phrases() -> Vec<RankedPhrase> {
        vec![
            RankedPhrase {
                phrase: "tallest mountain".to_string(),
                score: 4.0,
            },
            RankedPhrase {
                phrase: "mount everest".to_string(),
                score: 4.0,
            },
        ]
    }

    #[test]
    fn test_verdict_table_icons() {
        let formatter = Formatter::new(OutputFormat::Table, false);

        let output = formatter
            .format_verdict(&claim(), &Verdict::Judgement("True. It is.".into()))
            .unwrap();
        assert_eq!(output, "✅ Verdict: True. It is.");

        let output = formatter
            .format_verdict(&claim(), &Verdict::Judgement("false, it is not".into()))
            .unwrap();
        assert!(output.starts_with("❌"));

        let failure = Verdict::failure(
            ErrorKind::AgentInvocationFailure,
            "Error during fact checking: timeout",
        );
        let output = formatter.format_verdict(&claim(), &failure).unwrap();
        assert!(output.starts_with("💡"));
    }

    #[test]
    fn test_verdict_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_verdict(&claim(), &Verdict::Judgement("True.".into()))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["claim"], "Mount Everest is the tallest mountain");
        assert_eq!(value["style"], "success");
        assert_eq!(value["failed"], false);
    }

    #[test]
    fn test_topics_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_topics(&phrases(), 1).unwrap();
        assert!(output.contains("Phrase"));
        assert!(output.contains("tallest mountain"));
        assert!(output.contains("4.00"));
    }

    #[test]
    fn test_topics_json_marks_selection() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_topics(&phrases(), 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["selected"], true);
        assert_eq!(value[1]["selected"], false);
        assert_eq!(value[1]["rank"], 2);
    }

    #[test]
    fn test_empty_topics() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_topics(&[], 3).unwrap();
        assert!(output.contains("No topic found"));
    }

    #[test]
    fn test_documents_preview() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let doc = EvidenceDocument::new(
            "Mount Everest",
            "https://en.wikipedia.org/wiki/Mount_Everest",
            format!("{}\nSecond paragraph", "x".repeat(300)),
        );
        let output = formatter.format_documents(&[doc]).unwrap();
        assert!(output.contains("Mount Everest"));
        assert!(output.contains("…"));
        assert!(!output.contains("Second paragraph"));
    }

    #[test]
    fn test_no_documents() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_documents(&[]).unwrap();
        assert_eq!(output, "No document found.");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
