//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::app::App;
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::io;
use tracing::{debug, warn};
use veracity_agent::InformationRetrievalTool;
use veracity_domain::Claim;

const PROMPT: &str = "veracity> ";

/// Run the interactive REPL.
///
/// The agent is built on the first check and reused for the session.
pub async fn run_repl(app: &App) -> Result<()> {
    let formatter = &app.formatter;
    println!(
        "{}",
        formatter.info(
            "Veracity REPL - Enter a claim to fact-check, 'help' for commands, 'exit' to quit"
        )
    );
    if !veracity_llm::credential_configured() {
        println!("{}", formatter.warning(&CliError::MissingCredential.to_string()));
    }
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(app.config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = Config::history_path()?;
    if editor.load_history(&history_path).is_err() {
        debug!("No history at {}", history_path.display());
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(app);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, app).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Err(e) = editor.save_history(&history_path) {
        warn!("Could not save history: {}", e);
    }

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Check(String),
    Topics(String),
    Evidence(String),
}

/// Parse a REPL command line.
///
/// A line that does not start with a command word is a claim.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let require = |usage: &str| -> Result<String> {
        if rest.is_empty() {
            Err(CliError::InvalidInput(format!("Usage: {}", usage)))
        } else {
            Ok(rest.to_string())
        }
    };

    match word {
        "exit" | "quit" | "q" if rest.is_empty() => Ok(ReplCommand::Exit),
        "help" | "?" if rest.is_empty() => Ok(ReplCommand::Help),
        "check" => Ok(ReplCommand::Check(require("check <claim>")?)),
        "topics" => Ok(ReplCommand::Topics(require("topics <text>")?)),
        "evidence" => Ok(ReplCommand::Evidence(require("evidence <text>")?)),
        _ => Ok(ReplCommand::Check(line.to_string())),
    }
}

/// Execute a REPL command.
async fn execute_repl_command(cmd: ReplCommand, app: &App) -> Result<()> {
    let mut out = io::stdout();
    match cmd {
        ReplCommand::Check(text) => {
            let claim = Claim::parse(&text)
                .map_err(|e| CliError::InvalidInput(e.to_string()))?;
            let agent = app.agent().await?;
            commands::execute_check(&claim, agent.as_ref(), &app.formatter, &mut out).await?;
        }
        ReplCommand::Topics(text) => {
            commands::execute_topics(&text, &app.extractor()?, &app.formatter, &mut out)?;
        }
        ReplCommand::Evidence(text) => {
            let tool = InformationRetrievalTool::new(app.extractor()?, app.wikipedia()?);
            commands::execute_evidence(&text, &tool, &app.formatter, &mut out).await?;
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }
    Ok(())
}

fn print_help(app: &App) {
    println!("{}", app.formatter.info("Available commands:"));
    println!();
    println!("  <claim>                 - Fact-check a claim");
    println!("  check <claim>           - Fact-check a claim");
    println!("  topics <text>           - Show the ranked topic phrases of a text");
    println!("  evidence <text>         - Show the Wikipedia document found for a text");
    println!("  help, ?                 - Show this help");
    println!("  exit, quit, q           - Exit REPL");
    println!();
    println!("  Model: {}", app.config.checker.gemini.model);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_a_claim() {
        assert_eq!(
            parse_repl_command("Earth is flat").unwrap(),
            ReplCommand::Check("Earth is flat".to_string())
        );
    }

    #[test]
    fn test_command_words() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(
            parse_repl_command("check   Mount Everest is tall").unwrap(),
            ReplCommand::Check("Mount Everest is tall".to_string())
        );
        assert_eq!(
            parse_repl_command("topics mount everest").unwrap(),
            ReplCommand::Topics("mount everest".to_string())
        );
        assert_eq!(
            parse_repl_command("evidence mount everest").unwrap(),
            ReplCommand::Evidence("mount everest".to_string())
        );
    }

    #[test]
    fn test_command_word_inside_claim() {
        // "q" followed by text is a claim, not a request to quit
        assert_eq!(
            parse_repl_command("q is the seventeenth letter").unwrap(),
            ReplCommand::Check("q is the seventeenth letter".to_string())
        );
    }

    #[test]
    fn test_missing_argument() {
        assert!(matches!(
            parse_repl_command("topics"),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_repl_command("check"),
            Err(CliError::InvalidInput(_))
        ));
    }
}
