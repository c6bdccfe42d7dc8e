//! Check command implementation.

use crate::error::{CliError, Result};
use crate::intake;
use crate::output::Formatter;
use std::io::{BufRead, Write};
use tracing::info;
use veracity_agent::ClaimVerifier;
use veracity_domain::{Claim, Verdict};

/// Claim to check: the argument if given, otherwise one read from `input`.
///
/// A missing API key is reported before any prompt. A blank claim is
/// reported on `output` and yields `None`.
pub fn resolve_claim<R, W>(
    argument: Option<String>,
    credential_configured: bool,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Claim>>
where
    R: BufRead,
    W: Write,
{
    if !credential_configured {
        return Err(CliError::MissingCredential);
    }

    match argument {
        Some(text) => match Claim::parse(&text) {
            Ok(claim) => Ok(Some(claim)),
            Err(e) => {
                writeln!(output, "Error getting claim: {}", e)?;
                Ok(None)
            }
        },
        None => Ok(intake::read_claim(input, output)?),
    }
}

/// Execute the check command.
///
/// Verification failures are part of the verdict, so this only fails when
/// the result cannot be written.
pub async fn execute_check<V, W>(
    claim: &Claim,
    verifier: &V,
    formatter: &Formatter,
    out: &mut W,
) -> Result<Verdict>
where
    V: ClaimVerifier,
    W: Write,
{
    info!("Verifying claim {}", claim.id());
    if !formatter.is_json() {
        let progress = format!("Verifying claim: '{}'...", claim.text());
        writeln!(out, "{}", formatter.info(&progress))?;
    }

    let verdict = verifier.verify(claim.text()).await;
    writeln!(out, "{}", formatter.format_verdict(claim, &verdict)?)?;
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::future::Future;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use veracity_domain::VerdictClass;

    #[derive(Default)]
    struct CountingVerifier {
        calls: AtomicUsize,
    }

    impl ClaimVerifier for CountingVerifier {
        fn verify(&self, claim: &str) -> impl Future<Output = Verdict> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let verdict = if claim.contains("flat") {
                Verdict::Judgement("False. Earth is an oblate spheroid.".into())
            } else {
                Verdict::Judgement("True.".into())
            };
            async move { verdict }
        }
    }

    #[tokio::test]
    async fn test_check_prints_verdict() {
        let verifier = CountingVerifier::default();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let claim = Claim::parse("Earth is flat").unwrap();
        let mut out = Vec::new();

        let verdict = execute_check(&claim, &verifier, &formatter, &mut out)
            .await
            .unwrap();

        assert_eq!(verdict.class(), VerdictClass::Negative);
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Verifying claim: 'Earth is flat'..."));
        assert!(printed.contains("❌ Verdict: False. Earth is an oblate spheroid."));
    }

    #[tokio::test]
    async fn test_json_output_has_no_progress_line() {
        let verifier = CountingVerifier::default();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let claim = Claim::parse("Mount Everest is tall").unwrap();
        let mut out = Vec::new();

        execute_check(&claim, &verifier, &formatter, &mut out)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["style"], "success");
    }

    #[test]
    fn test_missing_credential_reported_before_prompt() {
        let mut input = Cursor::new(b"Earth is flat\n".to_vec());
        let mut output = Vec::new();

        let result = resolve_claim(None, false, &mut input, &mut output);

        assert!(matches!(result, Err(CliError::MissingCredential)));
        assert!(output.is_empty());
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_claim_read_from_console() {
        let mut input = Cursor::new(b"Earth is flat\n".to_vec());
        let mut output = Vec::new();

        let claim = resolve_claim(None, true, &mut input, &mut output)
            .unwrap()
            .unwrap();

        assert_eq!(claim.text(), "Earth is flat");
        assert_eq!(String::from_utf8(output).unwrap(), intake::PROMPT);
    }

    #[test]
    fn test_claim_argument_skips_prompt() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let claim = resolve_claim(Some("Earth is flat".into()), true, &mut input, &mut output)
            .unwrap()
            .unwrap();

        assert_eq!(claim.text(), "Earth is flat");
        assert!(output.is_empty());
    }

    #[test]
    fn test_blank_claim_argument_reported() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let claim = resolve_claim(Some("   ".into()), true, &mut input, &mut output).unwrap();

        assert!(claim.is_none());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Error getting claim: Claim cannot be empty\n"
        );
    }
}
