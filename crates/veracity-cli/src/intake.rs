//! Console claim intake.

use std::io::{self, BufRead, Write};
use veracity_domain::Claim;

/// Prompt shown before reading a claim.
pub const PROMPT: &str = "Enter the claim to be fact-checked: ";

/// Prompt for a claim on `output` and read one line from `input`.
///
/// Empty input (or end of input) is reported on `output` and yields `None`;
/// the caller then skips verification.
pub fn read_claim<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Claim>> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    match Claim::parse(&line) {
        Ok(claim) => Ok(Some(claim)),
        Err(e) => {
            writeln!(output, "Error getting claim: {}", e)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Option<Claim>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let claim = read_claim(&mut reader, &mut output).unwrap();
        (claim, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reads_trimmed_claim() {
        let (claim, output) = run("  Earth is flat  \n");
        assert_eq!(claim.unwrap().text(), "Earth is flat");
        assert_eq!(output, PROMPT);
    }

    #[test]
    fn test_empty_input_reported() {
        for input in ["\n", "   \n", ""] {
            let (claim, output) = run(input);
            assert!(claim.is_none());
            assert_eq!(
                output,
                format!("{}Error getting claim: Claim cannot be empty\n", PROMPT)
            );
        }
    }

    #[test]
    fn test_reads_only_first_line() {
        let (claim, _) = run("Mount Everest is the tallest mountain\nsecond line\n");
        assert_eq!(claim.unwrap().text(), "Mount Everest is the tallest mountain");
    }
}
