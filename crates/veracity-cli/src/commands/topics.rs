//! Topics command implementation.

use crate::error::Result;
use crate::output::Formatter;
use std::io::Write;
use veracity_domain::traits::TopicExtractor;
use veracity_extractor::RakeExtractor;

/// Execute the topics command.
///
/// Prints every ranked candidate phrase and marks the ones used as topics.
pub fn execute_topics<W: Write>(
    text: &str,
    extractor: &RakeExtractor,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    let phrases = extractor.ranked_phrases(text);
    let selected = extractor.extract_topics(text).len();
    writeln!(out, "{}", formatter.format_topics(&phrases, selected)?)?;
    Ok(())
}
