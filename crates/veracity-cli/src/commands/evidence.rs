//! Evidence command implementation.

use crate::error::Result;
use crate::output::Formatter;
use std::fmt::Display;
use std::io::Write;
use veracity_agent::InformationRetrievalTool;
use veracity_domain::traits::{EvidenceSource, TopicExtractor};

/// Execute the evidence command.
///
/// Runs the same retrieval the agent's tool performs and prints the result.
pub async fn execute_evidence<E, S, W>(
    text: &str,
    tool: &InformationRetrievalTool<E, S>,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()>
where
    E: TopicExtractor,
    S: EvidenceSource,
    S::Error: Display,
    W: Write,
{
    let documents = tool.retrieve(text).await?;
    writeln!(out, "{}", formatter.format_documents(&documents)?)?;
    Ok(())
}
