//! Config command implementation.

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::io::Write;
use std::path::Path;

/// Execute the config command against the file at `path`.
pub fn execute_config<W: Write>(
    action: ConfigAction,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            writeln!(out, "# {}", path.display())?;
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(path)?;
            writeln!(
                out,
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            )?;
        }
    }
    Ok(())
}
