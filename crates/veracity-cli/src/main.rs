//! Veracity CLI - Fact-check claims from the terminal.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use veracity_agent::InformationRetrievalTool;
use veracity_cli::commands;
use veracity_cli::repl;
use veracity_cli::{App, Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> veracity_cli::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };

    // Config subcommands must work even when the file is broken
    let tolerant = matches!(cli.command, Some(Command::Config(_)));
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) if tolerant => {
            warn!("Ignoring unreadable config {}: {}", config_path.display(), e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(model) = cli.model {
        config.checker.gemini.model = model;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let app = App::new(config, Formatter::new(format, color_enabled));
    let mut out = io::stdout();

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&app).await?;
        }
        Some(Command::Check(args)) => {
            let claim = commands::resolve_claim(
                args.claim(),
                veracity_llm::credential_configured(),
                &mut io::stdin().lock(),
                &mut out,
            )?;
            // No claim means nothing to verify
            let Some(claim) = claim else {
                return Ok(());
            };
            let agent = app.agent().await?;
            commands::execute_check(&claim, agent.as_ref(), &app.formatter, &mut out).await?;
        }
        Some(Command::Topics(args)) => {
            commands::execute_topics(&args.text(), &app.extractor()?, &app.formatter, &mut out)?;
        }
        Some(Command::Evidence(args)) => {
            let tool = InformationRetrievalTool::new(app.extractor()?, app.wikipedia()?);
            commands::execute_evidence(&args.text(), &tool, &app.formatter, &mut out).await?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(
                args.action,
                &app.config,
                &config_path,
                &app.formatter,
                &mut out,
            )?;
        }
    }

    Ok(())
}
