//! Veracity web server
//!
//! Starts the HTTP server for the fact-checking page.

use std::env;
use std::process;
use tracing_subscriber::EnvFilter;
use veracity_web::{config::WebConfig, start_server, WebError};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), WebError> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        WebConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        WebConfig::default()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Veracity Web - Claim Fact-Checking Page");
    println!();
    println!("USAGE:");
    println!("    veracity-web [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    GOOGLE_API_KEY     Gemini API key (GEMINI_API_KEY is also accepted)");
    println!("    RUST_LOG           Log filter (default: info)");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 8501)");
    println!("    - [checker.extractor], [checker.wikipedia], [checker.gemini],");
    println!("      [checker.agent]: fact checker settings");
    println!();
}
