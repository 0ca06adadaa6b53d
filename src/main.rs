//! dagcheck CLI - starts the pipeline validation server

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use dagcheck::{server, ConfigOverrides, FixSuggestion, ServerConfig};

#[derive(Parser)]
#[command(name = "dagcheck")]
#[command(about = "dagcheck - checks whether pipeline graphs are DAGs")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind (default 127.0.0.1)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (default 8000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Browser origin allowed by CORS (default http://localhost:3000)
    #[arg(long)]
    allowed_origin: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        host: cli.host,
        port: cli.port,
        allowed_origin: cli.allowed_origin,
    };

    let result = match ServerConfig::resolve(cli.config.as_deref(), overrides) {
        Ok(config) => server::serve(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}
