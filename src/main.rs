//! mcp-docs - Model Context Protocol documentation aggregator
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use mcp_docs::cli::{Cli, Commands};
use mcp_docs::config::{Config, ConfigManager};
use mcp_docs::error::DocsResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> DocsResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    debug!("Using config {}", config_manager.path().display());

    let format = cli.format;
    match cli.command {
        Commands::Section(args) => mcp_docs::cli::commands::section(args, format, &config).await,
        Commands::Complete(args) => mcp_docs::cli::commands::complete(args, format, &config).await,
        Commands::Schema(args) => mcp_docs::cli::commands::schema(args, format, &config).await,
        Commands::Read(args) => mcp_docs::cli::commands::read(args, format, &config).await,
        Commands::Versions => mcp_docs::cli::commands::versions(format),
        Commands::Sections => mcp_docs::cli::commands::sections(format, &config).await,
    }
}

/// 0 = warn, 1 = info, 2+ = debug; `RUST_LOG` wins when set
fn init_logging(verbose: u8, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("mcp_docs=warn"),
        1 => EnvFilter::new("mcp_docs=info"),
        _ => EnvFilter::new("mcp_docs=debug"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
