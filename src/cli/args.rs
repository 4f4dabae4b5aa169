//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// mcp-docs - Model Context Protocol documentation aggregator
///
/// Fetches versioned specification pages and composes them into
/// per-section or complete documents.
#[derive(Parser, Debug)]
#[command(name = "mcp-docs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MCP_DOCS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for documents
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose one documentation section
    Section(SectionArgs),

    /// Compose the schema and every section into one document
    Complete(CompleteArgs),

    /// Print the JSON schema of a protocol version
    Schema(SchemaArgs),

    /// Read a resource URI (mcp-docs://specification/{version}/{section})
    Read(ReadArgs),

    /// List supported protocol versions
    Versions,

    /// List section names and how they select pages
    Sections,
}

/// Arguments for the section command
#[derive(Parser, Debug)]
pub struct SectionArgs {
    /// Section name (see `mcp-docs sections`)
    pub name: String,

    /// Protocol version; unsupported values fall back to the default
    #[arg(short, long)]
    pub protocol: Option<String>,
}

/// Arguments for the complete command
#[derive(Parser, Debug)]
pub struct CompleteArgs {
    /// Protocol version; unsupported values fall back to the default
    #[arg(short, long)]
    pub protocol: Option<String>,
}

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Protocol version (must be supported)
    pub protocol: String,
}

/// Arguments for the read command
#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// Resource URI
    pub uri: String,
}

/// Output format
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Document text only
    #[default]
    Text,
    /// JSON object with uri, mimeType and text
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_section_with_protocol() {
        let cli = Cli::parse_from(["mcp-docs", "section", "client", "-p", "draft"]);
        match cli.command {
            Commands::Section(args) => {
                assert_eq!(args.name, "client");
                assert_eq!(args.protocol.as_deref(), Some("draft"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mcp-docs", "versions", "-vv", "--format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
