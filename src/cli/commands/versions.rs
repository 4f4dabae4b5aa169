//! Versions command - list supported protocol versions

use crate::cli::args::OutputFormat;
use crate::error::DocsResult;
use crate::version::Version;
use console::style;

/// Execute the versions command
pub fn execute(format: OutputFormat) -> DocsResult<()> {
    let default = Version::default_version();

    match format {
        OutputFormat::Json => {
            #[derive(serde::Serialize)]
            struct VersionsJson {
                supported: Vec<&'static str>,
                default: &'static str,
            }

            let json = VersionsJson {
                supported: Version::all().map(|v| v.as_str()).collect(),
                default: default.as_str(),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            for version in Version::all() {
                if version == default {
                    println!("{} {}", version, style("(default)").dim());
                } else {
                    println!("{}", version);
                }
            }
        }
    }

    Ok(())
}
