//! Sections command - list section names and their selection rules

use crate::catalog::{Catalog, COMPLETE_SECTIONS};
use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::DocsResult;
use console::style;

/// Execute the sections command
pub async fn execute(format: OutputFormat, config: &Config) -> DocsResult<()> {
    let catalog = Catalog::load(config).await?;

    match format {
        OutputFormat::Json => {
            #[derive(serde::Serialize)]
            struct SectionJson {
                name: &'static str,
                title: String,
                rule: String,
                in_complete: bool,
            }

            let sections: Vec<SectionJson> = catalog
                .sections()
                .iter()
                .map(|s| SectionJson {
                    name: s.name,
                    title: s.title(),
                    rule: s.spec.to_string(),
                    in_complete: COMPLETE_SECTIONS.contains(&s.name),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&sections)?);
        }
        OutputFormat::Text => {
            println!(
                "{:<20} {:<10} {}",
                style("NAME").bold(),
                style("COMPLETE").bold(),
                style("RULE").bold()
            );
            println!("{}", "-".repeat(70));

            for section in catalog.sections() {
                let complete = if COMPLETE_SECTIONS.contains(&section.name) {
                    style("yes").green()
                } else {
                    style("no").dim()
                };
                println!("{:<20} {:<10} {}", section.name, complete, section.spec);
            }

            println!();
            println!("Total: {} locator(s) in catalog", catalog.locators().len());
        }
    }

    Ok(())
}
