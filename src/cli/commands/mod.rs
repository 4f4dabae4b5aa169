//! CLI command implementations

pub mod complete;
pub mod read;
pub mod schema;
pub mod section;
pub mod sections;
pub mod versions;

pub use complete::execute as complete;
pub use read::execute as read;
pub use schema::execute as schema;
pub use section::execute as section;
pub use sections::execute as sections;
pub use versions::execute as versions;

use crate::cli::args::OutputFormat;
use crate::error::DocsResult;
use crate::service::Resource;

/// Print a served document in the requested format
fn print_resource(resource: &Resource, format: OutputFormat) -> DocsResult<()> {
    match format {
        OutputFormat::Text => println!("{}", resource.text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(resource)?),
    }
    Ok(())
}
