//! Schema command - print a version's JSON schema

use super::print_resource;
use crate::cli::args::{OutputFormat, SchemaArgs};
use crate::config::Config;
use crate::error::DocsResult;
use crate::service::DocsService;

/// Execute the schema command
pub async fn execute(args: SchemaArgs, format: OutputFormat, config: &Config) -> DocsResult<()> {
    let service = DocsService::from_config(config).await?;
    let resource = service.schema(&args.protocol).await?;
    print_resource(&resource, format)
}
