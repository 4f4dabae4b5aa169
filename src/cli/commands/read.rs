//! Read command - resolve a resource URI

use super::print_resource;
use crate::cli::args::{OutputFormat, ReadArgs};
use crate::config::Config;
use crate::error::DocsResult;
use crate::service::DocsService;

/// Execute the read command
pub async fn execute(args: ReadArgs, format: OutputFormat, config: &Config) -> DocsResult<()> {
    let service = DocsService::from_config(config).await?;
    let resource = service.read(&args.uri).await?;
    print_resource(&resource, format)
}
