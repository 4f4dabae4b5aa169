//! Complete command - schema plus every section

use super::print_resource;
use crate::cli::args::{CompleteArgs, OutputFormat};
use crate::config::Config;
use crate::error::DocsResult;
use crate::service::DocsService;

/// Execute the complete command
pub async fn execute(args: CompleteArgs, format: OutputFormat, config: &Config) -> DocsResult<()> {
    let service = DocsService::from_config(config).await?;
    let resource = service.complete(args.protocol.as_deref()).await?;
    print_resource(&resource, format)
}
