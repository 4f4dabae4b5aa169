//! Section command - compose one documentation section

use super::print_resource;
use crate::cli::args::{OutputFormat, SectionArgs};
use crate::config::Config;
use crate::error::DocsResult;
use crate::service::DocsService;

/// Execute the section command
pub async fn execute(args: SectionArgs, format: OutputFormat, config: &Config) -> DocsResult<()> {
    let service = DocsService::from_config(config).await?;
    let resource = service
        .section(args.protocol.as_deref(), &args.name)
        .await?;
    print_resource(&resource, format)
}
