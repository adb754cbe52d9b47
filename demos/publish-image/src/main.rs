//! Builds the current project's image and pushes it to the registry.
//!
//! Usage: publish-image <registry-host> <repository> <region> [context-dir]

use std::path::PathBuf;

use anyhow::{Context, bail};
use tracing::info;

use caravel_observe::{LoggerConfig, logger_init};
use caravel_registry::{RegistryConfig, RegistryPublisher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger_init(&LoggerConfig::default())?;

    let mut args = std::env::args().skip(1);
    let (Some(registry), Some(name), Some(region)) = (args.next(), args.next(), args.next())
    else {
        bail!("usage: publish-image <registry-host> <repository> <region> [context-dir]");
    };
    let context = args.next().map(PathBuf::from).unwrap_or_else(|| ".".into());

    let publisher = RegistryPublisher::new(RegistryConfig::new(registry, name, region));
    let image = publisher
        .publish(&context, false)
        .await
        .context("publish failed")?;
    info!(%image, "image published");
    Ok(())
}
