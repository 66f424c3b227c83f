//! Logging into the browser console.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt as _, registry::Registry};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Error during logger initialization.
#[derive(Debug, thiserror::Error, displaydoc::Display)]
pub enum Error {
    /// Failed to set global logger
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize logger.
pub fn init() -> Result<(), Error> {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(Level::INFO)
        .build();
    let subscriber = Registry::default().with(WASMLayer::new(config));
    tracing::subscriber::set_global_default(subscriber).map_err(Into::into)
}
