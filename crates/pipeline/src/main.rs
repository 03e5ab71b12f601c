//! Predictive-Maintenance Feature Pipeline - Main Entry Point

use pipeline::{init_logging, run, PipelineConfig};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    info!(
        "=== Fleet PM Feature Pipeline v{} ===",
        env!("CARGO_PKG_VERSION")
    );

    // Optional first argument: path to a TOML config file.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = PipelineConfig::load(config_path.as_deref())?;

    run(&config)
}
