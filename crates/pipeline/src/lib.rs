//! Predictive-Maintenance Feature Pipeline
//!
//! Batch ETL orchestration: sensor dimension table, raw-data ingestion, the
//! windowed feature kernel, serving-layer renaming, and tabular export. Any
//! stage failure aborts the run; no partial fact table is ever written.

use anyhow::Context;
use data_ingest::load_raw_data;
use feature_kernel::FeatureExtractor;
use report_export::{write_fact_table, write_trend_extract, ExportError};
use sensor_catalog::{technical_name, write_dimension_table};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod config;

pub use config::PipelineConfig;

/// Initialize logging for the pipeline binary
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the full batch pipeline.
///
/// Stages, in order: dimension table, ingestion, kernel (smoothing +
/// slopes + RUL + health), fact-table export, optional per-unit trend
/// extract. A missing trend unit is logged and skipped; every other
/// failure aborts with a descriptive error.
pub fn run(config: &PipelineConfig) -> anyhow::Result<()> {
    info!("Starting predictive maintenance ETL pipeline (BI layer)...");

    // 1. Metadata generation (dimension table)
    let metadata_path = config.data_processed_dir.join("sensor_metadata.csv");
    write_dimension_table(&metadata_path).context("metadata generation failed")?;

    // 2. Data ingestion
    let input_path = config.data_raw_dir.join(&config.input_file);
    let table = load_raw_data(&input_path).context("setup failed")?;

    // 3. Numerical processing (kernel). Raw ids (s_2, s_3) are kept here
    // for code stability; renaming happens at the serving layer.
    let targets: Vec<String> = config
        .target_sensors
        .iter()
        .filter(|s| technical_name(s).is_some())
        .cloned()
        .collect();
    info!(
        "Applying moving average & vectorized slope (window={})...",
        config.window_size
    );
    let extractor = FeatureExtractor::new(config.window_size)?;

    // 4. Feature engineering
    info!("Calculating RUL and health status...");
    let derived = extractor.extract(&table, &targets)?;

    // 5. Renaming & projection (serving layer) + 6. export
    info!("Exporting fact table with engineering column names...");
    let fact_path = config.data_processed_dir.join("engine_data.csv");
    write_fact_table(&fact_path, &table, &derived).context("fact table export failed")?;

    // 7. Optional trend extract for plotting tools
    if let Some(unit) = config.trend_unit {
        let trend_path = config
            .data_processed_dir
            .join(format!("unit_{unit}_trends.csv"));
        match write_trend_extract(&trend_path, &table, &derived, unit, &config.trend_sensors) {
            Err(ExportError::UnknownUnit(unit)) => {
                warn!("No data found for unit {}, skipping trend extract", unit);
            }
            other => other.context("trend extract failed")?,
        }
    }

    info!("BI data preparation complete.");
    info!("   -> Dimension table: {}", metadata_path.display());
    info!("   -> Fact table:      {}", fact_path.display());
    Ok(())
}
