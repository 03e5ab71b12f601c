//! Sensor Metadata Catalog
//!
//! Source of truth for the raw dataset schema and the sensor-id to
//! engineering-name mapping used by reporting: id, technical name, unit of
//! measure, and engine subsystem per sensor.

mod catalog;
mod dimension;

pub use catalog::{
    rename_map, sensor_ids, technical_name, SensorMeta, INDEX_COLUMNS, SENSOR_CATALOG,
    SETTING_COLUMNS,
};
pub use dimension::{write_dimension_table, CatalogError};
