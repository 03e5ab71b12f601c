//! Column Renaming for Reporting

use sensor_catalog::rename_map;
use std::collections::HashMap;

/// Rename a column for the serving layer: raw sensor ids and their
/// `_ma`/`_slope` variants map to technical names; anything else (index,
/// settings, RUL, Health_Status) passes through unchanged.
pub fn renamed(map: &HashMap<String, String>, column: &str) -> String {
    map.get(column)
        .cloned()
        .unwrap_or_else(|| column.to_string())
}

/// Build the rename map once per export pass; pair it with [`renamed`] to
/// translate individual column names.
pub fn reporting_map() -> HashMap<String, String> {
    rename_map()
}
