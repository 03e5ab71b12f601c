//! Static Sensor Catalog

use serde::Serialize;
use std::collections::HashMap;

/// Index columns of the raw dataset, in file order
pub const INDEX_COLUMNS: [&str; 2] = ["unit_nr", "time_cycles"];

/// Operational setting columns of the raw dataset, in file order
pub const SETTING_COLUMNS: [&str; 3] = ["setting_1", "setting_2", "setting_3"];

/// Metadata for one sensor channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorMeta {
    /// Raw column id, e.g. `s_2`
    pub id: &'static str,
    /// Physics-based engineering name, e.g. `LPC_Outlet_Temp`
    pub technical_name: &'static str,
    /// Unit of measure, e.g. `R`, `psia`, `rpm`
    pub unit: &'static str,
    /// Engine subsystem the sensor belongs to
    pub component: &'static str,
}

/// The full 21-sensor catalog, in raw column order
pub const SENSOR_CATALOG: [SensorMeta; 21] = [
    SensorMeta { id: "s_1", technical_name: "Fan_Inlet_Temp", unit: "R", component: "Fan" },
    SensorMeta { id: "s_2", technical_name: "LPC_Outlet_Temp", unit: "R", component: "LPC" },
    SensorMeta { id: "s_3", technical_name: "HPC_Outlet_Temp", unit: "R", component: "HPC" },
    SensorMeta { id: "s_4", technical_name: "LPT_Outlet_Temp", unit: "R", component: "LPT" },
    SensorMeta { id: "s_5", technical_name: "Fan_Inlet_Press", unit: "psia", component: "Fan" },
    SensorMeta { id: "s_6", technical_name: "Bypass_Duct_Press", unit: "psia", component: "Duct" },
    SensorMeta { id: "s_7", technical_name: "HPC_Outlet_Press", unit: "psia", component: "HPC" },
    SensorMeta { id: "s_8", technical_name: "Physical_Fan_Speed", unit: "rpm", component: "Fan" },
    SensorMeta { id: "s_9", technical_name: "Physical_Core_Speed", unit: "rpm", component: "Core" },
    SensorMeta { id: "s_10", technical_name: "Engine_Press_Ratio", unit: "-", component: "Engine" },
    SensorMeta { id: "s_11", technical_name: "Static_Press_Ratio", unit: "-", component: "HPC" },
    SensorMeta { id: "s_12", technical_name: "Bleed_Flow", unit: "pps", component: "Fan" },
    SensorMeta { id: "s_13", technical_name: "Corr_Fan_Speed", unit: "rpm", component: "Fan" },
    SensorMeta { id: "s_14", technical_name: "Corr_Core_Speed", unit: "rpm", component: "Core" },
    SensorMeta { id: "s_15", technical_name: "Bypass_Ratio", unit: "-", component: "Duct" },
    SensorMeta { id: "s_16", technical_name: "Burner_Fuel_Air_Ratio", unit: "-", component: "Burner" },
    SensorMeta { id: "s_17", technical_name: "Bleed_Enthalpy", unit: "-", component: "Turbo" },
    SensorMeta { id: "s_18", technical_name: "Demand_Fan_Speed", unit: "rpm", component: "Fan" },
    SensorMeta { id: "s_19", technical_name: "Demand_Corr_Fan_Speed", unit: "rpm", component: "Fan" },
    SensorMeta { id: "s_20", technical_name: "HPT_Coolant_Bleed", unit: "lbm/s", component: "HPT" },
    SensorMeta { id: "s_21", technical_name: "LPT_Coolant_Bleed", unit: "lbm/s", component: "LPT" },
];

/// All raw sensor column ids, in catalog order
pub fn sensor_ids() -> Vec<String> {
    SENSOR_CATALOG.iter().map(|m| m.id.to_string()).collect()
}

/// Look up the technical name for a raw sensor id
pub fn technical_name(id: &str) -> Option<&'static str> {
    SENSOR_CATALOG
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.technical_name)
}

/// Build the reporting rename map: raw ids to technical names, plus their
/// `_ma` and `_slope` derived variants (`s_2_slope` -> `LPC_Outlet_Temp_Slope`).
pub fn rename_map() -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(SENSOR_CATALOG.len() * 3);
    for meta in &SENSOR_CATALOG {
        map.insert(meta.id.to_string(), meta.technical_name.to_string());
        map.insert(
            format!("{}_ma", meta.id),
            format!("{}_MA", meta.technical_name),
        );
        map.insert(
            format!("{}_slope", meta.id),
            format!("{}_Slope", meta.technical_name),
        );
    }
    map
}
