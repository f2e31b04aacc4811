//! Response types rendered by the `agro` CLI.
//!
//! These structs define the JSON shape of `agro list`, `agro stats`,
//! `agro show` and `agro exercise`. The table renderer flattens the same
//! values, so field names double as column headers.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::capabilities::InstructionInfo;
use crate::entities::Equipment;
use crate::enums::{Capability, EquipmentKind};

/// One line of the equipment listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EquipmentRow {
    pub code: String,
    pub name: String,
    pub manufacturer: String,
    pub power_w: f64,
    pub zone: String,
    pub kind: EquipmentKind,
    pub category: String,
    pub operational: bool,
}

impl From<&Equipment> for EquipmentRow {
    fn from(equipment: &Equipment) -> Self {
        Self {
            code: equipment.code().to_string(),
            name: equipment.name().to_string(),
            manufacturer: equipment.manufacturer().to_string(),
            power_w: equipment.power_w(),
            zone: equipment.zone().to_string(),
            kind: equipment.kind(),
            category: equipment.category().to_string(),
            operational: equipment.is_operational(),
        }
    }
}

/// Aggregate report over the whole registry.
///
/// Capability counts overlap: a record supporting all three contracts counts
/// toward each of them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FleetStats {
    pub total: usize,
    pub measurable: usize,
    pub actionable: usize,
    pub loggable: usize,
    pub total_power_w: f64,
    pub average_power_w: f64,
}

impl FleetStats {
    /// Compute the report. The average is `0.0` for an empty input.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Equipment>,
    {
        let mut stats = Self {
            total: 0,
            measurable: 0,
            actionable: 0,
            loggable: 0,
            total_power_w: 0.0,
            average_power_w: 0.0,
        };

        for equipment in records {
            stats.total += 1;
            if equipment.supports(Capability::Measurable) {
                stats.measurable += 1;
            }
            if equipment.supports(Capability::Actionable) {
                stats.actionable += 1;
            }
            if equipment.supports(Capability::Loggable) {
                stats.loggable += 1;
            }
            stats.total_power_w += equipment.power_w();
        }

        if stats.total > 0 {
            #[allow(clippy::cast_precision_loss)]
            let total = stats.total as f64;
            stats.average_power_w = stats.total_power_w / total;
        }
        stats
    }
}

impl fmt::Display for FleetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(40);
        writeln!(f, "{rule}")?;
        writeln!(f, "    REPORTE ESTADÍSTICO DEL SISTEMA")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "Total de equipos: {}", self.total)?;
        writeln!(f, "Equipos con medición: {}", self.measurable)?;
        writeln!(f, "Equipos accionables: {}", self.actionable)?;
        writeln!(f, "Equipos auditables: {}", self.loggable)?;
        writeln!(f, "Consumo total: {:.2} W", self.total_power_w)?;
        writeln!(f, "Consumo promedio: {:.2} W", self.average_power_w)?;
        writeln!(f, "{rule}")
    }
}

/// Full view of a single record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EquipmentDetails {
    #[serde(flatten)]
    pub row: EquipmentRow,
    pub capabilities: Vec<Capability>,
    pub status: Option<String>,
    pub summary: String,
}

impl From<&Equipment> for EquipmentDetails {
    fn from(equipment: &Equipment) -> Self {
        Self {
            row: EquipmentRow::from(equipment),
            capabilities: equipment.capabilities().to_vec(),
            status: equipment.status().map(String::from),
            summary: equipment.summary(),
        }
    }
}

/// Result of one instruction sent to an actionable record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OperationOutcome {
    pub instruction: String,
    pub accepted: bool,
    pub status: String,
}

/// Everything produced by exercising a record's capabilities once.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExerciseReport {
    pub code: String,
    pub name: String,
    pub reading: Option<String>,
    pub vocabulary: Vec<InstructionInfo>,
    pub operation: Option<OperationOutcome>,
    pub log_tail: Vec<String>,
    pub log_total: usize,
}
