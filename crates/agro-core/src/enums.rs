//! Equipment kinds, capabilities, and instruction matching modes.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Each [`EquipmentKind`] carries a fixed capability table; records never
//! decide their capabilities at runtime.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// One of the optional behaviors a record may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Measurable,
    Actionable,
    Loggable,
}

impl Capability {
    /// Display order used in summaries and reports.
    pub const ALL: [Self; 3] = [Self::Actionable, Self::Measurable, Self::Loggable];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Measurable => "measurable",
            Self::Actionable => "actionable",
            Self::Loggable => "loggable",
        }
    }

    /// Human-readable label shown in equipment summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Measurable => "Medición",
            Self::Actionable => "Ejecución",
            Self::Loggable => "Auditoría",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of capabilities a kind fulfills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CapabilitySet {
    pub measurable: bool,
    pub actionable: bool,
    pub loggable: bool,
}

impl CapabilitySet {
    const fn new(measurable: bool, actionable: bool, loggable: bool) -> Self {
        Self {
            measurable,
            actionable,
            loggable,
        }
    }

    #[must_use]
    pub const fn contains(self, capability: Capability) -> bool {
        match capability {
            Capability::Measurable => self.measurable,
            Capability::Actionable => self.actionable,
            Capability::Loggable => self.loggable,
        }
    }

    /// Supported capabilities in display order.
    #[must_use]
    pub fn to_vec(self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.contains(*capability))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// EquipmentKind
// ---------------------------------------------------------------------------

/// Tag identifying which variant payload a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    SoilMonitor,
    HumidityDetector,
    ThermalMeter,
    ClimateStation,
    HydraulicGate,
    NutrientModule,
    SmartSprinkler,
    PumpingUnit,
    IrrigationDrone,
    SurveillanceDrone,
}

impl EquipmentKind {
    pub const ALL: [Self; 10] = [
        Self::SoilMonitor,
        Self::HumidityDetector,
        Self::ThermalMeter,
        Self::ClimateStation,
        Self::HydraulicGate,
        Self::NutrientModule,
        Self::SmartSprinkler,
        Self::PumpingUnit,
        Self::IrrigationDrone,
        Self::SurveillanceDrone,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SoilMonitor => "soil_monitor",
            Self::HumidityDetector => "humidity_detector",
            Self::ThermalMeter => "thermal_meter",
            Self::ClimateStation => "climate_station",
            Self::HydraulicGate => "hydraulic_gate",
            Self::NutrientModule => "nutrient_module",
            Self::SmartSprinkler => "smart_sprinkler",
            Self::PumpingUnit => "pumping_unit",
            Self::IrrigationDrone => "irrigation_drone",
            Self::SurveillanceDrone => "surveillance_drone",
        }
    }

    /// Fixed category label.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::SoilMonitor => "Sensor de Suelo",
            Self::HumidityDetector => "Detector de Humedad",
            Self::ThermalMeter => "Medidor Térmico",
            Self::ClimateStation => "Estación Meteorológica",
            Self::HydraulicGate => "Sistema de Riego",
            Self::NutrientModule => "Sistema de Fertilización",
            Self::SmartSprinkler => "Sistema de Riego Inteligente",
            Self::PumpingUnit => "Sistema de Bombeo",
            Self::IrrigationDrone => "Dron de Riego",
            Self::SurveillanceDrone => "Dron de Monitoreo",
        }
    }

    /// Banner printed at the top of a summary.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::SoilMonitor => "MONITOR DE SUELO",
            Self::HumidityDetector => "DETECTOR DE HUMEDAD",
            Self::ThermalMeter => "MEDIDOR TÉRMICO",
            Self::ClimateStation => "CENTRAL CLIMÁTICA",
            Self::HydraulicGate => "COMPUERTA HIDRÁULICA",
            Self::NutrientModule => "MÓDULO DE NUTRIENTES",
            Self::SmartSprinkler => "ROCIADOR INTELIGENTE",
            Self::PumpingUnit => "UNIDAD DE BOMBEO",
            Self::IrrigationDrone => "AERONAVE DE HIDRATACIÓN",
            Self::SurveillanceDrone => "AERONAVE DE VIGILANCIA",
        }
    }

    /// First logbook entry written when a record of this kind is built.
    #[must_use]
    pub const fn startup_message(self) -> &'static str {
        match self {
            Self::SoilMonitor => "Monitor de suelo inicializado",
            Self::HumidityDetector => "Detector de humedad inicializado",
            Self::ThermalMeter => "Medidor térmico inicializado",
            Self::ClimateStation => "Central climática inicializada",
            Self::HydraulicGate => "Compuerta hidráulica inicializada",
            Self::NutrientModule => "Módulo de nutrientes inicializado",
            Self::SmartSprinkler => "Rociador inteligente inicializado",
            Self::PumpingUnit => "Unidad de bombeo inicializada",
            Self::IrrigationDrone => "Aeronave de hidratación inicializada",
            Self::SurveillanceDrone => "Aeronave de vigilancia inicializada",
        }
    }

    /// Capability table.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn capabilities(self) -> CapabilitySet {
        match self {
            Self::SoilMonitor
            | Self::HumidityDetector
            | Self::ThermalMeter
            | Self::ClimateStation => CapabilitySet::new(true, false, true),
            Self::HydraulicGate | Self::NutrientModule => CapabilitySet::new(false, true, true),
            Self::SmartSprinkler
            | Self::PumpingUnit
            | Self::IrrigationDrone
            | Self::SurveillanceDrone => CapabilitySet::new(true, true, true),
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MatchMode
// ---------------------------------------------------------------------------

/// How an instruction keyword is compared against user input.
///
/// Both modes ignore ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    Exact,
    Prefix,
}

impl MatchMode {
    #[must_use]
    pub fn matches(self, keyword: &str, input: &str) -> bool {
        match self {
            Self::Exact => input.eq_ignore_ascii_case(keyword),
            Self::Prefix => input
                .get(..keyword.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(keyword)),
        }
    }
}
