//! Kind-specific payloads.
//!
//! [`Variant`] is the sum type that replaces a per-kind class hierarchy. Its
//! tag is the [`EquipmentKind`]; behavior is selected by matching on it. The
//! `as_sensor_mut` / `as_actuator_mut` projections must agree with
//! [`EquipmentKind::capabilities`] (checked in tests).

mod climate_station;
mod humidity_detector;
mod hydraulic_gate;
mod irrigation_drone;
mod nutrient_module;
mod pumping_unit;
mod smart_sprinkler;
mod soil_monitor;
mod surveillance_drone;
mod thermal_meter;

pub use climate_station::ClimateStation;
pub use humidity_detector::HumidityDetector;
pub use hydraulic_gate::HydraulicGate;
pub use irrigation_drone::IrrigationDrone;
pub use nutrient_module::NutrientModule;
pub use pumping_unit::PumpingUnit;
pub use smart_sprinkler::SmartSprinkler;
pub use soil_monitor::SoilMonitor;
pub use surveillance_drone::SurveillanceDrone;
pub use thermal_meter::ThermalMeter;

use std::fmt;

use serde::Serialize;

use crate::capabilities::{Actuator, Sensor};
use crate::enums::EquipmentKind;

/// Kind-specific fields of an equipment record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variant {
    SoilMonitor(SoilMonitor),
    HumidityDetector(HumidityDetector),
    ThermalMeter(ThermalMeter),
    ClimateStation(ClimateStation),
    HydraulicGate(HydraulicGate),
    NutrientModule(NutrientModule),
    SmartSprinkler(SmartSprinkler),
    PumpingUnit(PumpingUnit),
    IrrigationDrone(IrrigationDrone),
    SurveillanceDrone(SurveillanceDrone),
}

impl Variant {
    #[must_use]
    pub const fn kind(&self) -> EquipmentKind {
        match self {
            Self::SoilMonitor(_) => EquipmentKind::SoilMonitor,
            Self::HumidityDetector(_) => EquipmentKind::HumidityDetector,
            Self::ThermalMeter(_) => EquipmentKind::ThermalMeter,
            Self::ClimateStation(_) => EquipmentKind::ClimateStation,
            Self::HydraulicGate(_) => EquipmentKind::HydraulicGate,
            Self::NutrientModule(_) => EquipmentKind::NutrientModule,
            Self::SmartSprinkler(_) => EquipmentKind::SmartSprinkler,
            Self::PumpingUnit(_) => EquipmentKind::PumpingUnit,
            Self::IrrigationDrone(_) => EquipmentKind::IrrigationDrone,
            Self::SurveillanceDrone(_) => EquipmentKind::SurveillanceDrone,
        }
    }

    pub(crate) fn as_sensor_mut(&mut self) -> Option<&mut dyn Sensor> {
        match self {
            Self::SoilMonitor(v) => Some(v),
            Self::HumidityDetector(v) => Some(v),
            Self::ThermalMeter(v) => Some(v),
            Self::ClimateStation(v) => Some(v),
            Self::SmartSprinkler(v) => Some(v),
            Self::PumpingUnit(v) => Some(v),
            Self::IrrigationDrone(v) => Some(v),
            Self::SurveillanceDrone(v) => Some(v),
            Self::HydraulicGate(_) | Self::NutrientModule(_) => None,
        }
    }

    pub(crate) fn as_actuator(&self) -> Option<&dyn Actuator> {
        match self {
            Self::HydraulicGate(v) => Some(v),
            Self::NutrientModule(v) => Some(v),
            Self::SmartSprinkler(v) => Some(v),
            Self::PumpingUnit(v) => Some(v),
            Self::IrrigationDrone(v) => Some(v),
            Self::SurveillanceDrone(v) => Some(v),
            Self::SoilMonitor(_)
            | Self::HumidityDetector(_)
            | Self::ThermalMeter(_)
            | Self::ClimateStation(_) => None,
        }
    }

    pub(crate) fn as_actuator_mut(&mut self) -> Option<&mut dyn Actuator> {
        match self {
            Self::HydraulicGate(v) => Some(v),
            Self::NutrientModule(v) => Some(v),
            Self::SmartSprinkler(v) => Some(v),
            Self::PumpingUnit(v) => Some(v),
            Self::IrrigationDrone(v) => Some(v),
            Self::SurveillanceDrone(v) => Some(v),
            Self::SoilMonitor(_)
            | Self::HumidityDetector(_)
            | Self::ThermalMeter(_)
            | Self::ClimateStation(_) => None,
        }
    }

    /// Grow the kind's catalog list (formulas, measured variables, optical
    /// sensors). Returns the logbook message when the item was new, `None`
    /// for a duplicate, and `Err(())` when the kind has no such list.
    pub(crate) fn add_catalog_item(&mut self, item: &str) -> Result<Option<String>, ()> {
        match self {
            Self::NutrientModule(v) => Ok(v.add_formula(item)),
            Self::ClimateStation(v) => Ok(v.add_variable(item)),
            Self::SurveillanceDrone(v) => Ok(v.add_sensor(item)),
            _ => Err(()),
        }
    }

    /// Write the kind-specific summary lines.
    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SoilMonitor(v) => v.fmt_details(f),
            Self::HumidityDetector(v) => v.fmt_details(f),
            Self::ThermalMeter(v) => v.fmt_details(f),
            Self::ClimateStation(v) => v.fmt_details(f),
            Self::HydraulicGate(v) => v.fmt_details(f),
            Self::NutrientModule(v) => v.fmt_details(f),
            Self::SmartSprinkler(v) => v.fmt_details(f),
            Self::PumpingUnit(v) => v.fmt_details(f),
            Self::IrrigationDrone(v) => v.fmt_details(f),
            Self::SurveillanceDrone(v) => v.fmt_details(f),
        }
    }
}

/// Write a bulleted list under a heading.
fn fmt_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    writeln!(f, "{heading}:")?;
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

/// Push `item` unless an equal entry already exists.
fn push_unique(items: &mut Vec<String>, item: &str) -> bool {
    let item = item.trim();
    if item.is_empty() || items.iter().any(|existing| existing == item) {
        return false;
    }
    items.push(item.to_string());
    true
}


#[cfg(test)]
mod tests {
    use super::fixtures::one_of_each;
    use super::*;

    #[test]
    fn projections_agree_with_capability_table() {
        for mut variant in one_of_each() {
            let caps = variant.kind().capabilities();
            assert_eq!(
                variant.as_sensor_mut().is_some(),
                caps.measurable,
                "{}",
                variant.kind()
            );
            assert_eq!(
                variant.as_actuator().is_some(),
                caps.actionable,
                "{}",
                variant.kind()
            );
            assert_eq!(
                variant.as_actuator_mut().is_some(),
                caps.actionable,
                "{}",
                variant.kind()
            );
        }
    }

    #[test]
    fn fixtures_cover_every_kind() {
        let kinds: Vec<_> = one_of_each().iter().map(Variant::kind).collect();
        assert_eq!(kinds, EquipmentKind::ALL.to_vec());
    }

    #[test]
    fn catalog_items_only_for_list_kinds() {
        let mut gate = Variant::HydraulicGate(HydraulicGate::new(100.0));
        assert!(gate.add_catalog_item("x").is_err());

        let mut station = Variant::ClimateStation(ClimateStation::new(0.0));
        assert_eq!(
            station.add_catalog_item("Radiación solar").unwrap().as_deref(),
            Some("Nueva variable incorporada: Radiación solar")
        );
        assert_eq!(station.add_catalog_item("Radiación solar").unwrap(), None);
    }

    #[test]
    fn push_unique_ignores_blank_and_duplicates() {
        let mut items = vec!["RGB".to_string()];
        assert!(!push_unique(&mut items, "RGB"));
        assert!(!push_unique(&mut items, "  "));
        assert!(push_unique(&mut items, " Térmico "));
        assert_eq!(items, vec!["RGB", "Térmico"]);
    }
}
