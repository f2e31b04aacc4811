//! The fixed fleet inserted at startup.

use agro_core::entities::Equipment;
use agro_core::errors::CoreError;
use agro_core::variants::{
    ClimateStation, HumidityDetector, HydraulicGate, IrrigationDrone, NutrientModule,
    PumpingUnit, SmartSprinkler, SoilMonitor, SurveillanceDrone, ThermalMeter, Variant,
};

/// Build the twelve default records, one or more of every kind.
///
/// # Errors
///
/// Returns `CoreError` if a record fails validation. The fixed data is valid,
/// so this only fires if the validation rules change.
pub fn default_fleet() -> Result<Vec<Equipment>, CoreError> {
    Ok(vec![
        Equipment::new(
            "MS-001",
            "Monitor Suelo Parcela A",
            "SensorTech",
            45.0,
            "Parcela A",
            Variant::SoilMonitor(SoilMonitor::new(30.0, "Humedad y pH")),
        )?,
        Equipment::new(
            "MS-002",
            "Monitor Suelo Invernadero",
            "AgriSense",
            50.0,
            "Invernadero 1",
            Variant::SoilMonitor(SoilMonitor::new(25.0, "Humedad")),
        )?,
        Equipment::new(
            "DH-001",
            "Detector Ambiental Norte",
            "ClimaTech",
            35.0,
            "Zona Norte",
            Variant::HumidityDetector(HumidityDetector::new("0-100%", 2.5)),
        )?,
        Equipment::new(
            "MT-001",
            "Termómetro Exterior",
            "TempSafe",
            25.0,
            "Área Externa",
            Variant::ThermalMeter(ThermalMeter::new("-20°C a 50°C")),
        )?,
        Equipment::new(
            "CC-001",
            "Estación Meteorológica Central",
            "WeatherPro",
            120.0,
            "Torre Central",
            Variant::ClimateStation(ClimateStation::new(15.5)),
        )?,
        Equipment::new(
            "CH-001",
            "Válvula Principal Riego",
            "HydroFlow",
            80.0,
            "Sistema Principal",
            Variant::HydraulicGate(HydraulicGate::new(5000.0)),
        )?,
        Equipment::new(
            "MN-001",
            "Sistema Fertilización Automático",
            "NutriCrop",
            150.0,
            "Invernadero 2",
            Variant::NutrientModule(NutrientModule::new(200.0)),
        )?,
        Equipment::new(
            "RI-001",
            "Aspersor Inteligente Zona Sur",
            "SmartIrrigation",
            95.0,
            "Zona Sur",
            Variant::SmartSprinkler(SmartSprinkler::new(25.0)),
        )?,
        Equipment::new(
            "RI-002",
            "Aspersor Inteligente Invernadero",
            "SmartIrrigation",
            95.0,
            "Invernadero 1",
            Variant::SmartSprinkler(SmartSprinkler::new(12.0)),
        )?,
        Equipment::new(
            "UB-001",
            "Bomba Hidráulica Principal",
            "PumpMaster",
            750.0,
            "Sala de Máquinas",
            Variant::PumpingUnit(PumpingUnit::new(15.0, 8000.0)),
        )?,
        Equipment::new(
            "AH-001",
            "Dron Riego Aéreo Delta",
            "AgroDrone",
            200.0,
            "Hangar",
            Variant::IrrigationDrone(IrrigationDrone::new(45.0, 15.0)),
        )?,
        Equipment::new(
            "AV-001",
            "Dron Monitoreo Multiespectral",
            "SkyVision",
            180.0,
            "Hangar",
            Variant::SurveillanceDrone(SurveillanceDrone::new(60.0, "4K UHD")),
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use agro_core::enums::EquipmentKind;

    use super::*;

    #[test]
    fn twelve_unique_codes() {
        let fleet = default_fleet().unwrap();
        assert_eq!(fleet.len(), 12);
        let codes: HashSet<_> = fleet.iter().map(Equipment::code).collect();
        assert_eq!(codes.len(), 12);
    }

    #[test]
    fn every_kind_is_represented() {
        let fleet = default_fleet().unwrap();
        let kinds: HashSet<_> = fleet.iter().map(Equipment::kind).collect();
        for kind in EquipmentKind::ALL {
            assert!(kinds.contains(&kind), "missing {kind}");
        }
    }
}
