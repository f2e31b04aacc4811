use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::capabilities::{Actionable, Loggable, Measurable};
use crate::entities::Logbook;
use crate::enums::{Capability, CapabilitySet, EquipmentKind};
use crate::errors::CoreError;
use crate::identity::EquipmentCode;
use crate::variants::Variant;

/// A managed device record.
///
/// The identity code is fixed at construction and is the only equality key.
/// Capabilities come from the variant's kind; use [`Equipment::measurable`],
/// [`Equipment::actionable`] and [`Equipment::loggable`] to reach them.
#[derive(Debug, Clone, Serialize)]
pub struct Equipment {
    code: EquipmentCode,
    name: String,
    manufacturer: String,
    power_w: f64,
    zone: String,
    operational: bool,
    variant: Variant,
    #[serde(skip_serializing_if = "Option::is_none")]
    logbook: Option<Logbook>,
}

impl Equipment {
    /// Build a record. Loggable kinds start with one initialization entry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the code is blank or `power_w` is
    /// negative or not finite.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        power_w: f64,
        zone: impl Into<String>,
        variant: Variant,
    ) -> Result<Self, CoreError> {
        let code = EquipmentCode::new(code)?;
        if !power_w.is_finite() || power_w < 0.0 {
            return Err(CoreError::Validation(format!(
                "power draw for {code} must be a non-negative number, got {power_w}"
            )));
        }

        let kind = variant.kind();
        let logbook = kind.capabilities().loggable.then(|| {
            let mut logbook = Logbook::new();
            logbook.append(kind.startup_message());
            logbook
        });

        Ok(Self {
            code,
            name: name.into(),
            manufacturer: manufacturer.into(),
            power_w,
            zone: zone.into(),
            operational: true,
            variant,
            logbook,
        })
    }

    #[must_use]
    pub const fn code(&self) -> &EquipmentCode {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    #[must_use]
    pub const fn power_w(&self) -> f64 {
        self.power_w
    }

    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    #[must_use]
    pub const fn is_operational(&self) -> bool {
        self.operational
    }

    pub fn set_operational(&mut self, operational: bool) {
        self.operational = operational;
    }

    #[must_use]
    pub const fn variant(&self) -> &Variant {
        &self.variant
    }

    #[must_use]
    pub const fn kind(&self) -> EquipmentKind {
        self.variant.kind()
    }

    #[must_use]
    pub const fn category(&self) -> &'static str {
        self.kind().category()
    }

    #[must_use]
    pub const fn capabilities(&self) -> CapabilitySet {
        self.kind().capabilities()
    }

    #[must_use]
    pub const fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }

    /// Current status field of an actionable record.
    #[must_use]
    pub fn status(&self) -> Option<&'static str> {
        self.variant.as_actuator().map(|actuator| actuator.status())
    }

    // -- capability handles ------------------------------------------------

    pub fn measurable(&mut self) -> Option<Measurable<'_>> {
        let code = &self.code;
        let logbook = self.logbook.as_mut();
        self.variant.as_sensor_mut().map(|sensor| Measurable {
            code,
            sensor,
            logbook,
        })
    }

    pub fn actionable(&mut self) -> Option<Actionable<'_>> {
        let code = &self.code;
        let logbook = self.logbook.as_mut();
        self.variant.as_actuator_mut().map(|actuator| Actionable {
            code,
            actuator,
            logbook,
        })
    }

    #[must_use]
    pub fn loggable(&self) -> Option<Loggable<'_>> {
        self.logbook.as_ref().map(|logbook| Loggable { logbook })
    }

    /// Add a formula, measured variable or optical sensor, depending on kind.
    ///
    /// Returns `Ok(false)` when the item is already present.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unsupported` for kinds without a catalog list.
    pub fn add_catalog_item(&mut self, item: &str) -> Result<bool, CoreError> {
        let kind = self.kind();
        let added = self
            .variant
            .add_catalog_item(item)
            .map_err(|()| CoreError::Unsupported {
                kind: kind.as_str(),
                operation: "add_catalog_item",
            })?;

        match added {
            Some(message) => {
                if let Some(logbook) = self.logbook.as_mut() {
                    logbook.append(message);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // -- presentation --------------------------------------------------------

    /// Multi-line report of every field.
    #[must_use]
    pub fn summary(&self) -> String {
        Summary(self).to_string()
    }

    /// Ascending power-draw ordering. Ties compare equal so stable sorts keep
    /// insertion order.
    #[must_use]
    pub fn cmp_power(&self, other: &Self) -> Ordering {
        self.power_w.total_cmp(&other.power_w)
    }
}

impl PartialEq for Equipment {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Equipment {}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} [{}] - {:.2}W",
            self.code, self.name, self.manufacturer, self.power_w
        )
    }
}

/// Display adapter producing the multi-line summary of a record.
pub struct Summary<'a>(pub &'a Equipment);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let equipment = self.0;
        writeln!(f, "=== {} ===", equipment.kind().heading())?;
        writeln!(f, "Código: {}", equipment.code)?;
        writeln!(f, "Denominación: {}", equipment.name)?;
        writeln!(f, "Marca: {}", equipment.manufacturer)?;
        writeln!(f, "Consumo: {:.2} W", equipment.power_w)?;
        writeln!(f, "Zona: {}", equipment.zone)?;
        equipment.variant.fmt_details(f)?;
        writeln!(
            f,
            "Funcionamiento: {}",
            if equipment.operational {
                "Operativo"
            } else {
                "Inactivo"
            }
        )?;
        let labels: Vec<_> = equipment
            .capabilities()
            .to_vec()
            .into_iter()
            .map(Capability::label)
            .collect();
        writeln!(f, "Capacidades: {}", labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    use super::*;
    use crate::variants::fixtures::one_of_each;
    use crate::variants::{
        HydraulicGate, IrrigationDrone, NutrientModule, PumpingUnit, SmartSprinkler, SoilMonitor,
        SurveillanceDrone,
    };

    fn pump() -> Equipment {
        Equipment::new(
            "UB-001",
            "Bomba Hidráulica Principal",
            "PumpMaster",
            750.0,
            "Sala de Máquinas",
            Variant::PumpingUnit(PumpingUnit::new(15.0, 8000.0)),
        )
        .unwrap()
    }

    fn soil() -> Equipment {
        Equipment::new(
            "MS-001",
            "Monitor Suelo Parcela A",
            "SensorTech",
            45.0,
            "Parcela A",
            Variant::SoilMonitor(SoilMonitor::new(30.0, "Humedad y pH")),
        )
        .unwrap()
    }

    #[test]
    fn rejects_negative_or_nan_power() {
        for power in [-1.0, f64::NAN, f64::INFINITY] {
            let result = Equipment::new(
                "X-1",
                "x",
                "y",
                power,
                "z",
                Variant::HydraulicGate(HydraulicGate::new(1.0)),
            );
            assert!(matches!(result, Err(CoreError::Validation(_))));
        }
    }

    #[test]
    fn equality_is_by_code_only() {
        let a = soil();
        let b = Equipment::new(
            "ms-001",
            "Otro nombre",
            "Otra marca",
            1.0,
            "Otra zona",
            Variant::HydraulicGate(HydraulicGate::new(1.0)),
        )
        .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, pump());
    }

    #[test]
    fn display_is_one_line() {
        assert_eq!(
            pump().to_string(),
            "UB-001 - Bomba Hidráulica Principal [PumpMaster] - 750.00W"
        );
    }

    #[test]
    fn summary_lists_every_field() {
        let expected = "\
=== UNIDAD DE BOMBEO ===
Código: UB-001
Denominación: Bomba Hidráulica Principal
Marca: PumpMaster
Consumo: 750.00 W
Zona: Sala de Máquinas
Potencia: 15.0 HP
Caudal máximo: 8000.00 L/h
Estado: DETENIDA
Funcionamiento: Operativo
Capacidades: Ejecución, Medición, Auditoría
";
        assert_eq!(pump().summary(), expected);
    }

    #[test]
    fn summary_reflects_operational_flag() {
        let mut equipment = soil();
        equipment.set_operational(false);
        assert!(!equipment.is_operational());
        assert!(equipment.summary().contains("Funcionamiento: Inactivo\n"));
        assert!(equipment.summary().ends_with("Capacidades: Medición, Auditoría\n"));
    }

    #[test]
    fn starts_with_initialization_entry() {
        let equipment = pump();
        let entries = equipment.loggable().unwrap().list_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "Unidad de bombeo inicializada");
    }

    #[test]
    fn handles_follow_capability_table() {
        for (index, variant) in one_of_each().into_iter().enumerate() {
            let mut equipment =
                Equipment::new(format!("T-{index}"), "t", "t", 1.0, "t", variant).unwrap();
            let caps = equipment.capabilities();
            assert_eq!(equipment.measurable().is_some(), caps.measurable);
            assert_eq!(equipment.actionable().is_some(), caps.actionable);
            assert_eq!(equipment.loggable().is_some(), caps.loggable);
            assert_eq!(equipment.status().is_some(), caps.actionable);
            for capability in Capability::ALL {
                assert_eq!(equipment.supports(capability), caps.contains(capability));
            }
        }
    }

    #[test]
    fn capture_appends_one_log_entry() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut equipment = soil();
        let reading = equipment.measurable().unwrap().capture_reading(&mut rng);
        assert!(reading.starts_with("Humedad del suelo: "));

        let entries = equipment.loggable().unwrap().list_entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[1].message.starts_with("Lectura capturada: "));
    }

    #[rstest]
    #[case(Variant::HydraulicGate(HydraulicGate::new(5000.0)), "ABRIR", "ABIERTA")]
    #[case(Variant::HydraulicGate(HydraulicGate::new(5000.0)), "parcial 50", "PARCIAL")]
    #[case(Variant::NutrientModule(NutrientModule::new(200.0)), "PROGRAMAR lunes", "PROGRAMADO")]
    #[case(Variant::SmartSprinkler(SmartSprinkler::new(25.0)), "activar", "ACTIVO")]
    #[case(Variant::SmartSprinkler(SmartSprinkler::new(25.0)), "AJUSTAR caudal", "AJUSTE")]
    #[case(Variant::PumpingUnit(PumpingUnit::new(15.0, 8000.0)), "Encender", "BOMBEANDO")]
    #[case(Variant::PumpingUnit(PumpingUnit::new(15.0, 8000.0)), "VELOCIDAD 2", "AJUSTANDO")]
    #[case(Variant::SurveillanceDrone(SurveillanceDrone::new(60.0, "4K")), "capturar_imagen", "CAPTURANDO")]
    #[case(Variant::SurveillanceDrone(SurveillanceDrone::new(60.0, "4K")), " REGRESAR_BASE ", "REGRESANDO")]
    fn recognized_instruction_sets_status(
        #[case] variant: Variant,
        #[case] instruction: &str,
        #[case] expected: &str,
    ) {
        let mut rng = StdRng::seed_from_u64(9);
        let mut equipment = Equipment::new("ACT-1", "a", "b", 10.0, "c", variant).unwrap();

        let accepted = equipment
            .actionable()
            .unwrap()
            .perform_operation(instruction, &mut rng);

        assert!(accepted);
        assert_eq!(equipment.status(), Some(expected));
        assert_eq!(equipment.loggable().unwrap().len(), 2);
    }

    #[rstest]
    #[case(Variant::HydraulicGate(HydraulicGate::new(5000.0)), &["ABRIR", "CERRAR"], "CERRADA")]
    #[case(Variant::NutrientModule(NutrientModule::new(200.0)), &["APLICAR Nitrógeno", "DETENER"], "DETENIDO")]
    #[case(Variant::SmartSprinkler(SmartSprinkler::new(25.0)), &["ACTIVAR", "DESACTIVAR"], "APAGADO")]
    #[case(Variant::PumpingUnit(PumpingUnit::new(15.0, 8000.0)), &["ENCENDER", "APAGAR"], "DETENIDA")]
    #[case(Variant::IrrigationDrone(IrrigationDrone::new(30.0, 20.0)), &["DESPEGAR", "ROCIAR", "aterrizar"], "EN_TIERRA")]
    fn instruction_sequence_returns_to_initial_status(
        #[case] variant: Variant,
        #[case] instructions: &[&str],
        #[case] expected: &str,
    ) {
        let mut rng = StdRng::seed_from_u64(11);
        let mut equipment = Equipment::new("ACT-2", "a", "b", 10.0, "c", variant).unwrap();
        let initial = equipment.status();

        for instruction in instructions {
            assert!(equipment
                .actionable()
                .unwrap()
                .perform_operation(instruction, &mut rng));
        }

        assert_eq!(equipment.status(), Some(expected));
        assert_eq!(equipment.status(), initial);
        assert_eq!(equipment.loggable().unwrap().len(), 1 + instructions.len());
    }

    #[test]
    fn unrecognized_instruction_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(9);
        for (index, variant) in one_of_each().into_iter().enumerate() {
            let mut equipment =
                Equipment::new(format!("U-{index}"), "u", "u", 1.0, "u", variant).unwrap();
            let Some(before) = equipment.status() else {
                continue;
            };
            let accepted = equipment
                .actionable()
                .unwrap()
                .perform_operation("BAILAR", &mut rng);
            assert!(!accepted);
            assert_eq!(equipment.status(), Some(before));
            assert_eq!(equipment.loggable().unwrap().len(), 1);
        }
    }

    #[test]
    fn vocabulary_has_three_instructions_per_actionable_kind() {
        for (index, variant) in one_of_each().into_iter().enumerate() {
            let mut equipment =
                Equipment::new(format!("V-{index}"), "v", "v", 1.0, "v", variant).unwrap();
            if let Some(handle) = equipment.actionable() {
                assert_eq!(handle.vocabulary().len(), 3);
            }
        }
    }

    #[test]
    fn catalog_item_is_logged_once() {
        let mut equipment = Equipment::new(
            "AV-001",
            "Dron",
            "SkyVision",
            180.0,
            "Hangar",
            Variant::SurveillanceDrone(SurveillanceDrone::new(60.0, "4K UHD")),
        )
        .unwrap();
        assert_eq!(equipment.add_catalog_item("LiDAR"), Ok(true));
        assert_eq!(equipment.add_catalog_item("LiDAR"), Ok(false));
        assert_eq!(equipment.loggable().unwrap().len(), 2);
        assert!(matches!(
            pump().add_catalog_item("x"),
            Err(CoreError::Unsupported { .. })
        ));
    }

    #[test]
    fn power_ordering_uses_total_cmp() {
        assert_eq!(soil().cmp_power(&pump()), Ordering::Less);
        assert_eq!(pump().cmp_power(&pump()), Ordering::Equal);
    }
}
