use std::fmt;

use rand::{Rng, RngCore};
use serde::Serialize;

use super::{fmt_list, push_unique};
use crate::capabilities::{Actuator, Command, InstructionInfo, Sample, Sensor, describe, resolve};

const DEFAULT_SENSORS: [&str; 3] = ["RGB", "Infrarrojo", "Multiespectral"];

#[derive(Debug, Clone, Copy)]
enum MissionAction {
    StartPatrol,
    CaptureImage,
    ReturnToBase,
}

const COMMANDS: &[Command<MissionAction>] = &[
    Command::exact(
        "INICIAR_VUELO",
        "Inicia vuelo de monitoreo",
        MissionAction::StartPatrol,
    ),
    Command::exact("CAPTURAR_IMAGEN", "Captura imagen", MissionAction::CaptureImage),
    Command::exact("REGRESAR_BASE", "Regresa a la base", MissionAction::ReturnToBase),
];

/// Multispectral monitoring drone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveillanceDrone {
    pub autonomy_min: f64,
    pub resolution: String,
    pub optical_sensors: Vec<String>,
    /// `EN_BASE`, `EN_VUELO`, `CAPTURANDO` or `REGRESANDO`.
    pub mission: &'static str,
}

impl SurveillanceDrone {
    #[must_use]
    pub fn new(autonomy_min: f64, resolution: impl Into<String>) -> Self {
        Self {
            autonomy_min,
            resolution: resolution.into(),
            optical_sensors: DEFAULT_SENSORS.iter().map(ToString::to_string).collect(),
            mission: "EN_BASE",
        }
    }

    pub(crate) fn add_sensor(&mut self, sensor: &str) -> Option<String> {
        push_unique(&mut self.optical_sensors, sensor)
            .then(|| format!("Nuevo sensor incorporado: {}", sensor.trim()))
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Autonomía: {:.1} min", self.autonomy_min)?;
        writeln!(f, "Resolución: {}", self.resolution)?;
        fmt_list(f, "Sensores ópticos", &self.optical_sensors)?;
        writeln!(f, "Misión: {}", self.mission)
    }
}

impl Sensor for SurveillanceDrone {
    fn sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        let remaining = self.autonomy_min * rng.gen_range(0.5_f64..1.0);
        let reading = format!(
            "Datos de vigilancia:\n  - Resolución: {}\n  - Autonomía restante: {remaining:.1} min\n  - Sensores activos: {}",
            self.resolution,
            self.optical_sensors.join(", ")
        );
        Sample {
            reading,
            log: "Datos de vigilancia capturados".to_string(),
        }
    }
}

impl Actuator for SurveillanceDrone {
    fn status(&self) -> &'static str {
        self.mission
    }

    fn vocabulary(&self) -> Vec<InstructionInfo> {
        describe(COMMANDS)
    }

    fn perform(&mut self, input: &str, _rng: &mut dyn RngCore) -> Option<String> {
        let message = match resolve(COMMANDS, input)? {
            MissionAction::StartPatrol => {
                self.mission = "EN_VUELO";
                "Vuelo de monitoreo iniciado".to_string()
            }
            MissionAction::CaptureImage => {
                self.mission = "CAPTURANDO";
                format!("Imagen capturada - Resolución: {}", self.resolution)
            }
            MissionAction::ReturnToBase => {
                self.mission = "REGRESANDO";
                "Regreso a base iniciado".to_string()
            }
        };
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn reading_lists_active_sensors() {
        let mut drone = SurveillanceDrone::new(60.0, "4K UHD");
        let sample = drone.sample(&mut StdRng::seed_from_u64(5));
        assert!(
            sample
                .reading
                .ends_with("Sensores activos: RGB, Infrarrojo, Multiespectral")
        );
    }
}
