use std::fmt;

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::capabilities::{Actuator, Command, InstructionInfo, Sample, Sensor, describe, resolve};

#[derive(Debug, Clone, Copy)]
enum SprinklerAction {
    Activate,
    Deactivate,
    Adjust,
}

const COMMANDS: &[Command<SprinklerAction>] = &[
    Command::exact("ACTIVAR", "Enciende el rociador", SprinklerAction::Activate),
    Command::exact("DESACTIVAR", "Apaga el rociador", SprinklerAction::Deactivate),
    Command::prefix("AJUSTAR", "Ajusta parámetros de rociado", SprinklerAction::Adjust),
];

/// Sprinkler head with pressure telemetry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartSprinkler {
    pub reach_m: f64,
    /// Last measured pressure, in bar.
    pub pressure_bar: f64,
    /// `APAGADO`, `ACTIVO` or `AJUSTE`.
    pub mode: &'static str,
}

impl SmartSprinkler {
    #[must_use]
    pub const fn new(reach_m: f64) -> Self {
        Self {
            reach_m,
            pressure_bar: 3.5,
            mode: "APAGADO",
        }
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alcance: {:.1} m", self.reach_m)?;
        writeln!(f, "Presión: {:.2} bar", self.pressure_bar)?;
        writeln!(f, "Modo: {}", self.mode)
    }
}

impl Sensor for SmartSprinkler {
    fn sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        self.pressure_bar = rng.gen_range(2.5..4.5);
        Sample {
            reading: format!(
                "Presión actual: {:.2} bar - Alcance: {:.1}m - Modo: {}",
                self.pressure_bar, self.reach_m, self.mode
            ),
            log: "Datos de operación capturados".to_string(),
        }
    }
}

impl Actuator for SmartSprinkler {
    fn status(&self) -> &'static str {
        self.mode
    }

    fn vocabulary(&self) -> Vec<InstructionInfo> {
        describe(COMMANDS)
    }

    fn perform(&mut self, input: &str, _rng: &mut dyn RngCore) -> Option<String> {
        let message = match resolve(COMMANDS, input)? {
            SprinklerAction::Activate => {
                self.mode = "ACTIVO";
                format!("Rociador activado - Alcance: {:.1}m", self.reach_m)
            }
            SprinklerAction::Deactivate => {
                self.mode = "APAGADO";
                "Rociador desactivado".to_string()
            }
            SprinklerAction::Adjust => {
                self.mode = "AJUSTE";
                "Ajustando parámetros de rociado".to_string()
            }
        };
        Some(message)
    }
}
