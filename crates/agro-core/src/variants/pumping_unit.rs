use std::fmt;

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::capabilities::{Actuator, Command, InstructionInfo, Sample, Sensor, describe, resolve};

#[derive(Debug, Clone, Copy)]
enum PumpAction {
    PowerOn,
    PowerOff,
    Speed,
}

const COMMANDS: &[Command<PumpAction>] = &[
    Command::exact("ENCENDER", "Enciende la bomba", PumpAction::PowerOn),
    Command::exact("APAGAR", "Apaga la bomba", PumpAction::PowerOff),
    Command::prefix("VELOCIDAD", "Ajusta velocidad de bombeo", PumpAction::Speed),
];

/// Water pump with flow telemetry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpingUnit {
    pub horsepower: f64,
    /// Rated flow, in liters per hour.
    pub flow_lph: f64,
    /// `DETENIDA`, `BOMBEANDO` or `AJUSTANDO`.
    pub pump_status: &'static str,
}

impl PumpingUnit {
    #[must_use]
    pub const fn new(horsepower: f64, flow_lph: f64) -> Self {
        Self {
            horsepower,
            flow_lph,
            pump_status: "DETENIDA",
        }
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Potencia: {:.1} HP", self.horsepower)?;
        writeln!(f, "Caudal máximo: {:.2} L/h", self.flow_lph)?;
        writeln!(f, "Estado: {}", self.pump_status)
    }
}

impl Sensor for PumpingUnit {
    fn sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        let current = self.flow_lph * rng.gen_range(0.8_f64..1.2);
        Sample {
            reading: format!(
                "Caudal actual: {current:.2} L/h - Potencia: {:.1} HP - Estado: {}",
                self.horsepower, self.pump_status
            ),
            log: "Lectura de caudal realizada".to_string(),
        }
    }
}

impl Actuator for PumpingUnit {
    fn status(&self) -> &'static str {
        self.pump_status
    }

    fn vocabulary(&self) -> Vec<InstructionInfo> {
        describe(COMMANDS)
    }

    fn perform(&mut self, input: &str, _rng: &mut dyn RngCore) -> Option<String> {
        let message = match resolve(COMMANDS, input)? {
            PumpAction::PowerOn => {
                self.pump_status = "BOMBEANDO";
                format!("Bomba encendida - Caudal: {:.1} L/h", self.flow_lph)
            }
            PumpAction::PowerOff => {
                self.pump_status = "DETENIDA";
                "Bomba apagada".to_string()
            }
            PumpAction::Speed => {
                self.pump_status = "AJUSTANDO";
                "Ajustando velocidad de bombeo".to_string()
            }
        };
        Some(message)
    }
}
