use std::fmt;

use rand::RngCore;
use serde::Serialize;

use crate::capabilities::{Actuator, Command, InstructionInfo, describe, resolve};

#[derive(Debug, Clone, Copy)]
enum GateAction {
    Open,
    Close,
    Partial,
}

const COMMANDS: &[Command<GateAction>] = &[
    Command::exact("ABRIR", "Abre la compuerta", GateAction::Open),
    Command::exact("CERRAR", "Cierra la compuerta", GateAction::Close),
    Command::prefix("PARCIAL", "Posición parcial", GateAction::Partial),
];

/// Controllable irrigation valve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydraulicGate {
    pub max_flow_lph: f64,
    /// `CERRADA`, `ABIERTA` or `PARCIAL`.
    pub position: &'static str,
}

impl HydraulicGate {
    #[must_use]
    pub const fn new(max_flow_lph: f64) -> Self {
        Self {
            max_flow_lph,
            position: "CERRADA",
        }
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flujo máximo: {:.2} L/h", self.max_flow_lph)?;
        writeln!(f, "Posición: {}", self.position)
    }
}

impl Actuator for HydraulicGate {
    fn status(&self) -> &'static str {
        self.position
    }

    fn vocabulary(&self) -> Vec<InstructionInfo> {
        describe(COMMANDS)
    }

    fn perform(&mut self, input: &str, _rng: &mut dyn RngCore) -> Option<String> {
        let message = match resolve(COMMANDS, input)? {
            GateAction::Open => {
                self.position = "ABIERTA";
                format!("Compuerta abierta - Flujo máximo: {:.1} L/h", self.max_flow_lph)
            }
            GateAction::Close => {
                self.position = "CERRADA";
                "Compuerta cerrada".to_string()
            }
            GateAction::Partial => {
                self.position = "PARCIAL";
                "Compuerta en posición parcial".to_string()
            }
        };
        Some(message)
    }
}
