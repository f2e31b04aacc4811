use std::fmt;

use rand::{Rng, RngCore};
use serde::Serialize;

use super::{fmt_list, push_unique};
use crate::capabilities::{Actuator, Command, InstructionInfo, describe, resolve};

const DEFAULT_FORMULAS: [&str; 3] = ["NPK 20-20-20", "Nitrógeno concentrado", "Fósforo soluble"];

#[derive(Debug, Clone, Copy)]
enum DosingAction {
    Apply,
    Stop,
    Schedule,
}

const COMMANDS: &[Command<DosingAction>] = &[
    Command::prefix("APLICAR", "Inicia la aplicación de nutrientes", DosingAction::Apply),
    Command::exact("DETENER", "Detiene la aplicación", DosingAction::Stop),
    Command::prefix("PROGRAMAR", "Programa nueva dosificación", DosingAction::Schedule),
];

/// Automatic fertilization unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientModule {
    pub capacity_l: f64,
    pub formulas: Vec<String>,
    /// Dose of the last `APLICAR`, in liters.
    pub scheduled_dose_l: f64,
    /// `DETENIDO`, `APLICANDO` or `PROGRAMADO`.
    pub dosing: &'static str,
}

impl NutrientModule {
    #[must_use]
    pub fn new(capacity_l: f64) -> Self {
        Self {
            capacity_l,
            formulas: DEFAULT_FORMULAS.iter().map(ToString::to_string).collect(),
            scheduled_dose_l: 0.0,
            dosing: "DETENIDO",
        }
    }

    pub(crate) fn add_formula(&mut self, formula: &str) -> Option<String> {
        push_unique(&mut self.formulas, formula)
            .then(|| format!("Nueva fórmula incorporada: {}", formula.trim()))
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Capacidad: {:.2} L", self.capacity_l)?;
        fmt_list(f, "Fórmulas disponibles", &self.formulas)?;
        writeln!(f, "Dosis programada: {:.2} L", self.scheduled_dose_l)?;
        writeln!(f, "Dosificación: {}", self.dosing)
    }
}

impl Actuator for NutrientModule {
    fn status(&self) -> &'static str {
        self.dosing
    }

    fn vocabulary(&self) -> Vec<InstructionInfo> {
        describe(COMMANDS)
    }

    fn perform(&mut self, input: &str, rng: &mut dyn RngCore) -> Option<String> {
        let message = match resolve(COMMANDS, input)? {
            DosingAction::Apply => {
                self.scheduled_dose_l = rng.gen_range(5.0..20.0);
                self.dosing = "APLICANDO";
                format!("Aplicación iniciada - Dosis: {:.2} L", self.scheduled_dose_l)
            }
            DosingAction::Stop => {
                self.dosing = "DETENIDO";
                "Aplicación detenida".to_string()
            }
            DosingAction::Schedule => {
                self.dosing = "PROGRAMADO";
                "Nueva dosificación programada".to_string()
            }
        };
        Some(message)
    }
}
