use std::fmt;

use rand::{Rng, RngCore};
use serde::Serialize;

use super::{fmt_list, push_unique};
use crate::capabilities::{Sample, Sensor};

const DEFAULT_VARIABLES: [&str; 4] = [
    "Temperatura",
    "Humedad",
    "Presión atmosférica",
    "Velocidad del viento",
];

/// Weather station reporting several variables at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateStation {
    pub elevation_m: f64,
    pub variables: Vec<String>,
}

impl ClimateStation {
    #[must_use]
    pub fn new(elevation_m: f64) -> Self {
        Self {
            elevation_m,
            variables: DEFAULT_VARIABLES.iter().map(ToString::to_string).collect(),
        }
    }

    pub(crate) fn add_variable(&mut self, variable: &str) -> Option<String> {
        push_unique(&mut self.variables, variable)
            .then(|| format!("Nueva variable incorporada: {}", variable.trim()))
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elevación: {:.1} m", self.elevation_m)?;
        fmt_list(f, "Variables medidas", &self.variables)
    }
}

impl Sensor for ClimateStation {
    fn sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        let temperature: f64 = rng.gen_range(15.0..35.0);
        let humidity: f64 = rng.gen_range(40.0..90.0);
        let pressure: f64 = rng.gen_range(980.0..1040.0);
        let wind: f64 = rng.gen_range(0.0..40.0);
        let reading = format!(
            "Datos meteorológicos:\n  \
             - Temperatura: {temperature:.1}°C\n  \
             - Humedad: {humidity:.1}%\n  \
             - Presión: {pressure:.1} hPa\n  \
             - Viento: {wind:.1} km/h\n  \
             - Elevación: {:.1}m",
            self.elevation_m
        );
        Sample {
            reading,
            log: "Captura completa de datos meteorológicos".to_string(),
        }
    }
}
