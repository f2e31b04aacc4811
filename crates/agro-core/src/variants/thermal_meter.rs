use std::fmt;

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::capabilities::{Sample, Sensor};

/// Temperature probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermalMeter {
    pub thermal_range: String,
    pub scale: String,
}

impl ThermalMeter {
    #[must_use]
    pub fn new(thermal_range: impl Into<String>) -> Self {
        Self {
            thermal_range: thermal_range.into(),
            scale: "Celsius".to_string(),
        }
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rango: {}", self.thermal_range)?;
        writeln!(f, "Escala: {}", self.scale)
    }
}

impl Sensor for ThermalMeter {
    fn sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        let temperature: f64 = rng.gen_range(10.0..40.0);
        Sample {
            reading: format!(
                "Temperatura: {temperature:.2}°{} (Rango: {})",
                self.scale, self.thermal_range
            ),
            log: format!("Temperatura registrada: {temperature:.2}"),
        }
    }
}
