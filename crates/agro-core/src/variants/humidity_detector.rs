use std::fmt;

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::capabilities::{Sample, Sensor};

/// Ambient relative-humidity detector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumidityDetector {
    pub detection_range: String,
    /// Accuracy, in percentage points.
    pub accuracy_pct: f64,
}

impl HumidityDetector {
    #[must_use]
    pub fn new(detection_range: impl Into<String>, accuracy_pct: f64) -> Self {
        Self {
            detection_range: detection_range.into(),
            accuracy_pct,
        }
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Intervalo: {}", self.detection_range)?;
        writeln!(f, "Exactitud: ±{:.2}%", self.accuracy_pct)
    }
}

impl Sensor for HumidityDetector {
    fn sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        let value: f64 = rng.gen_range(30.0..90.0);
        Sample {
            reading: format!(
                "Humedad relativa: {value:.2}% (±{:.2}%)",
                self.accuracy_pct
            ),
            log: format!("Medición realizada: {value:.2}"),
        }
    }
}
