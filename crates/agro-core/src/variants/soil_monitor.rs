use std::fmt;

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::capabilities::{Sample, Sensor};

/// Buried soil probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilMonitor {
    pub depth_cm: f64,
    pub monitor_type: String,
    /// Last captured soil humidity, in percent.
    pub last_value: f64,
}

impl SoilMonitor {
    #[must_use]
    pub fn new(depth_cm: f64, monitor_type: impl Into<String>) -> Self {
        Self {
            depth_cm,
            monitor_type: monitor_type.into(),
            last_value: 0.0,
        }
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Profundidad: {:.1} cm", self.depth_cm)?;
        writeln!(f, "Tipo: {}", self.monitor_type)
    }
}

impl Sensor for SoilMonitor {
    fn sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        self.last_value = rng.gen_range(15.0..40.0);
        Sample {
            reading: format!(
                "Humedad del suelo: {:.2}% a {:.1}cm de profundidad",
                self.last_value, self.depth_cm
            ),
            log: format!("Lectura capturada: {:.2}", self.last_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn sample_updates_last_value_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut monitor = SoilMonitor::new(30.0, "Humedad");
        for _ in 0..50 {
            let sample = monitor.sample(&mut rng);
            assert!((15.0..40.0).contains(&monitor.last_value));
            assert!(sample.reading.starts_with("Humedad del suelo: "));
            assert!(sample.reading.ends_with("a 30.0cm de profundidad"));
        }
    }
}
