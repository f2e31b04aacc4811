use std::fmt;

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::capabilities::{Actuator, Command, InstructionInfo, Sample, Sensor, describe, resolve};

#[derive(Debug, Clone, Copy)]
enum FlightAction {
    TakeOff,
    Land,
    Spray,
}

const COMMANDS: &[Command<FlightAction>] = &[
    Command::exact("DESPEGAR", "Inicia el vuelo", FlightAction::TakeOff),
    Command::exact("ATERRIZAR", "Aterriza la aeronave", FlightAction::Land),
    Command::exact("ROCIAR", "Inicia el rociado aéreo", FlightAction::Spray),
];

/// Spraying drone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrrigationDrone {
    pub battery_min: f64,
    pub tank_l: f64,
    pub altitude_m: f64,
    /// `EN_TIERRA`, `EN_VUELO` or `ROCIANDO`.
    pub flight_status: &'static str,
}

impl IrrigationDrone {
    #[must_use]
    pub const fn new(battery_min: f64, tank_l: f64) -> Self {
        Self {
            battery_min,
            tank_l,
            altitude_m: 0.0,
            flight_status: "EN_TIERRA",
        }
    }

    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Autonomía: {:.1} min", self.battery_min)?;
        writeln!(f, "Capacidad: {:.1} L", self.tank_l)?;
        writeln!(f, "Altitud operación: {:.1} m", self.altitude_m)?;
        writeln!(f, "Estado: {}", self.flight_status)
    }
}

impl Sensor for IrrigationDrone {
    fn sample(&mut self, rng: &mut dyn RngCore) -> Sample {
        let battery = self.battery_min * rng.gen_range(0.4_f64..1.0);
        Sample {
            reading: format!(
                "Batería: {battery:.1} min - Altitud: {:.1}m - Depósito: {:.1}L - Estado: {}",
                self.altitude_m, self.tank_l, self.flight_status
            ),
            log: "Telemetría capturada".to_string(),
        }
    }
}

impl Actuator for IrrigationDrone {
    fn status(&self) -> &'static str {
        self.flight_status
    }

    fn vocabulary(&self) -> Vec<InstructionInfo> {
        describe(COMMANDS)
    }

    fn perform(&mut self, input: &str, rng: &mut dyn RngCore) -> Option<String> {
        let message = match resolve(COMMANDS, input)? {
            FlightAction::TakeOff => {
                self.flight_status = "EN_VUELO";
                self.altitude_m = rng.gen_range(5.0..15.0);
                format!("Despegue exitoso - Altitud: {:.1}m", self.altitude_m)
            }
            FlightAction::Land => {
                self.flight_status = "EN_TIERRA";
                self.altitude_m = 0.0;
                "Aterrizaje completado".to_string()
            }
            FlightAction::Spray => {
                self.flight_status = "ROCIANDO";
                format!("Rociado iniciado - Volumen: {:.1}L", self.tank_l)
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
    fn take_off_then_land_resets_altitude() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut drone = IrrigationDrone::new(45.0, 15.0);

        drone.perform("despegar", &mut rng).unwrap();
        assert_eq!(drone.flight_status, "EN_VUELO");
        assert!((5.0..15.0).contains(&drone.altitude_m));

        assert_eq!(
            drone.perform("ATERRIZAR", &mut rng).as_deref(),
            Some("Aterrizaje completado")
        );
        assert!(drone.altitude_m.abs() < f64::EPSILON);
    }

    #[test]
    fn exact_keywords_reject_suffixes() {
        let mut drone = IrrigationDrone::new(45.0, 15.0);
        assert!(drone.perform("DESPEGAR YA", &mut StdRng::seed_from_u64(0)).is_none());
        assert_eq!(drone.flight_status, "EN_TIERRA");
    }
}
