//! Capability operations keyed by equipment code.
//!
//! Every method resolves the code first (`UnknownCode` on a miss), then asks
//! the record for the capability handle (`MissingCapability` when the kind
//! does not fulfill it).

use agro_core::capabilities::InstructionInfo;
use agro_core::entities::{Equipment, LogEntry};
use agro_core::enums::Capability;
use agro_core::responses::{EquipmentDetails, ExerciseReport, OperationOutcome};

use crate::error::RegistryError;
use crate::service::FleetService;

fn unknown(code: &str) -> RegistryError {
    RegistryError::UnknownCode(code.trim().to_string())
}

fn missing(code: String, capability: Capability) -> RegistryError {
    RegistryError::MissingCapability { code, capability }
}

impl FleetService {
    fn lookup(&self, code: &str) -> Result<&Equipment, RegistryError> {
        self.registry().find_by_code(code).ok_or_else(|| unknown(code))
    }

    fn lookup_mut(&mut self, code: &str) -> Result<&mut Equipment, RegistryError> {
        self.registry_mut()
            .find_by_code_mut(code)
            .ok_or_else(|| unknown(code))
    }

    /// Full view of one record.
    pub fn details(&self, code: &str) -> Result<EquipmentDetails, RegistryError> {
        self.lookup(code).map(EquipmentDetails::from)
    }

    /// Take one simulated reading from a measurable record.
    pub fn capture_reading(&mut self, code: &str) -> Result<String, RegistryError> {
        let (registry, rng) = self.parts_mut();
        let equipment = registry.find_by_code_mut(code).ok_or_else(|| unknown(code))?;
        let canonical = equipment.code().to_string();
        let mut handle = equipment
            .measurable()
            .ok_or_else(|| missing(canonical, Capability::Measurable))?;
        Ok(handle.capture_reading(rng))
    }

    /// Send an instruction to an actionable record.
    ///
    /// An unrecognized instruction is not an error: the outcome reports
    /// `accepted: false` and the status is unchanged.
    pub fn perform_operation(
        &mut self,
        code: &str,
        instruction: &str,
    ) -> Result<OperationOutcome, RegistryError> {
        let (registry, rng) = self.parts_mut();
        let equipment = registry.find_by_code_mut(code).ok_or_else(|| unknown(code))?;
        let canonical = equipment.code().to_string();
        let mut handle = equipment
            .actionable()
            .ok_or_else(|| missing(canonical, Capability::Actionable))?;
        let accepted = handle.perform_operation(instruction, rng);
        Ok(OperationOutcome {
            instruction: instruction.trim().to_string(),
            accepted,
            status: handle.status().to_string(),
        })
    }

    /// Instructions an actionable record understands, in table order.
    pub fn vocabulary(&mut self, code: &str) -> Result<Vec<InstructionInfo>, RegistryError> {
        let equipment = self.lookup_mut(code)?;
        let canonical = equipment.code().to_string();
        equipment
            .actionable()
            .map(|handle| handle.vocabulary())
            .ok_or_else(|| missing(canonical, Capability::Actionable))
    }

    /// Newest `n` logbook entries, oldest first.
    pub fn log_tail(&self, code: &str, n: usize) -> Result<Vec<LogEntry>, RegistryError> {
        let equipment = self.lookup(code)?;
        equipment
            .loggable()
            .map(|log| log.tail(n))
            .ok_or_else(|| missing(equipment.code().to_string(), Capability::Loggable))
    }

    /// Newest `n` entries rendered as text, plus the logbook length.
    ///
    /// `None` when the record keeps no logbook.
    pub fn log_summary(
        &self,
        code: &str,
        n: usize,
    ) -> Result<Option<(Vec<String>, usize)>, RegistryError> {
        Ok(self.lookup(code)?.loggable().map(|log| {
            let tail = log.tail(n).iter().map(ToString::to_string).collect();
            (tail, log.len())
        }))
    }

    /// Add a formula, measured variable or optical sensor to a record.
    pub fn add_catalog_item(&mut self, code: &str, item: &str) -> Result<bool, RegistryError> {
        Ok(self.lookup_mut(code)?.add_catalog_item(item)?)
    }

    /// Mark a record as operational or inactive.
    pub fn set_operational(&mut self, code: &str, operational: bool) -> Result<(), RegistryError> {
        self.lookup_mut(code)?.set_operational(operational);
        tracing::debug!(code, operational, "operational flag updated");
        Ok(())
    }

    /// Exercise every capability the record supports, once.
    ///
    /// Measurable records produce a reading. Actionable records list their
    /// vocabulary and, when `instruction` is given, run it. Loggable records
    /// report the newest `tail` entries after both steps.
    pub fn exercise(
        &mut self,
        code: &str,
        instruction: Option<&str>,
        tail: usize,
    ) -> Result<ExerciseReport, RegistryError> {
        let equipment = self.lookup(code)?;
        let caps = equipment.capabilities();
        let code = equipment.code().to_string();
        let name = equipment.name().to_string();

        let reading = if caps.measurable {
            Some(self.capture_reading(&code)?)
        } else {
            None
        };

        let (vocabulary, operation) = if caps.actionable {
            let vocabulary = self.vocabulary(&code)?;
            let operation = match instruction {
                Some(instruction) => Some(self.perform_operation(&code, instruction)?),
                None => None,
            };
            (vocabulary, operation)
        } else {
            (Vec::new(), None)
        };

        let (log_tail, log_total) = self.log_summary(&code, tail)?.unwrap_or_default();

        Ok(ExerciseReport {
            code,
            name,
            reading,
            vocabulary,
            operation,
            log_tail,
            log_total,
        })
    }
}
