//! Capability contracts and the typed handles that expose them.
//!
//! A record never gets downcast. Callers ask the record for a handle
//! ([`Equipment::measurable`](crate::entities::Equipment::measurable) and
//! friends) and get `None` when the kind does not fulfill that contract.
//!
//! Variant payloads implement the crate-private [`Sensor`] and [`Actuator`]
//! traits. Each actuator owns a static command table keyed by its own action
//! enum, so instruction handling is an exhaustive match per kind.

use rand::RngCore;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{LogEntry, Logbook};
use crate::enums::MatchMode;
use crate::identity::EquipmentCode;

// ---------------------------------------------------------------------------
// Contracts implemented by variant payloads
// ---------------------------------------------------------------------------

/// Output of one simulated measurement.
pub(crate) struct Sample {
    pub reading: String,
    pub log: String,
}

pub(crate) trait Sensor {
    fn sample(&mut self, rng: &mut dyn RngCore) -> Sample;
}

pub(crate) trait Actuator {
    /// Current value of the variant's status field.
    fn status(&self) -> &'static str;

    fn vocabulary(&self) -> Vec<InstructionInfo>;

    /// Apply a recognized instruction and return the logbook message.
    /// Returns `None` without touching state when nothing matches.
    fn perform(&mut self, input: &str, rng: &mut dyn RngCore) -> Option<String>;
}

/// Entry in a kind's command table.
pub(crate) struct Command<A> {
    pub keyword: &'static str,
    pub matching: MatchMode,
    pub description: &'static str,
    pub action: A,
}

impl<A> Command<A> {
    pub const fn exact(keyword: &'static str, description: &'static str, action: A) -> Self {
        Self {
            keyword,
            matching: MatchMode::Exact,
            description,
            action,
        }
    }

    pub const fn prefix(keyword: &'static str, description: &'static str, action: A) -> Self {
        Self {
            keyword,
            matching: MatchMode::Prefix,
            description,
            action,
        }
    }
}

/// First command whose keyword matches `input`.
pub(crate) fn resolve<A: Copy>(table: &[Command<A>], input: &str) -> Option<A> {
    table
        .iter()
        .find(|command| command.matching.matches(command.keyword, input))
        .map(|command| command.action)
}

pub(crate) fn describe<A>(table: &[Command<A>]) -> Vec<InstructionInfo> {
    table
        .iter()
        .map(|command| InstructionInfo {
            keyword: command.keyword.to_string(),
            matching: command.matching,
            description: command.description.to_string(),
        })
        .collect()
}

/// Public description of one accepted instruction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InstructionInfo {
    pub keyword: String,
    pub matching: MatchMode,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Handle to a record that produces measurement snapshots.
pub struct Measurable<'a> {
    pub(crate) code: &'a EquipmentCode,
    pub(crate) sensor: &'a mut dyn Sensor,
    pub(crate) logbook: Option<&'a mut Logbook>,
}

impl Measurable<'_> {
    /// Take one simulated reading. Always succeeds; appends one logbook entry
    /// when the record is also loggable.
    pub fn capture_reading(&mut self, rng: &mut dyn RngCore) -> String {
        let sample = self.sensor.sample(rng);
        tracing::debug!(code = %self.code, "reading captured");
        if let Some(logbook) = self.logbook.as_deref_mut() {
            logbook.append(sample.log);
        }
        sample.reading
    }
}

/// Handle to a record that accepts named instructions.
pub struct Actionable<'a> {
    pub(crate) code: &'a EquipmentCode,
    pub(crate) actuator: &'a mut dyn Actuator,
    pub(crate) logbook: Option<&'a mut Logbook>,
}

impl Actionable<'_> {
    /// Run an instruction against the record.
    ///
    /// Unrecognized instructions are a no-op that returns `false`.
    pub fn perform_operation(&mut self, instruction: &str, rng: &mut dyn RngCore) -> bool {
        let instruction = instruction.trim();
        let Some(message) = self.actuator.perform(instruction, rng) else {
            tracing::warn!(code = %self.code, instruction, "unrecognized instruction");
            return false;
        };

        tracing::debug!(
            code = %self.code,
            instruction,
            status = self.actuator.status(),
            "operation performed"
        );
        if let Some(logbook) = self.logbook.as_deref_mut() {
            logbook.append(message);
        }
        true
    }

    #[must_use]
    pub fn status(&self) -> &'static str {
        self.actuator.status()
    }

    #[must_use]
    pub fn vocabulary(&self) -> Vec<InstructionInfo> {
        self.actuator.vocabulary()
    }
}

/// Read-only handle to a record's logbook.
#[derive(Clone, Copy)]
pub struct Loggable<'a> {
    pub(crate) logbook: &'a Logbook,
}

impl Loggable<'_> {
    /// Copy of every entry, oldest first.
    #[must_use]
    pub fn list_entries(&self) -> Vec<LogEntry> {
        self.logbook.entries()
    }

    /// Copy of the newest `n` entries, oldest first.
    #[must_use]
    pub fn tail(&self, n: usize) -> Vec<LogEntry> {
        self.logbook.tail(n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.logbook.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logbook.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Toy {
        Start,
        Tune,
    }

    const TABLE: &[Command<Toy>] = &[
        Command::exact("START", "Arranca", Toy::Start),
        Command::prefix("TUNE", "Ajusta", Toy::Tune),
    ];

    #[test]
    fn resolve_picks_first_match() {
        assert_eq!(resolve(TABLE, "start"), Some(Toy::Start));
        assert_eq!(resolve(TABLE, "tune 30"), Some(Toy::Tune));
        assert_eq!(resolve(TABLE, "starter"), None);
        assert_eq!(resolve(TABLE, ""), None);
    }

    #[test]
    fn describe_keeps_table_order() {
        let info = describe(TABLE);
        assert_eq!(info.len(), 2);
        assert_eq!(info[0].keyword, "START");
        assert_eq!(info[1].matching, MatchMode::Prefix);
    }
}
