//! Equipment records and their logbook.
//!
//! [`Equipment`] is the single concrete record type. Kind-specific fields and
//! behavior live in [`Variant`](crate::variants::Variant).

mod equipment;
mod logbook;

pub use equipment::{Equipment, Summary};
pub use logbook::{LogEntry, Logbook};
