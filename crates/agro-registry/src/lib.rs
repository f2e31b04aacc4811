//! # agro-registry
//!
//! In-memory store for agro-technology equipment records.
//!
//! [`EquipmentRegistry`] keeps records in insertion order and enforces
//! uniqueness by identity code. [`service::FleetService`] is the coordinator
//! the CLI talks to: it owns the registry plus the random source used for
//! simulated readings, and adds the aggregate statistics report.
//!
//! There is no persistence. The fixed fleet in [`seed`] is inserted once at
//! startup and lives for the rest of the process.

pub mod error;
pub mod registry;
pub mod repos;
pub mod seed;
pub mod service;
mod test_support;

pub use registry::EquipmentRegistry;
