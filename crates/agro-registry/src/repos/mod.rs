//! Operation modules for `FleetService`.
//!
//! Each module adds methods to `FleetService` via `impl FleetService` blocks.

pub mod capabilities;
pub mod fleet;
