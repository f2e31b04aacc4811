//! # agro-core
//!
//! Core types for the agro-technology equipment registry.
//!
//! This crate provides the foundational types shared by the registry and the CLI:
//! - The [`Equipment`](entities::Equipment) record and its identity code
//! - One payload struct per equipment kind, collected in the [`Variant`](variants::Variant) sum type
//! - Capability handles (measurable, actionable, loggable) obtained by query
//! - The append-only logbook
//! - Kind and capability enums
//! - Cross-cutting error types
//! - Serializable response types rendered by the CLI

pub mod capabilities;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod responses;
pub mod variants;
