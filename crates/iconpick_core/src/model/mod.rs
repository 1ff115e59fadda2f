//! Catalog domain model for icon and category records.
//!
//! # Responsibility
//! - Define the normalized records produced by the catalog builder.
//! - Keep identifier rules in one place for builder and registration code.
//!
//! # Invariants
//! - Every record is identified by its `name`.
//! - Records are immutable once a catalog has been built.

pub mod category;
pub mod icon;
pub mod identifier;
