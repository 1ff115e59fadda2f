//! Picker search entry points.
//!
//! # Responsibility
//! - Filter the icon catalog by free-text query.
//! - Shape matches into the grouped, capped sections the picker renders.

pub mod index;
