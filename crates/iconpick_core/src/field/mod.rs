//! Custom field contracts for the host admin form.
//!
//! This module covers the declaration of the icon field, the per-field picker
//! session driven by host callbacks, and the render-ready view model. The
//! host's registration call and its widget toolkit stay outside the crate.

pub mod registration;
pub mod session;
pub mod view;
