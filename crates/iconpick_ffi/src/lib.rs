//! Host bindings for the icon picker field.

pub mod api;
