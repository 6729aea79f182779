//! Core, DOM-free primitives and helpers for the Web UI.
pub mod article;
pub mod error;
pub mod launch;
pub mod listener;
pub mod style;
