//! Article parameters panel feature wiring.
//!
//! # Design
//! - Keep the draft selection local to the panel; the host owns the committed one.
//! - Express every user intent as an action so state changes stay testable off-DOM.
//! - Attach the outside-click listener only while the panel is open.

pub mod actions;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
