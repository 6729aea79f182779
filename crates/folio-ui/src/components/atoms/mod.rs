//! App-specific UI atoms built on the Daisy wrappers.

pub(crate) mod arrow_button;
pub(crate) mod icon_button;
pub(crate) mod icons;

pub(crate) use arrow_button::ArrowButton;
pub(crate) use icon_button::IconButton;
