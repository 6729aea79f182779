pub mod fieldset;
pub mod radio_group;

pub use fieldset::*;
pub use radio_group::*;
