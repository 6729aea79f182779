#![doc(hidden)]

//! DaisyUI-inspired component wrappers organised with Atomic Design layers.

pub mod foundations;

pub mod atoms;
pub mod molecules;

pub use atoms::*;
pub use foundations::*;
pub use molecules::*;
