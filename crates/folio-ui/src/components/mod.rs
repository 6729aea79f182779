pub(crate) mod atoms;

pub mod daisy;
