pub mod button;
pub mod divider;
pub mod radio;
pub mod select;

pub use button::*;
pub use divider::*;
pub use radio::*;
pub use select::*;
