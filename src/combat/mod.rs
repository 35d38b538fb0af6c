//! Combat types, damage math, skill selection and the round engine.

pub mod math;
pub mod round;
pub mod selection;
pub mod types;

pub use math::*;
pub use round::*;
pub use selection::*;
pub use types::*;
