//! Character stats, derived combat stats, and creation.

pub mod creation;
pub mod derived_stats;
pub mod model;
pub mod stats;

pub use creation::*;
pub use derived_stats::*;
pub use model::*;
pub use stats::*;
