//! Experience, leveling and post-victory rewards.

pub mod leveling;
pub mod rewards;

pub use leveling::*;
pub use rewards::*;
