//! Battle sessions and the scheduler that ticks them.

pub mod battle_session;
pub mod scheduler;
pub mod statistics;

pub use battle_session::*;
pub use scheduler::*;
pub use statistics::*;
