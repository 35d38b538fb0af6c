//! Constants, errors and the battle log shared by every other module.

pub mod constants;
pub mod error;
pub mod log;

pub use constants::*;
pub use error::{EngineError, Result};
pub use log::{Clock, FixedClock, LogBook, LogEntry, LogKind, SystemClock};
