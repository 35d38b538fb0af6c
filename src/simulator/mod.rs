//! Balance simulator for Monte Carlo analysis.
//!
//! Runs many seeded sessions back to back to analyze:
//! - Time to reach a target level
//! - Deaths and kills per zone
//! - Gold and loot income
//!
//! Each run drives a real `BattleSession` synchronously, so results match
//! what the scheduler produces in live play.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
