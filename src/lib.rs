//! Autobattle - turn-based auto-battle combat and progression core.
//!
//! A character repeatedly fights monsters drawn from a zone's encounter
//! table. Each scheduler tick runs one round; victories grant experience,
//! gold and loot. Everything above the core (transport, persistence,
//! rendering) is left to the caller, which receives ordered log entries and
//! entity snapshots.

pub mod catalog;
pub mod character;
pub mod combat;
pub mod core;
pub mod progression;
pub mod session;
pub mod simulator;

pub use catalog::{Catalog, CatalogData};
pub use character::{create_character, derive_combat_stats, Character, CombatStats, Stats};
pub use combat::{execute_round, BattleStrategy, Monster, RoundOutcome, RoundResult};
pub use crate::core::{EngineError, LogBook, LogEntry, LogKind, Result};
pub use progression::{apply_victory, exp_to_next_level, VictoryResult};
pub use session::{BattleScheduler, BattleSession, SchedulerConfig, SessionUpdate};
