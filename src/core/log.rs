//! Battle log entries and the per-session sequence that numbers them.
//!
//! The core never keeps history: entries are produced into a `Vec` and handed
//! to the caller, who decides how many to store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Category of a log entry, used by the presentation layer for coloring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LogKind {
    System,
    CombatStart,
    Damage,
    Heal,
    Loot,
    Exp,
    #[serde(rename = "levelup")]
    LevelUp,
    Death,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub id: u64,
    /// Unix time in milliseconds.
    pub timestamp: i64,
    pub message: String,
    pub kind: LogKind,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.message)
    }
}

/// Source of wall-clock timestamps for log entries.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock that always returns the same instant. Used by tests and the simulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Hands out monotonically increasing log ids for one session.
///
/// Each session owns its own book, so ids are unique per session only.
#[derive(Clone)]
pub struct LogBook {
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for LogBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogBook")
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Default for LogBook {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl LogBook {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { next_id: 1, clock }
    }

    /// Creates an entry with the next id. Ids start at 1.
    pub fn entry(&mut self, message: impl Into<String>, kind: LogKind) -> LogEntry {
        let id = self.next_id;
        self.next_id += 1;
        LogEntry {
            id,
            timestamp: self.clock.now_millis(),
            message: message.into(),
            kind,
        }
    }

    /// Creates an entry and appends it to `logs`.
    pub fn push(&mut self, logs: &mut Vec<LogEntry>, message: impl Into<String>, kind: LogKind) {
        let entry = self.entry(message, kind);
        logs.push(entry);
    }

    /// The id the next entry will receive.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_book() -> LogBook {
        LogBook::new(Arc::new(FixedClock(1_000)))
    }

    #[test]
    fn test_ids_are_monotonic_from_one() {
        let mut book = fixed_book();
        let a = book.entry("first", LogKind::System);
        let b = book.entry("second", LogKind::Damage);
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(book.peek_next_id(), 3);
    }

    #[test]
    fn test_books_do_not_share_counters() {
        let mut a = fixed_book();
        let mut b = fixed_book();
        a.entry("a1", LogKind::System);
        a.entry("a2", LogKind::System);
        assert_eq!(b.entry("b1", LogKind::System).id, 1);
    }

    #[test]
    fn test_push_appends_with_clock_timestamp() {
        let mut book = fixed_book();
        let mut logs = Vec::new();
        book.push(&mut logs, "hit", LogKind::Damage);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].timestamp, 1_000);
        assert_eq!(logs[0].kind, LogKind::Damage);
        assert_eq!(logs[0].message, "hit");
    }

    #[test]
    fn test_log_kind_serializes_like_frontend_tags() {
        let json = serde_json::to_string(&LogKind::CombatStart).unwrap();
        assert_eq!(json, "\"combat-start\"");
        let json = serde_json::to_string(&LogKind::LevelUp).unwrap();
        assert_eq!(json, "\"levelup\"");
    }
}
