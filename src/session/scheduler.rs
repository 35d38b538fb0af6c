//! Drives running battle sessions on a fixed interval.
//!
//! Each running session gets one tokio task that ticks it every
//! `tick_interval / speed`. Ticks for a session run under that session's
//! mutex and contain no await points, so they never overlap and a stop
//! request never interrupts a round halfway through.

use super::battle_session::{BattleSession, SessionStatus, SessionTick};
use crate::catalog::Catalog;
use crate::character::Character;
use crate::combat::types::BattleStrategy;
use crate::core::constants::TICK_INTERVAL_MS;
use crate::core::error::{EngineError, Result};
use crate::core::log::LogEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use uuid::Uuid;

/// Battle speed multiplier applied to the base tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BattleSpeed {
    #[default]
    X1,
    X2,
    X5,
    X10,
}

impl BattleSpeed {
    pub fn all() -> [BattleSpeed; 4] {
        [BattleSpeed::X1, BattleSpeed::X2, BattleSpeed::X5, BattleSpeed::X10]
    }

    pub fn multiplier(self) -> u32 {
        match self {
            BattleSpeed::X1 => 1,
            BattleSpeed::X2 => 2,
            BattleSpeed::X5 => 5,
            BattleSpeed::X10 => 10,
        }
    }

    pub fn from_multiplier(multiplier: u32) -> Option<Self> {
        Self::all().into_iter().find(|s| s.multiplier() == multiplier)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Interval between ticks at 1x speed.
    pub tick_interval: Duration,
    /// Speed new sessions start with.
    pub speed: BattleSpeed,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            speed: BattleSpeed::X1,
        }
    }
}

impl SchedulerConfig {
    pub fn period(&self, speed: BattleSpeed) -> Duration {
        self.tick_interval / speed.multiplier()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    Requested,
    Defeated,
}

/// Messages sent to the caller as sessions advance.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    Tick {
        session_id: Uuid,
        tick: Box<SessionTick>,
    },
    Stopped {
        session_id: Uuid,
        reason: StopReason,
    },
    /// The tick returned an error. The session has been stopped.
    Failed {
        session_id: Uuid,
        error: EngineError,
    },
}

struct SessionHandle {
    session: Arc<Mutex<BattleSession>>,
    speed: BattleSpeed,
    task: Option<JoinHandle<()>>,
}

impl SessionHandle {
    fn has_live_task(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Owns every registered session and at most one timer task per session.
pub struct BattleScheduler {
    catalog: Arc<Catalog>,
    config: SchedulerConfig,
    sessions: HashMap<Uuid, SessionHandle>,
    updates: mpsc::UnboundedSender<SessionUpdate>,
}

impl BattleScheduler {
    /// Creates a scheduler and the receiving end of its update channel.
    pub fn new(
        catalog: Arc<Catalog>,
        config: SchedulerConfig,
    ) -> (Self, mpsc::UnboundedReceiver<SessionUpdate>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            catalog,
            config,
            sessions: HashMap::new(),
            updates,
        };
        (scheduler, rx)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Builds a session for `character` in `zone_id` and registers it.
    pub fn create_session(
        &mut self,
        character: Character,
        zone_id: &str,
        strategy: BattleStrategy,
    ) -> Result<Uuid> {
        let session = BattleSession::new(Arc::clone(&self.catalog), character, zone_id, strategy)?;
        self.register(session)
    }

    pub fn register(&mut self, session: BattleSession) -> Result<Uuid> {
        let id = session.id();
        if self.sessions.contains_key(&id) {
            return Err(EngineError::DuplicateSession(id.to_string()));
        }
        self.sessions.insert(
            id,
            SessionHandle {
                session: Arc::new(Mutex::new(session)),
                speed: self.config.speed,
                task: None,
            },
        );
        Ok(id)
    }

    /// Shared handle to a session, e.g. for reading a snapshot.
    pub fn session(&self, id: Uuid) -> Result<Arc<Mutex<BattleSession>>> {
        Ok(Arc::clone(&self.handle(id)?.session))
    }

    pub fn session_ids(&self) -> Vec<Uuid> {
        self.sessions.keys().copied().collect()
    }

    /// True while a timer task is alive for the session.
    pub fn is_active(&self, id: Uuid) -> bool {
        self.sessions.get(&id).is_some_and(|h| h.has_live_task())
    }

    pub fn speed(&self, id: Uuid) -> Result<BattleSpeed> {
        Ok(self.handle(id)?.speed)
    }

    pub async fn status(&self, id: Uuid) -> Result<SessionStatus> {
        let session = self.session(id)?;
        let guard = session.lock().await;
        Ok(guard.status())
    }

    /// Starts ticking a session. Idempotent: a running session keeps its
    /// single timer.
    pub async fn start(&mut self, id: Uuid) -> Result<Vec<LogEntry>> {
        let updates = self.updates.clone();
        let period_for = self.config;
        let handle = self.handle_mut(id)?;

        let logs = handle.session.lock().await.start()?;
        if !handle.has_live_task() {
            let period = period_for.period(handle.speed);
            handle.task = Some(spawn_ticker(Arc::clone(&handle.session), period, updates));
        }
        Ok(logs)
    }

    /// Stops a session. A round already in progress completes first.
    pub async fn stop(&mut self, id: Uuid) -> Result<Vec<LogEntry>> {
        let updates = self.updates.clone();
        let handle = self.handle_mut(id)?;

        let logs = handle.session.lock().await.stop();
        handle.abort_task();
        if !logs.is_empty() {
            // Receiver may be gone; nothing left to notify then.
            let _ = updates.send(SessionUpdate::Stopped {
                session_id: id,
                reason: StopReason::Requested,
            });
        }
        Ok(logs)
    }

    pub async fn toggle(&mut self, id: Uuid) -> Result<Vec<LogEntry>> {
        let running = self.handle(id)?.session.lock().await.is_running();
        if running {
            self.stop(id).await
        } else {
            self.start(id).await
        }
    }

    /// Changes the tick rate. A live timer is restarted at the new period.
    pub async fn set_speed(&mut self, id: Uuid, speed: BattleSpeed) -> Result<()> {
        let updates = self.updates.clone();
        let config = self.config;
        let handle = self.handle_mut(id)?;
        if handle.speed == speed {
            return Ok(());
        }
        handle.speed = speed;

        if handle.has_live_task() {
            // Wait for any in-flight tick before swapping timers.
            let session = Arc::clone(&handle.session);
            let guard = session.lock().await;
            handle.abort_task();
            drop(guard);
            handle.task = Some(spawn_ticker(session, config.period(speed), updates));
        }
        tracing::debug!(session = %id, speed = speed.multiplier(), "battle speed changed");
        Ok(())
    }

    pub async fn change_zone(&mut self, id: Uuid, zone_id: &str) -> Result<Vec<LogEntry>> {
        let session = self.session(id)?;
        let mut guard = session.lock().await;
        guard.change_zone(zone_id)
    }

    pub async fn set_strategy(&mut self, id: Uuid, strategy: BattleStrategy) -> Result<()> {
        let session = self.session(id)?;
        session.lock().await.set_strategy(strategy);
        Ok(())
    }

    /// Revives a defeated character. The session stays stopped.
    pub async fn revive(&mut self, id: Uuid) -> Result<Vec<LogEntry>> {
        let session = self.session(id)?;
        let mut guard = session.lock().await;
        Ok(guard.revive())
    }

    /// Stops and forgets a session, returning its final state.
    pub async fn remove(&mut self, id: Uuid) -> Result<Arc<Mutex<BattleSession>>> {
        self.stop(id).await?;
        let handle = self
            .sessions
            .remove(&id)
            .ok_or_else(|| EngineError::UnknownSession(id.to_string()))?;
        Ok(handle.session)
    }

    /// Stops every session.
    pub async fn shutdown(&mut self) {
        for id in self.session_ids() {
            // Ids come from the map, so the lookup cannot fail.
            let _ = self.stop(id).await;
        }
    }

    fn handle(&self, id: Uuid) -> Result<&SessionHandle> {
        self.sessions
            .get(&id)
            .ok_or_else(|| EngineError::UnknownSession(id.to_string()))
    }

    fn handle_mut(&mut self, id: Uuid) -> Result<&mut SessionHandle> {
        self.sessions
            .get_mut(&id)
            .ok_or_else(|| EngineError::UnknownSession(id.to_string()))
    }
}

fn spawn_ticker(
    session: Arc<Mutex<BattleSession>>,
    period: Duration,
    updates: mpsc::UnboundedSender<SessionUpdate>,
) -> JoinHandle<()> {
    tokio::spawn(run_ticker(session, period, updates))
}

async fn run_ticker(
    session: Arc<Mutex<BattleSession>>,
    period: Duration,
    updates: mpsc::UnboundedSender<SessionUpdate>,
) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let mut guard = session.lock().await;
        if !guard.is_running() {
            break;
        }
        let session_id = guard.id();

        match guard.tick() {
            Ok(tick) => {
                let died = tick.player_died();
                let sent = updates.send(SessionUpdate::Tick {
                    session_id,
                    tick: Box::new(tick),
                });
                if sent.is_err() {
                    tracing::warn!(session = %session_id, "update channel closed, stopping session");
                    guard.stop();
                    break;
                }
                if died {
                    let _ = updates.send(SessionUpdate::Stopped {
                        session_id,
                        reason: StopReason::Defeated,
                    });
                    break;
                }
            }
            Err(error) => {
                tracing::warn!(session = %session_id, %error, "tick failed, stopping session");
                guard.stop();
                let _ = updates.send(SessionUpdate::Failed { session_id, error });
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::create_character;

    fn scheduler() -> (BattleScheduler, mpsc::UnboundedReceiver<SessionUpdate>, Uuid) {
        let catalog = Arc::new(Catalog::default());
        let character = create_character(&catalog, "Ticker", "orc", "warrior").unwrap();
        let (mut scheduler, rx) = BattleScheduler::new(catalog, SchedulerConfig::default());
        let id = scheduler
            .create_session(character, "elwynn_forest", BattleStrategy::default())
            .unwrap();
        (scheduler, rx, id)
    }

    async fn next_tick(rx: &mut mpsc::UnboundedReceiver<SessionUpdate>) -> Box<SessionTick> {
        loop {
            match rx.recv().await {
                Some(SessionUpdate::Tick { tick, .. }) => return tick,
                Some(_) => continue,
                None => panic!("update channel closed"),
            }
        }
    }

    #[test]
    fn test_speed_divides_interval() {
        let config = SchedulerConfig::default();
        assert_eq!(config.period(BattleSpeed::X1), Duration::from_millis(1500));
        assert_eq!(config.period(BattleSpeed::X2), Duration::from_millis(750));
        assert_eq!(config.period(BattleSpeed::X10), Duration::from_millis(150));
        assert_eq!(BattleSpeed::from_multiplier(5), Some(BattleSpeed::X5));
        assert_eq!(BattleSpeed::from_multiplier(3), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_interval() {
        let (mut scheduler, mut rx, id) = scheduler();
        let started = Instant::now();
        scheduler.start(id).await.unwrap();

        next_tick(&mut rx).await;
        assert_eq!(started.elapsed(), Duration::from_millis(1500));
        next_tick(&mut rx).await;
        assert_eq!(started.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_start_keeps_one_timer() {
        let (mut scheduler, mut rx, id) = scheduler();
        let started = Instant::now();
        assert_eq!(scheduler.start(id).await.unwrap().len(), 1);
        assert!(scheduler.start(id).await.unwrap().is_empty());

        next_tick(&mut rx).await;
        next_tick(&mut rx).await;
        // Two timers would have delivered both ticks at 1.5s.
        assert_eq!(started.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_prevents_further_ticks() {
        let (mut scheduler, mut rx, id) = scheduler();
        scheduler.start(id).await.unwrap();
        next_tick(&mut rx).await;

        scheduler.stop(id).await.unwrap();
        assert!(!scheduler.is_active(id));
        assert_eq!(
            rx.recv().await,
            Some(SessionUpdate::Stopped {
                session_id: id,
                reason: StopReason::Requested,
            })
        );
        let quiet = tokio::time::timeout(Duration::from_secs(30), rx.recv()).await;
        assert!(quiet.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_speed_restarts_timer() {
        let (mut scheduler, mut rx, id) = scheduler();
        scheduler.start(id).await.unwrap();
        next_tick(&mut rx).await;

        scheduler.set_speed(id, BattleSpeed::X10).await.unwrap();
        let before = Instant::now();
        next_tick(&mut rx).await;
        assert_eq!(before.elapsed(), Duration::from_millis(150));
        assert_eq!(scheduler.speed(id).unwrap(), BattleSpeed::X10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle() {
        let (mut scheduler, _rx, id) = scheduler();
        scheduler.toggle(id).await.unwrap();
        assert!(scheduler.status(id).await.unwrap().running);
        scheduler.toggle(id).await.unwrap();
        assert!(!scheduler.status(id).await.unwrap().running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_error_stops_session_and_reports_failure() {
        let mut data = crate::catalog::CatalogData::standard();
        data.zones[0].monsters.clear();
        let zone_id = data.zones[0].id.clone();
        let catalog = Arc::new(Catalog::new(data).unwrap());
        let character = create_character(&catalog, "Lost", "orc", "warrior").unwrap();
        let (mut scheduler, mut rx) = BattleScheduler::new(catalog, SchedulerConfig::default());
        let id = scheduler
            .create_session(character, &zone_id, BattleStrategy::default())
            .unwrap();

        scheduler.start(id).await.unwrap();
        match rx.recv().await {
            Some(SessionUpdate::Failed { session_id, error }) => {
                assert_eq!(session_id, id);
                assert_eq!(error, EngineError::EmptyZone(zone_id));
            }
            other => panic!("expected a failure update, got {other:?}"),
        }

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(!scheduler.status(id).await.unwrap().running);
        assert!(!scheduler.is_active(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_channel_stops_session() {
        let (mut scheduler, rx, id) = scheduler();
        drop(rx);
        scheduler.start(id).await.unwrap();

        tokio::time::sleep(Duration::from_millis(2000)).await;
        let status = scheduler.status(id).await.unwrap();
        assert!(!status.running);
        assert!(status.monster.is_none());
        assert!(!scheduler.is_active(id));
    }

    #[tokio::test]
    async fn test_unknown_and_duplicate_sessions() {
        let (mut scheduler, _rx, id) = scheduler();
        let missing = Uuid::new_v4();
        assert!(matches!(
            scheduler.start(missing).await,
            Err(EngineError::UnknownSession(_))
        ));

        let session = scheduler.session(id).unwrap();
        let character = session.lock().await.character().clone();
        assert!(matches!(
            scheduler.create_session(character, "elwynn_forest", BattleStrategy::default()),
            Err(EngineError::DuplicateSession(_))
        ));
    }
}
