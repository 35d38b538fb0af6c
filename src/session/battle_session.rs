//! Per-character auto-battle state and the tick that advances it.
//!
//! A [`BattleSession`] is single-writer: whoever holds it (the scheduler
//! task, the simulator loop, a test) is the only thing mutating the
//! character. Sessions share nothing but the read-only catalog.

use super::statistics::SessionStatistics;
use crate::catalog::{Catalog, Zone};
use crate::character::Character;
use crate::combat::round::{execute_round, RoundOutcome};
use crate::combat::types::{BattleStrategy, Monster};
use crate::core::error::{EngineError, Result};
use crate::core::log::{Clock, LogBook, LogEntry, LogKind};
use crate::progression::{apply_victory, rest_between_battles, LootDrop, RestResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Result of one scheduler tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTick {
    pub logs: Vec<LogEntry>,
    pub outcome: RoundOutcome,
    pub damage_dealt: u32,
    pub damage_taken: u32,

    // Victory
    pub exp_gained: u64,
    pub gold_gained: u64,
    pub loot: Vec<LootDrop>,
    pub levels_reached: Vec<u32>,
    pub rest: Option<RestResult>,

    /// Character after the tick.
    pub character: Character,
    /// Monster the next tick will fight, if any.
    pub monster: Option<Monster>,
}

impl SessionTick {
    pub fn player_won(&self) -> bool {
        self.outcome == RoundOutcome::Victory
    }

    pub fn player_died(&self) -> bool {
        self.outcome == RoundOutcome::Defeat
    }

    pub fn leveled_up(&self) -> bool {
        !self.levels_reached.is_empty()
    }
}

/// Read-only view of a session for status queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub session_id: Uuid,
    pub running: bool,
    pub zone_id: String,
    pub monster: Option<Monster>,
    pub statistics: SessionStatistics,
}

#[derive(Debug)]
pub struct BattleSession {
    id: Uuid,
    catalog: Arc<Catalog>,
    character: Character,
    strategy: BattleStrategy,
    zone_id: String,
    monster: Option<Monster>,
    book: LogBook,
    statistics: SessionStatistics,
    running: bool,
    rng: ChaCha8Rng,
}

impl BattleSession {
    /// Creates a stopped session in `zone_id`. The session id is the
    /// character id.
    pub fn new(
        catalog: Arc<Catalog>,
        character: Character,
        zone_id: &str,
        strategy: BattleStrategy,
    ) -> Result<Self> {
        let zone = catalog.zone(zone_id)?;
        check_unlocked(zone, &character)?;
        let zone_id = zone.id.clone();

        Ok(Self {
            id: character.id,
            catalog,
            character,
            strategy,
            zone_id,
            monster: None,
            book: LogBook::default(),
            statistics: SessionStatistics::default(),
            running: false,
            rng: ChaCha8Rng::from_entropy(),
        })
    }

    /// Makes every roll in this session reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.book = LogBook::new(clock);
        self
    }

    // === Accessors ===

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn strategy(&self) -> &BattleStrategy {
        &self.strategy
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    pub fn monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            session_id: self.id,
            running: self.running,
            zone_id: self.zone_id.clone(),
            monster: self.monster.clone(),
            statistics: self.statistics.clone(),
        }
    }

    pub fn set_strategy(&mut self, strategy: BattleStrategy) {
        self.strategy = strategy;
    }

    // === Control ===

    /// Marks the session running. Starting a running session is a no-op and
    /// returns no logs.
    pub fn start(&mut self) -> Result<Vec<LogEntry>> {
        if self.running {
            return Ok(Vec::new());
        }
        if !self.character.is_alive() {
            return Err(EngineError::CharacterDefeated(self.character.name.clone()));
        }
        self.running = true;

        let zone_name = self.catalog.zone(&self.zone_id)?.name.clone();
        tracing::info!(session = %self.id, zone = %self.zone_id, "auto-battle started");
        Ok(vec![self.book.entry(
            format!("Auto-battle started in [{}]", zone_name),
            LogKind::System,
        )])
    }

    /// Stops the session and abandons the current encounter.
    pub fn stop(&mut self) -> Vec<LogEntry> {
        if !self.running {
            return Vec::new();
        }
        self.running = false;
        self.monster = None;
        tracing::info!(session = %self.id, "auto-battle stopped");
        vec![self.book.entry("Auto-battle stopped", LogKind::System)]
    }

    pub fn toggle(&mut self) -> Result<Vec<LogEntry>> {
        if self.running {
            Ok(self.stop())
        } else {
            self.start()
        }
    }

    /// Moves to another zone. The current encounter is abandoned.
    pub fn change_zone(&mut self, zone_id: &str) -> Result<Vec<LogEntry>> {
        let zone = self.catalog.zone(zone_id)?;
        check_unlocked(zone, &self.character)?;

        self.zone_id = zone.id.clone();
        self.monster = None;
        tracing::debug!(session = %self.id, zone = %self.zone_id, "zone changed");
        Ok(vec![self.book.entry(
            format!("You travel to [{}]", zone.name),
            LogKind::System,
        )])
    }

    /// Brings a defeated character back at full HP and MP. Does not restart
    /// the session.
    pub fn revive(&mut self) -> Vec<LogEntry> {
        if self.character.is_alive() {
            return Vec::new();
        }
        self.character.combat_stats.restore_full();
        tracing::info!(session = %self.id, "character revived");
        vec![self.book.entry(
            "You have been revived and are ready to fight",
            LogKind::System,
        )]
    }

    // === Tick ===

    /// Runs one round, drawing a monster first if none is engaged.
    ///
    /// On victory rewards are applied, the character rests and the next
    /// monster is drawn. On defeat the session stops.
    pub fn tick(&mut self) -> Result<SessionTick> {
        if !self.character.is_alive() {
            return Err(EngineError::CharacterDefeated(self.character.name.clone()));
        }

        let mut logs = Vec::new();
        let mut monster = match self.monster.take() {
            Some(monster) => monster,
            None => self.draw_encounter(&mut logs)?,
        };

        let round = execute_round(
            &mut self.character,
            &mut monster,
            &self.strategy,
            &mut self.book,
            &mut self.rng,
        );
        self.statistics.record_round(&round);
        logs.extend(round.logs.iter().cloned());

        let mut rest = None;
        let mut victory = None;

        match round.outcome {
            RoundOutcome::Continue => {
                self.monster = Some(monster);
            }
            RoundOutcome::Victory => {
                self.book.push(
                    &mut logs,
                    format!("You defeated {}!", monster.name),
                    LogKind::System,
                );
                let template = self.catalog.monster(&monster.template_id)?;
                let won = apply_victory(&mut self.character, template, &mut self.book, &mut self.rng);
                self.statistics.record_victory(&won);
                logs.extend(won.logs.iter().cloned());

                rest = Some(rest_between_battles(&mut self.character));
                victory = Some(won);

                if self.running {
                    self.monster = Some(self.draw_encounter(&mut logs)?);
                }
            }
            RoundOutcome::Defeat => {
                self.statistics.record_death();
                self.running = false;
                tracing::info!(
                    session = %self.id,
                    monster = %monster.name,
                    "character defeated, stopping"
                );
                self.book.push(
                    &mut logs,
                    format!("You were defeated by {}", monster.name),
                    LogKind::Death,
                );
            }
        }

        let (exp_gained, gold_gained, loot, levels_reached) = match victory {
            Some(v) => (v.exp_gained, v.gold_gained, v.loot, v.levels_reached),
            None => (0, 0, Vec::new(), Vec::new()),
        };
        Ok(SessionTick {
            logs,
            outcome: round.outcome,
            damage_dealt: round.damage_dealt(),
            damage_taken: round.damage_taken(),
            exp_gained,
            gold_gained,
            loot,
            levels_reached,
            rest,
            character: self.character.clone(),
            monster: self.monster.clone(),
        })
    }

    fn draw_encounter(&mut self, logs: &mut Vec<LogEntry>) -> Result<Monster> {
        let monster = self.catalog.select_encounter(&self.zone_id, &mut self.rng)?;
        self.statistics.record_encounter();
        tracing::debug!(
            session = %self.id,
            monster = %monster.template_id,
            battle = self.statistics.battles,
            "encounter drawn"
        );
        self.book.push(
            logs,
            format!(
                "Encountered {} Lv.{} (HP {})",
                monster.name, monster.level, monster.max_hp
            ),
            LogKind::CombatStart,
        );
        Ok(monster)
    }
}

fn check_unlocked(zone: &Zone, character: &Character) -> Result<()> {
    if zone.is_unlocked_at(character.level) {
        Ok(())
    } else {
        Err(EngineError::ZoneLocked {
            zone: zone.id.clone(),
            required: zone.unlock_level,
            level: character.level,
        })
    }
}
