//! Main simulation runner.
//!
//! Every run is a real `BattleSession` ticked in a tight loop. Statistics are
//! gathered from the `SessionTick` values it returns.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::catalog::Catalog;
use crate::character::create_character;
use crate::combat::types::BattleStrategy;
use crate::core::error::Result;
use crate::core::log::FixedClock;
use crate::session::{BattleSession, SessionTick};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Run the full simulation and return a report.
pub fn run_simulation(catalog: Arc<Catalog>, config: &SimConfig) -> Result<SimReport> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|s| s.wrapping_add(run_idx as u64));
        let run = simulate_single_run(Arc::clone(&catalog), config, seed)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Zone {}, Kills {}, Deaths {}, Ticks {}",
                run_idx + 1,
                config.num_runs,
                run.final_level,
                run.final_zone,
                run.total_kills,
                run.total_deaths,
                run.total_ticks
            );
        }
        all_runs.push(run);
    }

    Ok(SimReport::from_runs(all_runs, config.max_ticks_per_run))
}

/// Tracks statistics during a simulation run.
struct SimStats {
    zone_kills: BTreeMap<String, u64>,
    zone_deaths: BTreeMap<String, u64>,
    loot_items: u64,
    level_up_ticks: Vec<u64>,
}

impl SimStats {
    fn new() -> Self {
        Self {
            zone_kills: BTreeMap::new(),
            zone_deaths: BTreeMap::new(),
            loot_items: 0,
            level_up_ticks: Vec::new(),
        }
    }

    fn process_tick(&mut self, tick: &SessionTick, zone_id: &str, current_tick: u64) {
        if tick.player_won() {
            *self.zone_kills.entry(zone_id.to_string()).or_insert(0) += 1;
            self.loot_items += tick.loot.iter().map(|d| d.quantity as u64).sum::<u64>();
        }
        if tick.player_died() {
            *self.zone_deaths.entry(zone_id.to_string()).or_insert(0) += 1;
        }
        for _ in &tick.levels_reached {
            self.level_up_ticks.push(current_tick);
        }
    }
}

/// Simulate one character from level 1 until the target level, a hard stop
/// or the tick limit.
pub fn simulate_single_run(
    catalog: Arc<Catalog>,
    config: &SimConfig,
    seed: Option<u64>,
) -> Result<RunStats> {
    let character = create_character(&catalog, "Simulant", &config.race, &config.class)?;
    let strategy = BattleStrategy::with_priority(character.skills.iter().map(|s| s.id.clone()));

    let mut session = BattleSession::new(Arc::clone(&catalog), character, &config.zone_id, strategy)?
        .with_clock(Arc::new(FixedClock(0)));
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }
    session.start()?;

    let mut stats = SimStats::new();
    let mut ticks = 0u64;
    let mut reached_target = session.character().level >= config.target_level;

    while !reached_target && ticks < config.max_ticks_per_run {
        let zone_id = session.zone_id().to_string();
        let tick = session.tick()?;
        ticks += 1;
        stats.process_tick(&tick, &zone_id, ticks);

        if tick.player_died() {
            if !config.revive_on_death {
                break;
            }
            session.revive();
            session.start()?;
        }

        if tick.leveled_up() {
            reached_target = session.character().level >= config.target_level;
            if config.auto_advance_zones {
                advance_zone(&catalog, &mut session)?;
            }
        }
    }

    let character = session.character();
    let statistics = session.statistics();
    Ok(RunStats {
        final_level: character.level,
        final_zone: session.zone_id().to_string(),
        total_ticks: ticks,
        total_kills: statistics.total_kills,
        total_deaths: statistics.death_count,
        total_exp: statistics.total_exp,
        total_gold: statistics.total_gold,
        highest_damage: statistics.highest_damage,
        loot_items: stats.loot_items,
        reached_target,
        level_up_ticks: stats.level_up_ticks,
        zone_kills: stats.zone_kills,
        zone_deaths: stats.zone_deaths,
    })
}

/// Moves the session to the highest zone the character has unlocked.
fn advance_zone(catalog: &Catalog, session: &mut BattleSession) -> Result<()> {
    let level = session.character().level;
    let best = catalog
        .unlocked_zones(level)
        .into_iter()
        .max_by_key(|z| z.unlock_level)
        .map(|z| z.id.clone());

    if let Some(zone_id) = best {
        if zone_id != session.zone_id() {
            session.change_zone(&zone_id)?;
        }
    }
    Ok(())
}
