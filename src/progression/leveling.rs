//! Experience curve, level-ups and the victory reward pipeline.

use super::rewards::{roll_gold, roll_loot, LootDrop};
use crate::character::Character;
use crate::combat::types::MonsterTemplate;
use crate::core::constants::{XP_CURVE_BASE, XP_CURVE_EXPONENT};
use crate::core::log::{LogBook, LogEntry, LogKind};
use rand::Rng;

/// Experience needed to advance from `level` to `level + 1`.
///
/// `floor(100 × 1.5^(level − 1))`: 100, 150, 225, 337, ...
pub fn exp_to_next_level(level: u32) -> u64 {
    let exponent = level.saturating_sub(1) as f64;
    (XP_CURVE_BASE * XP_CURVE_EXPONENT.powf(exponent)).floor() as u64
}

/// Applies one level: growth, re-derivation and a full restore.
pub fn level_up(character: &mut Character) {
    character.level += 1;
    character.exp_to_next_level = exp_to_next_level(character.level);
    character.stats.apply_level_growth();
    character.combat_stats.rederive_and_restore(&character.stats);
}

/// Spends banked experience on as many levels as it covers.
/// Returns the levels reached, in order.
pub fn process_level_ups(character: &mut Character) -> Vec<u32> {
    let mut reached = Vec::new();
    while character.exp >= character.exp_to_next_level {
        character.exp -= character.exp_to_next_level;
        level_up(character);
        reached.push(character.level);
    }
    reached
}

/// Everything granted for defeating one monster.
#[derive(Debug, Clone, PartialEq)]
pub struct VictoryResult {
    pub logs: Vec<LogEntry>,
    pub exp_gained: u64,
    pub gold_gained: u64,
    pub loot: Vec<LootDrop>,
    /// Levels reached, in order. Empty if no level was gained.
    pub levels_reached: Vec<u32>,
}

impl VictoryResult {
    pub fn leveled_up(&self) -> bool {
        !self.levels_reached.is_empty()
    }
}

/// Grants exp, gold and loot for `template`, then resolves level-ups.
///
/// Log order: exp, gold, one entry per drop, one entry per level gained.
pub fn apply_victory(
    character: &mut Character,
    template: &MonsterTemplate,
    book: &mut LogBook,
    rng: &mut impl Rng,
) -> VictoryResult {
    let mut logs = Vec::new();

    let exp_gained = template.exp_reward;
    character.exp = character.exp.saturating_add(exp_gained);
    book.push(
        &mut logs,
        format!("You gain {} experience", exp_gained),
        LogKind::Exp,
    );

    let gold_gained = roll_gold(template.gold_reward, rng);
    character.gold = character.gold.saturating_add(gold_gained);
    book.push(
        &mut logs,
        format!("You receive {} gold", gold_gained),
        LogKind::Loot,
    );

    let loot = roll_loot(&template.loot_table, rng);
    for drop in &loot {
        book.push(
            &mut logs,
            format!("Loot: [{}] x{}", drop.name, drop.quantity),
            LogKind::Loot,
        );
    }

    let levels_reached = process_level_ups(character);
    for level in &levels_reached {
        tracing::info!(character = %character.name, level, "level up");
        book.push(
            &mut logs,
            format!("Level up! You are now level {}!", level),
            LogKind::LevelUp,
        );
    }

    VictoryResult {
        logs,
        exp_gained,
        gold_gained,
        loot,
        levels_reached,
    }
}
