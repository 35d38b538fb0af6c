//! Gold and loot rolls, plus the rest taken between encounters.

use crate::character::Character;
use crate::combat::types::LootItem;
use crate::core::constants::{REST_HP_FRACTION, REST_MP_FRACTION};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One successful loot roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootDrop {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
}

/// Uniform gold roll in `[min, max]`, inclusive.
pub fn roll_gold(range: (u64, u64), rng: &mut impl Rng) -> u64 {
    let (min, max) = ordered(range);
    rng.gen_range(min..=max)
}

/// Rolls each loot-table row independently.
///
/// A row drops when `uniform(0, 100) < drop_rate`; its quantity is then
/// uniform in the row's inclusive range.
pub fn roll_loot(table: &[LootItem], rng: &mut impl Rng) -> Vec<LootDrop> {
    table
        .iter()
        .filter_map(|item| {
            if rng.gen::<f64>() * 100.0 >= item.drop_rate {
                return None;
            }
            let (min, max) = ordered(item.quantity);
            Some(LootDrop {
                item_id: item.item_id.clone(),
                name: item.name.clone(),
                quantity: rng.gen_range(min..=max),
            })
        })
        .collect()
}

fn ordered<T: PartialOrd + Copy + std::fmt::Debug>(range: (T, T)) -> (T, T) {
    if range.0 <= range.1 {
        range
    } else {
        tracing::warn!(?range, "reward range is inverted, swapping bounds");
        (range.1, range.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestResult {
    pub hp_restored: u32,
    pub mp_restored: u32,
}

/// Recovers a fraction of HP and MP between encounters.
pub fn rest_between_battles(character: &mut Character) -> RestResult {
    let stats = &mut character.combat_stats;
    let hp = (stats.max_hp as f64 * REST_HP_FRACTION).floor() as u32;
    let mp = (stats.max_mp as f64 * REST_MP_FRACTION).floor() as u32;
    RestResult {
        hp_restored: stats.restore_hp(hp),
        mp_restored: stats.restore_mp(mp),
    }
}
