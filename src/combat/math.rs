//! Pure combat math shared by the round engine and the simulator.
//!
//! Nothing here touches a character or monster; callers apply the results.

use crate::core::constants::*;
use rand::Rng;

/// Result of one attack resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// Final damage, always at least 1.
    pub damage: u32,
    pub is_crit: bool,
}

/// Resolves one attack.
///
/// Base damage is `attack × multiplier − defense × 0.5` floored and held at
/// 1 or more, then varied by up to ±20%, then doubled on a crit.
pub fn resolve_attack(
    attack: f64,
    defense: f64,
    multiplier: f64,
    rng: &mut impl Rng,
) -> AttackResult {
    let base = (attack * multiplier - defense * DEFENSE_MITIGATION)
        .floor()
        .max(MIN_DAMAGE as f64);

    let variance = rng.gen_range(-DAMAGE_VARIANCE..DAMAGE_VARIANCE);
    let mut damage = (base * (1.0 + variance)).floor();

    let is_crit = roll_crit(CRIT_CHANCE_PERCENT, rng);
    if is_crit {
        damage = (damage * CRIT_MULTIPLIER).floor();
    }

    AttackResult {
        damage: (damage as u32).max(MIN_DAMAGE),
        is_crit,
    }
}

/// Percent roll: true when `uniform(0, 100) < chance_percent`.
pub fn roll_crit(chance_percent: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() * 100.0 < chance_percent
}

/// Chance, in percent, that an attack against a defender with this much
/// agility misses.
pub fn dodge_chance(agility: u32) -> f64 {
    (agility as f64 * DODGE_RATE_PER_AGILITY).min(MAX_DODGE_RATE)
}

pub fn roll_dodge(agility: u32, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() * 100.0 < dodge_chance(agility)
}

/// Healing for a heal skill, clamped to the caster's missing HP.
pub fn resolve_heal(multiplier: f64, caster_attack: f64, current_hp: u32, max_hp: u32) -> u32 {
    let amount = (multiplier.abs() * caster_attack * HEAL_ATTACK_FACTOR).floor();
    let missing = max_hp.saturating_sub(current_hp);
    (amount as u32).min(missing)
}

/// MP regained at the end of each round.
pub fn mp_regen(spirit: u32) -> u32 {
    (MP_REGEN_BASE + spirit as f64 * MP_REGEN_PER_SPIRIT).floor() as u32
}
