use super::stats::Stats;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Combat stats derived from base [`Stats`].
///
/// Everything except the HP/MP pools is recomputed from scratch by
/// [`derive_combat_stats`]. The pools are the only fields mutated during
/// combat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CombatStats {
    pub max_hp: u32,
    pub current_hp: u32,
    pub max_mp: u32,
    pub current_mp: u32,
    pub attack: f64,
    pub defense: f64,
    /// Percent, 0-100. Display stat; the resolver rolls its own fixed chance.
    pub crit_rate: f64,
    /// Percent, 0-100.
    pub dodge_rate: f64,
}

/// Derives combat stats from base attributes. Pools start full.
pub fn derive_combat_stats(stats: &Stats) -> CombatStats {
    // Max HP = BASE_HP + STA × 10
    let max_hp = BASE_HP.saturating_add(stats.stamina.saturating_mul(HP_PER_STAMINA));
    // Max MP = BASE_MP + INT × 5
    let max_mp = BASE_MP.saturating_add(stats.intellect.saturating_mul(MP_PER_INTELLECT));

    let strength = stats.strength as f64;
    let agility = stats.agility as f64;
    let stamina = stats.stamina as f64;

    let attack = BASE_ATTACK + strength * ATTACK_PER_STRENGTH + agility * ATTACK_PER_AGILITY;
    let defense = BASE_DEFENSE + stamina * DEFENSE_PER_STAMINA + agility * DEFENSE_PER_AGILITY;
    let crit_rate = (BASE_CRIT_RATE + agility * CRIT_RATE_PER_AGILITY).min(MAX_CRIT_RATE);
    let dodge_rate = (agility * DODGE_RATE_PER_AGILITY).min(MAX_DODGE_RATE);

    CombatStats {
        max_hp,
        current_hp: max_hp,
        max_mp,
        current_mp: max_mp,
        attack,
        defense,
        crit_rate,
        dodge_rate,
    }
}

impl CombatStats {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Current HP as a percentage of max HP.
    pub fn hp_percent(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.current_hp as f64 / self.max_hp as f64 * 100.0
    }

    pub fn missing_hp(&self) -> u32 {
        self.max_hp.saturating_sub(self.current_hp)
    }

    /// Subtracts damage, flooring HP at 0. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_sub(amount);
        before - self.current_hp
    }

    /// Adds HP up to max. Returns the HP actually gained.
    pub fn restore_hp(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.missing_hp());
        self.current_hp += gained;
        gained
    }

    /// Adds MP up to max. Returns the MP actually gained.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_mp.saturating_sub(self.current_mp));
        self.current_mp += gained;
        gained
    }

    pub fn spend_mp(&mut self, amount: u32) {
        self.current_mp = self.current_mp.saturating_sub(amount);
    }

    pub fn restore_full(&mut self) {
        self.current_hp = self.max_hp;
        self.current_mp = self.max_mp;
    }

    /// Re-derives every non-pool field and resets pools to the new maximum.
    pub fn rederive_and_restore(&mut self, stats: &Stats) {
        *self = derive_combat_stats(stats);
    }

    /// Pulls pools back inside `[0, max]`. Returns true if anything was out of
    /// bounds, which points at a bug upstream.
    pub fn clamp_pools(&mut self) -> bool {
        let mut clamped = false;
        if self.current_hp > self.max_hp {
            tracing::warn!(
                current = self.current_hp,
                max = self.max_hp,
                "current HP above max, clamping"
            );
            self.current_hp = self.max_hp;
            clamped = true;
        }
        if self.current_mp > self.max_mp {
            tracing::warn!(
                current = self.current_mp,
                max = self.max_mp,
                "current MP above max, clamping"
            );
            self.current_mp = self.max_mp;
            clamped = true;
        }
        clamped
    }
}
