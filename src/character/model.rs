use super::derived_stats::{derive_combat_stats, CombatStats};
use super::stats::Stats;
use crate::combat::types::Skill;
use crate::core::constants::STARTING_LEVEL;
use crate::progression::exp_to_next_level;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A player character and everything the simulation mutates on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub race: String,
    pub class: String,
    pub level: u32,
    pub exp: u64,
    pub exp_to_next_level: u64,
    pub gold: u64,
    pub stats: Stats,
    pub combat_stats: CombatStats,
    /// Owned skill copies, in catalog order.
    pub skills: Vec<Skill>,
}

impl Character {
    /// Builds a character with freshly derived combat stats and full pools.
    pub fn new(
        name: impl Into<String>,
        race: impl Into<String>,
        class: impl Into<String>,
        stats: Stats,
        skills: Vec<Skill>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            race: race.into(),
            class: class.into(),
            level: STARTING_LEVEL,
            exp: 0,
            exp_to_next_level: exp_to_next_level(STARTING_LEVEL),
            gold: 0,
            stats,
            combat_stats: derive_combat_stats(&stats),
            skills,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.combat_stats.is_alive()
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn skill_mut(&mut self, id: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.id == id)
    }
}
