//! Running totals for one battle session.

use crate::combat::round::RoundResult;
use crate::progression::VictoryResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatistics {
    /// Encounters started.
    pub battles: u64,
    pub rounds: u64,
    pub total_kills: u64,
    pub total_exp: u64,
    pub total_gold: u64,
    /// Most HP removed by one player action. Overkill past the monster's
    /// remaining HP is not counted.
    pub highest_damage: u32,
    pub death_count: u64,
}

impl SessionStatistics {
    pub fn record_encounter(&mut self) {
        self.battles += 1;
    }

    pub fn record_round(&mut self, round: &RoundResult) {
        self.rounds += 1;
        self.highest_damage = self.highest_damage.max(round.damage_dealt());
    }

    pub fn record_victory(&mut self, victory: &VictoryResult) {
        self.total_kills += 1;
        self.total_exp += victory.exp_gained;
        self.total_gold += victory.gold_gained;
    }

    pub fn record_death(&mut self) {
        self.death_count += 1;
    }

    /// Kills per encounter started, 0 when nothing has been fought.
    pub fn win_rate(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        self.total_kills as f64 / self.battles as f64
    }
}
