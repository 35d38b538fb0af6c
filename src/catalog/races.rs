//! Playable races and their starting bonuses.

use crate::character::stats::Stats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Alliance,
    Horde,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceInfo {
    pub id: String,
    pub name: String,
    pub faction: Faction,
    #[serde(default)]
    pub description: String,
    /// Added to base stats at creation.
    pub bonus_stats: Stats,
}

fn race(id: &str, name: &str, faction: Faction, description: &str, bonus: Stats) -> RaceInfo {
    RaceInfo {
        id: id.to_string(),
        name: name.to_string(),
        faction,
        description: description.to_string(),
        bonus_stats: bonus,
    }
}

/// Bonus helper in (strength, agility, intellect, stamina, spirit) order.
fn bonus(str: u32, agi: u32, int: u32, sta: u32, spi: u32) -> Stats {
    Stats::new(str, agi, int, sta, spi)
}

pub fn default_races() -> Vec<RaceInfo> {
    use Faction::*;

    vec![
        race("human", "Human", Alliance, "Adaptable and ambitious.", bonus(0, 0, 1, 0, 2)),
        race("dwarf", "Dwarf", Alliance, "Hardy folk famed for their brews.", bonus(1, 0, 0, 2, 0)),
        race("nightelf", "Night Elf", Alliance, "Ancient guardians of nature.", bonus(0, 2, 1, 0, 0)),
        race("gnome", "Gnome", Alliance, "Brilliant tinkerers and engineers.", bonus(0, 0, 3, 0, 0)),
        race("draenei", "Draenei", Alliance, "Exiles who follow the Light.", bonus(0, 0, 1, 0, 2)),
        race("orc", "Orc", Horde, "Proud warriors bound by honor.", bonus(3, 0, 0, 0, 0)),
        race("troll", "Troll", Horde, "Cunning survivors with uncanny regeneration.", bonus(0, 2, 0, 1, 0)),
        race("undead", "Undead", Horde, "The Forsaken, free of the Lich King.", bonus(0, 0, 2, 0, 1)),
        race("tauren", "Tauren", Horde, "Towering servants of the Earth Mother.", bonus(0, 0, 0, 3, 0)),
        race("bloodelf", "Blood Elf", Horde, "Proud elves with an affinity for magic.", bonus(0, 1, 2, 0, 0)),
    ]
}
