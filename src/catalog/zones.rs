//! Zone definitions.

use serde::{Deserialize, Serialize};

/// A hunting area. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Suggested [min, max] character level.
    pub level_range: (u32, u32),
    /// Monster template ids eligible for random encounters.
    pub monsters: Vec<String>,
    pub unlock_level: u32,
}

impl Zone {
    pub fn is_unlocked_at(&self, level: u32) -> bool {
        self.unlock_level <= level
    }
}

fn zone(
    id: &str,
    name: &str,
    description: &str,
    level_range: (u32, u32),
    monsters: &[&str],
    unlock_level: u32,
) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        level_range,
        monsters: monsters.iter().map(|m| m.to_string()).collect(),
        unlock_level,
    }
}

/// Returns all zones, in unlock order.
pub fn default_zones() -> Vec<Zone> {
    vec![
        zone(
            "elwynn_forest",
            "Elwynn Forest",
            "A peaceful forest near Stormwind, ideal for fledgling adventurers.",
            (1, 10),
            &[
                "young_boar",
                "forest_wolf",
                "forest_spider",
                "murloc_scout",
                "defias_thug",
            ],
            1,
        ),
        zone(
            "westfall",
            "Westfall",
            "Once-fertile farmland, now overrun by the Defias Brotherhood.",
            (10, 20),
            &["coyote", "harvest_golem", "defias_pillager"],
            10,
        ),
        zone(
            "duskwood",
            "Duskwood",
            "A cursed land under eternal night, haunted by undead and worgen.",
            (20, 30),
            &["skeletal_warrior", "dire_wolf", "worgen"],
            20,
        ),
    ]
}
