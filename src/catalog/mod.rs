//! Read-only reference data: skills, monsters, zones, races and classes.
//!
//! A [`Catalog`] is built once at startup and shared (usually behind an
//! `Arc`) by every session. Nothing in it is mutated after construction;
//! characters take value copies of the skills they own.

mod classes;
mod monsters;
mod races;
mod skills;
mod zones;

pub use classes::{default_classes, ClassInfo};
pub use monsters::default_monsters;
pub use races::{default_races, Faction, RaceInfo};
pub use skills::default_skills;
pub use zones::{default_zones, Zone};

use crate::combat::types::{Monster, MonsterTemplate, Skill};
use crate::core::error::{EngineError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Serializable form of the catalog, e.g. for loading from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub monsters: Vec<MonsterTemplate>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub races: Vec<RaceInfo>,
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
}

impl CatalogData {
    /// The built-in game data.
    pub fn standard() -> Self {
        Self {
            skills: default_skills(),
            monsters: default_monsters(),
            zones: default_zones(),
            races: default_races(),
            classes: default_classes(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            data: CatalogData::standard(),
        }
    }
}

impl Catalog {
    /// Builds a catalog, checking that every cross reference resolves.
    pub fn new(data: CatalogData) -> Result<Self> {
        let catalog = Self { data };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    fn validate(&self) -> Result<()> {
        for skill in &self.data.skills {
            let heals = skill.damage_multiplier < 0.0;
            let attacks = skill.damage_multiplier >= 0.0;
            if (skill.is_heal() && !heals) || (!skill.is_heal() && !attacks) {
                return Err(EngineError::InvalidCatalog(format!(
                    "skill {} is {:?} but has multiplier {}",
                    skill.id, skill.skill_type, skill.damage_multiplier
                )));
            }
        }
        for monster in &self.data.monsters {
            for loot in &monster.loot_table {
                if !(0.0..=100.0).contains(&loot.drop_rate) {
                    return Err(EngineError::InvalidCatalog(format!(
                        "{} drops {} at {}%, outside 0-100",
                        monster.id, loot.item_id, loot.drop_rate
                    )));
                }
            }
        }
        for zone in &self.data.zones {
            for monster_id in &zone.monsters {
                self.monster(monster_id)?;
            }
        }
        for class in &self.data.classes {
            for skill_id in &class.starting_skills {
                self.skill(skill_id)?;
            }
            for race_id in &class.available_races {
                self.race(race_id)?;
            }
        }
        Ok(())
    }

    // === Skills ===

    pub fn skill(&self, id: &str) -> Result<&Skill> {
        self.data
            .skills
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::UnknownSkill(id.to_string()))
    }

    /// Fresh per-character copies of the given skills, in the given order.
    pub fn skills_by_ids(&self, ids: &[String]) -> Result<Vec<Skill>> {
        ids.iter()
            .map(|id| {
                let mut skill = self.skill(id)?.clone();
                skill.current_cooldown = 0;
                Ok(skill)
            })
            .collect()
    }

    pub fn skills(&self) -> &[Skill] {
        &self.data.skills
    }

    // === Monsters ===

    pub fn monster(&self, id: &str) -> Result<&MonsterTemplate> {
        self.data
            .monsters
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| EngineError::UnknownMonster(id.to_string()))
    }

    pub fn spawn_monster(&self, id: &str) -> Result<Monster> {
        Ok(self.monster(id)?.spawn())
    }

    pub fn monsters(&self) -> &[MonsterTemplate] {
        &self.data.monsters
    }

    // === Zones ===

    pub fn zone(&self, id: &str) -> Result<&Zone> {
        self.data
            .zones
            .iter()
            .find(|z| z.id == id)
            .ok_or_else(|| EngineError::UnknownZone(id.to_string()))
    }

    pub fn zones(&self) -> &[Zone] {
        &self.data.zones
    }

    /// The zone new characters start in.
    pub fn starting_zone(&self) -> Option<&Zone> {
        self.data.zones.iter().min_by_key(|z| z.unlock_level)
    }

    pub fn unlocked_zones(&self, level: u32) -> Vec<&Zone> {
        self.data
            .zones
            .iter()
            .filter(|z| z.is_unlocked_at(level))
            .collect()
    }

    /// Draws a random monster from the zone's encounter list.
    pub fn select_encounter(&self, zone_id: &str, rng: &mut impl Rng) -> Result<Monster> {
        let zone = self.zone(zone_id)?;
        if zone.monsters.is_empty() {
            return Err(EngineError::EmptyZone(zone_id.to_string()));
        }
        let index = rng.gen_range(0..zone.monsters.len());
        self.spawn_monster(&zone.monsters[index])
    }

    // === Races & classes ===

    pub fn race(&self, id: &str) -> Result<&RaceInfo> {
        self.data
            .races
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::UnknownRace(id.to_string()))
    }

    pub fn races_by_faction(&self, faction: Faction) -> Vec<&RaceInfo> {
        self.data
            .races
            .iter()
            .filter(|r| r.faction == faction)
            .collect()
    }

    pub fn class(&self, id: &str) -> Result<&ClassInfo> {
        self.data
            .classes
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| EngineError::UnknownClass(id.to_string()))
    }

    pub fn classes_for_race(&self, race_id: &str) -> Vec<&ClassInfo> {
        self.data
            .classes
            .iter()
            .filter(|c| c.allows_race(race_id))
            .collect()
    }
}
