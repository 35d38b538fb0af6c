//! Playable classes, their primary stat and starting skills.

use crate::character::stats::StatType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub primary_stat: StatType,
    pub starting_skills: Vec<String>,
    pub available_races: Vec<String>,
}

impl ClassInfo {
    pub fn allows_race(&self, race_id: &str) -> bool {
        self.available_races.iter().any(|r| r == race_id)
    }
}

fn class(
    id: &str,
    name: &str,
    description: &str,
    primary_stat: StatType,
    starting_skills: &[&str],
    available_races: &[&str],
) -> ClassInfo {
    ClassInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        primary_stat,
        starting_skills: starting_skills.iter().map(|s| s.to_string()).collect(),
        available_races: available_races.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn default_classes() -> Vec<ClassInfo> {
    use StatType::*;

    vec![
        class(
            "warrior",
            "Warrior",
            "Master of melee combat and heavy armor.",
            Strength,
            &["heroic_strike", "charge", "battle_shout"],
            &["human", "dwarf", "nightelf", "gnome", "draenei", "orc", "troll", "undead", "tauren"],
        ),
        class(
            "paladin",
            "Paladin",
            "Champion of the Light who can heal, tank and strike.",
            Strength,
            &["crusader_strike", "holy_light", "blessing_of_might"],
            &["human", "dwarf", "draenei", "bloodelf"],
        ),
        class(
            "hunter",
            "Hunter",
            "Ranged physical damage dealer.",
            Agility,
            &["arcane_shot", "serpent_sting", "aspect_of_hawk"],
            &["human", "dwarf", "nightelf", "draenei", "orc", "troll", "tauren", "bloodelf"],
        ),
        class(
            "rogue",
            "Rogue",
            "Stealthy assassin who excels at critical strikes.",
            Agility,
            &["sinister_strike", "backstab", "eviscerate"],
            &["human", "dwarf", "nightelf", "gnome", "orc", "troll", "undead", "bloodelf"],
        ),
        class(
            "priest",
            "Priest",
            "Potent healer who also wields shadow magic.",
            Intellect,
            &["smite", "lesser_heal", "shadow_word_pain"],
            &["human", "dwarf", "nightelf", "draenei", "troll", "undead", "bloodelf"],
        ),
        class(
            "mage",
            "Mage",
            "Wielder of fire, frost and arcane.",
            Intellect,
            &["fireball", "frostbolt", "arcane_missiles"],
            &["human", "gnome", "draenei", "troll", "undead", "bloodelf"],
        ),
        class(
            "warlock",
            "Warlock",
            "Dark caster of curses and demons.",
            Intellect,
            &["shadow_bolt", "corruption", "life_tap"],
            &["human", "gnome", "orc", "undead", "bloodelf"],
        ),
        class(
            "druid",
            "Druid",
            "Guardian of nature with many forms.",
            Intellect,
            &["wrath", "rejuvenation", "moonfire"],
            &["nightelf", "tauren"],
        ),
        class(
            "shaman",
            "Shaman",
            "Elemental caster who heals and strikes.",
            Intellect,
            &["lightning_bolt", "earth_shock", "healing_wave"],
            &["draenei", "orc", "troll", "tauren"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_three_starting_skills() {
        for class in default_classes() {
            assert_eq!(class.starting_skills.len(), 3, "{}", class.id);
        }
    }

    #[test]
    fn test_allows_race() {
        let druid = default_classes()
            .into_iter()
            .find(|c| c.id == "druid")
            .unwrap();
        assert!(druid.allows_race("tauren"));
        assert!(!druid.allows_race("human"));
    }
}
