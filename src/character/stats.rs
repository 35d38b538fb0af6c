use crate::core::constants::{
    BASE_ATTRIBUTE_VALUE, LEVEL_UP_AGILITY, LEVEL_UP_INTELLECT, LEVEL_UP_SPIRIT,
    LEVEL_UP_STAMINA, LEVEL_UP_STRENGTH,
};
use serde::{Deserialize, Serialize};

pub const NUM_STATS: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatType {
    Strength,
    Agility,
    Intellect,
    Stamina,
    Spirit,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Strength,
            StatType::Agility,
            StatType::Intellect,
            StatType::Stamina,
            StatType::Spirit,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            StatType::Strength => "STR",
            StatType::Agility => "AGI",
            StatType::Intellect => "INT",
            StatType::Stamina => "STA",
            StatType::Spirit => "SPI",
        }
    }
}

/// Base attributes. Only level-up and character creation change them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Stats {
    pub strength: u32,
    pub agility: u32,
    pub intellect: u32,
    pub stamina: u32,
    pub spirit: u32,
}

impl Stats {
    pub fn new(strength: u32, agility: u32, intellect: u32, stamina: u32, spirit: u32) -> Self {
        Self {
            strength,
            agility,
            intellect,
            stamina,
            spirit,
        }
    }

    /// Every stat at the base creation value.
    pub fn base() -> Self {
        let v = BASE_ATTRIBUTE_VALUE;
        Self::new(v, v, v, v, v)
    }

    pub fn get(&self, stat: StatType) -> u32 {
        match stat {
            StatType::Strength => self.strength,
            StatType::Agility => self.agility,
            StatType::Intellect => self.intellect,
            StatType::Stamina => self.stamina,
            StatType::Spirit => self.spirit,
        }
    }

    pub fn set(&mut self, stat: StatType, value: u32) {
        match stat {
            StatType::Strength => self.strength = value,
            StatType::Agility => self.agility = value,
            StatType::Intellect => self.intellect = value,
            StatType::Stamina => self.stamina = value,
            StatType::Spirit => self.spirit = value,
        }
    }

    pub fn increase(&mut self, stat: StatType, amount: u32) {
        self.set(stat, self.get(stat).saturating_add(amount));
    }

    /// Adds another Stats' values to this one (race bonuses).
    pub fn add(&mut self, other: &Stats) {
        for stat in StatType::all() {
            self.increase(stat, other.get(stat));
        }
    }

    /// Fixed growth applied once per level gained.
    pub fn apply_level_growth(&mut self) {
        self.increase(StatType::Strength, LEVEL_UP_STRENGTH);
        self.increase(StatType::Agility, LEVEL_UP_AGILITY);
        self.increase(StatType::Intellect, LEVEL_UP_INTELLECT);
        self.increase(StatType::Stamina, LEVEL_UP_STAMINA);
        self.increase(StatType::Spirit, LEVEL_UP_SPIRIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stats() {
        let stats = Stats::base();
        for stat in StatType::all() {
            assert_eq!(stats.get(stat), 10);
        }
    }

    #[test]
    fn test_get_set() {
        let mut stats = Stats::base();
        stats.set(StatType::Strength, 16);
        assert_eq!(stats.get(StatType::Strength), 16);
        assert_eq!(stats.get(StatType::Agility), 10);
    }

    #[test]
    fn test_add_combines_stats() {
        let mut base = Stats::base();
        base.add(&Stats::new(0, 2, 1, 0, 0));
        assert_eq!(base.agility, 12);
        assert_eq!(base.intellect, 11);
        assert_eq!(base.strength, 10);
    }

    #[test]
    fn test_level_growth() {
        let mut stats = Stats::new(15, 10, 5, 12, 8);
        stats.apply_level_growth();
        assert_eq!(stats, Stats::new(17, 12, 7, 14, 9));
    }

    #[test]
    fn test_increase_saturates_at_max() {
        let mut stats = Stats::base();
        stats.set(StatType::Spirit, u32::MAX);
        stats.increase(StatType::Spirit, 1);
        assert_eq!(stats.spirit, u32::MAX);
    }

    #[test]
    fn test_stat_type_abbrev() {
        assert_eq!(StatType::Strength.abbrev(), "STR");
        assert_eq!(StatType::Agility.abbrev(), "AGI");
        assert_eq!(StatType::Intellect.abbrev(), "INT");
        assert_eq!(StatType::Stamina.abbrev(), "STA");
        assert_eq!(StatType::Spirit.abbrev(), "SPI");
    }
}
