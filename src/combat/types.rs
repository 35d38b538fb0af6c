use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Physical,
    Magical,
    Heal,
}

/// A skill as owned by one character.
///
/// Catalog entries are templates; characters hold value copies so that
/// `current_cooldown` never leaks between characters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Damage multiplier on attack. Negative values are heals.
    pub damage_multiplier: f64,
    pub mp_cost: u32,
    /// Rounds the skill stays unavailable after use.
    pub cooldown: u32,
    #[serde(default)]
    pub current_cooldown: u32,
    pub skill_type: SkillType,
}

impl Skill {
    pub fn is_heal(&self) -> bool {
        self.skill_type == SkillType::Heal
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    pub fn start_cooldown(&mut self) {
        self.current_cooldown = self.cooldown;
    }

    /// One round passes. Floors at zero.
    pub fn tick_cooldown(&mut self) {
        if self.current_cooldown > self.cooldown {
            tracing::warn!(
                skill = %self.id,
                current = self.current_cooldown,
                cooldown = self.cooldown,
                "cooldown above its maximum, clamping"
            );
            self.current_cooldown = self.cooldown;
        }
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}

/// One row of a monster's loot table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LootItem {
    pub item_id: String,
    pub name: String,
    /// Percent chance, 0-100.
    pub drop_rate: f64,
    /// Inclusive [min, max] quantity.
    pub quantity: (u32, u32),
}

/// Static monster definition from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonsterTemplate {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub exp_reward: u64,
    /// Inclusive [min, max] gold.
    pub gold_reward: (u64, u64),
    #[serde(default)]
    pub loot_table: Vec<LootItem>,
}

impl MonsterTemplate {
    /// Creates a fresh encounter instance at full HP.
    pub fn spawn(&self) -> Monster {
        Monster {
            template_id: self.id.clone(),
            name: self.name.clone(),
            level: self.level,
            max_hp: self.max_hp,
            current_hp: self.max_hp,
            attack: self.attack,
            defense: self.defense,
        }
    }
}

/// A monster instance for a single encounter. Only `current_hp` changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Monster {
    pub template_id: String,
    pub name: String,
    pub level: u32,
    pub max_hp: u32,
    pub current_hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Monster {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Returns the HP actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_sub(amount);
        before - self.current_hp
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetPriority {
    #[default]
    LowestHp,
    HighestHp,
    Random,
}

/// Per-character battle configuration, supplied by the caller each round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BattleStrategy {
    /// Skill ids, most preferred first.
    pub skill_priority: Vec<String>,
    /// Heal skills become eligible when HP% drops below this.
    pub use_heal_at: f64,
    /// Carried for the caller; a session only ever has one target.
    #[serde(default)]
    pub target_priority: TargetPriority,
    /// Carried for the caller; the core has no potion inventory.
    #[serde(default)]
    pub auto_potion_at: f64,
}

impl Default for BattleStrategy {
    fn default() -> Self {
        Self {
            skill_priority: Vec::new(),
            use_heal_at: 50.0,
            target_priority: TargetPriority::default(),
            auto_potion_at: 30.0,
        }
    }
}

impl BattleStrategy {
    pub fn with_priority<I, S>(skill_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skill_priority: skill_ids.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}
