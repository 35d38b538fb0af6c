// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 1500;

// Derived stats: pools
pub const BASE_HP: u32 = 100;
pub const HP_PER_STAMINA: u32 = 10;
pub const BASE_MP: u32 = 50;
pub const MP_PER_INTELLECT: u32 = 5;

// Derived stats: attack = BASE + STR×a + AGI×b
pub const BASE_ATTACK: f64 = 10.0;
pub const ATTACK_PER_STRENGTH: f64 = 2.0;
pub const ATTACK_PER_AGILITY: f64 = 0.5;

// Derived stats: defense = BASE + STA×a + AGI×b
pub const BASE_DEFENSE: f64 = 5.0;
pub const DEFENSE_PER_STAMINA: f64 = 0.5;
pub const DEFENSE_PER_AGILITY: f64 = 0.3;

// Derived stats: percentages
pub const BASE_CRIT_RATE: f64 = 5.0;
pub const CRIT_RATE_PER_AGILITY: f64 = 0.3;
pub const MAX_CRIT_RATE: f64 = 50.0;
pub const DODGE_RATE_PER_AGILITY: f64 = 0.5;
pub const MAX_DODGE_RATE: f64 = 30.0;

// Damage resolution
pub const DEFENSE_MITIGATION: f64 = 0.5;
pub const DAMAGE_VARIANCE: f64 = 0.2;
pub const CRIT_CHANCE_PERCENT: f64 = 15.0;
pub const CRIT_MULTIPLIER: f64 = 2.0;
pub const MIN_DAMAGE: u32 = 1;
pub const HEAL_ATTACK_FACTOR: f64 = 0.5;

// Resource regeneration
pub const MP_REGEN_BASE: f64 = 2.0;
pub const MP_REGEN_PER_SPIRIT: f64 = 0.3;
pub const REST_HP_FRACTION: f64 = 0.2;
pub const REST_MP_FRACTION: f64 = 0.3;

// XP and leveling: exp_to_next = floor(BASE × EXPONENT^(level-1))
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;

// Per-level growth (STR, AGI, INT, STA, SPI)
pub const LEVEL_UP_STRENGTH: u32 = 2;
pub const LEVEL_UP_AGILITY: u32 = 2;
pub const LEVEL_UP_INTELLECT: u32 = 2;
pub const LEVEL_UP_STAMINA: u32 = 2;
pub const LEVEL_UP_SPIRIT: u32 = 1;

// Character creation
pub const BASE_ATTRIBUTE_VALUE: u32 = 10;
pub const PRIMARY_STAT_BONUS: u32 = 5;
pub const MAX_NAME_LENGTH: usize = 16;
pub const STARTING_LEVEL: u32 = 1;
