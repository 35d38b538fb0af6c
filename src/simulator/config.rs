//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum ticks (combat rounds) per run before timeout
    pub max_ticks_per_run: u64,

    /// Zone the character starts in
    pub zone_id: String,

    pub race: String,
    pub class: String,

    /// A run completes when the character reaches this level
    pub target_level: u32,

    /// Move to the highest unlocked zone after each level-up
    pub auto_advance_zones: bool,

    /// Revive and keep fighting after a defeat instead of ending the run
    pub revive_on_death: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_ticks_per_run: 100_000,
            zone_id: "elwynn_forest".to_string(),
            race: "human".to_string(),
            class: "warrior".to_string(),
            target_level: 10,
            auto_advance_zones: true,
            revive_on_death: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking early-zone balance
    pub fn quick(target_level: u32) -> Self {
        Self {
            num_runs: 100,
            target_level,
            ..Default::default()
        }
    }

    /// Full climb through every zone
    pub fn full_progression() -> Self {
        Self {
            num_runs: 50,
            target_level: 30,
            max_ticks_per_run: 1_000_000,
            ..Default::default()
        }
    }
}
