//! Building a level-1 character from race and class reference data.

use super::model::Character;
use super::stats::Stats;
use crate::catalog::Catalog;
use crate::core::constants::{MAX_NAME_LENGTH, PRIMARY_STAT_BONUS};
use crate::core::error::{EngineError, Result};

/// Trims and checks a character name. Returns the trimmed name.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName("name cannot be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(EngineError::InvalidName(format!(
            "name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

/// Starting attributes: base values, class primary bonus, then race bonus.
pub fn starting_stats(catalog: &Catalog, race_id: &str, class_id: &str) -> Result<Stats> {
    let race = catalog.race(race_id)?;
    let class = catalog.class(class_id)?;

    let mut stats = Stats::base();
    stats.increase(class.primary_stat, PRIMARY_STAT_BONUS);
    stats.add(&race.bonus_stats);
    Ok(stats)
}

/// Creates a new level-1 character with full pools and the class's starting
/// skills.
pub fn create_character(
    catalog: &Catalog,
    name: &str,
    race_id: &str,
    class_id: &str,
) -> Result<Character> {
    let name = validate_name(name)?;
    let race = catalog.race(race_id)?;
    let class = catalog.class(class_id)?;
    if !class.allows_race(race_id) {
        return Err(EngineError::ClassUnavailable {
            class: class.id.clone(),
            race: race.id.clone(),
        });
    }

    let stats = starting_stats(catalog, race_id, class_id)?;
    let skills = catalog.skills_by_ids(&class.starting_skills)?;
    let character = Character::new(name, race_id, class_id, stats, skills);

    tracing::info!(
        name = %character.name,
        race = race_id,
        class = class_id,
        "character created"
    );
    Ok(character)
}
