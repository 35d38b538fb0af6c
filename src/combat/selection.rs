//! Strategy-driven skill choice.

use super::types::{BattleStrategy, Skill};
use crate::character::Character;

/// Whether `skill` can be cast right now.
///
/// Heal skills additionally require HP to be below the strategy's threshold.
pub fn is_eligible(skill: &Skill, character: &Character, strategy: &BattleStrategy) -> bool {
    if !skill.is_ready() {
        return false;
    }
    if character.combat_stats.current_mp < skill.mp_cost {
        return false;
    }
    if skill.is_heal() {
        return character.combat_stats.hp_percent() < strategy.use_heal_at;
    }
    true
}

/// Picks the skill to use this round, or `None` for a basic attack.
///
/// The first eligible id in `skill_priority` wins; otherwise the first
/// eligible skill in the character's own order.
pub fn select_skill_index(character: &Character, strategy: &BattleStrategy) -> Option<usize> {
    let eligible = |i: &usize| is_eligible(&character.skills[*i], character, strategy);

    strategy
        .skill_priority
        .iter()
        .find_map(|id| {
            character
                .skills
                .iter()
                .position(|s| &s.id == id)
                .filter(eligible)
        })
        .or_else(|| (0..character.skills.len()).find(eligible))
}

pub fn select_skill<'a>(character: &'a Character, strategy: &BattleStrategy) -> Option<&'a Skill> {
    select_skill_index(character, strategy).map(|i| &character.skills[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::character::create_character;

    fn priest() -> Character {
        // smite, lesser_heal, shadow_word_pain
        create_character(&Catalog::default(), "Anduin", "human", "priest").unwrap()
    }

    #[test]
    fn test_priority_order_wins() {
        let character = priest();
        let strategy = BattleStrategy::with_priority(["shadow_word_pain", "smite"]);
        assert_eq!(
            select_skill(&character, &strategy).unwrap().id,
            "shadow_word_pain"
        );
    }

    #[test]
    fn test_falls_back_to_owned_order() {
        let character = priest();
        let strategy = BattleStrategy::default();
        assert_eq!(select_skill(&character, &strategy).unwrap().id, "smite");
    }

    #[test]
    fn test_skips_skill_on_cooldown() {
        let mut character = priest();
        character.skill_mut("shadow_word_pain").unwrap().start_cooldown();
        let strategy = BattleStrategy::with_priority(["shadow_word_pain", "smite"]);
        assert_eq!(select_skill(&character, &strategy).unwrap().id, "smite");
    }

    #[test]
    fn test_heal_only_below_threshold() {
        let mut character = priest();
        let strategy = BattleStrategy::with_priority(["lesser_heal", "smite"]);
        assert_eq!(select_skill(&character, &strategy).unwrap().id, "smite");

        let max_hp = character.combat_stats.max_hp;
        character.combat_stats.current_hp = max_hp / 4;
        assert_eq!(select_skill(&character, &strategy).unwrap().id, "lesser_heal");
    }

    #[test]
    fn test_no_mp_means_basic_attack() {
        let mut character = priest();
        character.combat_stats.current_mp = 0;
        for skill in &mut character.skills {
            skill.mp_cost = skill.mp_cost.max(1);
        }
        assert!(select_skill(&character, &BattleStrategy::default()).is_none());
    }

    #[test]
    fn test_unknown_priority_ids_are_ignored() {
        let character = priest();
        let strategy = BattleStrategy::with_priority(["fireball"]);
        assert_eq!(select_skill(&character, &strategy).unwrap().id, "smite");
    }
}
