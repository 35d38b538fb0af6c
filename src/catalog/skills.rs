//! Default skill definitions.

use crate::combat::types::{Skill, SkillType};

fn skill(
    id: &str,
    name: &str,
    description: &str,
    damage_multiplier: f64,
    mp_cost: u32,
    cooldown: u32,
    skill_type: SkillType,
) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        damage_multiplier,
        mp_cost,
        cooldown,
        current_cooldown: 0,
        skill_type,
    }
}

/// Returns every skill in the game, grouped by class.
pub fn default_skills() -> Vec<Skill> {
    use SkillType::*;

    vec![
        // Warrior
        skill("heroic_strike", "Heroic Strike", "A strong weapon attack.", 1.5, 15, 0, Physical),
        skill("charge", "Charge", "Charge an enemy, dealing damage.", 1.2, 10, 3, Physical),
        skill("battle_shout", "Battle Shout", "Raises attack power.", 0.0, 20, 5, Physical),
        // Paladin
        skill("crusader_strike", "Crusader Strike", "Strike with the power of the Light.", 1.4, 20, 1, Physical),
        skill("holy_light", "Holy Light", "Heals yourself.", -2.0, 30, 2, Heal),
        skill("blessing_of_might", "Blessing of Might", "Increases attack power.", 0.0, 25, 10, Physical),
        // Hunter
        skill("arcane_shot", "Arcane Shot", "Fires an arcane arrow.", 1.3, 15, 0, Magical),
        skill("serpent_sting", "Serpent Sting", "Poisons the target.", 0.8, 20, 2, Physical),
        skill("aspect_of_hawk", "Aspect of the Hawk", "Increases attack power.", 0.0, 10, 10, Physical),
        // Rogue
        skill("sinister_strike", "Sinister Strike", "A quick weapon attack.", 1.3, 10, 0, Physical),
        skill("backstab", "Backstab", "A deadly strike from behind.", 2.0, 25, 2, Physical),
        skill("eviscerate", "Eviscerate", "Finishing move dealing heavy damage.", 2.5, 35, 3, Physical),
        // Priest
        skill("smite", "Smite", "Smites an enemy with holy light.", 1.2, 20, 0, Magical),
        skill("lesser_heal", "Lesser Heal", "Restores health.", -1.5, 25, 1, Heal),
        skill("shadow_word_pain", "Shadow Word: Pain", "Deals shadow damage.", 1.4, 25, 1, Magical),
        // Mage
        skill("fireball", "Fireball", "Hurls a blazing fireball.", 1.6, 25, 1, Magical),
        skill("frostbolt", "Frostbolt", "Launches a bolt of frost.", 1.3, 20, 0, Magical),
        skill("arcane_missiles", "Arcane Missiles", "Fires a volley of arcane missiles.", 1.8, 30, 2, Magical),
        // Warlock
        skill("shadow_bolt", "Shadow Bolt", "Sends a shadowy bolt at the enemy.", 1.5, 20, 0, Magical),
        skill("corruption", "Corruption", "Corrupts the target with shadow.", 1.0, 25, 2, Magical),
        skill("life_tap", "Life Tap", "Converts health into mana.", 0.0, 0, 1, Magical),
        // Druid
        skill("wrath", "Wrath", "Calls on nature to strike the enemy.", 1.4, 20, 0, Magical),
        skill("rejuvenation", "Rejuvenation", "Restores health over time.", -1.2, 20, 1, Heal),
        skill("moonfire", "Moonfire", "Burns the enemy with moonlight.", 1.2, 15, 0, Magical),
        // Shaman
        skill("lightning_bolt", "Lightning Bolt", "Strikes the enemy with lightning.", 1.5, 22, 0, Magical),
        skill("earth_shock", "Earth Shock", "Shocks the enemy with earth.", 1.3, 18, 1, Magical),
        skill("healing_wave", "Healing Wave", "Heals with the power of water.", -1.8, 28, 2, Heal),
    ]
}
