//! Default monster templates.

use crate::combat::types::{LootItem, MonsterTemplate};

fn loot(item_id: &str, name: &str, drop_rate: f64, min: u32, max: u32) -> LootItem {
    LootItem {
        item_id: item_id.to_string(),
        name: name.to_string(),
        drop_rate,
        quantity: (min, max),
    }
}

#[allow(clippy::too_many_arguments)]
fn monster(
    id: &str,
    name: &str,
    level: u32,
    max_hp: u32,
    attack: u32,
    defense: u32,
    exp_reward: u64,
    gold_reward: (u64, u64),
    loot_table: Vec<LootItem>,
) -> MonsterTemplate {
    MonsterTemplate {
        id: id.to_string(),
        name: name.to_string(),
        level,
        max_hp,
        attack,
        defense,
        exp_reward,
        gold_reward,
        loot_table,
    }
}

/// Returns every monster template, grouped by zone.
pub fn default_monsters() -> Vec<MonsterTemplate> {
    vec![
        // Elwynn Forest (1-10)
        monster(
            "forest_wolf", "Forest Wolf", 2, 45, 8, 2, 25, (2, 5),
            vec![
                loot("wolf_pelt", "Wolf Pelt", 60.0, 1, 1),
                loot("wolf_meat", "Wolf Meat", 40.0, 1, 2),
            ],
        ),
        monster(
            "young_boar", "Young Boar", 1, 35, 6, 1, 18, (1, 3),
            vec![loot("boar_meat", "Boar Meat", 70.0, 1, 2)],
        ),
        monster(
            "forest_spider", "Forest Spider", 3, 55, 10, 3, 32, (3, 7),
            vec![
                loot("spider_silk", "Spider Silk", 50.0, 1, 3),
                loot("spider_venom", "Spider Venom", 25.0, 1, 1),
            ],
        ),
        monster(
            "defias_thug", "Defias Thug", 5, 85, 15, 5, 55, (8, 15),
            vec![
                loot("linen_cloth", "Linen Cloth", 45.0, 1, 2),
                loot("red_bandana", "Red Bandana", 20.0, 1, 1),
            ],
        ),
        monster(
            "murloc_scout", "Murloc Scout", 4, 65, 12, 4, 42, (5, 10),
            vec![
                loot("murloc_fin", "Murloc Fin", 55.0, 1, 2),
                loot("clam_meat", "Clam Meat", 30.0, 1, 1),
            ],
        ),
        // Westfall (10-20)
        monster(
            "harvest_golem", "Harvest Golem", 12, 180, 28, 12, 120, (15, 25),
            vec![
                loot("golem_core", "Golem Core", 30.0, 1, 1),
                loot("iron_scrap", "Iron Scrap", 50.0, 1, 3),
            ],
        ),
        monster(
            "defias_pillager", "Defias Pillager", 14, 220, 35, 14, 150, (20, 35),
            vec![
                loot("wool_cloth", "Wool Cloth", 50.0, 1, 2),
                loot("defias_dagger", "Defias Dagger", 15.0, 1, 1),
            ],
        ),
        monster(
            "coyote", "Coyote", 11, 160, 25, 10, 100, (12, 20),
            vec![loot("coyote_fang", "Coyote Fang", 45.0, 1, 2)],
        ),
        // Duskwood (20-30)
        monster(
            "skeletal_warrior", "Skeletal Warrior", 22, 380, 55, 25, 280, (30, 50),
            vec![
                loot("bone_fragment", "Bone Fragment", 60.0, 1, 3),
                loot("tarnished_sword", "Tarnished Sword", 20.0, 1, 1),
            ],
        ),
        monster(
            "dire_wolf", "Dire Wolf", 24, 420, 62, 28, 320, (35, 55),
            vec![
                loot("dire_wolf_fang", "Dire Wolf Fang", 40.0, 1, 1),
                loot("thick_leather", "Thick Leather", 35.0, 1, 2),
            ],
        ),
        monster(
            "worgen", "Worgen", 26, 500, 72, 32, 380, (45, 70),
            vec![
                loot("worgen_claw", "Worgen Claw", 35.0, 1, 1),
                loot("shadow_gem", "Shadow Gem", 15.0, 1, 1),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loot_tables_are_well_formed() {
        for template in default_monsters() {
            let (gold_min, gold_max) = template.gold_reward;
            assert!(gold_min <= gold_max, "{} gold range", template.id);
            for item in &template.loot_table {
                assert!((0.0..=100.0).contains(&item.drop_rate), "{}", item.item_id);
                assert!(item.quantity.0 <= item.quantity.1, "{}", item.item_id);
            }
        }
    }

    #[test]
    fn test_monster_stats_are_positive() {
        for template in default_monsters() {
            assert!(template.max_hp > 0);
            assert!(template.attack > 0);
            assert!(template.exp_reward > 0);
        }
    }
}
