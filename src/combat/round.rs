//! One combat round: the player acts, the monster answers, then upkeep.
//!
//! A round always runs every phase it reaches to completion. The monster
//! phase is skipped when the player's action already killed it; upkeep
//! always runs.

use super::math::{mp_regen, resolve_attack, resolve_heal, roll_dodge};
use super::selection::select_skill_index;
use super::types::{BattleStrategy, Monster};
use crate::character::Character;
use crate::core::log::{LogBook, LogEntry, LogKind};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    PlayerActs,
    MonsterActs,
    RoundEnd,
}

impl RoundPhase {
    /// The phase after this one, or `None` once upkeep is done.
    pub fn next(self, monster_alive: bool) -> Option<RoundPhase> {
        match self {
            RoundPhase::PlayerActs if monster_alive => Some(RoundPhase::MonsterActs),
            RoundPhase::PlayerActs | RoundPhase::MonsterActs => Some(RoundPhase::RoundEnd),
            RoundPhase::RoundEnd => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Both sides still standing.
    Continue,
    /// The monster reached 0 HP.
    Victory,
    /// The character reached 0 HP.
    Defeat,
}

/// What the player did during [`RoundPhase::PlayerActs`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerAction {
    /// `None` for a basic attack.
    pub skill_id: Option<String>,
    pub damage: u32,
    pub healed: u32,
    pub is_crit: bool,
}

/// What the monster did during [`RoundPhase::MonsterActs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonsterAction {
    pub damage: u32,
    pub dodged: bool,
    pub is_crit: bool,
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub logs: Vec<LogEntry>,
    pub outcome: RoundOutcome,
    pub player: PlayerAction,
    /// `None` when the monster died before it could act.
    pub monster: Option<MonsterAction>,
    pub mp_regenerated: u32,
}

impl RoundResult {
    pub fn damage_dealt(&self) -> u32 {
        self.player.damage
    }

    pub fn damage_taken(&self) -> u32 {
        self.monster.map_or(0, |m| m.damage)
    }
}

/// Player phase: cast the selected skill or fall back to a basic attack.
pub fn player_acts(
    character: &mut Character,
    monster: &mut Monster,
    strategy: &BattleStrategy,
    book: &mut LogBook,
    logs: &mut Vec<LogEntry>,
    rng: &mut impl Rng,
) -> PlayerAction {
    let Some(index) = select_skill_index(character, strategy) else {
        let hit = resolve_attack(
            character.combat_stats.attack,
            monster.defense as f64,
            1.0,
            rng,
        );
        let dealt = monster.take_damage(hit.damage);
        book.push(
            logs,
            format!(
                "You attack {} for {} damage{}",
                monster.name,
                hit.damage,
                crit_suffix(hit.is_crit)
            ),
            LogKind::Damage,
        );
        return PlayerAction {
            skill_id: None,
            damage: dealt,
            healed: 0,
            is_crit: hit.is_crit,
        };
    };

    let skill = character.skills[index].clone();
    character.combat_stats.spend_mp(skill.mp_cost);

    let mut action = PlayerAction {
        skill_id: Some(skill.id.clone()),
        ..Default::default()
    };

    if skill.is_heal() {
        let stats = &mut character.combat_stats;
        let amount = resolve_heal(
            skill.damage_multiplier,
            stats.attack,
            stats.current_hp,
            stats.max_hp,
        );
        action.healed = stats.restore_hp(amount);
        book.push(
            logs,
            format!("You cast [{}] and recover {} HP", skill.name, action.healed),
            LogKind::Heal,
        );
    } else {
        let hit = resolve_attack(
            character.combat_stats.attack,
            monster.defense as f64,
            skill.damage_multiplier,
            rng,
        );
        action.damage = monster.take_damage(hit.damage);
        action.is_crit = hit.is_crit;
        book.push(
            logs,
            format!(
                "You use [{}] on {} for {} damage{}",
                skill.name,
                monster.name,
                hit.damage,
                crit_suffix(hit.is_crit)
            ),
            LogKind::Damage,
        );
    }

    character.skills[index].start_cooldown();
    action
}

/// Monster phase: a single attack the character may dodge.
pub fn monster_acts(
    monster: &Monster,
    character: &mut Character,
    book: &mut LogBook,
    logs: &mut Vec<LogEntry>,
    rng: &mut impl Rng,
) -> MonsterAction {
    if roll_dodge(character.stats.agility, rng) {
        book.push(
            logs,
            format!("You dodge {}'s attack!", monster.name),
            LogKind::System,
        );
        return MonsterAction {
            dodged: true,
            ..Default::default()
        };
    }

    let hit = resolve_attack(
        monster.attack as f64,
        character.combat_stats.defense,
        1.0,
        rng,
    );
    let taken = character.combat_stats.take_damage(hit.damage);
    book.push(
        logs,
        format!(
            "{} hits you for {} damage{}",
            monster.name,
            hit.damage,
            crit_suffix(hit.is_crit)
        ),
        LogKind::Damage,
    );
    MonsterAction {
        damage: taken,
        dodged: false,
        is_crit: hit.is_crit,
    }
}

/// Upkeep: tick every cooldown and regenerate MP. Returns MP gained.
pub fn end_round(character: &mut Character) -> u32 {
    for skill in &mut character.skills {
        skill.tick_cooldown();
    }
    character.combat_stats.clamp_pools();
    let regen = mp_regen(character.stats.spirit);
    character.combat_stats.restore_mp(regen)
}

/// Runs one full round and reports the outcome.
pub fn execute_round(
    character: &mut Character,
    monster: &mut Monster,
    strategy: &BattleStrategy,
    book: &mut LogBook,
    rng: &mut impl Rng,
) -> RoundResult {
    let mut logs = Vec::new();
    let mut player = PlayerAction::default();
    let mut monster_action = None;
    let mut mp_regenerated = 0;

    let mut phase = Some(RoundPhase::PlayerActs);
    while let Some(current) = phase {
        match current {
            RoundPhase::PlayerActs => {
                player = player_acts(character, monster, strategy, book, &mut logs, rng);
            }
            RoundPhase::MonsterActs => {
                monster_action = Some(monster_acts(monster, character, book, &mut logs, rng));
            }
            RoundPhase::RoundEnd => {
                mp_regenerated = end_round(character);
            }
        }
        phase = current.next(monster.is_alive());
    }

    let outcome = if !monster.is_alive() {
        RoundOutcome::Victory
    } else if !character.is_alive() {
        RoundOutcome::Defeat
    } else {
        RoundOutcome::Continue
    };

    tracing::debug!(
        character = %character.name,
        monster = %monster.name,
        skill = ?player.skill_id,
        dealt = player.damage,
        taken = monster_action.map_or(0, |m| m.damage),
        ?outcome,
        "round complete"
    );

    RoundResult {
        logs,
        outcome,
        player,
        monster: monster_action,
        mp_regenerated,
    }
}

fn crit_suffix(is_crit: bool) -> &'static str {
    if is_crit {
        " (critical!)"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::character::create_character;
    use crate::core::log::FixedClock;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::sync::Arc;

    fn setup(race: &str, class: &str) -> (Character, Monster, LogBook, ChaCha8Rng) {
        let catalog = Catalog::default();
        let character = create_character(&catalog, "Hero", race, class).unwrap();
        let monster = catalog.spawn_monster("forest_wolf").unwrap();
        let book = LogBook::new(Arc::new(FixedClock(0)));
        (character, monster, book, ChaCha8Rng::seed_from_u64(11))
    }

    #[test]
    fn test_phase_transitions() {
        assert_eq!(RoundPhase::PlayerActs.next(true), Some(RoundPhase::MonsterActs));
        assert_eq!(RoundPhase::PlayerActs.next(false), Some(RoundPhase::RoundEnd));
        assert_eq!(RoundPhase::MonsterActs.next(true), Some(RoundPhase::RoundEnd));
        assert_eq!(RoundPhase::RoundEnd.next(true), None);
    }

    #[test]
    fn test_cooldown_set_on_use_then_ticks_once() {
        let (mut character, mut monster, mut book, mut rng) = setup("human", "mage");
        monster.current_hp = 10_000;
        monster.max_hp = 10_000;
        let strategy = BattleStrategy::with_priority(["fireball"]);

        let mut logs = Vec::new();
        player_acts(&mut character, &mut monster, &strategy, &mut book, &mut logs, &mut rng);
        let fireball = character.skill("fireball").unwrap();
        assert_eq!(fireball.current_cooldown, fireball.cooldown);

        end_round(&mut character);
        let fireball = character.skill("fireball").unwrap();
        assert_eq!(fireball.current_cooldown, fireball.cooldown - 1);
    }

    #[test]
    fn test_skill_costs_mp_and_logs_once() {
        let (mut character, mut monster, mut book, mut rng) = setup("human", "mage");
        monster.current_hp = 10_000;
        let before = character.combat_stats.current_mp;
        let strategy = BattleStrategy::with_priority(["fireball"]);

        let mut logs = Vec::new();
        let action = player_acts(&mut character, &mut monster, &strategy, &mut book, &mut logs, &mut rng);
        assert_eq!(action.skill_id.as_deref(), Some("fireball"));
        assert_eq!(character.combat_stats.current_mp, before - 25);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].kind, LogKind::Damage);
    }

    #[test]
    fn test_basic_attack_when_nothing_is_castable() {
        let (mut character, mut monster, mut book, mut rng) = setup("orc", "warrior");
        character.combat_stats.current_mp = 0;
        let mut logs = Vec::new();
        let action = player_acts(
            &mut character,
            &mut monster,
            &BattleStrategy::default(),
            &mut book,
            &mut logs,
            &mut rng,
        );
        assert!(action.skill_id.is_none());
        assert!(action.damage >= 1);
        assert_eq!(character.combat_stats.current_mp, 0);
        assert!(logs[0].message.starts_with("You attack Forest Wolf"));
    }

    #[test]
    fn test_heal_restores_hp() {
        let (mut character, mut monster, mut book, mut rng) = setup("human", "paladin");
        character.combat_stats.current_hp = 10;
        let strategy = BattleStrategy::with_priority(["holy_light"]);
        let mut logs = Vec::new();
        let action = player_acts(&mut character, &mut monster, &strategy, &mut book, &mut logs, &mut rng);

        // |−2.0| × attack × 0.5 == attack
        let expected = character.combat_stats.attack.floor() as u32;
        assert_eq!(action.healed, expected);
        assert_eq!(character.combat_stats.current_hp, 10 + expected);
        assert_eq!(monster.current_hp, monster.max_hp);
        assert_eq!(logs[0].kind, LogKind::Heal);
    }

    #[test]
    fn test_monster_skips_turn_when_killed() {
        let (mut character, mut monster, mut book, mut rng) = setup("orc", "warrior");
        monster.current_hp = 1;
        let hp_before = character.combat_stats.current_hp;

        let result = execute_round(&mut character, &mut monster, &BattleStrategy::default(), &mut book, &mut rng);
        assert_eq!(result.outcome, RoundOutcome::Victory);
        assert!(result.monster.is_none());
        assert_eq!(result.logs.len(), 1);
        assert_eq!(character.combat_stats.current_hp, hp_before);
        assert_eq!(monster.current_hp, 0);
    }

    #[test]
    fn test_defeat_floors_hp_at_zero() {
        let (mut character, mut monster, mut book, mut rng) = setup("human", "mage");
        character.stats.agility = 0;
        character.combat_stats.current_hp = 1;
        monster.current_hp = 100_000;

        let result = execute_round(&mut character, &mut monster, &BattleStrategy::default(), &mut book, &mut rng);
        assert_eq!(result.outcome, RoundOutcome::Defeat);
        assert_eq!(character.combat_stats.current_hp, 0);
        assert_eq!(result.logs.len(), 2);
    }

    #[test]
    fn test_round_end_regenerates_mp() {
        let (mut character, _, _, _) = setup("human", "priest");
        character.combat_stats.current_mp = 0;
        let spirit = character.stats.spirit;
        let gained = end_round(&mut character);
        assert_eq!(gained, mp_regen(spirit));
        assert_eq!(character.combat_stats.current_mp, gained);
    }

    #[test]
    fn test_log_ids_increase_across_rounds() {
        let (mut character, mut monster, mut book, mut rng) = setup("orc", "warrior");
        monster.current_hp = 100_000;
        character.combat_stats.current_hp = 100_000;
        character.combat_stats.max_hp = 100_000;
        let strategy = BattleStrategy::default();

        let mut ids = Vec::new();
        for _ in 0..5 {
            let result = execute_round(&mut character, &mut monster, &strategy, &mut book, &mut rng);
            ids.extend(result.logs.iter().map(|l| l.id));
        }
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
