//! Battle flow integration tests
//!
//! Drives characters through rounds, victories and level-ups using only the
//! public API, the same way a session host would.

use autobattle::catalog::{Catalog, CatalogData};
use autobattle::character::{create_character, derive_combat_stats, Stats};
use autobattle::combat::{execute_round, BattleStrategy, LootItem, MonsterTemplate, RoundOutcome};
use autobattle::core::{FixedClock, LogBook, LogKind};
use autobattle::progression::apply_victory;
use autobattle::session::BattleSession;
use autobattle::EngineError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

fn book() -> LogBook {
    LogBook::new(Arc::new(FixedClock(1_700_000_000_000)))
}

// ============================================================================
// Round → victory → rewards
// ============================================================================

#[test]
fn test_fight_to_the_end_then_collect_rewards() {
    let catalog = Catalog::default();
    let mut character = create_character(&catalog, "Varian", "human", "warrior").unwrap();
    let template = catalog.monster("young_boar").unwrap();
    let mut monster = template.spawn();
    let strategy = BattleStrategy::with_priority(["heroic_strike"]);
    let mut book = book();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    let mut outcome = RoundOutcome::Continue;
    let mut rounds = 0;
    while outcome == RoundOutcome::Continue && rounds < 100 {
        outcome = execute_round(&mut character, &mut monster, &strategy, &mut book, &mut rng).outcome;
        rounds += 1;
    }
    assert_eq!(outcome, RoundOutcome::Victory);
    assert_eq!(monster.current_hp, 0);

    let victory = apply_victory(&mut character, template, &mut book, &mut rng);
    assert_eq!(character.exp, 18);
    assert!((1..=3).contains(&character.gold));
    assert_eq!(victory.logs[0].kind, LogKind::Exp);
    assert_eq!(victory.logs[1].kind, LogKind::Loot);
    assert!(victory.logs.iter().all(|l| l.timestamp == 1_700_000_000_000));
}

#[test]
fn test_example_character_from_stat_sheet() {
    let stats = Stats::new(15, 10, 5, 12, 8);
    let combat = derive_combat_stats(&stats);
    assert_eq!(combat.attack, 45.0);
    assert_eq!(combat.defense, 14.0);
    assert_eq!(combat.max_hp, 220);
}

#[test]
fn test_guaranteed_drop_logs_exactly_one_loot_entry() {
    let catalog = Catalog::default();
    let mut character = create_character(&catalog, "Loot", "dwarf", "hunter").unwrap();
    let template = MonsterTemplate {
        id: "chest".to_string(),
        name: "Treasure Chest".to_string(),
        level: 1,
        max_hp: 1,
        attack: 1,
        defense: 0,
        exp_reward: 1,
        gold_reward: (0, 0),
        loot_table: vec![LootItem {
            item_id: "coin_purse".to_string(),
            name: "Coin Purse".to_string(),
            drop_rate: 100.0,
            quantity: (1, 1),
        }],
    };

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for _ in 0..20 {
        let victory = apply_victory(&mut character, &template, &mut book(), &mut rng);
        let drops: Vec<_> = victory
            .logs
            .iter()
            .filter(|l| l.message.starts_with("Loot:"))
            .collect();
        assert_eq!(drops.len(), 1);
        assert_eq!(drops[0].message, "Loot: [Coin Purse] x1");
    }
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn test_session_levels_up_over_many_ticks() {
    let catalog = Arc::new(Catalog::default());
    let character = create_character(&catalog, "Grinder", "orc", "warrior").unwrap();
    let mut session = BattleSession::new(
        Arc::clone(&catalog),
        character,
        "elwynn_forest",
        BattleStrategy::default(),
    )
    .unwrap()
    .with_seed(5);
    session.start().unwrap();

    let mut level_logs = 0;
    for _ in 0..2_000 {
        let tick = match session.tick() {
            Ok(tick) => tick,
            Err(EngineError::CharacterDefeated(_)) => {
                session.revive();
                session.start().unwrap();
                continue;
            }
            Err(other) => panic!("unexpected error: {other}"),
        };
        level_logs += tick.logs.iter().filter(|l| l.kind == LogKind::LevelUp).count();
        if session.character().level >= 4 {
            break;
        }
    }

    let character = session.character();
    assert!(character.level >= 4);
    assert_eq!(level_logs as u32, character.level - 1);
    // 10 base + 5 primary + 3 orc, then +2 per level
    assert_eq!(character.stats.strength, 18 + 2 * (character.level - 1));
    assert!(session.statistics().total_kills >= 5);
    assert!(session.statistics().total_exp >= 100 + 150 + 225);
}

#[test]
fn test_sessions_do_not_share_cooldowns() {
    let catalog = Arc::new(Catalog::default());
    let a = create_character(&catalog, "Alpha", "human", "warrior").unwrap();
    let b = create_character(&catalog, "Beta", "human", "warrior").unwrap();
    let strategy = BattleStrategy::with_priority(["charge"]);

    let mut first = BattleSession::new(Arc::clone(&catalog), a, "elwynn_forest", strategy.clone())
        .unwrap()
        .with_seed(1);
    let second = BattleSession::new(Arc::clone(&catalog), b, "elwynn_forest", strategy)
        .unwrap()
        .with_seed(1);

    first.start().unwrap();
    first.tick().unwrap();
    // charge: cooldown 3, set on use then ticked once at round end
    assert_eq!(first.character().skill("charge").unwrap().current_cooldown, 2);
    assert_eq!(second.character().skill("charge").unwrap().current_cooldown, 0);
    assert_eq!(catalog.skill("charge").unwrap().current_cooldown, 0);
}

#[test]
fn test_json_catalog_drives_a_session() {
    let mut data = CatalogData::standard();
    data.zones.retain(|z| z.id == "elwynn_forest");
    data.zones[0].monsters = vec!["young_boar".to_string()];
    let json = serde_json::to_string(&data).unwrap();

    let catalog = Arc::new(Catalog::from_json(&json).unwrap());
    let character = create_character(&catalog, "Json", "troll", "hunter").unwrap();
    let mut session =
        BattleSession::new(Arc::clone(&catalog), character, "elwynn_forest", BattleStrategy::default())
            .unwrap()
            .with_seed(9);
    session.start().unwrap();
    let tick = session.tick().unwrap();
    assert!(tick.logs[0].message.contains("Young Boar"));
    assert!(matches!(
        session.change_zone("westfall"),
        Err(EngineError::UnknownZone(_))
    ));
}

#[test]
fn test_malformed_catalog_json() {
    assert!(matches!(
        Catalog::from_json("{ not json"),
        Err(EngineError::CatalogParse(_))
    ));
}
