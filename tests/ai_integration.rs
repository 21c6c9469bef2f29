//! AI strategy integration tests
//!
//! Small hand-built maps exercise each AI pass through the tick processor:
//! - Expeditions into neighboring wilderness on think ticks only
//! - Attacks on the weakest hostile settlement with a committed share
//! - Founding held wilderness when the treasury is deep enough
//! - Recruitment toward the garrison cap

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use terra_strategica::ai::{expansion::find_expansion_targets, run_faction_turn};
use terra_strategica::core::config::GameConfig;
use terra_strategica::core::types::{Faction, RegionId, Terrain};
use terra_strategica::simulation::tick;
use terra_strategica::world::{GameState, Region, Resources};

fn town(id: u32, owner: Faction, garrison: f64, neighbors: &[u32]) -> Region {
    Region::new(RegionId(id), DVec2::new(id as f64 * 50.0, 0.0), Terrain::Plains)
        .with_owner(owner)
        .as_settlement()
        .with_population(300.0, 2000.0)
        .with_garrison(garrison)
        .with_neighbors(neighbors.iter().map(|&n| RegionId(n)).collect())
}

fn wild(id: u32, owner: Faction, terrain: Terrain, neighbors: &[u32]) -> Region {
    Region::new(RegionId(id), DVec2::new(id as f64 * 50.0, 40.0), terrain)
        .with_owner(owner)
        .with_garrison(if owner == Faction::Barbarian { 10.0 } else { 0.0 })
        .with_population(20.0, 400.0)
        .with_neighbors(neighbors.iter().map(|&n| RegionId(n)).collect())
}

/// Default rules with random upgrades switched off
fn state(regions: Vec<Region>) -> GameState {
    let mut config = GameConfig::default();
    config.ai.upgrade_chance = 0.0;
    GameState::new(regions, Arc::new(config), ChaCha8Rng::seed_from_u64(77))
}

fn rival_movements(state: &GameState) -> Vec<(RegionId, f64)> {
    state
        .movements
        .iter()
        .filter(|m| m.owner == Faction::RivalEmpire)
        .map(|m| (m.target, m.amount))
        .collect()
}

#[test]
fn test_expedition_on_think_ticks_only() {
    let game = state(vec![
        town(0, Faction::RivalEmpire, 100.0, &[1, 2]),
        wild(1, Faction::Barbarian, Terrain::Plains, &[0]),
        town(2, Faction::Player, 10.0, &[0]),
    ]);

    let after_first = tick(&game);
    assert_eq!(rival_movements(&after_first), vec![(RegionId(1), 30.0)]);
    // Recruited 20, then sent 30
    assert_eq!(after_first.regions[0].garrison, 90.0);

    let mut current = after_first;
    for _ in 1..20 {
        current = tick(&current);
        assert_eq!(rival_movements(&current).len(), 1);
    }
    let think_again = tick(&current);
    assert_eq!(think_again.tick_count, 21);
    assert!(rival_movements(&think_again).len() >= 2);
}

#[test]
fn test_attack_targets_weakest_hostile() {
    let mut game = state(vec![
        town(0, Faction::RivalEmpire, 130.0, &[1, 2]),
        town(1, Faction::Player, 40.0, &[0]),
        town(2, Faction::Independent, 20.0, &[0]),
    ]);

    let report = run_faction_turn(&mut game, Faction::RivalEmpire);
    assert_eq!(report.attacks, 1);
    assert_eq!(report.expeditions, 0);

    let moves = rival_movements(&game);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].0, RegionId(2));
    assert!((moves[0].1 - 91.0).abs() < 1e-9);
    assert!((game.regions[0].garrison - 39.0).abs() < 1e-9);
}

#[test]
fn test_no_attack_without_advantage() {
    let mut game = state(vec![
        town(0, Faction::RivalEmpire, 130.0, &[1]),
        town(1, Faction::Player, 100.0, &[0]),
    ]);

    let report = run_faction_turn(&mut game, Faction::RivalEmpire);
    assert_eq!(report.attacks, 0);
    assert!(game.movements.is_empty());
}

#[test]
fn test_water_and_barbarian_towns_are_ignored() {
    let regions = vec![
        town(0, Faction::RivalEmpire, 130.0, &[1, 2]),
        wild(1, Faction::Independent, Terrain::Water, &[0]),
        town(2, Faction::Barbarian, 5.0, &[0]),
    ];
    let targets = find_expansion_targets(&regions[0], Faction::RivalEmpire, &regions);
    assert!(targets.wilderness.is_empty());
    assert!(targets.hostile.is_empty());
}

#[test]
fn test_founds_held_wilderness_when_rich() {
    let mut game = state(vec![
        town(0, Faction::RivalEmpire, 130.0, &[1]),
        wild(1, Faction::RivalEmpire, Terrain::Forest, &[0]),
        town(2, Faction::Player, 10.0, &[]),
    ]);
    game.stockpiles[Faction::RivalEmpire] = Resources {
        money: 2000.0,
        industry: 2000.0,
        manpower: 2000.0,
        ..Resources::ZERO
    };

    let report = run_faction_turn(&mut game, Faction::RivalEmpire);
    assert_eq!(report.founded, 1);
    assert_eq!(report.recruited, 1);

    let founded = &game.regions[1];
    assert!(founded.is_settlement());
    assert_eq!(founded.population, 500.0);
    assert_eq!(founded.carrying_capacity, 1200.0);
    // Founding militia, then one recruit batch in the same turn
    assert_eq!(founded.garrison, 70.0);

    let treasury = game.stockpiles[Faction::RivalEmpire];
    assert_eq!(treasury.money, 2000.0 - 500.0 - 20.0);
}

#[test]
fn test_poor_faction_does_not_found() {
    let mut game = state(vec![
        town(0, Faction::RivalEmpire, 130.0, &[1]),
        wild(1, Faction::RivalEmpire, Terrain::Forest, &[0]),
    ]);

    let report = run_faction_turn(&mut game, Faction::RivalEmpire);
    assert_eq!(report.founded, 0);
    assert!(!game.regions[1].is_settlement());
}

#[test]
fn test_recruits_toward_cap() {
    let mut game = state(vec![town(0, Faction::RivalEmpire, 30.0, &[])]);
    let report = run_faction_turn(&mut game, Faction::RivalEmpire);

    assert_eq!(report.recruited, 1);
    assert_eq!(game.regions[0].garrison, 50.0);
}

#[test]
fn test_ai_never_touches_player_holdings() {
    let game = state(vec![
        town(0, Faction::RivalEmpire, 30.0, &[1]),
        town(1, Faction::Player, 30.0, &[0]),
    ]);
    let next = tick(&game);
    assert_eq!(next.regions[1].garrison, 30.0);
    assert_eq!(next.regions[1].level, 1);
}
