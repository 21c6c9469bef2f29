//! GameState - the aggregate snapshot handed from one tick to the next

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::campaign::movement::{MovementIds, TroopMovement};
use crate::core::config::GameConfig;
use crate::core::types::{Faction, FactionTable, GameStatus, MovementId, RegionId, Tick};
use crate::world::region::Region;
use crate::world::resources::{Rates, Resources, Stockpiles};

/// Derived global statistics, recomputed after every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_population: f64,
    pub settlement_count: usize,
    pub year: u64,
}

/// Complete simulation state
///
/// Produced fresh by every tick; nothing outside the tick processor holds a
/// mutable reference to a previous snapshot.
#[derive(Debug, Clone)]
pub struct GameState {
    pub status: GameStatus,
    /// Region arena, indexed by `RegionId`
    pub regions: Vec<Region>,
    pub stockpiles: Stockpiles,
    pub rates: Rates,
    /// In-flight movements in dispatch order
    pub movements: Vec<TroopMovement>,
    pub tick_count: Tick,
    pub winner: Option<Faction>,
    pub stats: GameStats,
    /// Random number generator for AI decisions (deterministic)
    pub rng: ChaCha8Rng,
    pub config: Arc<GameConfig>,
    pub movement_ids: MovementIds,
}

impl GameState {
    /// A running game over `regions` with the configured opening stockpiles
    pub fn new(regions: Vec<Region>, config: Arc<GameConfig>, rng: ChaCha8Rng) -> Self {
        let stockpiles = FactionTable::from_fn(|faction| config.starting_stockpile(faction));
        let mut state = Self {
            status: GameStatus::Playing,
            regions,
            stockpiles,
            rates: FactionTable::default(),
            movements: Vec::new(),
            tick_count: 0,
            winner: None,
            stats: GameStats::default(),
            rng,
            config,
            movement_ids: MovementIds::default(),
        };
        state.recompute_stats();
        state
    }

    pub fn get_region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index()).filter(|r| r.id == id)
    }

    pub fn get_region_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.get_mut(id.index()).filter(|r| r.id == id)
    }

    /// Generate a new unique MovementId
    pub fn next_movement_id(&mut self) -> MovementId {
        self.movement_ids.next_id()
    }

    pub fn settlement_count(&self, faction: Faction) -> usize {
        self.regions
            .iter()
            .filter(|r| r.owner == faction && r.is_settlement())
            .count()
    }

    pub fn region_count(&self, faction: Faction) -> usize {
        self.regions.iter().filter(|r| r.owner == faction).count()
    }

    /// Money per tick spent on the faction's garrisons and troops in transit
    pub fn upkeep(&self, faction: Faction) -> f64 {
        let stationed: f64 = self
            .regions
            .iter()
            .filter(|r| r.owner == faction)
            .map(|r| r.garrison)
            .sum();
        let in_transit: f64 = self
            .movements
            .iter()
            .filter(|m| m.owner == faction)
            .map(|m| m.amount)
            .sum();
        (stationed + in_transit) * self.config.economy.maintenance_per_troop
    }

    pub fn stockpile(&self, faction: Faction) -> &Resources {
        &self.stockpiles[faction]
    }

    pub fn recompute_stats(&mut self) {
        let rules = &self.config.rules;
        self.stats = GameStats {
            total_population: self.regions.iter().map(|r| r.population).sum(),
            settlement_count: self.regions.iter().filter(|r| r.is_settlement()).count(),
            year: rules.base_year + self.tick_count / rules.ticks_per_year,
        };
    }
}
