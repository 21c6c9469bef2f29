//! Session glue: starting and resetting games, and splicing player actions
//! back into the held state

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tracing::{debug, info};

use crate::actions::handlers;
use crate::core::config::GameConfig;
use crate::core::types::{GameStatus, RegionId};
use crate::world::region::Attribute;
use crate::world::state::GameState;
use crate::worldgen;

/// ChaCha stream reserved for AI decisions
const AI_STREAM: u64 = 1;

impl GameState {
    /// Empty pre-game state
    pub fn menu(config: Arc<GameConfig>) -> Self {
        let mut state = GameState::new(Vec::new(), config, ChaCha8Rng::seed_from_u64(0));
        state.status = GameStatus::Menu;
        state
    }

    /// Generate a world from `seed` and begin playing
    ///
    /// Only valid from the menu; any other state is returned unchanged.
    pub fn start_game(&self, seed: u64) -> GameState {
        if self.status != GameStatus::Menu {
            debug!(status = ?self.status, "New game requested outside the menu");
            return self.clone();
        }

        let mut world_rng = ChaCha8Rng::seed_from_u64(seed);
        let regions = worldgen::generate_world(&self.config, &mut world_rng);

        let mut ai_rng = ChaCha8Rng::seed_from_u64(seed);
        ai_rng.set_stream(AI_STREAM);

        let state = GameState::new(regions, Arc::clone(&self.config), ai_rng);
        info!(
            seed,
            regions = state.regions.len(),
            settlements = state.stats.settlement_count,
            "Game started"
        );
        state
    }

    pub fn return_to_menu(&self) -> GameState {
        info!(from = ?self.status, tick = self.tick_count, "Returning to menu");
        GameState::menu(Arc::clone(&self.config))
    }

    pub fn apply_recruit(&self, region: RegionId, amount: f64) -> GameState {
        self.splice(region, |state, index| {
            let (updated, stockpiles) =
                handlers::recruit(&state.regions[index], amount, &state.stockpiles, &state.config);
            state.regions[index] = updated;
            state.stockpiles = stockpiles;
        })
    }

    pub fn apply_upgrade(&self, region: RegionId, attribute: Attribute) -> GameState {
        self.splice(region, |state, index| {
            let (updated, stockpiles) = handlers::upgrade_attribute(
                &state.regions[index],
                attribute,
                &state.stockpiles,
                &state.config,
            );
            state.regions[index] = updated;
            state.stockpiles = stockpiles;
        })
    }

    pub fn apply_found(&self, region: RegionId) -> GameState {
        self.splice(region, |state, index| {
            let (updated, stockpiles) =
                handlers::found_region(&state.regions[index], &state.stockpiles, &state.config);
            state.regions[index] = updated;
            state.stockpiles = stockpiles;
        })
    }

    pub fn apply_dispatch(&self, source: RegionId, target: RegionId, amount: f64) -> GameState {
        self.splice(source, |state, index| {
            let id = state.movement_ids.next_id();
            let (updated, movement) =
                handlers::dispatch_troops(&state.regions[index], target, amount, &state.regions, id);
            state.regions[index] = updated;
            state.movements.extend(movement);
        })
    }

    /// Run `action` on a copy of the state if the game is live and `region` exists
    fn splice(&self, region: RegionId, action: impl FnOnce(&mut GameState, usize)) -> GameState {
        if self.status != GameStatus::Playing {
            debug!(status = ?self.status, "Action ignored outside play");
            return self.clone();
        }
        if self.get_region(region).is_none() {
            debug!(region = %region, "Action on unknown region");
            return self.clone();
        }

        let mut next = self.clone();
        action(&mut next, region.index());
        next.recompute_stats();
        next
    }
}
