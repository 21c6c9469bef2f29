//! Tick processor - advances the whole game by one step
//!
//! Order within a tick is fixed:
//! economy -> movement & combat -> AI (every `think_interval` ticks) -> status
//!
//! The incoming state is never modified. All work happens on a private copy
//! that becomes the returned state.

use tracing::debug;

use crate::ai;
use crate::campaign::movement::{advance_movements, ArrivalEvent};
use crate::core::types::{FactionTable, GameStatus};
use crate::economy;
use crate::simulation::status;
use crate::world::state::GameState;

/// Advance one tick; a passthrough unless the game is `Playing`
pub fn tick(state: &GameState) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    let mut next = state.clone();
    let config = next.config.clone();

    next.rates = FactionTable::default();
    economy::run_economy(&mut next.regions, &mut next.stockpiles, &mut next.rates, &config);

    let movements = std::mem::take(&mut next.movements);
    let (in_flight, arrivals) = advance_movements(
        movements,
        &mut next.regions,
        &mut next.stockpiles,
        &mut next.rates,
        &config,
        next.tick_count,
    );
    next.movements = in_flight;

    if ai::is_think_tick(&next) {
        ai::run_ai(&mut next);
    }

    status::apply_status(&mut next);

    next.tick_count += 1;
    next.recompute_stats();

    debug!(
        tick = next.tick_count,
        arrivals = arrivals.len(),
        battles = arrivals
            .iter()
            .filter(|a| matches!(a, ArrivalEvent::Battle { .. }))
            .count(),
        movements = next.movements.len(),
        population = next.stats.total_population,
        "Tick complete"
    );
    next
}

/// Advance up to `ticks` times, stopping early once the game is over
pub fn run_ticks(state: &GameState, ticks: u64) -> GameState {
    let mut current = state.clone();
    for _ in 0..ticks {
        if current.status != GameStatus::Playing {
            break;
        }
        current = tick(&current);
    }
    current
}
