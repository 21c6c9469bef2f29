//! Win/loss evaluation for the session state machine
//!
//! `Menu -> Playing -> {Victory, Defeat} -> Menu`. Only the tick processor
//! moves a game out of `Playing`, once per tick after all resolution.

use tracing::info;

use crate::core::types::{Faction, GameStatus};
use crate::world::state::GameState;

/// Status and winner the game should have after this tick's resolution
pub fn evaluate_status(state: &GameState) -> (GameStatus, Option<Faction>) {
    let player = state.settlement_count(Faction::Player);
    let total = state.regions.iter().filter(|r| r.is_settlement()).count();

    if player == 0 && state.tick_count > state.config.rules.defeat_grace_ticks {
        (GameStatus::Defeat, Some(Faction::RivalEmpire))
    } else if total > 0 && player == total {
        (GameStatus::Victory, Some(Faction::Player))
    } else {
        (state.status, state.winner)
    }
}

pub fn apply_status(state: &mut GameState) {
    let (status, winner) = evaluate_status(state);
    if status != state.status {
        info!(
            from = ?state.status,
            to = ?status,
            winner = ?winner,
            tick = state.tick_count,
            "Game status changed"
        );
    }
    state.status = status;
    state.winner = winner;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::types::{RegionId, Terrain};
    use crate::world::region::Region;
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::sync::Arc;

    fn state_with(owners: &[Faction]) -> GameState {
        let regions = owners
            .iter()
            .enumerate()
            .map(|(i, &owner)| {
                Region::new(RegionId(i as u32), DVec2::new(i as f64, 0.0), Terrain::Plains)
                    .with_owner(owner)
                    .as_settlement()
            })
            .collect();
        GameState::new(regions, Arc::new(GameConfig::default()), ChaCha8Rng::seed_from_u64(0))
    }

    #[test]
    fn test_defeat_waits_for_grace_period() {
        let mut state = state_with(&[Faction::RivalEmpire]);
        state.tick_count = 10;
        assert_eq!(evaluate_status(&state).0, GameStatus::Playing);

        state.tick_count = 11;
        assert_eq!(
            evaluate_status(&state),
            (GameStatus::Defeat, Some(Faction::RivalEmpire))
        );
    }

    #[test]
    fn test_victory_when_player_holds_every_settlement() {
        let state = state_with(&[Faction::Player, Faction::Player]);
        assert_eq!(
            evaluate_status(&state),
            (GameStatus::Victory, Some(Faction::Player))
        );
    }

    #[test]
    fn test_wilderness_does_not_block_victory() {
        let mut state = state_with(&[Faction::Player]);
        state
            .regions
            .push(Region::new(RegionId(1), DVec2::X, Terrain::Forest));
        assert_eq!(evaluate_status(&state).0, GameStatus::Victory);
    }

    #[test]
    fn test_contested_map_keeps_playing() {
        let mut state = state_with(&[Faction::Player, Faction::Independent]);
        apply_status(&mut state);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.winner, None);
    }
}
