//! Strategy for AI-driven factions
//!
//! Every `think_interval` ticks each configured faction runs three passes
//! over the regions it held when the turn began: development, recruitment
//! and expansion. All changes go through the same handlers the player uses
//! and land on the tick's private copy of the state.

pub mod development;
pub mod expansion;
pub mod recruitment;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{Faction, RegionId};
use crate::world::state::GameState;

/// Actions taken by one faction in one AI turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiReport {
    pub founded: u32,
    pub upgraded: u32,
    pub recruited: u32,
    pub expeditions: u32,
    pub attacks: u32,
}

/// Whether AI factions think on this (pre-increment) tick
pub fn is_think_tick(state: &GameState) -> bool {
    state.tick_count % state.config.ai.think_interval == 0
}

/// Run one full turn for every AI faction
pub fn run_ai(state: &mut GameState) -> Vec<(Faction, AiReport)> {
    let factions = state.config.ai.factions.clone();
    factions
        .into_iter()
        .map(|faction| (faction, run_faction_turn(state, faction)))
        .collect()
}

pub fn run_faction_turn(state: &mut GameState, faction: Faction) -> AiReport {
    let held: Vec<RegionId> = state
        .regions
        .iter()
        .filter(|r| r.owner == faction)
        .map(|r| r.id)
        .collect();

    let mut report = AiReport::default();
    development::develop(state, faction, &held, &mut report);
    recruitment::recruit(state, faction, &held, &mut report);
    expansion::expand(state, faction, &held, &mut report);

    debug!(
        faction = ?faction,
        tick = state.tick_count,
        held = held.len(),
        founded = report.founded,
        upgraded = report.upgraded,
        recruited = report.recruited,
        expeditions = report.expeditions,
        attacks = report.attacks,
        "AI turn"
    );
    report
}
