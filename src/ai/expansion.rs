//! Expeditions into wilderness and attacks on weak neighbors

use std::cmp::Ordering;
use tracing::debug;

use super::AiReport;
use crate::actions::handlers::try_dispatch_troops;
use crate::core::types::{Faction, RegionId};
use crate::world::region::Region;
use crate::world::state::GameState;

/// Neighboring regions worth moving on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionTargets {
    /// Passable wilderness not yet held, in neighbor order
    pub wilderness: Vec<RegionId>,
    /// Settlements of rival factions, weakest first
    pub hostile: Vec<RegionId>,
}

/// Find expansion targets around one region
pub fn find_expansion_targets(region: &Region, faction: Faction, regions: &[Region]) -> ExpansionTargets {
    let neighbors: Vec<&Region> = region
        .neighbors
        .iter()
        .filter_map(|id| regions.get(id.index()))
        .collect();

    let wilderness = neighbors
        .iter()
        .filter(|n| !n.is_settlement() && n.owner != faction && n.terrain.is_passable())
        .map(|n| n.id)
        .collect();

    let mut hostile: Vec<&Region> = neighbors
        .into_iter()
        .filter(|n| n.is_settlement() && n.owner != faction && n.owner != Faction::Barbarian)
        .collect();
    hostile.sort_by(|a, b| {
        a.garrison
            .partial_cmp(&b.garrison)
            .unwrap_or(Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });

    ExpansionTargets {
        wilderness,
        hostile: hostile.into_iter().map(|n| n.id).collect(),
    }
}

/// Issue at most one offensive per held settlement
pub fn expand(state: &mut GameState, faction: Faction, held: &[RegionId], report: &mut AiReport) {
    let config = state.config.clone();
    let ai = &config.ai;

    for &id in held {
        let region = &state.regions[id.index()];
        if region.owner != faction
            || !region.is_settlement()
            || region.garrison <= ai.offensive_min_garrison
        {
            continue;
        }

        let targets = find_expansion_targets(region, faction, &state.regions);

        let order = match targets.wilderness.first() {
            Some(&target) if region.garrison > ai.expansion_min_garrison => {
                Some((target, ai.expansion_batch, false))
            }
            _ => targets.hostile.first().and_then(|&target| {
                let defenders = state.regions[target.index()].garrison;
                (region.garrison > defenders * ai.attack_ratio
                    && region.garrison > ai.attack_min_garrison)
                    .then(|| (target, region.garrison * ai.attack_commit, true))
            }),
        };
        let Some((target, amount, is_attack)) = order else {
            continue;
        };

        let movement_id = state.movement_ids.next_id();
        match try_dispatch_troops(region, target, amount, &state.regions, movement_id) {
            Ok((source, movement)) => {
                debug!(
                    faction = ?faction,
                    from = %id,
                    to = %target,
                    amount,
                    attack = is_attack,
                    "AI dispatch"
                );
                state.regions[id.index()] = source;
                state.movements.push(movement);
                if is_attack {
                    report.attacks += 1;
                } else {
                    report.expeditions += 1;
                }
            }
            Err(err) => debug!(region = %id, "AI dispatch skipped: {}", err),
        }
    }
}
