//! Founding settlements and upgrading attributes

use rand::Rng;
use tracing::debug;

use super::AiReport;
use crate::actions::handlers::{try_found_region, try_upgrade_attribute};
use crate::core::config::GameConfig;
use crate::core::types::{Faction, RegionId, Terrain};
use crate::world::region::{Attribute, Region};
use crate::world::resources::Resources;
use crate::world::state::GameState;

/// Attributes the AI develops, in preference order
const DEVELOPED: [Attribute; 3] = [Attribute::Commerce, Attribute::Industry, Attribute::Housing];

pub fn develop(state: &mut GameState, faction: Faction, held: &[RegionId], report: &mut AiReport) {
    let config = state.config.clone();

    for &id in held {
        let region = &state.regions[id.index()];
        if region.owner != faction || region.terrain == Terrain::Water {
            continue;
        }

        if !region.is_settlement() {
            let cost = config.military.founding_cost();
            if state.stockpiles[faction].exceeds(&cost, config.ai.found_buffer) {
                if let Ok((founded, stockpiles)) = try_found_region(region, &state.stockpiles, &config) {
                    state.regions[id.index()] = founded;
                    state.stockpiles = stockpiles;
                    report.founded += 1;
                }
            }
            continue;
        }

        if region.level >= config.ai.soft_level_cap {
            continue;
        }
        if state.rng.gen::<f64>() >= config.ai.upgrade_chance {
            continue;
        }

        let Some(attribute) = choose_upgrade(region, &state.stockpiles[faction], &config) else {
            continue;
        };
        match try_upgrade_attribute(region, attribute, &state.stockpiles, &config) {
            Ok((upgraded, stockpiles)) => {
                debug!(region = %id, attribute = attribute.label(), "AI upgrade");
                state.regions[id.index()] = upgraded;
                state.stockpiles = stockpiles;
                report.upgraded += 1;
            }
            Err(err) => debug!(region = %id, "AI upgrade skipped: {}", err),
        }
    }
}

/// Pick the next attribute for a settlement, if the treasury allows it
///
/// Nothing is upgraded unless money covers the next level's cost with the
/// level buffer. The settlement level is raised once commerce, industry and
/// housing have caught up with it. Otherwise the scarcest resource decides,
/// and the attribute's own cost must also clear the attribute buffer.
pub fn choose_upgrade(region: &Region, stock: &Resources, config: &GameConfig) -> Option<Attribute> {
    let ai = &config.ai;
    let military = &config.military;
    let below = |attribute: Attribute| region.attribute(attribute) < region.level;

    let level_cost = military.upgrade_cost(region.level);
    if stock.money <= level_cost.money * ai.level_upgrade_buffer {
        return None;
    }

    if !DEVELOPED.iter().any(|&a| below(a)) {
        return Some(Attribute::Level);
    }

    let attribute = if stock.money < ai.scarce_money && below(Attribute::Commerce) {
        Attribute::Commerce
    } else if stock.industry < ai.scarce_industry && below(Attribute::Industry) {
        Attribute::Industry
    } else {
        DEVELOPED.into_iter().find(|&a| below(a))?
    };

    let cost = military.upgrade_cost(region.attribute(attribute));
    (stock.money > cost.money * ai.attribute_upgrade_buffer).then_some(attribute)
}
