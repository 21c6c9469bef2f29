//! Keeping garrisons topped up

use tracing::debug;

use super::AiReport;
use crate::actions::handlers::try_recruit;
use crate::core::types::{Faction, RegionId};
use crate::world::state::GameState;

pub fn recruit(state: &mut GameState, faction: Faction, held: &[RegionId], report: &mut AiReport) {
    let config = state.config.clone();
    let ai = &config.ai;

    for &id in held {
        let region = &state.regions[id.index()];
        if region.owner != faction || !region.is_settlement() {
            continue;
        }

        let cap = region.garrison_cap(&config.military);
        let stock = &state.stockpiles[faction];
        if region.garrison >= cap * ai.recruit_fill_ratio
            || stock.money <= ai.recruit_min_money
            || stock.manpower <= ai.recruit_min_manpower
        {
            continue;
        }

        match try_recruit(region, ai.recruit_batch, &state.stockpiles, &config) {
            Ok((recruited, stockpiles)) => {
                state.regions[id.index()] = recruited;
                state.stockpiles = stockpiles;
                report.recruited += 1;
            }
            Err(err) => debug!(region = %id, "AI recruit skipped: {}", err),
        }
    }
}
