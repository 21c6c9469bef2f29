//! Economy model: production, upkeep and population growth for one tick
//!
//! Per-region work is independent, so large maps compute it with rayon.
//! Results are always folded into the faction tables in region order.

pub mod population;
pub mod production;

use rayon::prelude::*;

use crate::core::config::GameConfig;
use crate::core::types::Terrain;
use crate::world::region::Region;
use crate::world::resources::{Rates, Resources, Stockpiles};

/// Computed changes for one region this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionEconomy {
    pub production: Resources,
    pub upkeep: f64,
    pub population: f64,
    pub growth_rate: f64,
}

/// Economy step for a single region; `None` for water
pub fn evaluate_region(region: &Region, config: &GameConfig) -> Option<RegionEconomy> {
    if region.terrain == Terrain::Water {
        return None;
    }
    let (population, growth_rate) = population::grow(region, config);
    Some(RegionEconomy {
        production: production::production(region, config),
        upkeep: production::maintenance(region.garrison, config),
        population,
        growth_rate,
    })
}

/// Run production, upkeep and growth for every region
///
/// Stockpiles accumulate industry, money and manpower, with money
/// floor-clamped after upkeep. Food only shows up in the rates. Rates
/// receive this tick's net flow and are expected to start at zero.
pub fn run_economy(
    regions: &mut [Region],
    stockpiles: &mut Stockpiles,
    rates: &mut Rates,
    config: &GameConfig,
) {
    let updates: Vec<Option<RegionEconomy>> =
        if regions.len() >= config.economy.parallel_threshold {
            regions
                .par_iter()
                .map(|region| evaluate_region(region, config))
                .collect()
        } else {
            regions
                .iter()
                .map(|region| evaluate_region(region, config))
                .collect()
        };

    for (region, update) in regions.iter_mut().zip(updates) {
        let Some(update) = update else {
            continue;
        };
        apply(region, &update, stockpiles, rates);
    }
}

fn apply(region: &mut Region, update: &RegionEconomy, stockpiles: &mut Stockpiles, rates: &mut Rates) {
    let produced = update.production;

    let stock = &mut stockpiles[region.owner];
    stock.industry += produced.industry;
    stock.manpower += produced.manpower;
    stock.credit_money_clamped(produced.money - update.upkeep);

    let rate = &mut rates[region.owner];
    *rate += produced;
    rate.money -= update.upkeep;

    region.production = produced;
    region.population = update.population;
    region.growth_rate = update.growth_rate;
    population::advance_siege(region);
}
