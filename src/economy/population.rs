//! Logistic population growth and siege countdown

use crate::core::config::GameConfig;
use crate::world::region::Region;

pub fn growth_rate(region: &Region, config: &GameConfig) -> f64 {
    let economy = &config.economy;
    if region.under_siege {
        economy.siege_growth_rate
    } else {
        economy.base_growth_rate + region.housing_level as f64 * economy.growth_per_housing_level
    }
}

/// Population after one tick of logistic growth, with the rate applied
///
/// A non-finite growth term (zero capacity) counts as no growth.
pub fn grow(region: &Region, config: &GameConfig) -> (f64, f64) {
    let rate = growth_rate(region, config);
    let capacity =
        region.carrying_capacity + region.level as f64 * config.economy.capacity_per_level;
    let growth = rate * region.population * (1.0 - region.population / capacity);
    let growth = if growth.is_finite() { growth } else { 0.0 };

    ((region.population + growth).max(0.0), rate)
}

/// Count down an active siege, lifting it when the timer runs out
pub fn advance_siege(region: &mut Region) {
    if !region.under_siege {
        return;
    }
    region.siege_timer = region.siege_timer.saturating_sub(1);
    if region.siege_timer == 0 {
        region.under_siege = false;
    }
}
