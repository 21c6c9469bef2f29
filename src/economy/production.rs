//! Per-region production and garrison upkeep

use crate::core::config::GameConfig;
use crate::world::region::Region;
use crate::world::resources::Resources;

/// Output multiplier: full for settlements, a trickle for wilderness
pub fn efficiency(region: &Region, config: &GameConfig) -> f64 {
    if region.is_settlement() {
        1.0
    } else {
        config.economy.wilderness_efficiency
    }
}

/// One tick of output
///
/// Food follows population; industry, money and manpower follow the
/// industry, commerce and housing levels.
pub fn production(region: &Region, config: &GameConfig) -> Resources {
    let economy = &config.economy;
    let modifiers = region.terrain.modifiers();
    let efficiency = efficiency(region, config);

    Resources {
        food: region.population * economy.food_per_capita * modifiers.food,
        industry: region.industry_level as f64
            * economy.industry_per_level
            * modifiers.industry
            * efficiency,
        money: region.commerce_level as f64 * economy.money_per_level * modifiers.money * efficiency,
        manpower: region.housing_level as f64
            * economy.manpower_per_level
            * modifiers.food
            * efficiency,
        science: 0.0,
        materials: 0.0,
    }
}

/// Money owed for the stationed garrison this tick
pub fn maintenance(garrison: f64, config: &GameConfig) -> f64 {
    garrison * config.economy.maintenance_per_troop
}
