//! Game configuration with documented constants
//!
//! All balance numbers are collected here. Every section is defaulted, so a
//! TOML file only needs to name the values it overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, TerraError};
use crate::core::types::Faction;
use crate::world::resources::Resources;

/// Top-level configuration for world generation and simulation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map: MapConfig,
    pub economy: EconomyConfig,
    pub military: MilitaryConfig,
    pub ai: AiConfig,
    pub rules: RulesConfig,
    pub start: StartConfig,
}

// === WORLD GENERATION ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: f64,
    pub height: f64,
    /// Number of Voronoi sites, one region per site
    pub site_count: usize,
    /// Lloyd relaxation passes applied before the final diagram
    pub relaxation_passes: usize,

    /// Spatial frequency of the elevation/moisture fields
    pub noise_frequency: f64,
    pub elevation_seed: f64,
    pub moisture_seed: f64,

    pub mountain_elevation: f64,
    pub water_elevation: f64,
    pub swamp_moisture: f64,
    pub swamp_max_elevation: f64,
    pub forest_moisture: f64,
    pub desert_moisture: f64,

    /// City-states seeded after the player and rival capitals
    pub independent_count: usize,
    /// Garrison of every barbarian-held wilderness region at generation
    pub wilderness_garrison: f64,
    /// Fraction of the terrain capacity available to unclaimed land
    pub wilderness_capacity_factor: f64,

    /// Initial settlement population is drawn from `[min, max)`
    pub settlement_population: (u32, u32),
    pub wilderness_population: (u32, u32),
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            site_count: 150,
            relaxation_passes: 2,
            noise_frequency: 0.01,
            elevation_seed: 42.0,
            moisture_seed: 123.0,
            mountain_elevation: 0.8,
            water_elevation: 0.2,
            swamp_moisture: 0.8,
            swamp_max_elevation: 0.4,
            forest_moisture: 0.6,
            desert_moisture: 0.3,
            independent_count: 5,
            wilderness_garrison: 10.0,
            wilderness_capacity_factor: 0.2,
            settlement_population: (100, 600),
            wilderness_population: (10, 60),
        }
    }
}

// === ECONOMY ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Production multiplier for unclaimed wilderness (settlements use 1.0)
    pub wilderness_efficiency: f64,
    /// Food per head of population, before the terrain modifier
    pub food_per_capita: f64,
    pub industry_per_level: f64,
    pub money_per_level: f64,
    pub manpower_per_level: f64,

    pub base_growth_rate: f64,
    pub growth_per_housing_level: f64,
    /// Growth rate applied while a region is under siege
    pub siege_growth_rate: f64,
    /// Added to carrying capacity per settlement level in the logistic term
    pub capacity_per_level: f64,

    /// Money per troop per tick, for garrisons and troops in transit
    pub maintenance_per_troop: f64,

    /// Region count at which production is computed with rayon
    pub parallel_threshold: usize,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            wilderness_efficiency: 0.1,
            food_per_capita: 0.01,
            industry_per_level: 0.5,
            money_per_level: 1.0,
            manpower_per_level: 0.5,
            base_growth_rate: 0.01,
            growth_per_housing_level: 0.005,
            siege_growth_rate: -0.05,
            capacity_per_level: 200.0,
            maintenance_per_troop: 0.02,
            parallel_threshold: 1000,
        }
    }
}

// === MILITARY & CONSTRUCTION ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilitaryConfig {
    pub troop_cap_base: f64,
    pub troop_cap_per_level: f64,

    pub recruit_cost_money: f64,
    pub recruit_cost_industry: f64,
    pub recruit_cost_manpower: f64,

    pub upgrade_base_money: f64,
    pub upgrade_base_industry: f64,
    /// Upgrade cost grows as `base * exponent^level`
    pub upgrade_exponent: f64,

    pub found_cost_money: f64,
    pub found_cost_industry: f64,
    pub found_cost_manpower: f64,
    pub founded_population: f64,
    /// Militia added on top of the existing garrison when a region is founded
    pub founding_militia: f64,

    /// Progress added to every movement per tick
    pub movement_speed: f64,

    pub base_damage: f64,
    pub defense_per_fortification: f64,
    /// Defender garrison at or below which a region falls
    pub conquest_threshold: f64,
    pub conquest_morale: f64,
    /// Fraction of the loser's money taken by the conqueror
    pub loot_fraction: f64,

    /// Fraction of the garrison a holding defender must lose to be besieged
    pub siege_threshold: f64,
    pub siege_duration_ticks: u32,
}

impl Default for MilitaryConfig {
    fn default() -> Self {
        Self {
            troop_cap_base: 50.0,
            troop_cap_per_level: 100.0,
            recruit_cost_money: 1.0,
            recruit_cost_industry: 0.5,
            recruit_cost_manpower: 1.0,
            upgrade_base_money: 100.0,
            upgrade_base_industry: 50.0,
            upgrade_exponent: 1.2,
            found_cost_money: 500.0,
            found_cost_industry: 300.0,
            found_cost_manpower: 200.0,
            founded_population: 500.0,
            founding_militia: 50.0,
            movement_speed: 0.02,
            base_damage: 0.2,
            defense_per_fortification: 0.05,
            conquest_threshold: 1.0,
            conquest_morale: 50.0,
            loot_fraction: 0.1,
            siege_threshold: 0.2,
            siege_duration_ticks: 12,
        }
    }
}

impl MilitaryConfig {
    /// Money/industry/manpower needed to found a settlement
    pub fn founding_cost(&self) -> Resources {
        Resources {
            money: self.found_cost_money,
            industry: self.found_cost_industry,
            manpower: self.found_cost_manpower,
            ..Resources::default()
        }
    }

    /// Cost of raising an attribute currently at `level`
    pub fn upgrade_cost(&self, level: u32) -> Resources {
        let factor = self.upgrade_exponent.powi(level as i32);
        Resources {
            money: self.upgrade_base_money * factor,
            industry: self.upgrade_base_industry * factor,
            ..Resources::default()
        }
    }

    pub fn recruit_cost(&self, amount: f64) -> Resources {
        Resources {
            money: amount * self.recruit_cost_money,
            industry: amount * self.recruit_cost_industry,
            manpower: amount * self.recruit_cost_manpower,
            ..Resources::default()
        }
    }

    pub fn garrison_cap(&self, level: u32) -> f64 {
        self.troop_cap_base + level as f64 * self.troop_cap_per_level
    }
}

// === AI ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// AI factions think on ticks divisible by this
    pub think_interval: u64,
    /// Factions driven by the AI; the player and barbarians are never driven
    pub factions: Vec<Faction>,

    /// Stockpile must exceed founding cost times this to found
    pub found_buffer: f64,
    pub upgrade_chance: f64,
    /// Settlement level the AI stops upgrading at
    pub soft_level_cap: u32,
    pub level_upgrade_buffer: f64,
    pub attribute_upgrade_buffer: f64,
    pub scarce_money: f64,
    pub scarce_industry: f64,

    /// Recruit while the garrison is below this fraction of its cap
    pub recruit_fill_ratio: f64,
    pub recruit_batch: f64,
    pub recruit_min_money: f64,
    pub recruit_min_manpower: f64,

    /// Garrison a settlement needs before it considers any offensive
    pub offensive_min_garrison: f64,
    pub expansion_min_garrison: f64,
    pub expansion_batch: f64,
    pub attack_ratio: f64,
    pub attack_min_garrison: f64,
    /// Fraction of the garrison committed to a settlement attack
    pub attack_commit: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            think_interval: 20,
            factions: vec![Faction::RivalEmpire],
            found_buffer: 1.5,
            upgrade_chance: 0.3,
            soft_level_cap: 5,
            level_upgrade_buffer: 3.0,
            attribute_upgrade_buffer: 2.0,
            scarce_money: 500.0,
            scarce_industry: 300.0,
            recruit_fill_ratio: 0.8,
            recruit_batch: 20.0,
            recruit_min_money: 200.0,
            recruit_min_manpower: 50.0,
            offensive_min_garrison: 50.0,
            expansion_min_garrison: 40.0,
            expansion_batch: 30.0,
            attack_ratio: 1.5,
            attack_min_garrison: 60.0,
            attack_commit: 0.7,
        }
    }
}

// === SESSION RULES ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Ticks before a player without settlements is defeated
    pub defeat_grace_ticks: u64,
    pub base_year: u64,
    pub ticks_per_year: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            defeat_grace_ticks: 10,
            base_year: 1000,
            ticks_per_year: 12,
        }
    }
}

/// Opening stockpiles per faction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub player: Resources,
    pub rival_empire: Resources,
    pub independent: Resources,
    pub barbarian: Resources,
}

impl Default for StartConfig {
    fn default() -> Self {
        let major = Resources {
            food: 500.0,
            industry: 500.0,
            money: 500.0,
            manpower: 500.0,
            ..Resources::default()
        };
        Self {
            player: major,
            rival_empire: major,
            independent: Resources {
                food: 100.0,
                industry: 100.0,
                money: 100.0,
                manpower: 100.0,
                ..Resources::default()
            },
            barbarian: Resources::default(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML document and validate it
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let map = &self.map;
        if map.site_count < 2 {
            return Err(TerraError::InvalidConfig(format!(
                "site_count ({}) must be at least 2 to seed both empires",
                map.site_count
            )));
        }
        if map.width <= 0.0 || map.height <= 0.0 {
            return Err(TerraError::InvalidConfig(format!(
                "map dimensions must be positive, got {}x{}",
                map.width, map.height
            )));
        }
        if map.water_elevation >= map.mountain_elevation {
            return Err(TerraError::InvalidConfig(format!(
                "water_elevation ({}) must be below mountain_elevation ({})",
                map.water_elevation, map.mountain_elevation
            )));
        }
        if map.desert_moisture >= map.forest_moisture {
            return Err(TerraError::InvalidConfig(format!(
                "desert_moisture ({}) must be below forest_moisture ({})",
                map.desert_moisture, map.forest_moisture
            )));
        }
        for (label, (min, max)) in [
            ("settlement_population", map.settlement_population),
            ("wilderness_population", map.wilderness_population),
        ] {
            if min >= max {
                return Err(TerraError::InvalidConfig(format!(
                    "{label} range [{min}, {max}) is empty"
                )));
            }
        }

        if self.military.movement_speed <= 0.0 {
            return Err(TerraError::InvalidConfig(
                "movement_speed must be positive".into(),
            ));
        }
        if self.military.upgrade_exponent < 1.0 {
            return Err(TerraError::InvalidConfig(format!(
                "upgrade_exponent ({}) must be at least 1.0",
                self.military.upgrade_exponent
            )));
        }
        if self.ai.think_interval == 0 {
            return Err(TerraError::InvalidConfig(
                "think_interval must be at least 1".into(),
            ));
        }
        if self.rules.ticks_per_year == 0 {
            return Err(TerraError::InvalidConfig(
                "ticks_per_year must be at least 1".into(),
            ));
        }
        if self
            .ai
            .factions
            .iter()
            .any(|f| matches!(f, Faction::Player | Faction::Barbarian))
        {
            return Err(TerraError::InvalidConfig(
                "the player and barbarian factions cannot be AI-driven".into(),
            ));
        }
        Ok(())
    }

    pub fn starting_stockpile(&self, faction: Faction) -> Resources {
        match faction {
            Faction::Player => self.start.player,
            Faction::RivalEmpire => self.start.rival_empire,
            Faction::Independent => self.start.independent,
            Faction::Barbarian => self.start.barbarian,
        }
    }
}
