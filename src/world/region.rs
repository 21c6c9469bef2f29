//! Region - a Voronoi cell of the map and the unit of ownership

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::config::MilitaryConfig;
use crate::core::types::{Faction, RegionId, RegionKind, Terrain, Tick};
use crate::world::resources::Resources;

/// Morale of a freshly generated region
pub const FULL_MORALE: f64 = 100.0;

/// Growth rate shown before the first economy step
pub const INITIAL_GROWTH_RATE: f64 = 0.05;

/// The five upgradable levels of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Settlement level; caps the other four
    Level,
    Industry,
    Commerce,
    Housing,
    Fortification,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Level,
        Attribute::Industry,
        Attribute::Commerce,
        Attribute::Housing,
        Attribute::Fortification,
    ];

    pub const SUBORDINATE: [Attribute; 4] = [
        Attribute::Industry,
        Attribute::Commerce,
        Attribute::Housing,
        Attribute::Fortification,
    ];

    pub fn is_subordinate(self) -> bool {
        self != Attribute::Level
    }

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Level => "level",
            Attribute::Industry => "industry",
            Attribute::Commerce => "commerce",
            Attribute::Housing => "housing",
            Attribute::Fortification => "fortification",
        }
    }
}

/// Outcome of the most recent battle fought over a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatRecord {
    pub attacker: String,
    pub damage_taken: f64,
    pub tick: Tick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,

    // Geography
    pub position: DVec2,
    /// Closed cell boundary; empty for a degenerate cell
    pub polygon: Vec<DVec2>,
    pub terrain: Terrain,
    pub neighbors: Vec<RegionId>,

    // Ownership
    pub owner: Faction,
    pub kind: RegionKind,

    // Development
    pub level: u32,
    pub industry_level: u32,
    pub commerce_level: u32,
    pub housing_level: u32,
    pub fortification_level: u32,

    // Population
    pub population: f64,
    pub carrying_capacity: f64,
    pub growth_rate: f64,
    pub production: Resources,

    // Military
    pub garrison: f64,
    pub morale: f64,
    pub under_siege: bool,
    pub siege_timer: u32,
    pub last_combat: Option<CombatRecord>,
}

impl Region {
    /// Unclaimed barbarian land with no garrison or population
    pub fn new(id: RegionId, position: DVec2, terrain: Terrain) -> Self {
        Self {
            id,
            name: crate::worldgen::names::wilderness_name(id),
            position,
            polygon: Vec::new(),
            terrain,
            neighbors: Vec::new(),
            owner: Faction::Barbarian,
            kind: RegionKind::Unclaimed,
            level: 0,
            industry_level: 0,
            commerce_level: 0,
            housing_level: 0,
            fortification_level: 0,
            population: 0.0,
            carrying_capacity: 0.0,
            growth_rate: INITIAL_GROWTH_RATE,
            production: Resources::ZERO,
            garrison: 0.0,
            morale: FULL_MORALE,
            under_siege: false,
            siege_timer: 0,
            last_combat: None,
        }
    }

    pub fn with_owner(mut self, owner: Faction) -> Self {
        self.owner = owner;
        self
    }

    pub fn with_polygon(mut self, polygon: Vec<DVec2>) -> Self {
        self.polygon = polygon;
        self
    }

    pub fn with_neighbors(mut self, neighbors: Vec<RegionId>) -> Self {
        self.neighbors = neighbors;
        self
    }

    pub fn with_garrison(mut self, garrison: f64) -> Self {
        self.garrison = garrison;
        self
    }

    pub fn with_population(mut self, population: f64, carrying_capacity: f64) -> Self {
        self.population = population;
        self.carrying_capacity = carrying_capacity;
        self
    }

    /// Promote to a level-1 settlement with every attribute at 1
    pub fn as_settlement(mut self) -> Self {
        self.kind = RegionKind::Settlement;
        self.name = crate::worldgen::names::settlement_name(self.id);
        self.level = 1;
        for attribute in Attribute::SUBORDINATE {
            *self.attribute_mut(attribute) = 1;
        }
        self
    }

    pub fn is_settlement(&self) -> bool {
        self.kind == RegionKind::Settlement
    }

    /// A cell whose polygon could not be built
    pub fn is_degenerate(&self) -> bool {
        self.polygon.len() < 3
    }

    pub fn attribute(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Level => self.level,
            Attribute::Industry => self.industry_level,
            Attribute::Commerce => self.commerce_level,
            Attribute::Housing => self.housing_level,
            Attribute::Fortification => self.fortification_level,
        }
    }

    pub fn attribute_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Level => &mut self.level,
            Attribute::Industry => &mut self.industry_level,
            Attribute::Commerce => &mut self.commerce_level,
            Attribute::Housing => &mut self.housing_level,
            Attribute::Fortification => &mut self.fortification_level,
        }
    }

    /// Lower subordinate attributes to the settlement level
    pub fn clamp_attributes(&mut self) {
        let level = self.level;
        for attribute in Attribute::SUBORDINATE {
            let value = self.attribute_mut(attribute);
            *value = (*value).min(level);
        }
    }

    pub fn garrison_cap(&self, military: &MilitaryConfig) -> f64 {
        military.garrison_cap(self.level)
    }

    /// Troops that can still be stationed here
    pub fn garrison_headroom(&self, military: &MilitaryConfig) -> f64 {
        (self.garrison_cap(military) - self.garrison).max(0.0)
    }

    /// Add troops, disbanding anything above the cap
    pub fn add_garrison(&mut self, amount: f64, military: &MilitaryConfig) {
        self.garrison = (self.garrison + amount).min(self.garrison_cap(military));
    }

    pub fn is_neighbor(&self, other: RegionId) -> bool {
        self.neighbors.contains(&other)
    }
}
