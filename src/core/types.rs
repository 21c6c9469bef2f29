//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Stable identifier of a region; also its index in the region arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl RegionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for a troop movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovementId(pub u64);

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// The four factions that can own regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    RivalEmpire,
    Independent,
    Barbarian,
}

impl Faction {
    pub const ALL: [Faction; 4] = [
        Faction::Player,
        Faction::RivalEmpire,
        Faction::Independent,
        Faction::Barbarian,
    ];

    /// Ordinal used to index per-faction tables
    pub fn index(self) -> usize {
        match self {
            Faction::Player => 0,
            Faction::RivalEmpire => 1,
            Faction::Independent => 2,
            Faction::Barbarian => 3,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Faction::Player => "Player",
            Faction::RivalEmpire => "Rival Empire",
            Faction::Independent => "City State",
            Faction::Barbarian => "Wilderness",
        }
    }

    /// Map tint, also used for troop movements
    pub fn color(self) -> &'static str {
        match self {
            Faction::Player => "#3b82f6",
            Faction::RivalEmpire => "#ef4444",
            Faction::Independent => "#f97316",
            Faction::Barbarian => "#374151",
        }
    }
}

/// Fixed-size table with one slot per faction
///
/// Backed by an array so every faction is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactionTable<T>([T; 4]);

impl<T> FactionTable<T> {
    pub fn from_fn(mut f: impl FnMut(Faction) -> T) -> Self {
        Self(Faction::ALL.map(|faction| f(faction)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Faction, &T)> {
        Faction::ALL.into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Faction, &mut T)> {
        Faction::ALL.into_iter().zip(self.0.iter_mut())
    }
}

impl<T> Index<Faction> for FactionTable<T> {
    type Output = T;

    fn index(&self, faction: Faction) -> &T {
        &self.0[faction.index()]
    }
}

impl<T> IndexMut<Faction> for FactionTable<T> {
    fn index_mut(&mut self, faction: Faction) -> &mut T {
        &mut self.0[faction.index()]
    }
}

/// Terrain category of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Plains,
    Forest,
    Desert,
    Mountain,
    Water,
    Swamp,
}

/// Per-terrain production, capacity and defense multipliers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainModifiers {
    pub food: f64,
    pub industry: f64,
    pub money: f64,
    pub science: f64,
    pub materials: f64,
    /// Base carrying capacity of a settlement on this terrain
    pub capacity: f64,
    /// Added to the defender bonus in combat
    pub defense: f64,
}

impl Terrain {
    pub fn modifiers(self) -> TerrainModifiers {
        match self {
            Terrain::Plains => TerrainModifiers {
                food: 1.5,
                industry: 1.0,
                money: 1.0,
                science: 0.8,
                materials: 0.5,
                capacity: 2000.0,
                defense: 0.5,
            },
            Terrain::Forest => TerrainModifiers {
                food: 0.8,
                industry: 1.5,
                money: 0.8,
                science: 0.9,
                materials: 1.5,
                capacity: 1200.0,
                defense: 1.2,
            },
            Terrain::Desert => TerrainModifiers {
                food: 0.2,
                industry: 0.5,
                money: 2.0,
                science: 1.2,
                materials: 0.8,
                capacity: 500.0,
                defense: 0.8,
            },
            Terrain::Mountain => TerrainModifiers {
                food: 0.3,
                industry: 0.8,
                money: 0.5,
                science: 1.5,
                materials: 2.0,
                capacity: 300.0,
                defense: 2.0,
            },
            Terrain::Swamp => TerrainModifiers {
                food: 0.9,
                industry: 0.4,
                money: 0.4,
                science: 1.1,
                materials: 0.6,
                capacity: 800.0,
                defense: 0.9,
            },
            Terrain::Water => TerrainModifiers {
                food: 0.0,
                industry: 0.0,
                money: 0.0,
                science: 0.0,
                materials: 0.0,
                capacity: 0.0,
                defense: 0.0,
            },
        }
    }

    /// Water is held only nominally and never targeted by the AI
    pub fn is_passable(self) -> bool {
        self != Terrain::Water
    }
}

/// Whether a region has productive infrastructure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    Settlement,
    Unclaimed,
}

/// Global session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Menu,
    Playing,
    Victory,
    Defeat,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Victory | GameStatus::Defeat)
    }
}
