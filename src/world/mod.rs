//! World data model: regions, resources and the game state aggregate

pub mod region;
pub mod resources;
pub mod state;

pub use region::{Attribute, CombatRecord, Region};
pub use resources::{Rates, Resources, Stockpiles};
pub use state::{GameState, GameStats};
