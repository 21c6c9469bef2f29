pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{Result, TerraError};
pub use types::{Faction, FactionTable, GameStatus, RegionId, RegionKind, Terrain};
