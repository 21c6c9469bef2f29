//! Troop movement and combat resolution

pub mod battle;
pub mod movement;

pub use battle::{resolve_battle, resolve_combat, BattleOutcome, CombatResult};
pub use movement::{advance_movements, ArrivalEvent, MovementIds, TroopMovement};
