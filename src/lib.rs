//! Terra Strategica - deterministic simulation core for a tick-driven
//! territorial strategy game

pub mod actions;
pub mod ai;
pub mod campaign;
pub mod core;
pub mod economy;
pub mod simulation;
pub mod world;
pub mod worldgen;
