//! Simulation driver: tick processing, status evaluation and session glue

pub mod report;
pub mod session;
pub mod status;
pub mod tick;

pub use report::{FactionSummary, GameSummary};
pub use status::evaluate_status;
pub use tick::{run_ticks, tick};
