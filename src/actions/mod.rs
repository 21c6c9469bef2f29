//! Player action handlers
//!
//! Every handler is pure: it takes the entities it needs by reference and
//! returns updated copies. The `try_*` forms report why an action was
//! rejected; the plain forms log the rejection and hand the input back.

pub mod handlers;

use thiserror::Error;

use crate::core::types::{Faction, RegionId};
use crate::world::region::Attribute;

pub use handlers::{
    dispatch_troops, found_region, recruit, try_dispatch_troops, try_found_region, try_recruit,
    try_upgrade_attribute, upgrade_attribute,
};

/// Broad reason an action was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    InsufficientResources,
    CapacityExceeded,
    InvalidTarget,
    IneligibleState,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("{faction:?} cannot afford to {action}")]
    InsufficientResources {
        faction: Faction,
        action: &'static str,
    },

    #[error("requested {requested} troops but only {available} are stationed")]
    InsufficientGarrison { requested: f64, available: f64 },

    #[error("garrison of region {0} is at its cap")]
    GarrisonFull(RegionId),

    #[error("{attribute:?} is already at settlement level {level}")]
    AttributeAtCap { attribute: Attribute, level: u32 },

    #[error("unknown target region {0}")]
    UnknownTarget(RegionId),

    #[error("invalid troop amount {0}")]
    InvalidAmount(f64),

    #[error("region {0} is not unclaimed wilderness")]
    NotUnclaimed(RegionId),

    #[error("region {0} cannot be settled")]
    Uninhabitable(RegionId),
}

impl ActionError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            ActionError::InsufficientResources { .. } | ActionError::InsufficientGarrison { .. } => {
                RejectionKind::InsufficientResources
            }
            ActionError::GarrisonFull(_) | ActionError::AttributeAtCap { .. } => {
                RejectionKind::CapacityExceeded
            }
            ActionError::UnknownTarget(_) | ActionError::InvalidAmount(_) => {
                RejectionKind::InvalidTarget
            }
            ActionError::NotUnclaimed(_) | ActionError::Uninhabitable(_) => {
                RejectionKind::IneligibleState
            }
        }
    }
}
