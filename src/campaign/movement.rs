//! Troop movements between regions
//!
//! A movement advances by a fixed amount of progress per tick and resolves
//! exactly once, on the tick its progress reaches 1.0.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::battle::{self, BattleOutcome};
use crate::core::config::GameConfig;
use crate::core::types::{Faction, MovementId, RegionId, Tick};
use crate::world::region::Region;
use crate::world::resources::{Rates, Stockpiles};

/// Sequential movement id source, owned by the game state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementIds(u64);

impl MovementIds {
    pub fn next_id(&mut self) -> MovementId {
        let id = MovementId(self.0);
        self.0 += 1;
        id
    }
}

/// Troops in transit from one region to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TroopMovement {
    pub id: MovementId,
    pub source: RegionId,
    pub target: RegionId,
    pub owner: Faction,
    pub amount: f64,
    /// Fraction of the trip completed, in `[0, 1)` while active
    pub progress: f64,
    pub origin: DVec2,
    pub destination: DVec2,
    pub color: String,
}

impl TroopMovement {
    pub fn new(id: MovementId, source: &Region, target: &Region, amount: f64) -> Self {
        Self {
            id,
            source: source.id,
            target: target.id,
            owner: source.owner,
            amount,
            progress: 0.0,
            origin: source.position,
            destination: target.position,
            color: source.owner.color().to_string(),
        }
    }

    /// Interpolated map position
    pub fn current_position(&self) -> DVec2 {
        self.origin.lerp(self.destination, self.progress.clamp(0.0, 1.0))
    }

    pub fn has_arrived(&self) -> bool {
        self.progress >= 1.0
    }
}

/// What happened when a movement reached its target
#[derive(Debug, Clone, PartialEq)]
pub enum ArrivalEvent {
    Reinforced {
        movement: MovementId,
        region: RegionId,
        amount: f64,
    },
    Battle {
        movement: MovementId,
        region: RegionId,
        attacker: Faction,
        outcome: BattleOutcome,
    },
    /// Target id did not resolve; the troops are lost
    Vanished {
        movement: MovementId,
        region: RegionId,
    },
}

/// Advance every movement one tick and resolve arrivals
///
/// Troops in transit cost upkeep before they move. Returns the movements
/// still in flight, in their original order, and the arrival events.
pub fn advance_movements(
    movements: Vec<TroopMovement>,
    regions: &mut [Region],
    stockpiles: &mut Stockpiles,
    rates: &mut Rates,
    config: &GameConfig,
    tick: Tick,
) -> (Vec<TroopMovement>, Vec<ArrivalEvent>) {
    let mut in_flight = Vec::with_capacity(movements.len());
    let mut events = Vec::new();

    for mut movement in movements {
        let upkeep = movement.amount * config.economy.maintenance_per_troop;
        stockpiles[movement.owner].credit_money_clamped(-upkeep);
        rates[movement.owner].money -= upkeep;

        movement.progress += config.military.movement_speed;
        if movement.has_arrived() {
            events.push(resolve_arrival(&movement, regions, stockpiles, config, tick));
        } else {
            in_flight.push(movement);
        }
    }

    (in_flight, events)
}

fn resolve_arrival(
    movement: &TroopMovement,
    regions: &mut [Region],
    stockpiles: &mut Stockpiles,
    config: &GameConfig,
    tick: Tick,
) -> ArrivalEvent {
    let Some(target) = regions
        .get_mut(movement.target.index())
        .filter(|r| r.id == movement.target)
    else {
        warn!(movement = ?movement.id, target = %movement.target, "Movement arrived at unknown region");
        return ArrivalEvent::Vanished {
            movement: movement.id,
            region: movement.target,
        };
    };

    if target.owner == movement.owner {
        target.add_garrison(movement.amount, &config.military);
        return ArrivalEvent::Reinforced {
            movement: movement.id,
            region: target.id,
            amount: movement.amount,
        };
    }

    let outcome = battle::resolve_battle(
        movement.owner,
        movement.amount,
        target,
        stockpiles,
        config,
        tick,
    );
    ArrivalEvent::Battle {
        movement: movement.id,
        region: target.id,
        attacker: movement.owner,
        outcome,
    }
}
