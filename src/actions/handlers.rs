//! Recruit, upgrade, found and dispatch

use tracing::{debug, info};

use super::ActionError;
use crate::campaign::movement::TroopMovement;
use crate::core::config::GameConfig;
use crate::core::types::{MovementId, RegionId, RegionKind, Terrain};
use crate::world::region::{Attribute, Region};
use crate::world::resources::Stockpiles;

pub type ActionResult<T> = std::result::Result<T, ActionError>;

/// Raise troops, clamped to the remaining garrison headroom
///
/// Works on any held region; wilderness has the level-0 cap. Cost is
/// charged for the clamped amount actually recruited.
pub fn try_recruit(
    region: &Region,
    amount: f64,
    stockpiles: &Stockpiles,
    config: &GameConfig,
) -> ActionResult<(Region, Stockpiles)> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ActionError::InvalidAmount(amount));
    }

    let actual = amount.min(region.garrison_headroom(&config.military));
    if actual <= 0.0 {
        return Err(ActionError::GarrisonFull(region.id));
    }

    let cost = config.military.recruit_cost(actual);
    if !stockpiles[region.owner].covers(&cost) {
        return Err(ActionError::InsufficientResources {
            faction: region.owner,
            action: "recruit",
        });
    }

    let mut stockpiles = *stockpiles;
    stockpiles[region.owner] -= cost;
    let mut region = region.clone();
    region.garrison += actual;
    Ok((region, stockpiles))
}

/// Raise one level attribute by one step
///
/// Subordinate attributes cannot pass the settlement level. Cost grows
/// exponentially with the attribute's current value.
pub fn try_upgrade_attribute(
    region: &Region,
    attribute: Attribute,
    stockpiles: &Stockpiles,
    config: &GameConfig,
) -> ActionResult<(Region, Stockpiles)> {
    let current = region.attribute(attribute);
    if attribute.is_subordinate() && current >= region.level {
        return Err(ActionError::AttributeAtCap {
            attribute,
            level: region.level,
        });
    }

    let cost = config.military.upgrade_cost(current);
    if !stockpiles[region.owner].covers(&cost) {
        return Err(ActionError::InsufficientResources {
            faction: region.owner,
            action: "upgrade",
        });
    }

    let mut stockpiles = *stockpiles;
    stockpiles[region.owner] -= cost;
    let mut region = region.clone();
    *region.attribute_mut(attribute) += 1;
    Ok((region, stockpiles))
}

/// Turn held wilderness into a level-1 settlement
///
/// The existing garrison is kept and a militia bonus is added on top.
pub fn try_found_region(
    region: &Region,
    stockpiles: &Stockpiles,
    config: &GameConfig,
) -> ActionResult<(Region, Stockpiles)> {
    if region.kind != RegionKind::Unclaimed {
        return Err(ActionError::NotUnclaimed(region.id));
    }
    if region.terrain == Terrain::Water {
        return Err(ActionError::Uninhabitable(region.id));
    }

    let military = &config.military;
    let cost = military.founding_cost();
    if !stockpiles[region.owner].covers(&cost) {
        return Err(ActionError::InsufficientResources {
            faction: region.owner,
            action: "found a settlement",
        });
    }

    let mut stockpiles = *stockpiles;
    stockpiles[region.owner] -= cost;

    let mut founded = region.clone().as_settlement();
    founded.population = military.founded_population;
    founded.carrying_capacity = founded.terrain.modifiers().capacity;
    founded.add_garrison(military.founding_militia, military);

    info!(region = %founded.id, name = %founded.name, owner = ?founded.owner, "Settlement founded");
    Ok((founded, stockpiles))
}

/// Send troops from `source` toward `target`
///
/// Only the target's existence is checked; adjacency is the caller's concern.
pub fn try_dispatch_troops(
    source: &Region,
    target: RegionId,
    amount: f64,
    regions: &[Region],
    id: MovementId,
) -> ActionResult<(Region, TroopMovement)> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ActionError::InvalidAmount(amount));
    }
    if amount > source.garrison {
        return Err(ActionError::InsufficientGarrison {
            requested: amount,
            available: source.garrison,
        });
    }
    let destination = regions
        .iter()
        .find(|r| r.id == target)
        .ok_or(ActionError::UnknownTarget(target))?;

    let mut source = source.clone();
    source.garrison -= amount;
    let movement = TroopMovement::new(id, &source, destination, amount);
    Ok((source, movement))
}

pub fn recruit(
    region: &Region,
    amount: f64,
    stockpiles: &Stockpiles,
    config: &GameConfig,
) -> (Region, Stockpiles) {
    try_recruit(region, amount, stockpiles, config)
        .unwrap_or_else(|err| rejected(err, region, stockpiles))
}

pub fn upgrade_attribute(
    region: &Region,
    attribute: Attribute,
    stockpiles: &Stockpiles,
    config: &GameConfig,
) -> (Region, Stockpiles) {
    try_upgrade_attribute(region, attribute, stockpiles, config)
        .unwrap_or_else(|err| rejected(err, region, stockpiles))
}

pub fn found_region(region: &Region, stockpiles: &Stockpiles, config: &GameConfig) -> (Region, Stockpiles) {
    try_found_region(region, stockpiles, config).unwrap_or_else(|err| rejected(err, region, stockpiles))
}

pub fn dispatch_troops(
    source: &Region,
    target: RegionId,
    amount: f64,
    regions: &[Region],
    id: MovementId,
) -> (Region, Option<TroopMovement>) {
    match try_dispatch_troops(source, target, amount, regions, id) {
        Ok((source, movement)) => (source, Some(movement)),
        Err(err) => {
            debug!(region = %source.id, kind = ?err.kind(), "Dispatch rejected: {}", err);
            (source.clone(), None)
        }
    }
}

fn rejected(err: ActionError, region: &Region, stockpiles: &Stockpiles) -> (Region, Stockpiles) {
    debug!(region = %region.id, kind = ?err.kind(), "Action rejected: {}", err);
    (region.clone(), *stockpiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::RejectionKind;
    use crate::core::types::Faction;
    use crate::world::resources::Resources;
    use glam::DVec2;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn rich() -> Stockpiles {
        let mut stockpiles = Stockpiles::default();
        stockpiles[Faction::Player] = Resources {
            food: 1000.0,
            industry: 1000.0,
            money: 1000.0,
            manpower: 1000.0,
            ..Resources::ZERO
        };
        stockpiles
    }

    fn town() -> Region {
        Region::new(RegionId(0), DVec2::ZERO, Terrain::Plains)
            .with_owner(Faction::Player)
            .as_settlement()
            .with_garrison(100.0)
    }

    fn wilderness() -> Region {
        Region::new(RegionId(1), DVec2::new(40.0, 0.0), Terrain::Forest)
            .with_owner(Faction::Player)
            .with_garrison(10.0)
            .with_population(30.0, 240.0)
    }

    #[test]
    fn test_recruit_clamps_and_charges_actual_amount() {
        let (region, stockpiles) = try_recruit(&town(), 80.0, &rich(), &config()).unwrap();
        assert_eq!(region.garrison, 150.0);
        assert_eq!(stockpiles[Faction::Player].money, 950.0);
        assert_eq!(stockpiles[Faction::Player].industry, 975.0);
        assert_eq!(stockpiles[Faction::Player].manpower, 950.0);
    }

    #[test]
    fn test_recruit_rejections() {
        let full = town().with_garrison(150.0);
        let err = try_recruit(&full, 10.0, &rich(), &config()).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::CapacityExceeded);

        let err = try_recruit(&town(), 10.0, &Stockpiles::default(), &config()).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::InsufficientResources);

        let (region, stockpiles) = recruit(&town(), 10.0, &Stockpiles::default(), &config());
        assert_eq!(region, town());
        assert_eq!(stockpiles, Stockpiles::default());
    }

    #[test]
    fn test_upgrade_respects_level_cap() {
        let err = try_upgrade_attribute(&town(), Attribute::Industry, &rich(), &config()).unwrap_err();
        assert!(matches!(err, ActionError::AttributeAtCap { level: 1, .. }));

        let (region, stockpiles) = try_upgrade_attribute(&town(), Attribute::Level, &rich(), &config()).unwrap();
        assert_eq!(region.level, 2);
        // level 1 costs 100 * 1.2 money and 50 * 1.2 industry
        assert!((stockpiles[Faction::Player].money - 880.0).abs() < 1e-9);
        assert!((stockpiles[Faction::Player].industry - 940.0).abs() < 1e-9);

        let (region, _) = try_upgrade_attribute(&region, Attribute::Industry, &stockpiles, &config()).unwrap();
        assert_eq!(region.industry_level, 2);
    }

    #[test]
    fn test_recruit_on_held_wilderness() {
        let (region, stockpiles) = recruit(&wilderness(), 20.0, &rich(), &config());
        assert_eq!(region.garrison, 30.0);
        assert!(!region.is_settlement());
        assert_eq!(stockpiles[Faction::Player].money, 980.0);

        // level 0 caps wilderness at 50
        let (region, _) = recruit(&wilderness(), 100.0, &rich(), &config());
        assert_eq!(region.garrison, 50.0);
    }

    #[test]
    fn test_upgrade_level_on_held_wilderness() {
        let (region, stockpiles) = upgrade_attribute(&wilderness(), Attribute::Level, &rich(), &config());
        assert_eq!(region.level, 1);
        assert_eq!(region.kind, RegionKind::Unclaimed);
        assert_eq!(stockpiles[Faction::Player].money, 900.0);

        let err = try_upgrade_attribute(&wilderness(), Attribute::Commerce, &rich(), &config()).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::CapacityExceeded);
    }

    #[test]
    fn test_found_region_promotes_and_keeps_garrison() {
        let (region, stockpiles) = try_found_region(&wilderness(), &rich(), &config()).unwrap();
        assert!(region.is_settlement());
        assert_eq!(region.level, 1);
        assert_eq!(region.fortification_level, 1);
        assert_eq!(region.population, 500.0);
        assert_eq!(region.carrying_capacity, 1200.0);
        assert_eq!(region.garrison, 60.0);
        assert_eq!(stockpiles[Faction::Player].money, 500.0);
        assert_eq!(stockpiles[Faction::Player].industry, 700.0);
        assert_eq!(stockpiles[Faction::Player].manpower, 800.0);
    }

    #[test]
    fn test_found_on_settlement_is_noop() {
        let (region, stockpiles) = found_region(&town(), &rich(), &config());
        assert_eq!(region, town());
        assert_eq!(stockpiles, rich());
        assert_eq!(
            try_found_region(&town(), &rich(), &config()).unwrap_err().kind(),
            RejectionKind::IneligibleState
        );
    }

    #[test]
    fn test_dispatch() {
        let regions = vec![town(), wilderness()];
        let (source, movement) = dispatch_troops(&regions[0], RegionId(1), 40.0, &regions, MovementId(9));
        let movement = movement.unwrap();
        assert_eq!(source.garrison, 60.0);
        assert_eq!(movement.amount, 40.0);
        assert_eq!(movement.destination, regions[1].position);
        assert_eq!(movement.progress, 0.0);

        let (source, movement) = dispatch_troops(&regions[0], RegionId(1), 400.0, &regions, MovementId(10));
        assert!(movement.is_none());
        assert_eq!(source.garrison, 100.0);

        let err = try_dispatch_troops(&regions[0], RegionId(77), 5.0, &regions, MovementId(11)).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::InvalidTarget);
    }
}
