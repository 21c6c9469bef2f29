//! Instant combat resolution when troops arrive at a hostile region
//!
//! One exchange of fire decides the outcome. There is no hidden randomness:
//! identical inputs always give identical results.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::GameConfig;
use crate::core::types::{Faction, Tick};
use crate::world::region::{CombatRecord, Region};
use crate::world::resources::Stockpiles;

/// Outcome of an arrival against a region held by another faction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Region changed hands
    Conquered,
    /// Defender held; the attacking force is lost
    Repelled,
}

/// Casualty arithmetic of one exchange
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatResult {
    pub defender_bonus: f64,
    pub attacker_damage: f64,
    pub defender_damage: f64,
    pub defender_loss: f64,
    pub attacker_survivors: f64,
    pub remaining_garrison: f64,
}

impl CombatResult {
    pub fn defender_falls(&self, config: &GameConfig) -> bool {
        self.remaining_garrison <= config.military.conquest_threshold && self.attacker_survivors > 0.0
    }
}

/// Defender multiplier from fortifications and terrain
pub fn defender_bonus(defender: &Region, config: &GameConfig) -> f64 {
    1.0 + defender.fortification_level as f64 * config.military.defense_per_fortification
        + defender.terrain.modifiers().defense
}

/// Compute the exchange without touching any state
pub fn resolve_combat(amount: f64, defender: &Region, config: &GameConfig) -> CombatResult {
    let base_damage = config.military.base_damage;
    let defender_bonus = defender_bonus(defender, config);

    let attacker_damage = amount * base_damage;
    let defender_damage = defender.garrison * base_damage * defender_bonus;

    let defender_loss = defender.garrison.min(attacker_damage);
    let attacker_survivors = amount - amount.min(defender_damage);

    CombatResult {
        defender_bonus,
        attacker_damage,
        defender_damage,
        defender_loss,
        attacker_survivors,
        remaining_garrison: defender.garrison - defender_loss,
    }
}

/// Fight over `defender` and apply the result
///
/// On conquest the region changes owner, keeps the survivors (up to its cap),
/// loses a settlement level and a fortification level, and the conqueror
/// loots part of the former owner's money. A holding defender that lost a
/// large share of its garrison is put under siege.
pub fn resolve_battle(
    attacker: Faction,
    amount: f64,
    defender: &mut Region,
    stockpiles: &mut Stockpiles,
    config: &GameConfig,
    tick: Tick,
) -> BattleOutcome {
    let military = &config.military;
    let result = resolve_combat(amount, defender, config);
    let garrison_before = defender.garrison;

    defender.garrison = result.remaining_garrison;
    defender.last_combat = Some(CombatRecord {
        attacker: format!("{} invasion force", attacker.display_name()),
        damage_taken: result.defender_loss,
        tick,
    });

    if !result.defender_falls(config) {
        if garrison_before > 0.0 && result.defender_loss >= garrison_before * military.siege_threshold {
            defender.under_siege = true;
            defender.siege_timer = military.siege_duration_ticks;
        }
        debug!(
            region = %defender.id,
            attacker = ?attacker,
            amount,
            loss = result.defender_loss,
            garrison = defender.garrison,
            "Attack repelled"
        );
        return BattleOutcome::Repelled;
    }

    let former = defender.owner;
    defender.owner = attacker;
    defender.morale = military.conquest_morale;
    defender.under_siege = false;
    defender.siege_timer = 0;

    if defender.is_settlement() {
        defender.level = defender.level.saturating_sub(1).max(1);
        defender.fortification_level = defender.fortification_level.saturating_sub(1);
        defender.clamp_attributes();
    }
    defender.garrison = result.attacker_survivors.min(defender.garrison_cap(military));

    if former != attacker {
        let loot = stockpiles[former].money * military.loot_fraction;
        stockpiles[former].money -= loot;
        stockpiles[attacker].money += loot;
    }

    info!(
        region = %defender.id,
        name = %defender.name,
        from = ?former,
        to = ?attacker,
        survivors = defender.garrison,
        "Region conquered"
    );
    BattleOutcome::Conquered
}
