//! End-of-run summary for the headless runner

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::Result;
use crate::core::types::{Faction, GameStatus, Tick};
use crate::world::resources::Resources;
use crate::world::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionSummary {
    pub faction: Faction,
    pub name: String,
    pub settlements: usize,
    pub regions: usize,
    pub garrison: f64,
    pub in_transit: f64,
    pub upkeep: f64,
    pub stockpile: Resources,
    pub rate: Resources,
}

/// Snapshot of a game for display or JSON output; not a save format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub status: GameStatus,
    pub winner: Option<Faction>,
    pub tick: Tick,
    pub year: u64,
    pub total_population: f64,
    pub settlement_count: usize,
    pub movements: usize,
    pub factions: Vec<FactionSummary>,
}

impl GameState {
    pub fn summary(&self) -> GameSummary {
        let factions = Faction::ALL
            .into_iter()
            .map(|faction| FactionSummary {
                faction,
                name: faction.display_name().to_string(),
                settlements: self.settlement_count(faction),
                regions: self.region_count(faction),
                garrison: self
                    .regions
                    .iter()
                    .filter(|r| r.owner == faction)
                    .map(|r| r.garrison)
                    .sum(),
                in_transit: self
                    .movements
                    .iter()
                    .filter(|m| m.owner == faction)
                    .map(|m| m.amount)
                    .sum(),
                upkeep: self.upkeep(faction),
                stockpile: self.stockpiles[faction],
                rate: self.rates[faction],
            })
            .collect();

        GameSummary {
            status: self.status,
            winner: self.winner,
            tick: self.tick_count,
            year: self.stats.year,
            total_population: self.stats.total_population,
            settlement_count: self.stats.settlement_count,
            movements: self.movements.len(),
            factions,
        }
    }
}

impl GameSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Tick {} (year {}): {:?}{}",
            self.tick,
            self.year,
            self.status,
            self.winner
                .map(|w| format!(", winner {}", w.display_name()))
                .unwrap_or_default()
        )?;
        writeln!(
            f,
            "Population {:.0}, {} settlements, {} movements in flight",
            self.total_population, self.settlement_count, self.movements
        )?;
        for faction in &self.factions {
            writeln!(
                f,
                "  {:<13} settlements {:>3}  regions {:>3}  troops {:>7.1} (+{:.1} moving)  money {:>8.1} ({:+.2}/tick)  industry {:>8.1}  manpower {:>8.1}",
                faction.name,
                faction.settlements,
                faction.regions,
                faction.garrison,
                faction.in_transit,
                faction.stockpile.money,
                faction.rate.money,
                faction.stockpile.industry,
                faction.stockpile.manpower,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use std::sync::Arc;

    #[test]
    fn test_summary_lists_every_faction() {
        let mut config = GameConfig::default();
        config.map.site_count = 30;
        let game = GameState::menu(Arc::new(config)).start_game(2);
        let summary = game.summary();

        assert_eq!(summary.factions.len(), 4);
        assert_eq!(summary.factions[0].settlements, 1);
        assert_eq!(summary.factions[1].name, "Rival Empire");

        let json = summary.to_json().unwrap();
        assert!(json.contains("\"status\": \"Playing\""));
        assert!(summary.to_string().contains("Tick 0 (year 1000)"));
    }
}
