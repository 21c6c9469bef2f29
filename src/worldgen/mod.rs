//! World generation
//!
//! Scatters sites over the map rectangle, relaxes them with Lloyd passes,
//! builds the final Voronoi diagram and turns every cell into a [`Region`].
//! Faction seats go to the first usable land cells in id order.

pub mod names;
pub mod terrain;
pub mod voronoi;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::core::config::{GameConfig, MapConfig};
use crate::core::types::{Faction, RegionId, Terrain};
use crate::world::region::Region;
use voronoi::Bounds;

/// Generate a world from a seed
pub fn generate(seed: u64, config: &GameConfig) -> Vec<Region> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_world(config, &mut rng)
}

/// Generate the region arena, drawing every random value from `rng`
pub fn generate_world(config: &GameConfig, rng: &mut ChaCha8Rng) -> Vec<Region> {
    let map = &config.map;
    let bounds = Bounds::new(map.width, map.height);

    let sites: Vec<DVec2> = (0..map.site_count)
        .map(|_| DVec2::new(rng.gen_range(0.0..map.width), rng.gen_range(0.0..map.height)))
        .collect();
    let sites = voronoi::lloyd_relaxation(sites, bounds, map.relaxation_passes);
    let cells = voronoi::compute(&sites, bounds);

    let degenerate = cells.iter().filter(|c| c.is_degenerate()).count();
    if degenerate > 0 {
        warn!(degenerate, "Voronoi cells without a polygon");
    }

    let mut seats_filled = 0;
    let mut regions = Vec::with_capacity(cells.len());
    for (i, cell) in cells.into_iter().enumerate() {
        let id = RegionId(i as u32);
        let terrain = terrain::terrain_at(cell.site, map);

        let seat = if terrain.is_passable() && !cell.is_degenerate() {
            let seat = seat_for(seats_filled, map);
            if seat.is_some() {
                seats_filled += 1;
            }
            seat
        } else {
            None
        };

        let neighbors = cell.neighbors.iter().map(|&n| RegionId(n as u32)).collect();
        let region = Region::new(id, cell.site, terrain)
            .with_polygon(cell.polygon)
            .with_neighbors(neighbors);
        regions.push(populate(region, seat, map, rng));
    }

    debug!(
        regions = regions.len(),
        seats = seats_filled,
        water = regions.iter().filter(|r| r.terrain == Terrain::Water).count(),
        "World generated"
    );
    regions
}

/// Faction seated on the `index`-th usable land cell, if any
fn seat_for(index: usize, map: &MapConfig) -> Option<Faction> {
    match index {
        0 => Some(Faction::Player),
        1 => Some(Faction::RivalEmpire),
        n if n < 2 + map.independent_count => Some(Faction::Independent),
        _ => None,
    }
}

fn populate(region: Region, seat: Option<Faction>, map: &MapConfig, rng: &mut ChaCha8Rng) -> Region {
    let capacity = region.terrain.modifiers().capacity;

    if region.terrain == Terrain::Water {
        return region.with_owner(Faction::Independent);
    }

    match seat {
        Some(faction) => {
            let (low, high) = map.settlement_population;
            let population = rng.gen_range(low..high) as f64;
            region
                .with_owner(faction)
                .as_settlement()
                .with_population(population, capacity)
        }
        None => {
            let (low, high) = map.wilderness_population;
            let population = rng.gen_range(low..high) as f64;
            region
                .with_owner(Faction::Barbarian)
                .with_garrison(map.wilderness_garrison)
                .with_population(population, capacity * map.wilderness_capacity_factor)
        }
    }
}
