//! Elevation/moisture fields and terrain classification

use glam::DVec2;

use crate::core::config::MapConfig;
use crate::core::types::Terrain;

/// Smooth periodic field in `[-1, 1]`
fn field(position: DVec2, frequency: f64, seed: f64) -> f64 {
    (position.x * frequency + seed).sin() * (position.y * frequency + seed * 2.0).cos()
}

/// Elevation and moisture at a site, each in `[0, 1]`
pub fn sample(position: DVec2, config: &MapConfig) -> (f64, f64) {
    let elevation = (field(position, config.noise_frequency, config.elevation_seed) + 1.0) / 2.0;
    let moisture = (field(position, config.noise_frequency, config.moisture_seed) + 1.0) / 2.0;
    (elevation, moisture)
}

pub fn classify(elevation: f64, moisture: f64, config: &MapConfig) -> Terrain {
    if elevation > config.mountain_elevation {
        Terrain::Mountain
    } else if elevation < config.water_elevation {
        Terrain::Water
    } else if moisture > config.swamp_moisture && elevation < config.swamp_max_elevation {
        Terrain::Swamp
    } else if moisture > config.forest_moisture {
        Terrain::Forest
    } else if moisture < config.desert_moisture {
        Terrain::Desert
    } else {
        Terrain::Plains
    }
}

pub fn terrain_at(position: DVec2, config: &MapConfig) -> Terrain {
    let (elevation, moisture) = sample(position, config);
    classify(elevation, moisture, config)
}
