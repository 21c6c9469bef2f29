//! Bounded Voronoi diagram and its Delaunay adjacency
//!
//! Each cell is built by clipping the map rectangle against the bisector
//! half-plane of every other site. Clipped edges remember which site
//! produced them, which yields the dual adjacency graph for free.

use ahash::AHashSet;
use geo::Centroid;
use geo_types::{Coord, LineString, Polygon};
use glam::DVec2;
use rayon::prelude::*;

/// Edges shorter than this do not make two cells neighbors
const MIN_SHARED_EDGE: f64 = 1e-6;

/// Which line produced a polygon edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeSource {
    Boundary,
    Site(usize),
}

/// One cell of the diagram
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    pub site: DVec2,
    /// Counter-clockwise vertices; empty for a degenerate cell
    pub polygon: Vec<DVec2>,
    pub neighbors: Vec<usize>,
}

impl VoronoiCell {
    pub fn is_degenerate(&self) -> bool {
        self.polygon.len() < 3
    }
}

/// Axis-aligned map rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn corners(&self) -> Vec<(DVec2, EdgeSource)> {
        vec![
            (DVec2::new(0.0, 0.0), EdgeSource::Boundary),
            (DVec2::new(self.width, 0.0), EdgeSource::Boundary),
            (DVec2::new(self.width, self.height), EdgeSource::Boundary),
            (DVec2::new(0.0, self.height), EdgeSource::Boundary),
        ]
    }
}

/// Build the diagram for `sites` clipped to `bounds`
///
/// Neighbor lists are symmetric and sorted. A site that duplicates an
/// earlier one gets a degenerate cell with no neighbors.
pub fn compute(sites: &[DVec2], bounds: Bounds) -> Vec<VoronoiCell> {
    let clipped: Vec<Vec<(DVec2, EdgeSource)>> = (0..sites.len())
        .into_par_iter()
        .map(|i| clip_cell(i, sites, bounds))
        .collect();

    let mut edges: AHashSet<(usize, usize)> = AHashSet::new();
    for (i, polygon) in clipped.iter().enumerate() {
        for (k, &(start, source)) in polygon.iter().enumerate() {
            let end = polygon[(k + 1) % polygon.len()].0;
            if let EdgeSource::Site(j) = source {
                if clipped[j].len() >= 3 && start.distance(end) > MIN_SHARED_EDGE {
                    edges.insert((i.min(j), i.max(j)));
                }
            }
        }
    }

    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); sites.len()];
    for &(a, b) in &edges {
        neighbors[a].push(b);
        neighbors[b].push(a);
    }

    clipped
        .into_iter()
        .zip(neighbors)
        .zip(sites)
        .map(|((polygon, mut neighbors), &site)| {
            neighbors.sort_unstable();
            let polygon: Vec<DVec2> = polygon.into_iter().map(|(v, _)| v).collect();
            VoronoiCell {
                site,
                polygon: if polygon.len() < 3 { Vec::new() } else { polygon },
                neighbors,
            }
        })
        .collect()
}

fn clip_cell(i: usize, sites: &[DVec2], bounds: Bounds) -> Vec<(DVec2, EdgeSource)> {
    let site = sites[i];
    if !site.is_finite() {
        return Vec::new();
    }

    let mut polygon = bounds.corners();
    for (j, &other) in sites.iter().enumerate() {
        if j == i || !other.is_finite() {
            continue;
        }
        let normal = other - site;
        if normal.length_squared() == 0.0 {
            if j < i {
                return Vec::new();
            }
            continue;
        }
        let midpoint = (site + other) * 0.5;
        polygon = clip_half_plane(&polygon, midpoint, normal, EdgeSource::Site(j));
        if polygon.len() < 3 {
            return Vec::new();
        }
    }
    polygon
}

/// Sutherland-Hodgman step keeping `{p : (p - origin) . normal <= 0}`
fn clip_half_plane(
    polygon: &[(DVec2, EdgeSource)],
    origin: DVec2,
    normal: DVec2,
    cut: EdgeSource,
) -> Vec<(DVec2, EdgeSource)> {
    let side = |p: DVec2| (p - origin).dot(normal);
    let mut out = Vec::with_capacity(polygon.len() + 1);

    for (k, &(a, source)) in polygon.iter().enumerate() {
        let b = polygon[(k + 1) % polygon.len()].0;
        let (da, db) = (side(a), side(b));
        let a_inside = da <= 0.0;
        let b_inside = db <= 0.0;

        match (a_inside, b_inside) {
            (true, true) => out.push((a, source)),
            (true, false) => {
                out.push((a, source));
                out.push((a + (b - a) * (da / (da - db)), cut));
            }
            (false, true) => out.push((a + (b - a) * (da / (da - db)), source)),
            (false, false) => {}
        }
    }
    out
}

/// Area-weighted centroid of a cell polygon
pub fn cell_centroid(polygon: &[DVec2]) -> Option<DVec2> {
    if polygon.len() < 3 {
        return None;
    }
    let ring: Vec<Coord<f64>> = polygon.iter().map(|v| Coord { x: v.x, y: v.y }).collect();
    Polygon::new(LineString::from(ring), Vec::new())
        .centroid()
        .map(|p| DVec2::new(p.x(), p.y()))
        .filter(|c| c.is_finite())
}

/// Move every site to the centroid of its cell, `passes` times
///
/// Sites with degenerate cells stay where they are.
pub fn lloyd_relaxation(mut sites: Vec<DVec2>, bounds: Bounds, passes: usize) -> Vec<DVec2> {
    for _ in 0..passes {
        let cells = compute(&sites, bounds);
        sites = cells
            .iter()
            .map(|cell| cell_centroid(&cell.polygon).unwrap_or(cell.site))
            .collect();
    }
    sites
}
