//! Expanding-ring search for the closest collision-free position.

use crate::collision::collides;
use stowage_core::catalog::{Footprint, FootprintCatalog};
use stowage_core::geometry::Vec3;
use stowage_core::scene::PlacedSet;

/// Extra clearance added to the ring step.
pub const SEARCH_MARGIN: f64 = 0.05;

/// Center first, then the eight compass directions clockwise from north.
const RING: [(f64, f64); 9] = [
    (0.0, 0.0),
    (0.0, -1.0),
    (1.0, -1.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (-1.0, 1.0),
    (-1.0, 0.0),
    (-1.0, -1.0),
];

/// Closest free position to `spawn` for an object of `footprint`.
///
/// Rings grow from radius 0 by `max(width, depth) + SEARCH_MARGIN` until
/// the radius exceeds `max_radius`. Radius 0 tests only the spawn point;
/// every later ring tests the eight compass offsets of [`RING`] scaled by
/// the radius, in that fixed order, so a nearer ring always wins over a
/// farther one. Height is kept at `spawn.y`.
pub fn nearest_free(
    spawn: Vec3,
    footprint: &Footprint,
    max_radius: f64,
    placed: &PlacedSet,
    catalog: &FootprintCatalog,
) -> Option<Vec3> {
    let step = footprint.max_floor_extent().max(0.0) + SEARCH_MARGIN;
    let mut radius = 0.0;

    while radius <= max_radius {
        let offsets = if radius == 0.0 { &RING[..1] } else { &RING[1..] };
        for &(dx, dz) in offsets {
            let candidate = Vec3::new(spawn.x + dx * radius, spawn.y, spawn.z + dz * radius);
            if !collides(candidate, footprint, placed, catalog, &[]) {
                return Some(candidate);
            }
        }
        radius += step;
    }
    None
}
