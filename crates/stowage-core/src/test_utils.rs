//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::catalog::{Footprint, FootprintCatalog};
use crate::geometry::{Aabb, COLLISION_EPSILON, Vec3};
use crate::kind::ObjectKind;
use crate::layout::{RoomLayoutConfig, RoomSize};
use crate::scene::{PlacedObject, PlacedSet};

// ===========================================================================
// Fixtures
// ===========================================================================

/// The two-shelf room used throughout the scenario tests.
pub fn two_shelf_layout() -> RoomLayoutConfig {
    RoomSize::Small.layout()
}

pub fn catalog() -> FootprintCatalog {
    FootprintCatalog::standard()
}

pub fn box_a() -> ObjectKind {
    ObjectKind::BoxA
}

pub fn box_d() -> ObjectKind {
    ObjectKind::BoxD
}

pub fn shelf() -> ObjectKind {
    ObjectKind::Shelf
}

pub fn v(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

// ===========================================================================
// Assertions
// ===========================================================================

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Every pair of non-shelf objects whose boxes overlap.
pub fn overlapping_pairs<'a>(
    set: &'a PlacedSet,
    catalog: &FootprintCatalog,
) -> Vec<(&'a PlacedObject, &'a PlacedObject)> {
    let boxes: Vec<(&PlacedObject, Aabb)> = set
        .boxes()
        .map(|o| (o, Aabb::from_center(o.position, &catalog.footprint_of(&o.kind))))
        .collect();

    let mut pairs = Vec::new();
    for (i, (a, aabb_a)) in boxes.iter().enumerate() {
        for (b, aabb_b) in &boxes[i + 1..] {
            if aabb_a.overlaps(aabb_b, COLLISION_EPSILON) {
                pairs.push((*a, *b));
            }
        }
    }
    pairs
}

/// Fill `set` with `count` objects of `kind` laid out in a line along x,
/// spaced so they never touch.
pub fn line_of(set: &mut PlacedSet, kind: ObjectKind, footprint: Footprint, start: Vec3, count: usize) {
    for i in 0..count {
        let x = start.x + i as f64 * (footprint.width + 0.1);
        set.insert(kind.clone(), Vec3::new(x, start.y, start.z));
    }
}
