//! Shelf slot allocation for boxes.
//!
//! Every shelf has four fixed levels. On each level, a box kind gets a
//! row-major grid of slots sized from its footprint. Occupancy is recomputed
//! from the placed set on every call, so allocation is idempotent.
//!
//! Level eligibility is kind-dependent:
//!
//! - `D` boxes only go on the top level, and skip the shelf entirely once
//!   the three lower levels are full.
//! - Every other kind uses the lower levels only, and loses level 2 once
//!   the top level is full.

use crate::collision::collides;
use stowage_core::catalog::{Footprint, FootprintCatalog};
use stowage_core::geometry::Vec3;
use stowage_core::kind::ObjectKind;
use stowage_core::layout::RoomLayoutConfig;
use stowage_core::scene::{PlacedObject, PlacedSet};

/// Height of each level above the shelf's own position.
pub const LEVELS_Y: [f64; 4] = [0.05, 0.55, 1.05, 1.57];

/// Index of the top level.
pub const TOP_LEVEL: usize = 3;

/// Gap between neighbouring slots on a level.
pub const SLOT_GAP: f64 = 0.02;

/// How far outside a shelf's footprint a box still counts as on that shelf.
pub const SHELF_MARGIN: f64 = 0.05;

/// Slot grid of one box kind on one shelf level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    pub columns: usize,
    pub rows: usize,
}

impl SlotGrid {
    /// Slots per level for a box of `footprint`, `SLOT_GAP` apart.
    pub fn for_box(layout: &RoomLayoutConfig, footprint: &Footprint) -> Self {
        let fit = |space: f64, size: f64| ((space + SLOT_GAP) / (size + SLOT_GAP)).floor().max(0.0);
        Self {
            columns: fit(layout.shelf_width, footprint.width) as usize,
            rows: fit(layout.shelf_depth, footprint.depth) as usize,
        }
    }

    /// Slots per level.
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }
}

/// Box counts per level of one shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShelfOccupancy {
    pub levels: [usize; 4],
}

impl ShelfOccupancy {
    /// Whether `level` holds `capacity` boxes or more. Levels past the top
    /// are never full.
    pub fn is_full(&self, level: usize, capacity: usize) -> bool {
        self.levels.get(level).is_some_and(|&n| n >= capacity)
    }

    /// Boxes on the shelf across all levels.
    pub fn total(&self) -> usize {
        self.levels.iter().sum()
    }
}

/// Whether a box center lies over the shelf's footprint (plus margin).
fn is_on_shelf(shelf: &PlacedObject, layout: &RoomLayoutConfig, position: Vec3) -> bool {
    (position.x - shelf.position.x).abs() <= layout.shelf_width / 2.0 + SHELF_MARGIN
        && (position.z - shelf.position.z).abs() <= layout.shelf_depth / 2.0 + SHELF_MARGIN
}

/// Level whose height is closest to a box resting at `y`.
fn nearest_level(shelf_y: f64, y: f64) -> usize {
    let rel = y - shelf_y;
    let mut best = 0;
    for (i, level_y) in LEVELS_Y.iter().enumerate() {
        if (rel - level_y).abs() < (rel - LEVELS_Y[best]).abs() {
            best = i;
        }
    }
    best
}

/// Count the boxes sitting on each level of `shelf`.
pub fn shelf_occupancy(
    shelf: &PlacedObject,
    placed: &PlacedSet,
    layout: &RoomLayoutConfig,
) -> ShelfOccupancy {
    let mut occupancy = ShelfOccupancy::default();
    for b in placed.boxes().filter(|b| is_on_shelf(shelf, layout, b.position)) {
        occupancy.levels[nearest_level(shelf.position.y, b.position.y)] += 1;
    }
    occupancy
}

/// Levels `kind` may use given the shelf's current occupancy.
pub fn eligible_levels(kind: &ObjectKind, occupancy: &ShelfOccupancy, capacity: usize) -> Vec<usize> {
    if matches!(kind, ObjectKind::BoxD) {
        let lower_full = (0..TOP_LEVEL).all(|l| occupancy.is_full(l, capacity));
        if lower_full { Vec::new() } else { vec![TOP_LEVEL] }
    } else if occupancy.is_full(TOP_LEVEL, capacity) {
        vec![0, 1]
    } else {
        vec![0, 1, 2]
    }
}

/// Slot centers of `grid` on one level of a shelf, row-major.
fn slot_positions(
    shelf: Vec3,
    level: usize,
    grid: SlotGrid,
    footprint: &Footprint,
    nudge: (f64, f64),
    layout: &RoomLayoutConfig,
) -> impl Iterator<Item = Vec3> {
    let x0 = shelf.x - layout.shelf_width / 2.0 + footprint.width / 2.0 + nudge.0;
    let z0 = shelf.z - layout.shelf_depth / 2.0 + footprint.depth / 2.0 + nudge.1;
    let y = shelf.y + LEVELS_Y[level];
    let pitch_x = footprint.width + SLOT_GAP;
    let pitch_z = footprint.depth + SLOT_GAP;

    (0..grid.rows).flat_map(move |r| {
        (0..grid.columns)
            .map(move |c| Vec3::new(x0 + c as f64 * pitch_x, y, z0 + r as f64 * pitch_z))
    })
}

/// First free shelf slot for a box of `kind`, or `None` if every eligible
/// slot on every shelf is taken.
///
/// Shelves are tried in placement order, levels in ascending order, slots
/// row-major.
pub fn find_shelf_slot(
    kind: &ObjectKind,
    placed: &PlacedSet,
    catalog: &FootprintCatalog,
    layout: &RoomLayoutConfig,
) -> Option<Vec3> {
    let footprint = catalog.footprint_of(kind);
    let nudge = catalog.slot_nudge(kind);
    let grid = SlotGrid::for_box(layout, &footprint);
    if grid.capacity() == 0 {
        return None;
    }

    for shelf in placed.shelves() {
        let occupancy = shelf_occupancy(shelf, placed, layout);
        for level in eligible_levels(kind, &occupancy, grid.capacity()) {
            let free = slot_positions(shelf.position, level, grid, &footprint, nudge, layout)
                .find(|&p| !collides(p, &footprint, placed, catalog, &[]));
            if free.is_some() {
                return free;
            }
        }
    }
    None
}
