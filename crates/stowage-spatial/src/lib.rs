//! Spatial placement engine for configuring a rented storage room.
//!
//! Decides where a newly added shelf or box may sit: shelves snap to the
//! room's deterministic anchor grid, boxes are slotted onto existing
//! shelves level by level, and anything else falls back to the nearest
//! collision-free spot around a hint or the last shelf.
//!
//! The engine keeps no state between calls. Each call reads the caller's
//! [`PlacedSet`](stowage_core::scene::PlacedSet) and appends at most one
//! object to it.

use stowage_core::layout::LayoutError;

pub mod collision;
pub mod engine;
pub mod grid;
pub mod guard;
pub mod search;
pub mod slots;

pub use collision::collides;
pub use engine::{PlacementConfig, PlacementEngine, Rejection};
pub use grid::{anchors, shelf_anchor};
pub use guard::{BusyToken, PlacementGuard};
pub use search::nearest_free;
pub use slots::{LEVELS_Y, ShelfOccupancy, SlotGrid, find_shelf_slot, shelf_occupancy};

/// Errors from spatial operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpatialError {
    #[error("shelf anchor {index} out of range (room holds {max} shelves)")]
    AnchorOutOfRange { index: usize, max: usize },
    #[error("invalid room layout: {0}")]
    InvalidLayout(#[from] LayoutError),
}
