//! Stowage Core -- data model for the storage-room configurator.
//!
//! This crate holds everything the placement engine reads: object kinds,
//! footprints, room layouts, and the caller-owned set of placed objects.
//! It has no placement logic of its own; see `stowage-spatial`.
//!
//! # Key Types
//!
//! - [`kind::ObjectKind`] -- Closed enumeration of placeable kinds, plus
//!   [`kind::ObjectKind::canonicalize`] for free-form labels.
//! - [`catalog::FootprintCatalog`] -- Immutable kind -> bounding box table.
//!   Total: unknown kinds get [`catalog::Footprint::DEFAULT`].
//! - [`layout::RoomLayoutConfig`] / [`layout::RoomSize`] -- Shelf grid of
//!   each rentable room size class.
//! - [`scene::PlacedSet`] -- Placed objects in placement order, keyed by
//!   generational [`id::ObjectId`]s.
//! - [`rng::PlacementRng`] -- Seedable SplitMix64 used for fallback jitter.
//! - [`snapshot::RoomSession`] -- Versioned binary save/restore of a room.

pub mod catalog;
pub mod geometry;
pub mod id;
pub mod kind;
pub mod layout;
pub mod rng;
pub mod scene;
pub mod snapshot;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
