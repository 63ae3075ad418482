//! Placement orchestrator: the single entry point for adding an object.
//!
//! Decision sequence for `place(kind, hint)`:
//!
//! 1. **Shelf cap** -- a shelf is rejected once the room holds
//!    `rows * per_row` shelves.
//! 2. **Hint** -- a collision-free hint is used as-is; a colliding hint is
//!    moved to the nearest free spot within `hint_search_radius`.
//! 3. **Shelf grid** -- shelves take the first unoccupied grid anchor.
//! 4. **Shelf slot** -- boxes take the first free eligible shelf slot.
//! 5. **Fallback** -- a jittered point near the last shelf (or near the
//!    room center when there are no shelves) refined by nearest-free search.
//!
//! The engine holds no state between calls; randomness comes from the
//! caller's [`PlacementRng`].

use crate::SpatialError;
use crate::collision::collides;
use crate::grid::anchors;
use crate::search::nearest_free;
use crate::slots::find_shelf_slot;
use stowage_core::catalog::{Footprint, FootprintCatalog};
use stowage_core::geometry::{COLLISION_EPSILON, Vec3};
use stowage_core::id::ObjectId;
use stowage_core::kind::ObjectKind;
use stowage_core::layout::RoomLayoutConfig;
use stowage_core::rng::PlacementRng;
use stowage_core::scene::PlacedSet;

/// Why a placement request produced no object. The caller treats this as a
/// no-op, not a failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("room already holds the maximum of {limit} shelves")]
    ShelfLimitReached { limit: usize },
    #[error("no free position found for {kind}")]
    NoFreeSpace { kind: ObjectKind },
}

/// Tunables of the decision sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// Search radius around a colliding hint.
    pub hint_search_radius: f64,
    /// Search radius around the jittered fallback point.
    pub fallback_search_radius: f64,
    /// Half-size of the square jitter around the last shelf.
    pub shelf_jitter: f64,
    /// Radius of the jitter disc around the room center.
    pub center_jitter: f64,
    /// Accept the raw fallback point even if it collides, instead of
    /// rejecting with [`Rejection::NoFreeSpace`].
    pub allow_overlapping_fallback: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            hint_search_radius: 1.5,
            fallback_search_radius: 3.0,
            shelf_jitter: 0.5,
            center_jitter: 1.0,
            allow_overlapping_fallback: false,
        }
    }
}

/// Places objects into a room described by a catalog and a layout.
#[derive(Debug, Clone)]
pub struct PlacementEngine<'a> {
    catalog: &'a FootprintCatalog,
    layout: &'a RoomLayoutConfig,
    config: PlacementConfig,
}

impl<'a> PlacementEngine<'a> {
    /// Create an engine with the default config. Fails if the layout is
    /// malformed.
    pub fn new(
        catalog: &'a FootprintCatalog,
        layout: &'a RoomLayoutConfig,
    ) -> Result<Self, SpatialError> {
        Self::with_config(catalog, layout, PlacementConfig::default())
    }

    /// Create an engine with explicit tunables.
    pub fn with_config(
        catalog: &'a FootprintCatalog,
        layout: &'a RoomLayoutConfig,
        config: PlacementConfig,
    ) -> Result<Self, SpatialError> {
        layout.validate()?;
        Ok(Self {
            catalog,
            layout,
            config,
        })
    }

    /// Number of placed objects of `kind`.
    pub fn count_of(&self, placed: &PlacedSet, kind: &ObjectKind) -> usize {
        placed.count_of(kind)
    }

    /// Place one object of `kind`, optionally near `hint`, and append it to
    /// `placed`. On rejection `placed` is left untouched.
    pub fn place(
        &self,
        placed: &mut PlacedSet,
        kind: ObjectKind,
        hint: Option<Vec3>,
        rng: &mut PlacementRng,
    ) -> Result<ObjectId, Rejection> {
        let position = self.resolve(placed, &kind, hint, rng)?;
        log::debug!(
            "placed {kind} at ({:.3}, {:.3}, {:.3})",
            position.x,
            position.y,
            position.z
        );
        Ok(placed.insert(kind, position))
    }

    /// Decide where an object of `kind` would go without placing it.
    pub fn resolve(
        &self,
        placed: &PlacedSet,
        kind: &ObjectKind,
        hint: Option<Vec3>,
        rng: &mut PlacementRng,
    ) -> Result<Vec3, Rejection> {
        let footprint = self.catalog.footprint_of(kind);

        if kind.is_shelf() {
            let limit = self.layout.max_shelves();
            if placed.shelves().count() >= limit {
                log::debug!("rejecting shelf: limit of {limit} reached");
                return Err(Rejection::ShelfLimitReached { limit });
            }
        }

        if let Some(hint) = hint {
            if !self.collides(hint, &footprint, placed) {
                return Ok(hint);
            }
            if let Some(found) = nearest_free(
                hint,
                &footprint,
                self.config.hint_search_radius,
                placed,
                self.catalog,
            ) {
                log::debug!("hint for {kind} collided, moved to nearest free spot");
                return Ok(found);
            }
            log::debug!("no free spot near hint for {kind}");
        }

        if kind.is_shelf() {
            if let Some(anchor) = self.free_anchor(placed) {
                return Ok(anchor);
            }
        } else if let Some(slot) = find_shelf_slot(kind, placed, self.catalog, self.layout) {
            return Ok(slot);
        }

        self.fallback(placed, kind, &footprint, rng)
    }

    fn collides(&self, position: Vec3, footprint: &Footprint, placed: &PlacedSet) -> bool {
        collides(position, footprint, placed, self.catalog, &[])
    }

    /// First grid anchor without a shelf on it.
    ///
    /// Below the shelf cap at least one anchor is always free, even after
    /// shelves have been removed out of order or placed off-grid by hint.
    fn free_anchor(&self, placed: &PlacedSet) -> Option<Vec3> {
        anchors(self.layout).find(|anchor| {
            !placed
                .shelves()
                .any(|s| s.position.horizontal_distance(anchor) < COLLISION_EPSILON)
        })
    }

    fn fallback(
        &self,
        placed: &PlacedSet,
        kind: &ObjectKind,
        footprint: &Footprint,
        rng: &mut PlacementRng,
    ) -> Result<Vec3, Rejection> {
        let raw = match placed.last_shelf() {
            Some(shelf) => {
                let j = self.config.shelf_jitter;
                shelf.position + Vec3::new(rng.range(-j, j), 0.0, rng.range(-j, j))
            }
            None => {
                let r = self.config.center_jitter * rng.next_f64().sqrt();
                let theta = rng.range(0.0, std::f64::consts::TAU);
                self.layout.center() + Vec3::new(r * theta.cos(), 0.0, r * theta.sin())
            }
        };

        if let Some(found) = nearest_free(
            raw,
            footprint,
            self.config.fallback_search_radius,
            placed,
            self.catalog,
        ) {
            return Ok(found);
        }

        if self.config.allow_overlapping_fallback {
            log::warn!("no free space for {kind}; using overlapping fallback point");
            Ok(raw)
        } else {
            log::warn!("no free space for {kind}; rejecting placement");
            Err(Rejection::NoFreeSpace { kind: kind.clone() })
        }
    }
}
