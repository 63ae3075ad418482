//! Footprint catalog: bounding-box dimensions per object kind.
//!
//! The catalog is built once through [`FootprintCatalogBuilder`] and then
//! frozen. Callers construct one instance and pass it by reference into
//! every placement call.

use crate::geometry::Vec3;
use crate::kind::ObjectKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Axis-aligned bounding box dimensions of an object kind.
///
/// `width` runs along x, `depth` along z, `height` along y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Footprint {
    /// Footprint used for any kind the catalog does not list.
    pub const DEFAULT: Footprint = Footprint {
        width: 0.5,
        depth: 0.5,
        height: 0.45,
    };

    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Half-extents as an (x, y, z) offset.
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0)
    }

    /// The larger of the two floor dimensions.
    pub fn max_floor_extent(&self) -> f64 {
        self.width.max(self.depth)
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub footprint: Footprint,
    /// `(offset_x, offset_z)` applied to shelf slot positions so the box
    /// model lines up with the shelf geometry.
    pub slot_nudge: (f64, f64),
}

/// Builder for an immutable [`FootprintCatalog`].
#[derive(Debug, Default)]
pub struct FootprintCatalogBuilder {
    entries: HashMap<ObjectKind, CatalogEntry>,
}

impl FootprintCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the footprint of a kind with no slot nudge.
    pub fn footprint(self, kind: ObjectKind, footprint: Footprint) -> Self {
        self.entry(
            kind,
            CatalogEntry {
                footprint,
                slot_nudge: (0.0, 0.0),
            },
        )
    }

    /// Register (or replace) a full catalog row.
    pub fn entry(mut self, kind: ObjectKind, entry: CatalogEntry) -> Self {
        self.entries.insert(kind, entry);
        self
    }

    pub fn build(self) -> FootprintCatalog {
        FootprintCatalog {
            entries: self.entries,
        }
    }
}

/// Immutable lookup from object kind to footprint.
#[derive(Debug, Clone, Default)]
pub struct FootprintCatalog {
    entries: HashMap<ObjectKind, CatalogEntry>,
}

impl FootprintCatalog {
    pub fn builder() -> FootprintCatalogBuilder {
        FootprintCatalogBuilder::new()
    }

    /// The catalog shipped with the room configurator.
    pub fn standard() -> Self {
        let row = |width, depth, height, nudge| CatalogEntry {
            footprint: Footprint::new(width, depth, height),
            slot_nudge: nudge,
        };

        Self::builder()
            .entry(ObjectKind::Shelf, row(1.05, 0.8, 2.0, (0.0, 0.0)))
            .entry(ObjectKind::BoxA, row(0.5, 0.5, 0.45, (0.0, 0.0)))
            .entry(ObjectKind::BoxB, row(0.6, 0.4, 0.4, (0.0, 0.05)))
            .entry(ObjectKind::BoxC, row(0.4, 0.35, 0.3, (0.02, 0.02)))
            .entry(ObjectKind::BoxD, row(1.0, 0.6, 0.35, (0.0, 0.1)))
            .build()
    }

    /// Footprint of `kind`. Never fails: unlisted kinds get
    /// [`Footprint::DEFAULT`].
    pub fn footprint_of(&self, kind: &ObjectKind) -> Footprint {
        self.entries
            .get(kind)
            .map(|e| e.footprint)
            .unwrap_or(Footprint::DEFAULT)
    }

    /// Slot alignment nudge of `kind`, `(0, 0)` when unlisted.
    pub fn slot_nudge(&self, kind: &ObjectKind) -> (f64, f64) {
        self.entries
            .get(kind)
            .map(|e| e.slot_nudge)
            .unwrap_or((0.0, 0.0))
    }

    pub fn contains(&self, kind: &ObjectKind) -> bool {
        self.entries.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
