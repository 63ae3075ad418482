//! Serde data file structs for footprint catalogs and room layouts.
//!
//! These structs define the on-disk format. They are deserialized from RON,
//! JSON, or TOML data files and then resolved into core types by the loader.

use serde::Deserialize;

// ===========================================================================
// Footprints
// ===========================================================================

/// One catalog row in a data file.
///
/// `kind` is a free-form label, canonicalized on load (`"Box A"`, `"a"`
/// and `"box_a"` are the same kind).
#[derive(Debug, Clone, Deserialize)]
pub struct FootprintData {
    pub kind: String,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// `(offset_x, offset_z)` shelf slot alignment.
    #[serde(default)]
    pub nudge: Option<(f64, f64)>,
}

// ===========================================================================
// Layouts
// ===========================================================================

/// Shelf grid of one room size class in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutData {
    /// Size class label: `small`, `medium`, `large` or `xlarge`.
    pub size: String,
    pub rows: u32,
    pub per_row: u32,
    pub shelf_width: f64,
    pub shelf_depth: f64,
    pub shelf_spacing: f64,
    pub wall_gap: f64,
    pub row_gap: f64,
    pub offset: (f64, f64, f64),
    pub room_width: f64,
    pub room_depth: f64,
}
