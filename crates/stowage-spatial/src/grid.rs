//! Deterministic shelf anchor grid.

use crate::SpatialError;
use stowage_core::geometry::Vec3;
use stowage_core::layout::RoomLayoutConfig;

/// Position of the `index`-th shelf in the room.
///
/// Shelves are assigned row-major: `row = index / per_row`,
/// `col = index % per_row`. Each row is centered on the room's x axis and
/// rows step forward from the back wall by `shelf_depth + row_gap`. The
/// result is translated by the layout offset, so every anchor sits at
/// `y = offset.y`.
pub fn shelf_anchor(layout: &RoomLayoutConfig, index: usize) -> Result<Vec3, SpatialError> {
    let max = layout.max_shelves();
    if index >= max {
        return Err(SpatialError::AnchorOutOfRange { index, max });
    }

    let per_row = layout.per_row as usize;
    let row = (index / per_row) as f64;
    let col = (index % per_row) as f64;

    let x = -layout.row_width() / 2.0
        + layout.shelf_width / 2.0
        + col * (layout.shelf_width + layout.shelf_spacing);
    let z = -layout.room_depth / 2.0
        + layout.shelf_depth / 2.0
        + layout.wall_gap
        + row * (layout.shelf_depth + layout.row_gap);

    Ok(Vec3::new(x, 0.0, z) + layout.offset)
}

/// All anchors of the layout, in assignment order.
pub fn anchors(layout: &RoomLayoutConfig) -> impl Iterator<Item = Vec3> + '_ {
    (0..layout.max_shelves()).filter_map(move |i| shelf_anchor(layout, i).ok())
}
