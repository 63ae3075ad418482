//! Room size classes and the shelf grid configuration of each.

use crate::geometry::Vec3;
use serde::{Deserialize, Serialize};

/// Errors from validating a [`RoomLayoutConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout grid is empty ({rows} rows x {per_row} per row)")]
    EmptyGrid { rows: u32, per_row: u32 },
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    NegativeGap { field: &'static str, value: f64 },
}

/// Shelf grid geometry of one room size class.
///
/// Shelves are laid out row-major: `per_row` shelves side by side along x,
/// `rows` such rows stacked along z starting at the back wall. The whole
/// grid is translated by `offset`, whose `y` is also the shelves' height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomLayoutConfig {
    pub rows: u32,
    pub per_row: u32,
    pub shelf_width: f64,
    pub shelf_depth: f64,
    /// Gap between neighbouring shelves in a row.
    pub shelf_spacing: f64,
    /// Clearance between the back wall and the first row.
    pub wall_gap: f64,
    /// Aisle between consecutive rows.
    pub row_gap: f64,
    pub offset: Vec3,
    pub room_width: f64,
    pub room_depth: f64,
}

impl RoomLayoutConfig {
    /// Hard cap on the number of shelves in this room.
    pub fn max_shelves(&self) -> usize {
        self.rows as usize * self.per_row as usize
    }

    /// Total x extent occupied by one row of shelves.
    pub fn row_width(&self) -> f64 {
        let n = self.per_row as f64;
        n * self.shelf_width + (n - 1.0).max(0.0) * self.shelf_spacing
    }

    /// Center of the room floor in room space.
    pub fn center(&self) -> Vec3 {
        self.offset
    }

    /// Reject an empty grid, non-positive sizes and negative gaps.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 || self.per_row == 0 {
            return Err(LayoutError::EmptyGrid {
                rows: self.rows,
                per_row: self.per_row,
            });
        }
        for (field, value) in [
            ("shelf_width", self.shelf_width),
            ("shelf_depth", self.shelf_depth),
            ("room_width", self.room_width),
            ("room_depth", self.room_depth),
        ] {
            if !(value > 0.0) {
                return Err(LayoutError::NonPositiveDimension { field, value });
            }
        }
        for (field, value) in [
            ("shelf_spacing", self.shelf_spacing),
            ("wall_gap", self.wall_gap),
            ("row_gap", self.row_gap),
        ] {
            if !(value >= 0.0) {
                return Err(LayoutError::NegativeGap { field, value });
            }
        }
        Ok(())
    }
}

/// The rentable room size classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomSize {
    Small,
    Medium,
    Large,
    XLarge,
}

impl RoomSize {
    /// All size classes, smallest first.
    pub fn all() -> [RoomSize; 4] {
        [
            RoomSize::Small,
            RoomSize::Medium,
            RoomSize::Large,
            RoomSize::XLarge,
        ]
    }

    /// Lowercase label used in data files.
    pub fn label(self) -> &'static str {
        match self {
            RoomSize::Small => "small",
            RoomSize::Medium => "medium",
            RoomSize::Large => "large",
            RoomSize::XLarge => "xlarge",
        }
    }

    /// Parse a size label, case-insensitively.
    pub fn from_label(label: &str) -> Option<RoomSize> {
        let label = label.trim();
        Self::all()
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(label))
    }

    /// Smallest class whose floor area holds `area` square metres.
    pub fn from_area(area: f64) -> RoomSize {
        Self::all()
            .into_iter()
            .find(|size| {
                let layout = size.layout();
                area <= layout.room_width * layout.room_depth
            })
            .unwrap_or(RoomSize::XLarge)
    }

    /// Built-in shelf grid for this size class.
    pub fn layout(self) -> RoomLayoutConfig {
        let base = RoomLayoutConfig {
            rows: 1,
            per_row: 2,
            shelf_width: 1.05,
            shelf_depth: 0.8,
            shelf_spacing: 0.25,
            wall_gap: 0.25,
            row_gap: 0.76,
            offset: Vec3::new(0.8, -1.26, 0.2),
            room_width: 3.0,
            room_depth: 2.5,
        };
        match self {
            RoomSize::Small => base,
            RoomSize::Medium => RoomLayoutConfig {
                rows: 2,
                offset: Vec3::new(0.0, -1.26, 0.0),
                room_width: 3.5,
                room_depth: 4.0,
                ..base
            },
            RoomSize::Large => RoomLayoutConfig {
                rows: 2,
                per_row: 3,
                offset: Vec3::new(0.0, -1.26, 0.0),
                room_width: 5.0,
                room_depth: 4.5,
                ..base
            },
            RoomSize::XLarge => RoomLayoutConfig {
                rows: 3,
                per_row: 3,
                offset: Vec3::new(0.0, -1.26, 0.0),
                room_width: 5.0,
                room_depth: 6.0,
                ..base
            },
        }
    }
}
