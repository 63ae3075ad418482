//! The closed set of object kinds a customer can drag into a room.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A placeable object kind.
///
/// Shelves are large furniture laid out on the room grid; the lettered box
/// kinds are slotted onto shelves. Labels that do not name a known kind are
/// kept verbatim in [`ObjectKind::Other`] and resolve to the default
/// footprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectKind {
    Shelf,
    BoxA,
    BoxB,
    BoxC,
    BoxD,
    Other(String),
}

impl ObjectKind {
    /// All known kinds, excluding `Other`.
    pub fn known() -> [ObjectKind; 5] {
        [
            ObjectKind::Shelf,
            ObjectKind::BoxA,
            ObjectKind::BoxB,
            ObjectKind::BoxC,
            ObjectKind::BoxD,
        ]
    }

    /// Map a free-form label to a kind.
    ///
    /// Matching ignores case, whitespace, `-` and `_`, so `"Box A"`,
    /// `"box_a"` and `"A"` all resolve to [`ObjectKind::BoxA`].
    pub fn canonicalize(label: &str) -> ObjectKind {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "shelf" | "shelves" | "shelving" | "shelfunit" | "shelvingunit" => ObjectKind::Shelf,
            "a" | "boxa" | "typea" => ObjectKind::BoxA,
            "b" | "boxb" | "typeb" => ObjectKind::BoxB,
            "c" | "boxc" | "typec" => ObjectKind::BoxC,
            "d" | "boxd" | "typed" => ObjectKind::BoxD,
            _ => ObjectKind::Other(label.trim().to_string()),
        }
    }

    /// Whether this is a shelving unit.
    pub fn is_shelf(&self) -> bool {
        matches!(self, ObjectKind::Shelf)
    }

    /// Everything that is not a shelf is treated as a stackable box.
    pub fn is_box(&self) -> bool {
        !self.is_shelf()
    }

    /// Canonical label, as accepted back by [`ObjectKind::canonicalize`].
    pub fn label(&self) -> &str {
        match self {
            ObjectKind::Shelf => "shelf",
            ObjectKind::BoxA => "A",
            ObjectKind::BoxB => "B",
            ObjectKind::BoxC => "C",
            ObjectKind::BoxD => "D",
            ObjectKind::Other(label) => label,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for ObjectKind {
    fn from(label: &str) -> Self {
        ObjectKind::canonicalize(label)
    }
}
