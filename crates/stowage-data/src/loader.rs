//! Reads footprint and layout data files and resolves them into core types.
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and
//! deserialization helpers, plus [`load_room_data`] which ties them
//! together for a data directory.

use crate::schema::{FootprintData, LayoutData};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use stowage_core::catalog::{CatalogEntry, Footprint, FootprintCatalog};
use stowage_core::geometry::Vec3;
use stowage_core::kind::ObjectKind;
use stowage_core::layout::{LayoutError, RoomLayoutConfig, RoomSize};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// Extension is not `.ron`, `.toml` or `.json`.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// The same data file exists in more than one format.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The same kind or size class is defined twice.
    #[error("duplicate entry '{name}' in {file}")]
    DuplicateName { file: PathBuf, name: String },

    /// A layout names a size class that does not exist.
    #[error("unknown room size '{name}' in {file}")]
    UnknownRoomSize { file: PathBuf, name: String },

    /// A footprint has a non-positive dimension.
    #[error("invalid footprint for '{kind}' in {file}: {detail}")]
    InvalidFootprint {
        file: PathBuf,
        kind: String,
        detail: String,
    },

    /// A layout failed validation.
    #[error("invalid {size} layout in {file}: {source}")]
    InvalidLayout {
        file: PathBuf,
        size: &'static str,
        source: LayoutError,
    },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Data file formats, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Locate `{base_name}.ron`, `.toml` or `.json` in `dir`.
///
/// At most one of the three may exist; two or more is a
/// [`DataLoadError::ConflictingFormats`].
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for ext in ["ron", "toml", "json"] {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`find_data_file`], but returns an error if no file is found.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(path: &Path, detail: impl Display) -> DataLoadError {
    DataLoadError::Parse {
        file: path.to_path_buf(),
        detail: detail.to_string(),
    }
}

/// Parse a whole file with the deserializer matching its extension.
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Toml => toml::from_str(&content).map_err(|e| parse_error(path, e)),
    }
}

/// Parse a list of rows. RON and JSON files hold a bare top-level list;
/// TOML has no top-level arrays, so rows live under `toml_key`
/// (`[[footprints]]`, `[[layouts]]`).
pub fn deserialize_list<T: DeserializeOwned>(
    path: &Path,
    toml_key: &str,
) -> Result<Vec<T>, DataLoadError> {
    if detect_format(path)? != Format::Toml {
        return deserialize_file(path);
    }

    let table: toml::Value = deserialize_file(path)?;
    let array = table
        .get(toml_key)
        .ok_or_else(|| parse_error(path, format!("missing key '{toml_key}' in TOML file")))?
        .clone();
    array
        .try_into()
        .map_err(|e: toml::de::Error| parse_error(path, e))
}

/// Record `key` as seen, returning a `DuplicateName` error if it already was.
pub fn check_duplicate<K: Eq + Hash + Display>(
    seen: &mut HashSet<K>,
    key: K,
    file: &Path,
) -> Result<(), DataLoadError> {
    let name = key.to_string();
    if seen.insert(key) {
        Ok(())
    } else {
        Err(DataLoadError::DuplicateName {
            file: file.to_path_buf(),
            name,
        })
    }
}

// ===========================================================================
// Resolution
// ===========================================================================

/// Catalog and per-size layouts loaded from a data directory.
#[derive(Debug, Clone)]
pub struct RoomData {
    pub catalog: FootprintCatalog,
    pub layouts: BTreeMap<RoomSize, RoomLayoutConfig>,
}

impl RoomData {
    /// Layout of `size`. Every size class is present after loading.
    pub fn layout(&self, size: RoomSize) -> RoomLayoutConfig {
        self.layouts
            .get(&size)
            .cloned()
            .unwrap_or_else(|| size.layout())
    }
}

fn resolve_footprints(
    rows: Vec<FootprintData>,
    file: &Path,
) -> Result<FootprintCatalog, DataLoadError> {
    let mut seen = HashSet::new();
    let mut builder = FootprintCatalog::builder();

    for row in rows {
        let kind = ObjectKind::canonicalize(&row.kind);
        for (name, value) in [
            ("width", row.width),
            ("depth", row.depth),
            ("height", row.height),
        ] {
            if !(value > 0.0) {
                return Err(DataLoadError::InvalidFootprint {
                    file: file.to_path_buf(),
                    kind: row.kind,
                    detail: format!("{name} must be positive, got {value}"),
                });
            }
        }
        check_duplicate(&mut seen, kind.clone(), file)?;
        builder = builder.entry(
            kind,
            CatalogEntry {
                footprint: Footprint::new(row.width, row.depth, row.height),
                slot_nudge: row.nudge.unwrap_or((0.0, 0.0)),
            },
        );
    }

    Ok(builder.build())
}

fn resolve_layouts(
    rows: Vec<LayoutData>,
    file: &Path,
) -> Result<BTreeMap<RoomSize, RoomLayoutConfig>, DataLoadError> {
    let mut seen = HashSet::new();
    let mut layouts: BTreeMap<RoomSize, RoomLayoutConfig> =
        RoomSize::all().into_iter().map(|s| (s, s.layout())).collect();

    for row in rows {
        let size =
            RoomSize::from_label(&row.size).ok_or_else(|| DataLoadError::UnknownRoomSize {
                file: file.to_path_buf(),
                name: row.size.clone(),
            })?;
        check_duplicate(&mut seen, size.label(), file)?;

        let (ox, oy, oz) = row.offset;
        let layout = RoomLayoutConfig {
            rows: row.rows,
            per_row: row.per_row,
            shelf_width: row.shelf_width,
            shelf_depth: row.shelf_depth,
            shelf_spacing: row.shelf_spacing,
            wall_gap: row.wall_gap,
            row_gap: row.row_gap,
            offset: Vec3::new(ox, oy, oz),
            room_width: row.room_width,
            room_depth: row.room_depth,
        };
        layout
            .validate()
            .map_err(|source| DataLoadError::InvalidLayout {
                file: file.to_path_buf(),
                size: size.label(),
                source,
            })?;
        layouts.insert(size, layout);
    }

    Ok(layouts)
}

/// Load `footprints.{ron,toml,json}` (required) and
/// `layouts.{ron,toml,json}` (optional) from `dir`.
///
/// Size classes missing from the layouts file keep their built-in layout.
pub fn load_room_data(dir: &Path) -> Result<RoomData, DataLoadError> {
    let footprints_path = require_data_file(dir, "footprints")?;
    let footprints: Vec<FootprintData> = deserialize_list(&footprints_path, "footprints")?;
    let catalog = resolve_footprints(footprints, &footprints_path)?;
    log::debug!(
        "loaded {} footprints from {}",
        catalog.len(),
        footprints_path.display()
    );

    let layouts = match find_data_file(dir, "layouts")? {
        Some(path) => {
            let rows: Vec<LayoutData> = deserialize_list(&path, "layouts")?;
            log::debug!("loaded {} layouts from {}", rows.len(), path.display());
            resolve_layouts(rows, &path)?
        }
        None => resolve_layouts(Vec::new(), dir)?,
    };

    Ok(RoomData { catalog, layouts })
}

// ===========================================================================
// Tests
// ===========================================================================
