//! Binary save/restore of a room-configuration session.
//!
//! A session is serialized via `bitcode` with a versioned header so a
//! booking flow can park a configured room and resume it later.

use crate::layout::RoomSize;
use crate::rng::PlacementRng;
use crate::scene::PlacedSet;
use serde::{Deserialize, Serialize};

/// Magic number identifying a stowage session snapshot.
pub const SNAPSHOT_MAGIC: u32 = 0x5709_0001;

/// Current format version. Increment when breaking the wire format.
pub const FORMAT_VERSION: u32 = 1;

/// Errors that can occur during serialization.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("bitcode encoding failed: {0}")]
    Encode(String),
}

/// Errors that can occur while restoring a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("data too short for snapshot header")]
    TooShort,
    #[error("invalid magic number: expected 0x{:08X}, got 0x{:08X}", SNAPSHOT_MAGIC, .0)]
    InvalidMagic(u32),
    #[error("unsupported format version: expected {}, got {}", FORMAT_VERSION, .0)]
    UnsupportedVersion(u32),
    #[error("snapshot from future version {0} (this build supports up to {FORMAT_VERSION})")]
    FutureVersion(u32),
    #[error("bitcode decoding failed: {0}")]
    Decode(String),
}

/// Header prepended to every snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotHeader {
    pub magic: u32,
    pub version: u32,
}

impl SnapshotHeader {
    /// Header written by this build.
    pub fn current() -> Self {
        Self {
            magic: SNAPSHOT_MAGIC,
            version: FORMAT_VERSION,
        }
    }

    /// Check magic and version against this build.
    pub fn validate(&self) -> Result<(), RestoreError> {
        if self.magic != SNAPSHOT_MAGIC {
            return Err(RestoreError::InvalidMagic(self.magic));
        }
        if self.version > FORMAT_VERSION {
            return Err(RestoreError::FutureVersion(self.version));
        }
        if self.version < FORMAT_VERSION {
            return Err(RestoreError::UnsupportedVersion(self.version));
        }
        Ok(())
    }
}

/// Everything a caller keeps between placement calls for one room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSession {
    pub size: RoomSize,
    pub placed: PlacedSet,
    pub rng: PlacementRng,
}

impl RoomSession {
    /// An empty room of `size` with a freshly seeded RNG.
    pub fn new(size: RoomSize, seed: u64) -> Self {
        Self {
            size,
            placed: PlacedSet::new(),
            rng: PlacementRng::new(seed),
        }
    }

    /// Serialize the session, header first.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        let snapshot = SessionSnapshotRef {
            header: SnapshotHeader::current(),
            session: self,
        };
        bitcode::serialize(&snapshot).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Restore a session written by [`RoomSession::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, RestoreError> {
        if data.is_empty() {
            return Err(RestoreError::TooShort);
        }
        let snapshot: SessionSnapshot =
            bitcode::deserialize(data).map_err(|e| RestoreError::Decode(e.to_string()))?;
        snapshot.header.validate()?;
        Ok(snapshot.session)
    }
}

#[derive(Serialize)]
struct SessionSnapshotRef<'a> {
    header: SnapshotHeader,
    session: &'a RoomSession,
}

#[derive(Deserialize)]
struct SessionSnapshot {
    header: SnapshotHeader,
    session: RoomSession,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;
    use crate::kind::ObjectKind;

    fn populated() -> RoomSession {
        let mut session = RoomSession::new(RoomSize::Medium, 42);
        session
            .placed
            .insert(ObjectKind::Shelf, Vec3::new(-0.65, -1.26, -1.35));
        session
            .placed
            .insert(ObjectKind::BoxA, Vec3::new(-0.92, -1.21, -1.4));
        session
            .placed
            .insert(ObjectKind::Other("bike".into()), Vec3::new(1.0, -1.26, 1.0));
        session.rng.next_u64();
        session
    }

    #[test]
    fn round_trip_preserves_session() {
        let session = populated();
        let bytes = session.to_bytes().unwrap();
        let restored = RoomSession::from_bytes(&bytes).unwrap();

        assert_eq!(restored.size, RoomSize::Medium);
        assert_eq!(restored.rng, session.rng);
        let before: Vec<_> = session.placed.iter().cloned().collect();
        let after: Vec<_> = restored.placed.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn restored_ids_stay_unique() {
        let session = populated();
        let existing: Vec<_> = session.placed.iter().map(|o| o.id).collect();
        let mut restored = RoomSession::from_bytes(&session.to_bytes().unwrap()).unwrap();
        let fresh = restored.placed.insert(ObjectKind::BoxB, Vec3::ZERO);
        assert!(!existing.contains(&fresh));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            RoomSession::from_bytes(&[]),
            Err(RestoreError::TooShort)
        ));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let result = RoomSession::from_bytes(&[0xFF; 32]);
        assert!(result.is_err());
    }

    #[test]
    fn header_validation() {
        assert!(SnapshotHeader::current().validate().is_ok());

        let bad_magic = SnapshotHeader {
            magic: 0xDEAD_BEEF,
            version: FORMAT_VERSION,
        };
        assert!(matches!(
            bad_magic.validate(),
            Err(RestoreError::InvalidMagic(0xDEAD_BEEF))
        ));

        let future = SnapshotHeader {
            magic: SNAPSHOT_MAGIC,
            version: FORMAT_VERSION + 1,
        };
        assert!(matches!(
            future.validate(),
            Err(RestoreError::FutureVersion(_))
        ));

        let old = SnapshotHeader {
            magic: SNAPSHOT_MAGIC,
            version: 0,
        };
        assert!(matches!(
            old.validate(),
            Err(RestoreError::UnsupportedVersion(0))
        ));
    }
}
