//! Single-flight guard around placement requests.
//!
//! The configurator forwards drag-and-drop gestures as placement requests.
//! Only one may be in flight at a time; a request arriving while another is
//! still running is dropped, not queued.

use crate::engine::{PlacementEngine, Rejection};
use std::sync::atomic::{AtomicBool, Ordering};
use stowage_core::geometry::Vec3;
use stowage_core::id::ObjectId;
use stowage_core::kind::ObjectKind;
use stowage_core::rng::PlacementRng;
use stowage_core::scene::PlacedSet;

/// Busy flag owned by the caller of the placement engine.
#[derive(Debug, Default)]
pub struct PlacementGuard {
    busy: AtomicBool,
}

/// Marks the guard busy until dropped.
#[derive(Debug)]
pub struct BusyToken<'a> {
    busy: &'a AtomicBool,
}

impl Drop for BusyToken<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl PlacementGuard {
    /// Create an idle guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the guard, or `None` if a request is already in flight.
    pub fn try_acquire(&self) -> Option<BusyToken<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyToken { busy: &self.busy })
    }

    /// Run one placement unless another is in flight.
    ///
    /// Returns `None` when the request was dropped, otherwise the
    /// placement outcome. The guard is released when the call returns.
    pub fn try_place(
        &self,
        engine: &PlacementEngine<'_>,
        placed: &mut PlacedSet,
        kind: ObjectKind,
        hint: Option<Vec3>,
        rng: &mut PlacementRng,
    ) -> Option<Result<ObjectId, Rejection>> {
        let Some(_token) = self.try_acquire() else {
            log::debug!("dropping {kind} placement: another request is in flight");
            return None;
        };
        Some(engine.place(placed, kind, hint, rng))
    }
}
