//! Property-based tests for the placement engine.
//!
//! Uses proptest to generate random request sequences against every room
//! size, then verifies the structural guarantees hold after each step.

use proptest::prelude::*;
use stowage_core::geometry::Vec3;
use stowage_core::kind::ObjectKind;
use stowage_core::layout::RoomSize;
use stowage_core::rng::PlacementRng;
use stowage_core::scene::PlacedSet;
use stowage_core::test_utils::*;
use stowage_spatial::{PlacementEngine, find_shelf_slot};

// ===========================================================================
// Generators
// ===========================================================================

#[derive(Debug, Clone)]
enum Op {
    Place(ObjectKind, Option<Vec3>),
    RemoveOne(ObjectKind),
}

fn arb_size() -> impl Strategy<Value = RoomSize> {
    prop::sample::select(RoomSize::all().to_vec())
}

fn arb_kind() -> impl Strategy<Value = ObjectKind> {
    prop_oneof![
        3 => Just(ObjectKind::Shelf),
        3 => Just(ObjectKind::BoxA),
        2 => Just(ObjectKind::BoxB),
        2 => Just(ObjectKind::BoxC),
        2 => Just(ObjectKind::BoxD),
        1 => Just(ObjectKind::Other("bike".into())),
    ]
}

fn arb_hint() -> impl Strategy<Value = Option<Vec3>> {
    prop::option::weighted(
        0.3,
        (-3.0..3.0f64, -3.0..3.0f64).prop_map(|(x, z)| Vec3::new(x, -1.26, z)),
    )
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        5 => (arb_kind(), arb_hint()).prop_map(|(k, h)| Op::Place(k, h)),
        1 => arb_kind().prop_map(Op::RemoveOne),
    ]
}

/// Apply `ops`, returning every resolved position (or `None` for rejections).
fn run(size: RoomSize, seed: u64, ops: &[Op]) -> (PlacedSet, Vec<Option<Vec3>>) {
    let catalog = catalog();
    let layout = size.layout();
    let engine = PlacementEngine::new(&catalog, &layout).unwrap();
    let mut set = PlacedSet::new();
    let mut rng = PlacementRng::new(seed);
    let mut trace = Vec::new();

    for op in ops {
        match op {
            Op::Place(kind, hint) => {
                let outcome = engine.place(&mut set, kind.clone(), *hint, &mut rng);
                trace.push(outcome.ok().and_then(|id| set.get(id)).map(|o| o.position));
            }
            Op::RemoveOne(kind) => {
                set.remove_one_of(kind);
            }
        }
    }
    (set, trace)
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_boxes_never_overlap(
        size in arb_size(),
        seed in any::<u64>(),
        ops in prop::collection::vec(arb_op(), 1..60),
    ) {
        let catalog = catalog();
        let layout = size.layout();
        let engine = PlacementEngine::new(&catalog, &layout).unwrap();
        let mut set = PlacedSet::new();
        let mut rng = PlacementRng::new(seed);

        for op in &ops {
            match op {
                Op::Place(kind, hint) => {
                    let _ = engine.place(&mut set, kind.clone(), *hint, &mut rng);
                }
                Op::RemoveOne(kind) => {
                    set.remove_one_of(kind);
                }
            }
            let pairs = overlapping_pairs(&set, &catalog);
            prop_assert!(pairs.is_empty(), "overlap after {op:?}: {pairs:?}");
        }
    }

    #[test]
    fn shelf_count_never_exceeds_grid(
        size in arb_size(),
        seed in any::<u64>(),
        ops in prop::collection::vec(arb_op(), 1..60),
    ) {
        let (set, _) = run(size, seed, &ops);
        prop_assert!(set.count_of(&ObjectKind::Shelf) <= size.layout().max_shelves());
    }

    #[test]
    fn same_seed_same_positions(
        size in arb_size(),
        seed in any::<u64>(),
        ops in prop::collection::vec(arb_op(), 1..40),
    ) {
        let (_, first) = run(size, seed, &ops);
        let (_, second) = run(size, seed, &ops);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn shelf_slot_query_is_idempotent(
        size in arb_size(),
        seed in any::<u64>(),
        ops in prop::collection::vec(arb_op(), 1..40),
        kind in arb_kind(),
    ) {
        let catalog = catalog();
        let layout = size.layout();
        let (set, _) = run(size, seed, &ops);
        let first = find_shelf_slot(&kind, &set, &catalog, &layout);
        let second = find_shelf_slot(&kind, &set, &catalog, &layout);
        prop_assert_eq!(first, second);
    }
}
