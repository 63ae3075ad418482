//! Overlap test between a candidate box and the placed objects.

use stowage_core::catalog::{Footprint, FootprintCatalog};
use stowage_core::geometry::{Aabb, COLLISION_EPSILON, Vec3};
use stowage_core::id::ObjectId;
use stowage_core::scene::PlacedSet;

/// Whether a candidate of `footprint` centered at `position` overlaps any
/// placed non-shelf object not listed in `ignore`.
///
/// Shelves never collide: boxes rest on and against them. This is a plain
/// linear scan; a room holds at most a few hundred objects.
pub fn collides(
    position: Vec3,
    footprint: &Footprint,
    placed: &PlacedSet,
    catalog: &FootprintCatalog,
    ignore: &[ObjectId],
) -> bool {
    let candidate = Aabb::from_center(position, footprint);

    placed
        .boxes()
        .filter(|o| !ignore.contains(&o.id))
        .any(|o| {
            let other = Aabb::from_center(o.position, &catalog.footprint_of(&o.kind));
            candidate.overlaps(&other, COLLISION_EPSILON)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::kind::ObjectKind;
    use stowage_core::test_utils::*;

    fn a() -> Footprint {
        catalog().footprint_of(&box_a())
    }

    #[test]
    fn empty_room_never_collides() {
        let set = PlacedSet::new();
        assert!(!collides(Vec3::ZERO, &a(), &set, &catalog(), &[]));
    }

    #[test]
    fn same_spot_collides() {
        let mut set = PlacedSet::new();
        set.insert(box_a(), Vec3::ZERO);
        assert!(collides(Vec3::ZERO, &a(), &set, &catalog(), &[]));
    }

    #[test]
    fn flush_neighbour_does_not_collide() {
        let mut set = PlacedSet::new();
        set.insert(box_a(), Vec3::ZERO);
        assert!(!collides(v(0.5, 0.0, 0.0), &a(), &set, &catalog(), &[]));
        assert!(!collides(v(0.0, 0.45, 0.0), &a(), &set, &catalog(), &[]));
        assert!(collides(v(0.49, 0.0, 0.0), &a(), &set, &catalog(), &[]));
    }

    #[test]
    fn shelves_are_ignored() {
        let mut set = PlacedSet::new();
        set.insert(shelf(), Vec3::ZERO);
        assert!(!collides(Vec3::ZERO, &a(), &set, &catalog(), &[]));
    }

    #[test]
    fn ignored_ids_are_skipped() {
        let mut set = PlacedSet::new();
        let id = set.insert(box_a(), Vec3::ZERO);
        assert!(!collides(Vec3::ZERO, &a(), &set, &catalog(), &[id]));
    }

    #[test]
    fn uses_each_objects_own_footprint() {
        let catalog = catalog();
        let mut set = PlacedSet::new();
        // D is 1.0 wide: its half-width reaches x = 0.5.
        set.insert(box_d(), Vec3::ZERO);
        assert!(collides(v(0.7, 0.0, 0.0), &a(), &set, &catalog, &[]));
        assert!(!collides(v(0.75, 0.0, 0.0), &a(), &set, &catalog, &[]));
    }

    #[test]
    fn unknown_kind_uses_default_footprint() {
        let catalog = catalog();
        let mut set = PlacedSet::new();
        set.insert(ObjectKind::Other("kayak".into()), Vec3::ZERO);
        assert!(collides(v(0.4, 0.0, 0.0), &Footprint::DEFAULT, &set, &catalog, &[]));
        assert!(!collides(v(0.5, 0.0, 0.0), &Footprint::DEFAULT, &set, &catalog, &[]));
    }

    #[test]
    fn row_of_boxes_blocks_every_member() {
        let catalog = catalog();
        let mut set = PlacedSet::new();
        line_of(&mut set, box_a(), a(), Vec3::ZERO, 4);
        for o in set.iter() {
            assert!(collides(o.position, &a(), &set, &catalog, &[]));
        }
        // The gaps between them are narrower than a box.
        assert!(collides(v(0.3, 0.0, 0.0), &a(), &set, &catalog, &[]));
    }
}
