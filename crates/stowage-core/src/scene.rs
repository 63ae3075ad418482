//! The set of objects currently placed in a room.
//!
//! The set belongs to the room-configuration session. The placement engine
//! reads it and appends to it; removals are applied by the caller and take
//! effect on the next placement call.

use crate::geometry::Vec3;
use crate::id::ObjectId;
use crate::kind::ObjectKind;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

/// An object occupying space in the room. `position` is its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub position: Vec3,
}

/// Placed objects, iterated in placement order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacedSet {
    objects: SlotMap<ObjectId, PlacedObject>,
    order: Vec<ObjectId>,
}

impl PlacedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutation --

    /// Append an object and return its freshly issued id.
    pub fn insert(&mut self, kind: ObjectKind, position: Vec3) -> ObjectId {
        let id = self.objects.insert_with_key(|id| PlacedObject { id, kind, position });
        self.order.push(id);
        id
    }

    /// Remove one object by id.
    pub fn remove(&mut self, id: ObjectId) -> Option<PlacedObject> {
        let removed = self.objects.remove(id)?;
        self.order.retain(|&o| o != id);
        Some(removed)
    }

    /// Remove the most recently placed object of `kind`.
    pub fn remove_one_of(&mut self, kind: &ObjectKind) -> Option<PlacedObject> {
        let id = self
            .order
            .iter()
            .rev()
            .copied()
            .find(|&id| self.objects.get(id).is_some_and(|o| &o.kind == kind))?;
        self.remove(id)
    }

    /// Remove every object of `kind`. Returns how many were removed.
    pub fn remove_all_of(&mut self, kind: &ObjectKind) -> usize {
        let before = self.objects.len();
        self.objects.retain(|_, o| &o.kind != kind);
        let objects = &self.objects;
        self.order.retain(|&id| objects.contains_key(id));
        before - self.objects.len()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.order.clear();
    }

    // -- Queries --

    pub fn get(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.objects.get(id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// All objects in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedObject> + '_ {
        self.order.iter().filter_map(|&id| self.objects.get(id))
    }

    /// Shelves in placement order.
    pub fn shelves(&self) -> impl Iterator<Item = &PlacedObject> + '_ {
        self.iter().filter(|o| o.kind.is_shelf())
    }

    /// Non-shelf objects in placement order.
    pub fn boxes(&self) -> impl Iterator<Item = &PlacedObject> + '_ {
        self.iter().filter(|o| o.kind.is_box())
    }

    /// The most recently placed shelf, if any.
    pub fn last_shelf(&self) -> Option<&PlacedObject> {
        self.order
            .iter()
            .rev()
            .filter_map(|&id| self.objects.get(id))
            .find(|o| o.kind.is_shelf())
    }

    /// Number of placed objects of `kind`.
    pub fn count_of(&self, kind: &ObjectKind) -> usize {
        self.objects.values().filter(|o| &o.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (PlacedSet, Vec<ObjectId>) {
        let mut set = PlacedSet::new();
        let ids = vec![
            set.insert(ObjectKind::Shelf, Vec3::new(0.0, 0.0, 0.0)),
            set.insert(ObjectKind::BoxA, Vec3::new(1.0, 0.0, 0.0)),
            set.insert(ObjectKind::Shelf, Vec3::new(2.0, 0.0, 0.0)),
            set.insert(ObjectKind::BoxA, Vec3::new(3.0, 0.0, 0.0)),
            set.insert(ObjectKind::BoxB, Vec3::new(4.0, 0.0, 0.0)),
        ];
        (set, ids)
    }

    #[test]
    fn insert_assigns_id_to_object() {
        let (set, ids) = sample();
        for &id in &ids {
            assert_eq!(set.get(id).map(|o| o.id), Some(id));
        }
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn iteration_follows_placement_order() {
        let (set, ids) = sample();
        let order: Vec<ObjectId> = set.iter().map(|o| o.id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn count_of_kind() {
        let (set, _) = sample();
        assert_eq!(set.count_of(&ObjectKind::Shelf), 2);
        assert_eq!(set.count_of(&ObjectKind::BoxA), 2);
        assert_eq!(set.count_of(&ObjectKind::BoxD), 0);
    }

    #[test]
    fn shelves_and_boxes_partition_the_set() {
        let (set, _) = sample();
        assert_eq!(set.shelves().count(), 2);
        assert_eq!(set.boxes().count(), 3);
    }

    #[test]
    fn last_shelf_is_most_recent() {
        let (set, ids) = sample();
        assert_eq!(set.last_shelf().map(|o| o.id), Some(ids[2]));
    }

    #[test]
    fn remove_one_of_takes_most_recent() {
        let (mut set, ids) = sample();
        let removed = set.remove_one_of(&ObjectKind::BoxA).unwrap();
        assert_eq!(removed.id, ids[3]);
        assert!(set.contains(ids[1]));
        assert!(!set.contains(ids[3]));
        assert_eq!(set.count_of(&ObjectKind::BoxA), 1);
    }

    #[test]
    fn remove_one_of_missing_kind_is_none() {
        let (mut set, _) = sample();
        assert!(set.remove_one_of(&ObjectKind::BoxD).is_none());
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn remove_all_of_kind() {
        let (mut set, ids) = sample();
        assert_eq!(set.remove_all_of(&ObjectKind::Shelf), 2);
        assert_eq!(set.len(), 3);
        assert!(set.last_shelf().is_none());
        let order: Vec<ObjectId> = set.iter().map(|o| o.id).collect();
        assert_eq!(order, vec![ids[1], ids[3], ids[4]]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let (mut set, ids) = sample();
        set.remove(ids[4]).unwrap();
        let fresh = set.insert(ObjectKind::BoxB, Vec3::ZERO);
        assert!(!ids.contains(&fresh));
        assert!(set.get(ids[4]).is_none());
    }

    #[test]
    fn remove_twice_is_none() {
        let (mut set, ids) = sample();
        assert!(set.remove(ids[0]).is_some());
        assert!(set.remove(ids[0]).is_none());
    }

    #[test]
    fn clear_empties_everything() {
        let (mut set, _) = sample();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn json_round_trip_keeps_ids_and_order() {
        let (set, ids) = sample();
        let json = serde_json::to_string(&set).unwrap();
        let restored: PlacedSet = serde_json::from_str(&json).unwrap();
        let order: Vec<ObjectId> = restored.iter().map(|o| o.id).collect();
        assert_eq!(order, ids);
    }
}
