use slotmap::new_key_type;

new_key_type! {
    /// Identifies a placed object within a [`PlacedSet`](crate::scene::PlacedSet).
    ///
    /// Keys are generational: once an object is removed its id is never
    /// handed out again, even if the slot is reused.
    pub struct ObjectId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn removed_ids_are_not_reissued() {
        let mut sm: SlotMap<ObjectId, ()> = SlotMap::with_key();
        let first = sm.insert(());
        sm.remove(first);
        let second = sm.insert(());
        assert_ne!(first, second);
        assert!(!sm.contains_key(first));
    }
}
