//! Generic in-memory keyed repository.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::{RepositoryError, RepositoryResult};
use crate::id::ItemId;
use crate::item::StockItem;
use crate::quantity::Quantity;

/// Keyed store owning every item of one kind.
///
/// Items are indexed by [`ItemId`]; a key maps to exactly one item and is
/// never overwritten. Enumeration is in ascending id order.
///
/// The repository performs no I/O and does no logging. It is not
/// synchronized; wrap the whole repository in a single lock if it must be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct InventoryRepository<T> {
    items: BTreeMap<ItemId, T>,
}

impl<T> InventoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }
}

impl<T> Default for InventoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StockItem> InventoryRepository<T> {
    /// Insert `item` under its own id.
    pub fn add(&mut self, item: T) -> RepositoryResult<()> {
        match self.items.entry(item.id()) {
            Entry::Occupied(e) => Err(RepositoryError::duplicate_key(*e.key())),
            Entry::Vacant(e) => {
                e.insert(item);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: ItemId) -> RepositoryResult<&T> {
        self.items.get(&id).ok_or(RepositoryError::not_found(id))
    }

    /// Delete the item and hand it back to the caller.
    pub fn remove(&mut self, id: ItemId) -> RepositoryResult<T> {
        self.items.remove(&id).ok_or(RepositoryError::not_found(id))
    }

    /// Snapshot of every stored item, ascending by id.
    pub fn list_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// Replace the quantity of a stored item.
    ///
    /// A negative `new_quantity` is rejected before the id is looked up, so a
    /// missing id with a negative value reports `InvalidQuantity`.
    pub fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> RepositoryResult<()> {
        let quantity = Quantity::new(new_quantity)
            .ok_or(RepositoryError::invalid_quantity(id, new_quantity))?;

        let item = self
            .items
            .get_mut(&id)
            .ok_or(RepositoryError::not_found(id))?;
        item.set_quantity(quantity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Crate {
        id: ItemId,
        name: String,
        quantity: Quantity,
        label: &'static str,
    }

    impl Crate {
        fn new(id: i64, name: &str, quantity: u32) -> Self {
            Self {
                id: ItemId::new(id),
                name: name.to_string(),
                quantity: Quantity::from(quantity),
                label: "pallet",
            }
        }
    }

    impl StockItem for Crate {
        fn id(&self) -> ItemId {
            self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn quantity(&self) -> Quantity {
            self.quantity
        }

        fn set_quantity(&mut self, quantity: Quantity) {
            self.quantity = quantity;
        }
    }

    fn seeded() -> InventoryRepository<Crate> {
        let mut repo = InventoryRepository::new();
        repo.add(Crate::new(1, "Laptop", 5)).unwrap();
        repo.add(Crate::new(2, "Smartphone", 10)).unwrap();
        repo
    }

    #[test]
    fn add_then_get_returns_equal_item() {
        let repo = seeded();
        assert_eq!(repo.get(ItemId::new(1)).unwrap(), &Crate::new(1, "Laptop", 5));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn duplicate_add_is_rejected_without_overwrite() {
        let mut repo = seeded();
        let err = repo.add(Crate::new(1, "Tablet", 3)).unwrap_err();
        assert_eq!(err, RepositoryError::duplicate_key(ItemId::new(1)));
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get(ItemId::new(1)).unwrap().name(), "Laptop");
    }

    #[test]
    fn remove_twice_fails_the_second_time() {
        let mut repo = seeded();
        let removed = repo.remove(ItemId::new(2)).unwrap();
        assert_eq!(removed.name(), "Smartphone");
        assert_eq!(
            repo.remove(ItemId::new(2)).unwrap_err(),
            RepositoryError::not_found(ItemId::new(2))
        );
        assert!(!repo.contains(ItemId::new(2)));
    }

    #[test]
    fn update_changes_only_quantity() {
        let mut repo = seeded();
        repo.update_quantity(ItemId::new(1), 0).unwrap();
        let item = repo.get(ItemId::new(1)).unwrap();
        assert_eq!(item.quantity(), Quantity::ZERO);
        assert_eq!(item.name(), "Laptop");
        assert_eq!(item.label, "pallet");
    }

    #[test]
    fn negative_quantity_is_checked_before_existence() {
        let mut repo = seeded();
        assert_eq!(
            repo.update_quantity(ItemId::new(99), -1).unwrap_err(),
            RepositoryError::invalid_quantity(ItemId::new(99), -1)
        );
        assert_eq!(
            repo.update_quantity(ItemId::new(99), 1).unwrap_err(),
            RepositoryError::not_found(ItemId::new(99))
        );
    }

    #[test]
    fn negative_quantity_leaves_stock_untouched() {
        let mut repo = seeded();
        let err = repo.update_quantity(ItemId::new(2), -5).unwrap_err();
        assert_eq!(err, RepositoryError::invalid_quantity(ItemId::new(2), -5));
        assert_eq!(repo.get(ItemId::new(2)).unwrap().quantity().get(), 10);
    }

    #[test]
    fn list_all_is_a_detached_snapshot_in_id_order() {
        let mut repo = InventoryRepository::new();
        repo.add(Crate::new(3, "c", 1)).unwrap();
        repo.add(Crate::new(1, "a", 1)).unwrap();
        repo.add(Crate::new(2, "b", 1)).unwrap();

        let snapshot = repo.list_all();
        repo.update_quantity(ItemId::new(1), 40).unwrap();

        let ids: Vec<i64> = snapshot.iter().map(|c| c.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(snapshot[0].quantity().get(), 1);
        assert_eq!(repo.list_all()[0].quantity().get(), 40);
    }

    #[test]
    fn empty_repository_lists_nothing() {
        let repo: InventoryRepository<Crate> = InventoryRepository::default();
        assert!(repo.is_empty());
        assert!(repo.list_all().is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a second add with a used id fails and changes nothing.
        #[test]
        fn ids_stay_unique(ids in prop::collection::vec(0i64..20, 1..40)) {
            let mut repo = InventoryRepository::new();
            let mut seen = std::collections::BTreeSet::new();

            for (n, id) in ids.into_iter().enumerate() {
                let before = repo.len();
                let result = repo.add(Crate::new(id, &format!("item-{n}"), n as u32));
                if seen.insert(id) {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(repo.len(), before + 1);
                } else {
                    prop_assert_eq!(result, Err(RepositoryError::duplicate_key(ItemId::new(id))));
                    prop_assert_eq!(repo.len(), before);
                    prop_assert_ne!(repo.get(ItemId::new(id)).unwrap().name(), format!("item-{n}"));
                }
            }
        }

        /// Property: whatever was added comes back unchanged from `get`.
        #[test]
        fn added_items_read_back_equal(
            items in prop::collection::btree_map(
                any::<i64>(),
                ("[A-Za-z ]{0,16}", any::<u32>()),
                0..20,
            ),
        ) {
            let mut repo = InventoryRepository::new();
            for (id, (name, quantity)) in &items {
                repo.add(Crate::new(*id, name, *quantity)).unwrap();
            }

            prop_assert_eq!(repo.len(), items.len());
            for (id, (name, quantity)) in &items {
                let stored = repo.get(ItemId::new(*id)).unwrap();
                prop_assert_eq!(stored, &Crate::new(*id, name, *quantity));
                prop_assert_eq!(stored.name(), name.as_str());
                prop_assert_eq!(stored.quantity(), Quantity::from(*quantity));
            }
        }

        /// Property: get/remove/update on an absent id all report NotFound.
        #[test]
        fn absent_ids_are_not_found_everywhere(
            present in prop::collection::btree_set(0i64..50, 0..20),
            probe in 0i64..50,
            quantity in 0i64..1_000,
            remove_first in any::<bool>(),
        ) {
            let mut repo = InventoryRepository::new();
            for id in &present {
                repo.add(Crate::new(*id, "x", 1)).unwrap();
            }
            prop_assume!(!present.contains(&probe) || remove_first);
            if present.contains(&probe) {
                repo.remove(ItemId::new(probe)).unwrap();
            }

            let id = ItemId::new(probe);
            let expected = RepositoryError::not_found(id);
            prop_assert_eq!(repo.get(id).unwrap_err(), expected.clone());
            prop_assert_eq!(repo.remove(id).unwrap_err(), expected.clone());
            prop_assert_eq!(repo.update_quantity(id, quantity).unwrap_err(), expected);
        }

        /// Property: a negative quantity is always rejected and never stored.
        #[test]
        fn negative_quantities_never_stored(
            stored in 0u32..1_000,
            rejected in i64::MIN..0,
            exists in any::<bool>(),
        ) {
            let mut repo = InventoryRepository::new();
            if exists {
                repo.add(Crate::new(1, "x", stored)).unwrap();
            }

            let err = repo.update_quantity(ItemId::new(1), rejected).unwrap_err();
            prop_assert_eq!(err, RepositoryError::invalid_quantity(ItemId::new(1), rejected));
            if exists {
                let kept = repo.get(ItemId::new(1)).unwrap().quantity();
                prop_assert_eq!(kept, Quantity::from(stored));
            }
        }
    }
}
