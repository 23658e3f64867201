//! Warehouse manager: one repository per item kind plus the generic
//! operations that work on any of them.
//!
//! The operations below are written once against [`StockItem`]. Adding a new
//! item kind means defining the type and giving the manager a repository for
//! it; none of the functions in this module change.

use chrono::NaiveDate;

use warehouse_core::{
    InventoryRepository, ItemId, RepositoryError, RepositoryResult, StockItem,
};
use warehouse_inventory::{ElectronicItem, GroceryItem};

use crate::outcome::Outcome;
use crate::seed;

/// Line printed for a repository with nothing in it.
pub const EMPTY_MARKER: &str = "No items.";

/// Owns the electronics and grocery repositories.
#[derive(Debug, Clone, Default)]
pub struct WarehouseManager {
    electronics: InventoryRepository<ElectronicItem>,
    groceries: InventoryRepository<GroceryItem>,
}

impl WarehouseManager {
    /// Manager with empty repositories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager populated with the startup stock, grocery dates relative to `today`.
    pub fn seeded(today: NaiveDate) -> RepositoryResult<Self> {
        let mut manager = Self::new();
        seed::seed_warehouse(&mut manager, today)?;
        Ok(manager)
    }

    pub fn electronics(&self) -> &InventoryRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut InventoryRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &InventoryRepository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut InventoryRepository<GroceryItem> {
        &mut self.groceries
    }
}

/// One line per item (`ID: .., Name: .., Quantity: ..`), or [`EMPTY_MARKER`].
pub fn render_all<T: StockItem>(repo: &InventoryRepository<T>) -> Vec<String> {
    let items = repo.list_all();
    if items.is_empty() {
        return vec![EMPTY_MARKER.to_string()];
    }

    items
        .iter()
        .map(|item| {
            format!(
                "ID: {}, Name: {}, Quantity: {}",
                item.id(),
                item.name(),
                item.quantity()
            )
        })
        .collect()
}

/// Print [`render_all`] to stdout.
pub fn print_all<T: StockItem>(repo: &InventoryRepository<T>) {
    for line in render_all(repo) {
        println!("{line}");
    }
}

/// Add `delta` to the stored quantity of `id`.
///
/// Either the quantity becomes `current + delta` or it is left as it was.
/// A result below zero, or one that does not fit in an `i64`, is reported as
/// `InvalidQuantity`.
pub fn increase_stock<T: StockItem>(
    repo: &mut InventoryRepository<T>,
    id: ItemId,
    delta: i64,
) -> Outcome {
    let result = apply_delta(repo, id, delta)
        .map(|(name, target)| format!("Stock updated for {name}. New quantity: {target}"));
    Outcome::report("updating stock", result)
}

fn apply_delta<T: StockItem>(
    repo: &mut InventoryRepository<T>,
    id: ItemId,
    delta: i64,
) -> RepositoryResult<(String, i64)> {
    let item = repo.get(id)?;
    let name = item.name().to_string();
    let current = item.quantity().get();

    let target = current
        .checked_add(delta)
        .ok_or_else(|| RepositoryError::invalid_quantity(id, current.saturating_add(delta)))?;
    repo.update_quantity(id, target)?;
    Ok((name, target))
}

pub fn remove_by_id<T: StockItem>(repo: &mut InventoryRepository<T>, id: ItemId) -> Outcome {
    let result = repo
        .remove(id)
        .map(|item| format!("Item with ID {id} ({}) removed successfully.", item.name()));
    Outcome::report("removing item", result)
}

pub fn add_item<T: StockItem>(repo: &mut InventoryRepository<T>, item: T) -> Outcome {
    let id = item.id();
    let name = item.name().to_string();
    let result = repo
        .add(item)
        .map(|()| format!("Item with ID {id} ({name}) added."));
    Outcome::report("adding item", result)
}

/// Overwrite the stored quantity of `id` with `quantity`.
pub fn set_quantity<T: StockItem>(
    repo: &mut InventoryRepository<T>,
    id: ItemId,
    quantity: i64,
) -> Outcome {
    let result = repo
        .update_quantity(id, quantity)
        .map(|()| format!("Quantity for item with ID {id} set to {quantity}."));
    Outcome::report("setting quantity", result)
}
