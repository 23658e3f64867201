//! Startup stock.

use chrono::{Days, NaiveDate};

use warehouse_core::{ItemId, Quantity, RepositoryResult};
use warehouse_inventory::{ElectronicItem, GroceryItem};

use crate::manager::WarehouseManager;

/// Populate `manager` with the fixed initial stock.
///
/// Grocery expiry dates are relative to `today`. Seeding a manager that
/// already holds any of these ids fails with `DuplicateKey` on the first
/// clash; items added before the clash stay.
pub fn seed_warehouse(manager: &mut WarehouseManager, today: NaiveDate) -> RepositoryResult<()> {
    let electronics = manager.electronics_mut();
    electronics.add(ElectronicItem::new(ItemId::new(1), "Laptop", Quantity::from(5), "Dell", 24))?;
    electronics.add(ElectronicItem::new(
        ItemId::new(2),
        "Smartphone",
        Quantity::from(10),
        "Samsung",
        12,
    ))?;

    let groceries = manager.groceries_mut();
    groceries.add(GroceryItem::new(
        ItemId::new(1),
        "Milk",
        Quantity::from(20),
        days_after(today, 10),
    ))?;
    groceries.add(GroceryItem::new(
        ItemId::new(2),
        "Bread",
        Quantity::from(15),
        days_after(today, 3),
    ))?;

    Ok(())
}

fn days_after(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
