//! Seeds a warehouse and walks through the stock operations, printing each
//! outcome.

use anyhow::Context;
use chrono::Utc;

use warehouse_core::{ItemId, Quantity};
use warehouse_infra::{
    Outcome, WarehouseConfig, WarehouseManager, add_item, increase_stock, print_all, remove_by_id,
    set_quantity,
};
use warehouse_inventory::ElectronicItem;

fn main() -> anyhow::Result<()> {
    let config = WarehouseConfig::from_env().context("invalid warehouse configuration")?;
    warehouse_observability::init_with_filter(&config.log_filter);
    config.log_defaults();

    let today = config.seed_date_or(Utc::now().date_naive());
    let mut manager = if config.seed {
        tracing::info!(%today, "seeding warehouse");
        WarehouseManager::seeded(today).context("failed to seed warehouse")?
    } else {
        tracing::warn!("WAREHOUSE_SEED disabled; starting with empty repositories");
        WarehouseManager::new()
    };

    println!("Grocery Items:");
    print_all(manager.groceries());

    println!("\nElectronic Items:");
    print_all(manager.electronics());

    println!("\nAdding duplicate item:");
    let tablet = ElectronicItem::new(ItemId::new(1), "Tablet", Quantity::from(3), "Apple", 12);
    report(add_item(manager.electronics_mut(), tablet));

    println!("\nRemoving non-existent item:");
    report(remove_by_id(manager.groceries_mut(), ItemId::new(99)));

    println!("\nUpdating with invalid quantity:");
    report(set_quantity(manager.electronics_mut(), ItemId::new(1), -5));

    println!("\nIncreasing stock:");
    report(increase_stock(manager.electronics_mut(), ItemId::new(1), 3));
    print_all(manager.electronics());

    tracing::info!("walkthrough finished");
    Ok(())
}

fn report(outcome: Outcome) {
    println!("{outcome}");
}
