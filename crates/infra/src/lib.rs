//! Warehouse orchestration: the manager, its startup stock and configuration.

pub mod config;
pub mod manager;
pub mod outcome;
pub mod seed;

pub use config::{ConfigError, WarehouseConfig};
pub use manager::{
    EMPTY_MARKER, WarehouseManager, add_item, increase_stock, print_all, remove_by_id,
    render_all, set_quantity,
};
pub use outcome::Outcome;
