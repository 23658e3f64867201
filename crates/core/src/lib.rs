//! `warehouse-core` — stock item capability, keyed repository and failure taxonomy.
//!
//! This crate is pure in-memory domain logic: no I/O, no logging.

pub mod error;
pub mod id;
pub mod item;
pub mod quantity;
pub mod repository;

pub use error::{FailureKind, RepositoryError, RepositoryResult};
pub use id::ItemId;
pub use item::StockItem;
pub use quantity::{NegativeQuantity, Quantity};
pub use repository::InventoryRepository;
