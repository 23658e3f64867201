//! Concrete stock item kinds.
//!
//! Each kind implements [`warehouse_core::StockItem`] and carries its own
//! extra fields; none of them needs changes to the repository.

pub mod electronic;
pub mod grocery;

pub use electronic::ElectronicItem;
pub use grocery::GroceryItem;
