//! Stock item capability: identity, display name, mutable quantity.

use crate::id::ItemId;
use crate::quantity::Quantity;

/// The minimal shape any stored item must expose.
///
/// Concrete item kinds carry whatever extra fields they need; the repository
/// and the generic manager operations only ever see this trait.
///
/// Implementors must keep `id` and `name` fixed for the lifetime of the
/// value. Stored items are only reachable through shared references, so once
/// an item is inside a repository `set_quantity` is called by the repository
/// alone.
pub trait StockItem: Clone + core::fmt::Debug {
    fn id(&self) -> ItemId;

    fn name(&self) -> &str;

    fn quantity(&self) -> Quantity;

    /// Replace the on-hand quantity. No other field may change.
    fn set_quantity(&mut self, quantity: Quantity);
}
