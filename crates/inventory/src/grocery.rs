use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use warehouse_core::{ItemId, Quantity, StockItem};

/// Grocery stock line with a best-before date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: Quantity,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// An item expires at the end of its expiry date.
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        on > self.expiry_date
    }

    /// Negative once the item is past its expiry date.
    pub fn days_until_expiry(&self, on: NaiveDate) -> i64 {
        (self.expiry_date - on).num_days()
    }
}

impl StockItem for GroceryItem {
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

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn milk() -> GroceryItem {
        GroceryItem::new(ItemId::new(1), "Milk", Quantity::from(20), date(2024, 3, 11))
    }

    #[test]
    fn not_expired_on_expiry_day() {
        let item = milk();
        assert!(!item.is_expired(date(2024, 3, 11)));
        assert!(item.is_expired(date(2024, 3, 12)));
    }

    #[test]
    fn counts_days_across_month_boundary() {
        assert_eq!(milk().days_until_expiry(date(2024, 2, 28)), 12);
        assert_eq!(milk().days_until_expiry(date(2024, 3, 13)), -2);
    }

    #[test]
    fn set_quantity_keeps_expiry_date() {
        let mut item = milk();
        item.set_quantity(Quantity::ZERO);
        assert_eq!(item.quantity(), Quantity::ZERO);
        assert_eq!(item.expiry_date(), date(2024, 3, 11));
        assert_eq!(item.name(), "Milk");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: expired exactly when the remaining day count is negative.
        #[test]
        fn expiry_agrees_with_day_count(offset in -400i64..400) {
            let item = milk();
            let on = item.expiry_date() + chrono::Duration::days(offset);
            prop_assert_eq!(item.is_expired(on), item.days_until_expiry(on) < 0);
            prop_assert_eq!(item.days_until_expiry(on), -offset);
        }
    }
}
