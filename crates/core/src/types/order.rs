//! Display-only order records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Money, OrderId, OrderStatus, ProductId};

/// One purchased line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub price: Money,
    pub quantity: u32,
}

impl OrderLine {
    /// Price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// A past order. Orders are rendered, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub items: Vec<OrderLine>,
    pub total: Money,
}

impl Order {
    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_and_unit_count() {
        let order = Order {
            id: OrderId::new("LUX-123456"),
            date: NaiveDate::from_ymd_opt(2023, 11, 15).unwrap(),
            status: OrderStatus::Delivered,
            items: vec![
                OrderLine {
                    product_id: ProductId::new("p1"),
                    name: "Leather Jacket".to_string(),
                    image: "/static/images/products/product-1.jpg".to_string(),
                    price: Money::from_cents(19_999),
                    quantity: 2,
                },
                OrderLine {
                    product_id: ProductId::new("p2"),
                    name: "Designer Jeans".to_string(),
                    image: "/static/images/products/product-2.jpg".to_string(),
                    price: Money::from_cents(14_998),
                    quantity: 1,
                },
            ],
            total: Money::from_cents(54_996),
        };

        assert_eq!(order.items[0].line_total(), Money::from_cents(39_998));
        assert_eq!(order.unit_count(), 3);
    }
}
