//! Mock order placement.
//!
//! Checking out validates the form, waits a simulated processing delay and
//! hands back a confirmation with a random `LUX-` order number. Nothing is
//! charged or stored.

use std::time::Duration;

use luxestore_core::{Cart, Coupon, Email, FieldErrors, FormData, OrderId, OrderSummary};
use luxestore_core::validation::validate_checkout;
use rand::Rng;
use thiserror::Error;
use tracing::instrument;

/// Why an order could not be placed.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more checkout fields failed validation.
    #[error("checkout form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
}

/// A confirmed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub order_id: OrderId,
    /// Address the confirmation email "was sent" to.
    pub email: Email,
    pub summary: OrderSummary,
}

/// Mock order service.
#[derive(Debug, Clone)]
pub struct OrderService {
    latency: Duration,
}

impl OrderService {
    /// Create a service that waits `latency` before confirming.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Validate and "place" an order for `cart`.
    ///
    /// The caller is responsible for clearing the cart and coupon after a
    /// successful placement.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::EmptyCart` for an empty cart and
    /// `OrderError::Invalid` with per-field messages when validation fails.
    #[instrument(skip_all, fields(lines = cart.line_count()))]
    pub async fn place_order(
        &self,
        cart: &Cart,
        coupon: Option<Coupon>,
        form: &FormData,
    ) -> Result<Confirmation, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let errors = validate_checkout(form);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "Checkout validation failed");
            return Err(OrderError::Invalid(errors));
        }

        // Validation guarantees a well-formed address.
        let email = Email::parse(form.value("email")).map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.insert("email", luxestore_core::validation::INVALID_EMAIL);
            OrderError::Invalid(errors)
        })?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let order_id = generate_order_id();
        let summary = OrderSummary::for_checkout(cart, coupon);
        tracing::info!(order_id = %order_id, total = %summary.total, "Order placed");

        Ok(Confirmation {
            order_id,
            email,
            summary,
        })
    }
}

/// `LUX-` followed by a uniformly random six-digit number.
#[must_use]
pub fn generate_order_id() -> OrderId {
    let sequence = rand::rng().random_range(100_000..=999_999);
    OrderId::from_sequence(sequence)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use luxestore_core::{CartItem, Money, ProductId};

    use super::*;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(CartItem {
            id: ProductId::new("1"),
            name: "Silk Evening Dress".to_string(),
            price: Money::from_cents(29_999),
            image: String::new(),
            quantity: 1,
            color: Some("Black".to_string()),
            size: Some("M".to_string()),
        });
        cart
    }

    fn form() -> FormData {
        [
            ("first_name", "Jane"),
            ("last_name", "Doe"),
            ("email", "jane@example.com"),
            ("phone", "555-0100"),
            ("address", "1 Main St"),
            ("city", "Springfield"),
            ("state", "IL"),
            ("zip_code", "62701"),
            ("country", "United States"),
            ("payment_method", "credit"),
            ("card_number", "4242 4242 4242 4242"),
            ("card_name", "Jane Doe"),
            ("expiry", "12/27"),
            ("cvv", "123"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_generated_order_ids_are_six_digits() {
        for _ in 0..200 {
            let id = generate_order_id();
            let digits = id.as_str().strip_prefix("LUX-").unwrap();
            assert_eq!(digits.len(), 6);
            let n: u32 = digits.parse().unwrap();
            assert!((100_000..=999_999).contains(&n));
        }
    }

    #[tokio::test]
    async fn test_place_order_confirms() {
        let service = OrderService::new(Duration::ZERO);
        let confirmation = service
            .place_order(&cart(), Some(Coupon::Luxe20), &form())
            .await
            .unwrap();

        assert!(confirmation.order_id.as_str().starts_with("LUX-"));
        assert_eq!(confirmation.email.as_str(), "jane@example.com");
        assert_eq!(confirmation.summary.coupon, Some(Coupon::Luxe20));
        assert_eq!(confirmation.summary.subtotal, Money::from_cents(29_999));
    }

    #[tokio::test]
    async fn test_place_order_rejects_empty_cart() {
        let service = OrderService::new(Duration::ZERO);
        let result = service.place_order(&Cart::new(), None, &form()).await;
        assert!(matches!(result, Err(OrderError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_place_order_returns_field_errors() {
        let service = OrderService::new(Duration::ZERO);
        let mut bad = form();
        bad.insert("city", "");
        bad.insert("cvv", "9");

        let Err(OrderError::Invalid(errors)) = service.place_order(&cart(), None, &bad).await
        else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.get("city"), Some("This field is required"));
        assert_eq!(errors.get("cvv"), Some("Please enter a valid CVV"));
    }
}
