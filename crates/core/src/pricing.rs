//! Shipping, tax and coupon arithmetic.
//!
//! The cart page shows `subtotal + shipping - discount`; checkout adds tax
//! on top. Both are computed by [`OrderSummary`] from the cart's current
//! subtotal so a displayed total can never drift from the lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;
use crate::types::Money;

/// Flat shipping charge applied to every order.
pub const SHIPPING: Money = Money::from_cents(1500);

/// Checkout sales tax, as a percentage of the subtotal.
pub const TAX_PERCENT: u32 = 10;

/// Errors from coupon entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponError {
    /// The code is not one the store recognises.
    #[error("Invalid coupon code")]
    Invalid,
}

/// A recognised discount code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coupon {
    /// `LUXE20`: 20% off the subtotal.
    Luxe20,
}

impl Coupon {
    /// Parse a code as typed by a shopper.
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CouponError::Invalid`] for any unrecognised code.
    pub fn parse(code: &str) -> Result<Self, CouponError> {
        if code.trim().eq_ignore_ascii_case("LUXE20") {
            Ok(Self::Luxe20)
        } else {
            Err(CouponError::Invalid)
        }
    }

    /// Canonical code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Luxe20 => "LUXE20",
        }
    }

    /// Percentage taken off the subtotal.
    #[must_use]
    pub const fn percent_off(self) -> u32 {
        match self {
            Self::Luxe20 => 20,
        }
    }

    /// Discount this coupon grants on `subtotal`.
    #[must_use]
    pub fn discount(self, subtotal: Money) -> Money {
        subtotal.percent(self.percent_off())
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Coupon {
    type Err = CouponError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The money column of the cart and checkout pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub discount: Money,
    pub total: Money,
    pub coupon: Option<Coupon>,
}

impl OrderSummary {
    /// Cart page totals: no tax line.
    #[must_use]
    pub fn for_cart(cart: &Cart, coupon: Option<Coupon>) -> Self {
        Self::build(cart.subtotal(), coupon, false)
    }

    /// Checkout totals: shipping, 10% tax and any carried-over coupon.
    #[must_use]
    pub fn for_checkout(cart: &Cart, coupon: Option<Coupon>) -> Self {
        Self::build(cart.subtotal(), coupon, true)
    }

    fn build(subtotal: Money, coupon: Option<Coupon>, with_tax: bool) -> Self {
        let tax = if with_tax {
            subtotal.percent(TAX_PERCENT)
        } else {
            Money::ZERO
        };
        let discount = coupon.map_or(Money::ZERO, |c| c.discount(subtotal));
        Self {
            subtotal,
            shipping: SHIPPING,
            tax,
            discount,
            total: subtotal + SHIPPING + tax - discount,
            coupon,
        }
    }

    /// Whether a discount line should be shown.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }
}
