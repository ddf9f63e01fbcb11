//! LuxeStore Core - Domain library.
//!
//! This crate provides the types and pure logic shared by the storefront:
//! - [`types`] - Newtype IDs, emails, money, statuses, users, products, orders
//! - [`cart`] - The shopping cart container and its reducer
//! - [`pricing`] - Shipping, tax and coupon arithmetic for order summaries
//! - [`validation`] - Field-by-field validation for checkout, login and registration forms
//!
//! # Architecture
//!
//! The core crate contains no I/O, no HTTP and no async code. Everything here
//! is a total function over in-memory values, which keeps it trivially
//! testable and usable from any handler.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod pricing;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartAction, CartItem, MAX_QUANTITY, VariantKey, reduce};
pub use pricing::{Coupon, CouponError, OrderSummary};
pub use types::*;
pub use validation::{FieldErrors, FormData, PaymentMethod};
