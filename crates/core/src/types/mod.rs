//! Core types for LuxeStore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod order;
pub mod product;
pub mod status;
pub mod user;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::Money;
pub use order::{Order, OrderLine};
pub use product::{Category, Product};
pub use status::*;
pub use user::{Address, User};
