//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Mock sign-in and registration
//! - `orders` - Mock order placement
//! - `newsletter` - Mock newsletter sign-up
//!
//! Each service owns its simulated latency and nothing else; all
//! per-visitor state is passed in by the route handlers.

pub mod auth;
pub mod newsletter;
pub mod orders;
