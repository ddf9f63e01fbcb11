//! Storefront models.
//!
//! Domain types live in `luxestore-core`; this module holds what is
//! specific to the web layer, namely the per-visitor session state.

pub mod session;

pub use session::{Flash, FlashKind, keys as session_keys};
