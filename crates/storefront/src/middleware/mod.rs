//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request spans)
//! 3. Request ID (add unique ID to each request)
//! 4. CSP nonce (generate per-request nonce for inline scripts)
//! 5. Security headers (CSP, COOP/COEP, etc.)
//! 6. Session layer (tower-sessions with in-memory store)

pub mod auth;
pub mod csp;
pub mod layout;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{clear_current_user, set_current_user};
pub use csp::{CspNonce, csp_nonce_middleware};
pub use layout::PageContext;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
