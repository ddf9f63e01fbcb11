//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::auth::AuthService;
use crate::services::newsletter::NewsletterService;
use crate::services::orders::OrderService;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds only immutable data: per-visitor
/// state (cart, user, coupon) lives in the session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    auth: AuthService,
    orders: OrderService,
    newsletter: NewsletterService,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let auth = AuthService::new(config.latency.auth);
        let orders = OrderService::new(config.latency.order);
        let newsletter = NewsletterService::new(config.latency.newsletter);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::sample(),
                auth,
                orders,
                newsletter,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Mock sign-in / registration.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Mock order placement.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    /// Mock newsletter sign-up.
    #[must_use]
    pub fn newsletter(&self) -> &NewsletterService {
        &self.inner.newsletter
    }
}
