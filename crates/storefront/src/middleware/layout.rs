//! Shared page chrome.
//!
//! Every full page renders the same header (account link, cart badge), a
//! one-shot notice banner and nonce-tagged inline scripts. [`PageContext`]
//! gathers that state once per request so handlers only pass it along.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use luxestore_core::User;

use super::csp::CspNonce;
use crate::models::session::{self, Flash};

/// A header navigation link.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// The cart link carries the item-count badge.
    #[must_use]
    pub fn is_cart(&self) -> bool {
        self.href == "/cart"
    }
}

/// Header links, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/shop", label: "Shop" },
    NavLink { href: "/account", label: "Account" },
    NavLink { href: "/cart", label: "Cart" },
];

/// Per-request state needed by `base.html`.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub nonce: String,
    pub user: Option<User>,
    pub cart_count: u32,
    pub flash: Option<Flash>,
    pub path: String,
}

impl PageContext {
    /// Whether a header link points at the current section.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            self.path == "/"
        } else {
            self.path == href || self.path.starts_with(&format!("{href}/"))
        }
    }

    #[must_use]
    pub const fn nav_links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CspNonce(nonce) = CspNonce::from_request_parts(parts, state).await?;
        let path = parts.uri.path().to_string();

        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            tracing::warn!("Session not found in request extensions");
            return Ok(Self {
                nonce,
                path,
                ..Self::default()
            });
        };

        let user = session::current_user(&session).await;
        let cart_count = session::load_cart(&session).await.item_count();
        let flash = session::take_flash(&session).await;

        Ok(Self {
            nonce,
            user,
            cart_count,
            flash,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(path: &str) -> PageContext {
        PageContext {
            path: path.to_string(),
            ..PageContext::default()
        }
    }

    #[test]
    fn test_active_nav_link() {
        assert!(at("/").is_active("/"));
        assert!(!at("/shop").is_active("/"));
        assert!(at("/shop/men").is_active("/shop"));
        assert!(at("/cart").is_active("/cart"));
        assert!(!at("/cartoon").is_active("/cart"));
    }
}
