//! Session-stored visitor state.
//!
//! Everything a visitor accumulates (cart, applied coupon, signed-in user,
//! one-shot notices) is kept in their cookie session. Reads are defensive:
//! a record that no longer deserializes is logged, dropped and treated as
//! absent so a stale cookie can never break a page.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower_sessions::Session;

use luxestore_core::{Cart, Coupon, User};

/// Session keys for visitor data.
pub mod keys {
    /// Key for storing the current signed-in user.
    pub const CURRENT_USER: &str = "luxestore-user";

    /// Key for storing the cart lines.
    pub const CART: &str = "luxestore-cart";

    /// Key for the coupon applied on the cart page.
    pub const COUPON: &str = "coupon";

    /// Key for a notice shown once on the next page view.
    pub const FLASH: &str = "flash";
}

/// Tone of a one-shot notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// CSS modifier for the notice banner.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice-success",
            Self::Error => "notice-error",
        }
    }
}

/// A notice shown once after a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Read a session value, treating unreadable data as absent.
async fn read<T: DeserializeOwned>(session: &Session, key: &str) -> Option<T> {
    match session.get::<T>(key).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unreadable session value");
            if let Err(e) = session.remove_value(key).await {
                tracing::warn!(key, error = %e, "Failed to remove unreadable session value");
            }
            None
        }
    }
}

/// The signed-in user, if any.
pub async fn current_user(session: &Session) -> Option<User> {
    read(session, keys::CURRENT_USER).await
}

/// The visitor's cart; empty when none has been stored.
pub async fn load_cart(session: &Session) -> Cart {
    read(session, keys::CART).await.unwrap_or_default()
}

/// Persist the cart.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// The coupon applied on the cart page, if any.
pub async fn load_coupon(session: &Session) -> Option<Coupon> {
    read(session, keys::COUPON).await
}

/// Apply or remove the coupon.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_coupon(
    session: &Session,
    coupon: Option<Coupon>,
) -> Result<(), tower_sessions::session::Error> {
    match coupon {
        Some(coupon) => session.insert(keys::COUPON, coupon).await,
        None => session.remove::<Coupon>(keys::COUPON).await.map(|_| ()),
    }
}

/// Empty the cart and drop the coupon after an order is placed.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_checkout(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<Cart>(keys::CART).await?;
    session.remove::<Coupon>(keys::COUPON).await?;
    Ok(())
}

/// Queue a notice for the next page view.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_flash(session: &Session, flash: Flash) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::FLASH, flash).await
}

/// Take the queued notice, if any. It is removed from the session.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    match session.remove::<Flash>(keys::FLASH).await {
        Ok(flash) => flash,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable flash notice");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use luxestore_core::{CartItem, Money, ProductId};
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_cart_round_trips_through_session() {
        let session = session();
        assert!(load_cart(&session).await.is_empty());

        let mut cart = Cart::new();
        cart.add(CartItem {
            id: ProductId::new("3"),
            name: "Leather Crossbody Bag".to_string(),
            price: Money::from_cents(18_999),
            image: String::new(),
            quantity: 2,
            color: Some("Tan".to_string()),
            size: None,
        });
        save_cart(&session, &cart).await.unwrap();

        assert_eq!(load_cart(&session).await, cart);
    }

    #[tokio::test]
    async fn test_unreadable_user_is_signed_out() {
        let session = session();
        session
            .insert(keys::CURRENT_USER, serde_json::json!({"name": 42}))
            .await
            .unwrap();

        assert!(current_user(&session).await.is_none());
        // The bad record is dropped.
        assert!(
            session
                .get_value(keys::CURRENT_USER)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_unreadable_cart_is_empty() {
        let session = session();
        session.insert(keys::CART, "garbage").await.unwrap();
        assert!(load_cart(&session).await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_checkout_drops_cart_and_coupon() {
        let session = session();
        save_coupon(&session, Some(Coupon::Luxe20)).await.unwrap();
        session.insert(keys::CART, Cart::new()).await.unwrap();

        clear_checkout(&session).await.unwrap();
        assert!(load_coupon(&session).await.is_none());
        assert!(session.get_value(keys::CART).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_flash_is_shown_once() {
        let session = session();
        set_flash(&session, Flash::error("Invalid coupon code")).await.unwrap();

        let flash = take_flash(&session).await.unwrap();
        assert_eq!(flash.kind, FlashKind::Error);
        assert_eq!(flash.message, "Invalid coupon code");
        assert!(take_flash(&session).await.is_none());
    }
}
