//! Sign-in and sign-out session helpers.
//!
//! Handlers read the signed-in user through
//! [`PageContext`](super::PageContext).
//!
//! At most one user is signed in per visitor session. The record is written
//! at sign-in / registration and removed at logout.

use tower_sessions::Session;

use luxestore_core::User;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::models::session::keys;

/// Store the signed-in user in the session.
///
/// The session id is cycled first so a pre-login cookie cannot be reused
/// to ride the signed-in session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &User,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(keys::CURRENT_USER, user).await?;
    set_sentry_user(&user.id, Some(user.email.as_str()));
    Ok(())
}

/// Remove the signed-in user from the session (logout).
///
/// The cart is left alone.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove_value(keys::CURRENT_USER).await?;
    clear_sentry_user();
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use luxestore_core::{Email, UserId, UserRole};
    use tower_sessions::MemoryStore;

    use super::*;
    use crate::models::session;

    fn user() -> User {
        User {
            id: UserId::new("1"),
            name: "John Doe".to_string(),
            email: Email::parse("john@example.com").unwrap(),
            role: UserRole::User,
            avatar: None,
            shipping_address: None,
            billing_address: None,
        }
    }

    #[tokio::test]
    async fn test_logout_clears_user_record() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        set_current_user(&session, &user()).await.unwrap();
        assert_eq!(session::current_user(&session).await, Some(user()));

        clear_current_user(&session).await.unwrap();
        assert!(session::current_user(&session).await.is_none());
        assert!(session.get_value(keys::CURRENT_USER).await.unwrap().is_none());
    }
}
