//! Authentication service.
//!
//! There is no account database or credential check. Signing in or
//! registering fabricates a [`User`] after a short simulated delay; the
//! route layer stores it in the visitor's session.

mod error;

pub use error::AuthError;

use std::time::Duration;

use luxestore_core::{Email, User, UserId, UserRole};
use tracing::instrument;

/// Email of the one-click demo account.
pub const DEMO_EMAIL: &str = "demo@luxestore.com";

/// Password of the one-click demo account.
pub const DEMO_PASSWORD: &str = "password123";

/// Address that receives the portrait avatar on sign-in.
pub const AVATAR_EMAIL: &str = "demo@example.com";

const AVATAR_URL: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=1974&auto=format&fit=crop";

/// Name given to every signed-in (not registered) user.
const SIGNED_IN_NAME: &str = "John Doe";

/// Mock authentication service.
#[derive(Debug, Clone)]
pub struct AuthService {
    latency: Duration,
}

impl AuthService {
    /// Create a service that waits `latency` before answering.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Sign in.
    ///
    /// The password is accepted without checking. The returned user is
    /// always id `1` named "John Doe"; only `demo@example.com` gets an
    /// avatar.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email cannot be parsed.
    #[instrument(skip(self, _password), fields(email = %email))]
    pub async fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        self.simulate_latency().await;

        let avatar = (email.as_str() == AVATAR_EMAIL).then(|| AVATAR_URL.to_string());
        tracing::info!("Mock sign-in succeeded");

        Ok(User {
            id: UserId::new("1"),
            name: SIGNED_IN_NAME.to_string(),
            email,
            role: UserRole::User,
            avatar,
            shipping_address: None,
            billing_address: None,
        })
    }

    /// Sign in as the demo account.
    ///
    /// # Errors
    ///
    /// Never fails in practice; shares `login`'s signature.
    pub async fn login_demo(&self) -> Result<User, AuthError> {
        self.login(DEMO_EMAIL, DEMO_PASSWORD).await
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingName` for a blank name or
    /// `AuthError::InvalidEmail` if the email cannot be parsed.
    #[instrument(skip(self, _password), fields(email = %email))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<User, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::MissingName);
        }
        let email = Email::parse(email)?;
        self.simulate_latency().await;

        tracing::info!("Mock registration succeeded");

        Ok(User {
            id: UserId::new("1"),
            name: name.to_string(),
            email,
            role: UserRole::User,
            avatar: None,
            shipping_address: None,
            billing_address: None,
        })
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_fabricates_john_doe() {
        let user = service().login("shopper@example.com", "anything").await.unwrap();

        assert_eq!(user.id, UserId::new("1"));
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email.as_str(), "shopper@example.com");
        assert_eq!(user.role, UserRole::User);
        assert!(user.avatar.is_none());
    }

    #[tokio::test]
    async fn test_login_avatar_only_for_demo_example_address() {
        let user = service().login("demo@example.com", "x").await.unwrap();
        assert!(user.avatar.is_some());

        let demo = service().login_demo().await.unwrap();
        assert_eq!(demo.email.as_str(), DEMO_EMAIL);
        assert!(demo.avatar.is_none());
    }

    #[tokio::test]
    async fn test_register_uses_submitted_name() {
        let user = service()
            .register("  Jane Roe ", "jane@example.com", "password123")
            .await
            .unwrap();

        assert_eq!(user.name, "Jane Roe");
        assert_eq!(user.id, UserId::new("1"));
        assert!(user.avatar.is_none());
    }

    #[tokio::test]
    async fn test_register_rejects_blank_name_and_bad_email() {
        assert!(matches!(
            service().register(" ", "jane@example.com", "x").await,
            Err(AuthError::MissingName)
        ));
        assert!(matches!(
            service().register("Jane", "jane", "x").await,
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[tokio::test]
    async fn test_login_waits_configured_latency() {
        let service = AuthService::new(Duration::from_millis(20));
        let started = tokio::time::Instant::now();
        service.login("a@b.co", "x").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
