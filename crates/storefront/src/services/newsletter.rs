//! Mock newsletter subscription.

use std::time::Duration;

use luxestore_core::validation::validate_newsletter_email;
use tracing::instrument;

/// Newsletter sign-up service. Validates the address and pretends to
/// subscribe it after a short delay.
#[derive(Debug, Clone)]
pub struct NewsletterService {
    latency: Duration,
}

impl NewsletterService {
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Subscribe `email`.
    ///
    /// # Errors
    ///
    /// Returns the inline message to show when the address is malformed.
    /// No delay is applied in that case.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, email: &str) -> Result<(), &'static str> {
        validate_newsletter_email(email)?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        tracing::info!("Newsletter subscription recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribe_accepts_valid_address() {
        let service = NewsletterService::new(Duration::ZERO);
        assert_eq!(service.subscribe("reader@example.com").await, Ok(()));
    }

    #[tokio::test]
    async fn test_subscribe_rejects_malformed_address() {
        let service = NewsletterService::new(Duration::from_secs(60));
        // Would hang for a minute if the delay ran before validation.
        assert_eq!(
            service.subscribe("not-an-email").await,
            Err("Please enter a valid email address")
        );
    }
}
