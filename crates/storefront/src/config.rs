//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! Nothing is required; every variable has a development default.
//!
//! ## Server
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//!
//! ## Simulated latency
//! - `MOCK_AUTH_LATENCY_MS` - Sign-in / registration delay (default: 1000)
//! - `MOCK_ORDER_LATENCY_MS` - Order submission delay (default: 2000)
//! - `MOCK_NEWSLETTER_LATENCY_MS` - Newsletter sign-up delay (default: 500)
//!
//! ## Error tracking
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//!
//! ## Third-party keys (declared for deployment parity, not used by any route)
//! - `STRIPE_PUBLIC_KEY`, `STRIPE_SECRET_KEY`
//! - `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY`, `CLOUDINARY_API_SECRET`
//! - `AUTH_SECRET` (falls back to `NEXTAUTH_SECRET`), `AUTH_URL`

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Artificial delays for the mocked back-end calls
    pub latency: MockLatency,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
    /// Third-party service keys
    pub integrations: IntegrationKeys,
}

/// Simulated back-end latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    pub auth: Duration,
    pub order: Duration,
    pub newsletter: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(1000),
            order: Duration::from_millis(2000),
            newsletter: Duration::from_millis(500),
        }
    }
}

impl MockLatency {
    /// No waiting at all. Used by tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            auth: Duration::ZERO,
            order: Duration::ZERO,
            newsletter: Duration::ZERO,
        }
    }
}

/// Payment, media and auth provider keys.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone, Default)]
pub struct IntegrationKeys {
    pub stripe_public_key: Option<String>,
    pub stripe_secret_key: Option<SecretString>,
    pub cloudinary_cloud_name: Option<String>,
    pub cloudinary_api_key: Option<String>,
    pub cloudinary_api_secret: Option<SecretString>,
    pub auth_secret: Option<SecretString>,
    pub auth_url: Option<String>,
}

impl std::fmt::Debug for IntegrationKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(value: Option<&SecretString>) -> Option<&'static str> {
            value.map(|_| "[REDACTED]")
        }

        f.debug_struct("IntegrationKeys")
            .field("stripe_public_key", &self.stripe_public_key)
            .field("stripe_secret_key", &redact(self.stripe_secret_key.as_ref()))
            .field("cloudinary_cloud_name", &self.cloudinary_cloud_name)
            .field("cloudinary_api_key", &self.cloudinary_api_key)
            .field(
                "cloudinary_api_secret",
                &redact(self.cloudinary_api_secret.as_ref()),
            )
            .field("auth_secret", &redact(self.auth_secret.as_ref()))
            .field("auth_url", &self.auth_url)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".to_string(), e.to_string())
        })?;
        let static_dir = PathBuf::from(get_env_or_default(
            "STOREFRONT_STATIC_DIR",
            "crates/storefront/static",
        ));

        let defaults = MockLatency::default();
        let latency = MockLatency {
            auth: get_duration_ms("MOCK_AUTH_LATENCY_MS", defaults.auth)?,
            order: get_duration_ms("MOCK_ORDER_LATENCY_MS", defaults.order)?,
            newsletter: get_duration_ms("MOCK_NEWSLETTER_LATENCY_MS", defaults.newsletter)?,
        };

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            latency,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            integrations: IntegrationKeys::from_env(),
        })
    }

    /// Development configuration with no artificial latency.
    ///
    /// Binds to an ephemeral port on loopback.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            latency: MockLatency::none(),
            sentry_dsn: None,
            sentry_environment: None,
            integrations: IntegrationKeys::default(),
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` flag.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl IntegrationKeys {
    fn from_env() -> Self {
        Self {
            stripe_public_key: get_optional_env("STRIPE_PUBLIC_KEY"),
            stripe_secret_key: get_optional_secret("STRIPE_SECRET_KEY"),
            cloudinary_cloud_name: get_optional_env("CLOUDINARY_CLOUD_NAME"),
            cloudinary_api_key: get_optional_env("CLOUDINARY_API_KEY"),
            cloudinary_api_secret: get_optional_secret("CLOUDINARY_API_SECRET"),
            auth_secret: get_optional_secret("AUTH_SECRET")
                .or_else(|| get_optional_secret("NEXTAUTH_SECRET")),
            auth_url: get_optional_env("AUTH_URL"),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable. Blank values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an optional environment variable as a secret.
fn get_optional_secret(key: &str) -> Option<SecretString> {
    get_optional_env(key).map(SecretString::from)
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a millisecond duration, falling back to `default` when unset.
fn get_duration_ms(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |raw| parse_millis(key, &raw))
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
