use vault_core::billing::DEFAULT_SIGNATURE_TOLERANCE_SECS;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Billing webhook configuration (shared secret, replay tolerance).
    pub billing: BillingConfig,
}

/// Billing provider webhook settings.
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Shared secret the provider signs webhook deliveries with.
    pub webhook_secret: String,
    /// Allowed clock skew for signature timestamps, in seconds.
    pub signature_tolerance_secs: i64,
}

impl BillingConfig {
    /// Load billing webhook configuration from environment variables.
    ///
    /// | Env Var                          | Required | Default |
    /// |----------------------------------|----------|---------|
    /// | `STRIPE_WEBHOOK_SECRET`          | **yes**  | --      |
    /// | `WEBHOOK_SIGNATURE_TOLERANCE_SECS` | no     | `300`   |
    ///
    /// # Panics
    ///
    /// Panics if `STRIPE_WEBHOOK_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let webhook_secret = std::env::var("STRIPE_WEBHOOK_SECRET")
            .expect("STRIPE_WEBHOOK_SECRET must be set in the environment");
        assert!(
            !webhook_secret.is_empty(),
            "STRIPE_WEBHOOK_SECRET must not be empty"
        );

        let signature_tolerance_secs: i64 = std::env::var("WEBHOOK_SIGNATURE_TOLERANCE_SECS")
            .unwrap_or_else(|_| DEFAULT_SIGNATURE_TOLERANCE_SECS.to_string())
            .parse()
            .expect("WEBHOOK_SIGNATURE_TOLERANCE_SECS must be a valid i64");

        Self {
            webhook_secret,
            signature_tolerance_secs,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            billing: BillingConfig::from_env(),
        }
    }
}
