//! Environment-backed configuration for the groundwork application.
//!
//! Configuration is read once at process entry into an immutable [`AppConfig`]
//! and passed by reference or ownership to whatever needs it. Nothing in this
//! crate keeps global state.

use derive_getters::Getters;
use groundwork_error::{ConfigError, GroundworkError, GroundworkResult};
use tracing::info;

/// Host the application binds to when `APP_HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the application binds to when `APP_PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// AWS credential pair read from the environment.
///
/// Both halves are optional; the surrounding application decides whether
/// missing credentials are acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AwsConfig {
    /// `AWS_ACCESS_KEY_ID`
    #[builder(default)]
    access_key_id: Option<String>,
    /// `AWS_SECRET_ACCESS_KEY`
    #[builder(default)]
    secret_access_key: Option<String>,
}

/// Process-wide application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AppConfig {
    /// MongoDB connection string, absent when `MONGODB_URLX` is unset
    #[builder(default)]
    mongodb_url: Option<String>,
    /// AWS credentials
    aws: AwsConfig,
    /// Host to bind the application to
    host: String,
    /// Port to bind the application to
    port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, best effort.
    ///
    /// Reads:
    /// - `MONGODB_URLX` (optional)
    /// - `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` (optional)
    /// - `APP_HOST` (default: "0.0.0.0")
    /// - `APP_PORT` (default: 5000; a malformed value fails at startup)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use groundwork_config::AppConfig;
    ///
    /// let config = AppConfig::from_env().expect("valid environment");
    /// println!("binding to {}:{}", config.host(), config.port());
    /// ```
    #[tracing::instrument]
    pub fn from_env() -> GroundworkResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with a `std::env::var` lookup; tests supply
    /// their own.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GroundworkResult<Self> {
        let mongodb_url = lookup("MONGODB_URLX");
        let aws = AwsConfigBuilder::default()
            .access_key_id(lookup("AWS_ACCESS_KEY_ID"))
            .secret_access_key(lookup("AWS_SECRET_ACCESS_KEY"))
            .build()
            .expect("Valid AwsConfig");
        let host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("APP_PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        info!(host = %host, port = port, "Configuration loaded");
        Ok(AppConfigBuilder::default()
            .mongodb_url(mongodb_url)
            .aws(aws)
            .host(host)
            .port(port)
            .build()
            .expect("Valid AppConfig"))
    }
}

fn parse_port(raw: &str) -> GroundworkResult<u16> {
    raw.trim().parse().map_err(|e| {
        GroundworkError::from(ConfigError::new(format!(
            "APP_PORT must be an integer, got '{}': {}",
            raw, e
        )))
    })
}
