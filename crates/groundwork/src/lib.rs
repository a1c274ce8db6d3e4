//! Facade crate for the groundwork workspace.
//!
//! Re-exports the configuration and error types so downstream applications
//! depend on a single crate, and owns tracing subscriber setup.

pub mod observability;

pub use groundwork_config::{
    AppConfig, AppConfigBuilder, AwsConfig, AwsConfigBuilder, DEFAULT_HOST, DEFAULT_PORT,
};
pub use groundwork_error::{
    AnnotatedError, ConfigError, GroundworkError, GroundworkErrorKind, GroundworkResult,
    SourceLocation,
};
pub use observability::init_tracing;
