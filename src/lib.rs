//! credenv - credential loading from the environment.
//!
//! Resolves a fixed set of object storage and database credentials from the
//! process environment, after merging an optional local `.env` file that
//! never overrides variables already set.
//!
//! - **config**: keys, profiles, override file loading and resolution
//! - **redact**: masking of secret values
//! - **emit**: diagnostic dump of resolved values
//! - **bootstrap**: tracing initialization
//!
//! # Features
//!
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `cli` - The `credenv` binary (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,no_run
//! use credenv::config::{load_local_overrides, resolve_profile, Profile, SystemEnv};
//!
//! load_local_overrides(".env");
//! let values = resolve_profile(&SystemEnv, Profile::Database);
//! let db = values.database();
//! println!("{db:?}");
//! ```

pub mod config;
pub mod emit;
pub mod redact;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
pub use config::{
    load_local_overrides, resolve, resolve_profile, ConfigError, Key, LoaderConfig, Profile,
    ResolvedConfig,
};
pub use emit::{emit, Format, Redaction};

#[cfg(feature = "bootstrap")]
pub use bootstrap::init_tracing;
