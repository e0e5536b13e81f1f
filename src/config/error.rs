//! Loader errors.
//!
//! Missing override files and unset keys are not errors. Only the opt-in
//! strict check and profile parsing can fail.

use super::keys::Key;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Strict mode found keys with no value.
    #[error("missing required configuration: {}", join_names(.0))]
    MissingKeys(Vec<Key>),

    #[error("unknown profile '{0}' (expected one of: credentials, object, database, all)")]
    UnknownProfile(String),
}

fn join_names(keys: &[Key]) -> String {
    keys.iter()
        .map(|k| k.env_name())
        .collect::<Vec<_>>()
        .join(", ")
}
