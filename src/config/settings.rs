//! Loader settings.

use super::env::{ReadEnv, SystemEnv};
use super::keys::Profile;
use super::overrides::DEFAULT_ENV_FILE;
use std::path::PathBuf;

/// How the loader itself is configured.
///
/// Reads from environment variables with sensible defaults:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `CREDENV_PROFILE` | `credentials` | Profile to resolve |
/// | `CREDENV_ENV_FILE` | `.env` | Override file path |
/// | `CREDENV_DOTENV_DISABLED` | (unset) | Skip the override file |
/// | `CREDENV_STRICT` | (unset) | Fail on missing keys |
///
/// # Example
///
/// ```rust
/// use credenv::LoaderConfig;
///
/// let config = LoaderConfig::from_env();
/// if config.load_env_file {
///     credenv::config::load_local_overrides(&config.env_file);
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    pub profile: Profile,
    pub env_file: PathBuf,
    pub load_env_file: bool,
    pub strict: bool,
}

impl LoaderConfig {
    /// Create a new config from the process environment.
    pub fn from_env() -> Self {
        Self::from_read_env(&SystemEnv)
    }

    pub fn from_read_env<E: ReadEnv + ?Sized>(env: &E) -> Self {
        let profile = match env.var("CREDENV_PROFILE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default profile");
                Profile::default()
            }),
            Err(_) => Profile::default(),
        };

        Self {
            profile,
            env_file: env
                .var("CREDENV_ENV_FILE")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE)),
            load_env_file: !flag(env, "CREDENV_DOTENV_DISABLED"),
            strict: flag(env, "CREDENV_STRICT"),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            load_env_file: true,
            strict: false,
        }
    }
}

fn flag<E: ReadEnv + ?Sized>(env: &E, name: &str) -> bool {
    match env.var(name) {
        Ok(v) => {
            let v = v.trim();
            !(v.is_empty() || v == "0" || v.eq_ignore_ascii_case("false"))
        }
        Err(_) => false,
    }
}
