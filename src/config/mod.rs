//! Configuration loading from the environment and a local override file.

mod env;
mod error;
mod keys;
mod overrides;
mod resolve;
mod settings;

pub use env::{MapEnv, ReadEnv, SystemEnv, WriteEnv};
pub use error::ConfigError;
pub use keys::{Key, Profile};
pub use overrides::{
    load_local_overrides, load_local_overrides_into, OverrideSummary, DEFAULT_ENV_FILE,
};
pub use resolve::{
    resolve, resolve_profile, DatabaseSettings, ResolvedConfig, StorageSettings,
};
pub use settings::LoaderConfig;
