//! Resolution of recognized keys from an environment.

use super::env::ReadEnv;
use super::error::ConfigError;
use super::keys::{Key, Profile};
use crate::redact::mask;
use std::env::VarError;
use std::fmt;

/// Values of a set of keys, in request order.
///
/// Built once by [`resolve`] and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    entries: Vec<(Key, Option<String>)>,
}

/// Look up every key in `keys`.
///
/// Never fails: an unset key maps to `None`. Values are returned exactly as
/// stored. Repeated keys are collapsed to their first position.
pub fn resolve<E: ReadEnv + ?Sized>(env: &E, keys: &[Key]) -> ResolvedConfig {
    let mut entries: Vec<(Key, Option<String>)> = Vec::with_capacity(keys.len());
    for &key in keys {
        if entries.iter().any(|(k, _)| *k == key) {
            continue;
        }
        let value = match env.var(key.env_name()) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(key = %key, "value is not valid unicode, treating as unset");
                None
            }
        };
        tracing::debug!(key = %key, set = value.is_some(), "resolved");
        entries.push((key, value));
    }
    ResolvedConfig { entries }
}

/// Shorthand for `resolve(env, profile.keys())`.
pub fn resolve_profile<E: ReadEnv + ?Sized>(env: &E, profile: Profile) -> ResolvedConfig {
    resolve(env, profile.keys())
}

impl ResolvedConfig {
    /// Value of `key`, or `None` if it is unset or was not requested.
    pub fn get(&self, key: Key) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn is_set(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Key, Option<&str>)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_deref()))
    }

    /// Requested keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Requested keys without a value, in order.
    pub fn missing(&self) -> Vec<Key> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(k, _)| *k)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strict check: fail with every absent key.
    pub fn require_all(&self) -> Result<(), ConfigError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingKeys(missing))
        }
    }

    /// Object storage view.
    pub fn storage(&self) -> StorageSettings {
        StorageSettings {
            access_key_id: self.get(Key::AccessKeyId).map(str::to_owned),
            secret_access_key: self.get(Key::SecretAccessKey).map(str::to_owned),
            region: self.get(Key::Region).map(str::to_owned),
            bucket_name: self.get(Key::BucketName).map(str::to_owned),
            object_key: self.get(Key::ObjectKey).map(str::to_owned),
        }
    }

    /// Database view.
    pub fn database(&self) -> DatabaseSettings {
        DatabaseSettings {
            host: self.get(Key::DbHost).map(str::to_owned),
            user: self.get(Key::DbUser).map(str::to_owned),
            password: self.get(Key::DbPassword).map(str::to_owned),
            name: self.get(Key::DbName).map(str::to_owned),
        }
    }
}

/// Object storage settings. `Debug` masks the credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StorageSettings {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<String>,
    pub bucket_name: Option<String>,
    pub object_key: Option<String>,
}

impl fmt::Debug for StorageSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageSettings")
            .field("access_key_id", &self.access_key_id.as_deref().map(mask))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_deref().map(mask),
            )
            .field("region", &self.region)
            .field("bucket_name", &self.bucket_name)
            .field("object_key", &self.object_key)
            .finish()
    }
}

/// Database settings. `Debug` masks the password.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_deref().map(mask))
            .field("name", &self.name)
            .finish()
    }
}
