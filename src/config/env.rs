//! Narrow accessors for environment variables.
//!
//! All reads and writes the loader performs go through [`ReadEnv`] and
//! [`WriteEnv`], so tests can run against a [`MapEnv`] instead of the real
//! process environment.

use std::cell::RefCell;
use std::collections::HashMap;
use std::env::VarError;

/// Read access to an environment.
pub trait ReadEnv {
    /// Look up `key` by exact name.
    fn var(&self, key: &str) -> Result<String, VarError>;

    /// Whether `key` is defined at all, including with a non-Unicode value.
    fn contains(&self, key: &str) -> bool {
        !matches!(self.var(key), Err(VarError::NotPresent))
    }
}

/// Write access to an environment.
pub trait WriteEnv {
    fn set_var(&self, key: &str, value: &str);
}

/// The real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }

    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }
}

impl WriteEnv for SystemEnv {
    fn set_var(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

/// In-memory environment.
///
/// Uses interior mutability so it can be shared by reference like
/// [`SystemEnv`].
///
/// ```rust
/// use credenv::config::{MapEnv, ReadEnv, WriteEnv};
///
/// let env = MapEnv::new();
/// env.set_var("RDS_HOST", "localhost");
/// assert_eq!(env.var("RDS_HOST").unwrap(), "localhost");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: RefCell<HashMap<String, String>>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all variables, for comparisons in tests.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.vars.borrow().clone()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: RefCell::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl ReadEnv for MapEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(VarError::NotPresent)
    }
}

impl WriteEnv for MapEnv {
    fn set_var(&self, key: &str, value: &str) {
        self.vars
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_env_reports_missing_as_not_present() {
        let env = MapEnv::new();
        assert!(matches!(env.var("NOPE"), Err(VarError::NotPresent)));
        assert!(!env.contains("NOPE"));
    }

    #[test]
    fn map_env_set_then_read() {
        let env: MapEnv = [("A", "1")].into_iter().collect();
        env.set_var("B", "2");
        assert_eq!(env.var("A").unwrap(), "1");
        assert_eq!(env.var("B").unwrap(), "2");
        assert!(env.contains("B"));
    }

    #[test]
    fn map_env_keys_are_case_sensitive() {
        let env: MapEnv = [("key", "v")].into_iter().collect();
        assert!(env.var("KEY").is_err());
    }

    #[test]
    fn system_env_reads_process_environment() {
        temp_env::with_vars(
            [
                ("CREDENV_TEST_SYSTEM_SET", Some("value")),
                ("CREDENV_TEST_SYSTEM_UNSET", None),
            ],
            || {
                assert_eq!(SystemEnv.var("CREDENV_TEST_SYSTEM_SET").unwrap(), "value");
                assert!(SystemEnv.contains("CREDENV_TEST_SYSTEM_SET"));
                assert!(!SystemEnv.contains("CREDENV_TEST_SYSTEM_UNSET"));
            },
        );
    }
}
