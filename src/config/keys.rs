//! Recognized configuration keys and deployment profiles.

use super::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A recognized configuration key.
///
/// | Key | Variable | Secret |
/// |-----|----------|--------|
/// | [`AccessKeyId`](Key::AccessKeyId) | `AWS_ACCESS_KEY` | yes |
/// | [`SecretAccessKey`](Key::SecretAccessKey) | `AWS_SECRET_KEY` | yes |
/// | [`Region`](Key::Region) | `AWS_REGION` | no |
/// | [`BucketName`](Key::BucketName) | `bucket_name` | no |
/// | [`ObjectKey`](Key::ObjectKey) | `key` | no |
/// | [`DbHost`](Key::DbHost) | `RDS_HOST` | no |
/// | [`DbUser`](Key::DbUser) | `RDS_USER` | no |
/// | [`DbPassword`](Key::DbPassword) | `RDS_PASSWORD` | yes |
/// | [`DbName`](Key::DbName) | `RDS_DATABASE` | no |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    AccessKeyId,
    SecretAccessKey,
    Region,
    BucketName,
    ObjectKey,
    DbHost,
    DbUser,
    DbPassword,
    DbName,
}

impl Key {
    pub const ALL: [Key; 9] = [
        Key::AccessKeyId,
        Key::SecretAccessKey,
        Key::Region,
        Key::BucketName,
        Key::ObjectKey,
        Key::DbHost,
        Key::DbUser,
        Key::DbPassword,
        Key::DbName,
    ];

    /// Environment variable this key is read from.
    pub const fn env_name(self) -> &'static str {
        match self {
            Key::AccessKeyId => "AWS_ACCESS_KEY",
            Key::SecretAccessKey => "AWS_SECRET_KEY",
            Key::Region => "AWS_REGION",
            Key::BucketName => "bucket_name",
            Key::ObjectKey => "key",
            Key::DbHost => "RDS_HOST",
            Key::DbUser => "RDS_USER",
            Key::DbPassword => "RDS_PASSWORD",
            Key::DbName => "RDS_DATABASE",
        }
    }

    /// Whether values of this key must be masked in diagnostics.
    pub const fn is_secret(self) -> bool {
        matches!(
            self,
            Key::AccessKeyId | Key::SecretAccessKey | Key::DbPassword
        )
    }

    /// Exact, case-sensitive reverse lookup.
    pub fn from_env_name(name: &str) -> Option<Key> {
        Key::ALL.into_iter().find(|k| k.env_name() == name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_name())
    }
}

/// The declared key list of one deployment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Storage access credentials plus the database.
    #[default]
    Credentials,
    /// A single storage object plus the database.
    Object,
    /// Database only.
    Database,
    /// Every recognized key.
    All,
}

const CREDENTIALS_KEYS: &[Key] = &[
    Key::AccessKeyId,
    Key::SecretAccessKey,
    Key::Region,
    Key::DbHost,
    Key::DbUser,
    Key::DbPassword,
    Key::DbName,
];

const OBJECT_KEYS: &[Key] = &[
    Key::BucketName,
    Key::ObjectKey,
    Key::DbHost,
    Key::DbUser,
    Key::DbPassword,
    Key::DbName,
];

const DATABASE_KEYS: &[Key] = &[Key::DbHost, Key::DbUser, Key::DbPassword, Key::DbName];

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::Credentials,
        Profile::Object,
        Profile::Database,
        Profile::All,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Profile::Credentials => "credentials",
            Profile::Object => "object",
            Profile::Database => "database",
            Profile::All => "all",
        }
    }

    pub fn keys(self) -> &'static [Key] {
        match self {
            Profile::Credentials => CREDENTIALS_KEYS,
            Profile::Object => OBJECT_KEYS,
            Profile::Database => DATABASE_KEYS,
            Profile::All => &Key::ALL,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Profile::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownProfile(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_names_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_env_name(key.env_name()), Some(key));
        }
    }

    #[test]
    fn env_name_lookup_is_case_sensitive() {
        assert_eq!(Key::from_env_name("rds_host"), None);
        assert_eq!(Key::from_env_name("BUCKET_NAME"), None);
    }

    #[test]
    fn only_credentials_are_secret() {
        let secrets: Vec<Key> = Key::ALL.into_iter().filter(|k| k.is_secret()).collect();
        assert_eq!(
            secrets,
            vec![Key::AccessKeyId, Key::SecretAccessKey, Key::DbPassword]
        );
    }

    #[test]
    fn profiles_share_database_keys() {
        for profile in [Profile::Credentials, Profile::Object, Profile::Database] {
            for key in DATABASE_KEYS {
                assert!(profile.keys().contains(key), "{profile} lacks {key}");
            }
        }
    }

    #[test]
    fn object_profile_has_no_access_keys() {
        let keys = Profile::Object.keys();
        assert!(keys.contains(&Key::BucketName));
        assert!(keys.contains(&Key::ObjectKey));
        assert!(!keys.contains(&Key::AccessKeyId));
        assert!(!keys.contains(&Key::SecretAccessKey));
    }

    #[test]
    fn profile_parses_case_insensitively() {
        assert_eq!("Object".parse::<Profile>().unwrap(), Profile::Object);
        assert_eq!(" all ".parse::<Profile>().unwrap(), Profile::All);
        assert_eq!(
            "nope".parse::<Profile>(),
            Err(ConfigError::UnknownProfile("nope".to_string()))
        );
    }

    #[test]
    fn default_profile_is_credentials() {
        assert_eq!(Profile::default(), Profile::Credentials);
    }
}
