//! Local override file (`.env`) loading.
//!
//! Entries are merged into the environment only where the variable is not
//! already defined. A missing or unreadable file is not an error.

use super::env::{ReadEnv, SystemEnv, WriteEnv};
use std::path::{Path, PathBuf};

/// Conventional override file name.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// What a call to [`load_local_overrides_into`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverrideSummary {
    pub path: PathBuf,
    /// Whether the file existed and could be opened.
    pub found: bool,
    /// Variables defined from the file.
    pub applied: Vec<String>,
    /// File entries ignored because the environment already had them.
    pub kept_existing: Vec<String>,
    /// Lines that could not be parsed or could not be stored in the environment.
    pub malformed: usize,
}

/// Merge `path` into the process environment.
///
/// # Example
///
/// ```rust,no_run
/// use credenv::config::load_local_overrides;
///
/// load_local_overrides(".env");
/// ```
pub fn load_local_overrides(path: impl AsRef<Path>) -> OverrideSummary {
    load_local_overrides_into(&SystemEnv, path)
}

/// Merge `path` into `env`, never overwriting a variable `env` already
/// defines.
///
/// Values go through dotenvy's substitution. Unquoted and double-quoted
/// values expand both `$NAME` and `${NAME}`, so `abc$def` loads as `abc`
/// when `def` is unset. Single-quoted values are taken verbatim, which is
/// the form to use for credentials containing `$`. Substitutions read the
/// process environment and earlier lines of the file, not `env`.
pub fn load_local_overrides_into<E>(env: &E, path: impl AsRef<Path>) -> OverrideSummary
where
    E: ReadEnv + WriteEnv + ?Sized,
{
    let path = path.as_ref();
    let mut summary = OverrideSummary {
        path: path.to_path_buf(),
        ..Default::default()
    };

    let entries = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "no override file");
            return summary;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "override file unreadable, skipping");
            return summary;
        }
    };
    summary.found = true;

    for entry in entries {
        match entry {
            Ok((key, value)) => {
                if !settable(&key, &value) {
                    tracing::warn!(
                        path = %path.display(),
                        key = %key.replace('\0', "\\0"),
                        "skipping override with a key or value the environment cannot hold"
                    );
                    summary.malformed += 1;
                    continue;
                }
                if env.contains(&key) {
                    tracing::debug!(key = %key, "already set, keeping environment value");
                    summary.kept_existing.push(key);
                } else {
                    env.set_var(&key, &value);
                    tracing::debug!(key = %key, "applied override");
                    summary.applied.push(key);
                }
            }
            Err(dotenvy::Error::LineParse(line, index)) => {
                tracing::warn!(
                    path = %path.display(),
                    index,
                    line = %first_token(&line),
                    "skipping malformed override line"
                );
                summary.malformed += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "stopped reading override file");
                summary.malformed += 1;
                break;
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        applied = summary.applied.len(),
        kept = summary.kept_existing.len(),
        malformed = summary.malformed,
        "override file loaded"
    );
    summary
}

// The process environment rejects empty keys, '=' in keys and NUL anywhere.
fn settable(key: &str, value: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
}

// Malformed lines may carry a secret after the '=', so only the part before
// it is logged.
fn first_token(line: &str) -> &str {
    line.split('=').next().unwrap_or_default().trim()
}
