//! Persisted board preferences.
//!
//! Two values survive across sessions: the grouping key and the sort key.
//! They are stored as plain strings under the keys `group` and `sort` in a
//! YAML file in the per-user config directory. Absent or unreadable values
//! fall back to the defaults (`status` / `priority`); loading never fails
//! the program. There is no schema versioning and no migration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlankError, Result};
use crate::types::{GroupKey, SortKey};

pub const PREFS_FILE: &str = "prefs.yaml";

/// The two user choices the board remembers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub group: GroupKey,
    pub sort: SortKey,
}

/// On-disk form: raw strings, both optional.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
}

/// Name of a single preference entry, for the CLI get/set surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKey {
    Group,
    Sort,
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefKey::Group => write!(f, "group"),
            PrefKey::Sort => write!(f, "sort"),
        }
    }
}

impl FromStr for PrefKey {
    type Err = PlankError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "group" => Ok(PrefKey::Group),
            "sort" => Ok(PrefKey::Sort),
            _ => Err(PlankError::InvalidPrefKey(s.to_string())),
        }
    }
}

/// File-backed preference store.
///
/// Constructed once at startup and passed by value into the board; all
/// reads and writes go through it rather than ambient global state. The
/// path is injectable so tests can point it at a temp directory.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl Default for PrefStore {
    fn default() -> Self {
        Self::open_default().unwrap_or_else(|_| Self::new(PathBuf::from(".plank").join(PREFS_FILE)))
    }
}

impl PrefStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard per-user config location.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "plank")
            .ok_or_else(|| PlankError::Config("cannot determine config directory".to_string()))?;
        Ok(Self::new(dirs.config_dir().join(PREFS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, applying defaults for anything absent or invalid.
    pub fn load(&self) -> Preferences {
        let raw = self.load_raw();
        Preferences {
            group: Self::parse_or_default(raw.group.as_deref(), "group"),
            sort: Self::parse_or_default(raw.sort.as_deref(), "sort"),
        }
    }

    fn load_raw(&self) -> RawPreferences {
        if !self.path.exists() {
            return RawPreferences::default();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("failed to read preferences at {}: {e}", self.path.display());
                return RawPreferences::default();
            }
        };
        match serde_yaml_ng::from_str(&content) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("ignoring malformed preferences file: {e}");
                RawPreferences::default()
            }
        }
    }

    fn parse_or_default<T>(value: Option<&str>, name: &str) -> T
    where
        T: FromStr<Err = PlankError> + Default,
    {
        match value {
            None => T::default(),
            Some(s) => s.parse().unwrap_or_else(|e| {
                tracing::warn!("ignoring persisted {name} preference: {e}");
                T::default()
            }),
        }
    }

    /// Write both preferences, even when only one of them changed.
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                PlankError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for preferences at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let raw = RawPreferences {
            group: Some(prefs.group.to_string()),
            sort: Some(prefs.sort.to_string()),
        };
        let content = serde_yaml_ng::to_string(&raw)?;
        fs::write(&self.path, content).map_err(|e| {
            PlankError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write preferences at {}: {}",
                    self.path.display(),
                    e
                ),
            ))
        })?;
        Ok(())
    }

    /// Read a single entry as its raw string form.
    pub fn get(&self, key: PrefKey) -> String {
        let prefs = self.load();
        match key {
            PrefKey::Group => prefs.group.to_string(),
            PrefKey::Sort => prefs.sort.to_string(),
        }
    }

    /// Validate and persist a single entry, leaving the other untouched.
    pub fn set(&self, key: PrefKey, value: &str) -> Result<()> {
        let mut prefs = self.load();
        match key {
            PrefKey::Group => prefs.group = value.parse::<GroupKey>()?,
            PrefKey::Sort => prefs.sort = value.parse::<SortKey>()?,
        }
        self.save(&prefs)
    }
}
