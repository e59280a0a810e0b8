//! # State Persistence
//!
//! Save/load the navigation state of every tab to `~/.waypoint/state.json`.
//!
//! This is the "state restoration" collaborator: it works purely on
//! snapshots and never touches a live controller. Writes use atomic rename
//! (write `.tmp`, then `rename()`) for crash safety.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::state::NavigationState;
use crate::core::tabs::TabsSnapshot;

/// Bumped when the on-disk layout changes incompatibly.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk document: a tabs snapshot plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize, R: Serialize",
    deserialize = "K: Deserialize<'de>, R: Deserialize<'de>"
))]
pub struct SavedNavigation<K, R> {
    pub format: u32,
    pub saved_at: i64,
    pub selected: K,
    pub tabs: Vec<(K, NavigationState<R>)>,
}

impl<K, R> SavedNavigation<K, R> {
    pub fn into_snapshot(self) -> TabsSnapshot<K, R> {
        TabsSnapshot {
            selected: self.selected,
            tabs: self.tabs,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum PersistError {
    Io(io::Error),
    Json(serde_json::Error),
    UnsupportedFormat(u32),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(e) => write!(f, "state I/O error: {e}"),
            PersistError::Json(e) => write!(f, "state parse error: {e}"),
            PersistError::UnsupportedFormat(v) => {
                write!(f, "unsupported state format {v} (expected {FORMAT_VERSION})")
            }
        }
    }
}

impl std::error::Error for PersistError {}

impl From<io::Error> for PersistError {
    fn from(e: io::Error) -> Self {
        PersistError::Io(e)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        PersistError::Json(e)
    }
}

// ============================================================================
// Save / Load
// ============================================================================

/// Returns `~/.waypoint/state.json`.
pub fn default_state_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".waypoint").join("state.json"))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), PersistError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn save<K, R>(path: &Path, snapshot: &TabsSnapshot<K, R>) -> Result<(), PersistError>
where
    K: Serialize + Clone,
    R: Serialize + Clone,
{
    let saved = SavedNavigation {
        format: FORMAT_VERSION,
        saved_at: Utc::now().timestamp(),
        selected: snapshot.selected.clone(),
        tabs: snapshot.tabs.clone(),
    };
    atomic_write_json(path, &saved)?;
    info!("Navigation state saved to {}", path.display());
    Ok(())
}

/// Loads saved state. A missing file is `Ok(None)`, not an error.
pub fn load<K, R>(path: &Path) -> Result<Option<SavedNavigation<K, R>>, PersistError>
where
    K: DeserializeOwned,
    R: DeserializeOwned,
{
    if !path.exists() {
        debug!("No saved state at {}", path.display());
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    let saved: SavedNavigation<K, R> = serde_json::from_str(&json)?;
    if saved.format != FORMAT_VERSION {
        return Err(PersistError::UnsupportedFormat(saved.format));
    }
    info!(
        "Loaded navigation state from {} ({} tabs)",
        path.display(),
        saved.tabs.len()
    );
    Ok(Some(saved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestRoute::{self, *};

    fn sample() -> TabsSnapshot<String, TestRoute> {
        TabsSnapshot {
            selected: "account".to_string(),
            tabs: vec![
                (
                    "browse".to_string(),
                    NavigationState::with(vec![Home, Detail("1".to_string())], None),
                ),
                (
                    "account".to_string(),
                    NavigationState::with(vec![Profile], Some(Settings)),
                ),
            ],
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        save(&path, &sample()).unwrap();
        let loaded = load::<String, TestRoute>(&path).unwrap().unwrap();

        assert_eq!(loaded.format, FORMAT_VERSION);
        assert_eq!(loaded.into_snapshot(), sample());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load::<String, TestRoute>(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load::<String, TestRoute>(&path).unwrap_err();
        assert!(matches!(err, PersistError::Json(_)));
        assert!(err.to_string().starts_with("state parse error"));
    }

    #[test]
    fn test_future_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(
            &path,
            r#"{"format": 99, "saved_at": 0, "selected": "browse", "tabs": []}"#,
        )
        .unwrap();

        let err = load::<String, TestRoute>(&path).unwrap_err();
        assert!(matches!(err, PersistError::UnsupportedFormat(99)));
    }
}
