//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.waypoint/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WaypointConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub restore_on_start: Option<bool>,
    pub state_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TabsConfig {
    pub names: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_STATE_FILE: &str = "state.json";
pub const DEFAULT_LOG_FILE: &str = "waypoint.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_TABS: [&str; 2] = ["browse", "account"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub restore_on_start: bool,
    /// `None` disables persistence (no home directory and no explicit path).
    pub state_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub tabs: Vec<String>,
}

/// Values from CLI flags (None/false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub state_file: Option<PathBuf>,
    pub fresh: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.waypoint/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".waypoint"))
}

/// Returns the path to `~/.waypoint/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.waypoint/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WaypointConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WaypointConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WaypointConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<WaypointConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(WaypointConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WaypointConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Waypoint Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# restore_on_start = true            # Reopen the screens you left (--fresh skips)
# state_file = "state.json"          # Relative to ~/.waypoint/ unless absolute
# log_file = "waypoint.log"
# log_level = "debug"                # off, error, warn, info, debug, trace

# [tabs]
# names = ["browse", "account"]      # One independent navigation stack per tab
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WaypointConfig, cli: &CliOverrides) -> ResolvedConfig {
    let base_dir = config_dir();

    // State file: CLI → env → config → default (all relative to ~/.waypoint/)
    let state_file = cli
        .state_file
        .clone()
        .or_else(|| std::env::var("WAYPOINT_STATE_FILE").ok().map(PathBuf::from))
        .or_else(|| config.general.state_file.as_ref().map(PathBuf::from))
        .map(|p| anchor(p, base_dir.as_deref()))
        .or_else(|| base_dir.as_ref().map(|d| d.join(DEFAULT_STATE_FILE)));

    // Restore: --fresh always wins
    let restore_on_start = !cli.fresh && config.general.restore_on_start.unwrap_or(true);

    let log_file = anchor(
        PathBuf::from(
            config
                .general
                .log_file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        None,
    );

    // Log level: env → config → default
    let log_level = std::env::var("WAYPOINT_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let tabs = match config.tabs.names.as_deref() {
        Some(names) if !names.is_empty() => names.to_vec(),
        _ => DEFAULT_TABS.iter().map(|s| s.to_string()).collect(),
    };

    ResolvedConfig {
        restore_on_start,
        state_file,
        log_file,
        log_level,
        tabs,
    }
}

/// Joins a relative path onto `base` when one is available.
fn anchor(path: PathBuf, base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', using default", s);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = WaypointConfig::default();
        assert!(config.tabs.names.is_none());
        assert!(config.general.state_file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = WaypointConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert!(resolved.restore_on_start);
        assert_eq!(resolved.tabs, vec!["browse", "account"]);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        if let Some(path) = resolved.state_file {
            assert!(path.ends_with(DEFAULT_STATE_FILE));
        }
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = WaypointConfig {
            general: GeneralConfig {
                restore_on_start: Some(false),
                state_file: Some("/tmp/nav.json".to_string()),
                log_file: Some("/tmp/nav.log".to_string()),
                log_level: Some("warn".to_string()),
            },
            tabs: TabsConfig {
                names: Some(vec!["home".to_string()]),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert!(!resolved.restore_on_start);
        assert_eq!(resolved.state_file, Some(PathBuf::from("/tmp/nav.json")));
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/nav.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.tabs, vec!["home"]);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = WaypointConfig {
            general: GeneralConfig {
                restore_on_start: Some(true),
                state_file: Some("/tmp/from-config.json".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            state_file: Some(PathBuf::from("/tmp/from-cli.json")),
            fresh: true,
        };
        let resolved = resolve(&config, &cli);
        assert!(!resolved.restore_on_start);
        assert_eq!(resolved.state_file, Some(PathBuf::from("/tmp/from-cli.json")));
    }

    #[test]
    fn test_empty_tab_list_falls_back_to_defaults() {
        let config = WaypointConfig {
            tabs: TabsConfig {
                names: Some(Vec::new()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.tabs.len(), DEFAULT_TABS.len());
    }

    #[test]
    fn test_unknown_log_level_is_ignored() {
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level("trace"), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
restore_on_start = false
state_file = "nav.json"
log_level = "info"

[tabs]
names = ["browse", "search", "account"]
"#;
        let config: WaypointConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.restore_on_start, Some(false));
        assert_eq!(config.general.state_file.as_deref(), Some("nav.json"));
        assert_eq!(config.tabs.names.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[general]
log_level = "trace"
"#;
        let config: WaypointConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("trace"));
        assert!(config.general.restore_on_start.is_none());
        assert!(config.tabs.names.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.log_level.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Waypoint Configuration"));

        // The generated file is all comments, so it loads as defaults too
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.tabs.names.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nrestore_on_start = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
