//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.procex/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::TaskSource;
use crate::collect::MAX_ENTITIES;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProcexConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub source: Option<TaskSource>,
    pub refresh_interval_ms: Option<u64>,
    pub show_debug_panel: Option<bool>,
    pub max_tasks: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub summary: Option<SummaryFormat>,
}

/// How the session summary is printed on exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_LOG_FILE: &str = "procex.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// Anything shorter turns the idle wait into a spin.
const MIN_REFRESH_INTERVAL_MS: u64 = 50;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: TaskSource,
    pub refresh_interval: Duration,
    pub show_debug_panel: bool,
    pub max_tasks: usize,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub summary: SummaryFormat,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source: Option<TaskSource>,
    pub interval_ms: Option<u64>,
    pub debug_panel: bool,
    pub summary: Option<SummaryFormat>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Where the file-level settings came from.
///
/// Loading runs before the logger exists, so the outcome is returned and
/// logged by the caller once logging is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// No file existed; a commented default was written here.
    Generated(PathBuf),
    /// Built-in defaults only, with the reason.
    Defaults(String),
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ProcexConfig,
    pub origin: ConfigOrigin,
}

impl LoadedConfig {
    pub fn log_origin(&self) {
        match &self.origin {
            ConfigOrigin::File(path) => info!("Loaded config from {}", path.display()),
            ConfigOrigin::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigOrigin::Defaults(reason) => warn!("Using default config: {}", reason),
        }
        debug!("Config: {:?}", self.config);
    }
}

/// Returns the path to `~/.procex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".procex").join("config.toml"))
}

/// Load config from `~/.procex/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ProcexConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: ProcexConfig::default(),
            origin: ConfigOrigin::Defaults("could not determine home directory".to_string()),
        }),
    }
}

pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        let origin = match generate_default_config(path) {
            Ok(()) => ConfigOrigin::Generated(path.to_path_buf()),
            Err(e) => ConfigOrigin::Defaults(format!(
                "failed to write default config to {}: {}",
                path.display(),
                e
            )),
        };
        return Ok(LoadedConfig {
            config: ProcexConfig::default(),
            origin,
        });
    }

    let contents = fs::read_to_string(path)?;
    let config: ProcexConfig = toml::from_str(&contents)?;
    Ok(LoadedConfig {
        config,
        origin: ConfigOrigin::File(path.to_path_buf()),
    })
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# procex configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# source = "mock"                # "mock" or "proc"
# refresh_interval_ms = 1000     # Redraw cadence when idle
# show_debug_panel = false       # Start with the debug panel open
# max_tasks = 1000               # Hard cap is 1000

# [logging]
# file = "procex.log"            # Or set PROCEX_LOG_FILE
# level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [output]
# summary = "text"               # "text" or "json"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ProcexConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an explicit environment lookup.
pub fn resolve_with_env<F>(config: &ProcexConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Source: CLI → env → config → default
    let source = cli
        .source
        .or_else(|| env("PROCEX_SOURCE").and_then(|s| TaskSource::from_str(&s, true).ok()))
        .or(config.general.source)
        .unwrap_or_default();

    // Refresh interval: CLI → env → config → default
    let interval_ms = cli
        .interval_ms
        .or_else(|| env("PROCEX_REFRESH_MS").and_then(|s| s.parse().ok()))
        .or(config.general.refresh_interval_ms)
        .unwrap_or(DEFAULT_REFRESH_INTERVAL_MS)
        .max(MIN_REFRESH_INTERVAL_MS);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("PROCEX_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let log_level = cli
        .log_level
        .or_else(|| env("PROCEX_LOG_LEVEL").and_then(|s| s.parse().ok()))
        .or_else(|| {
            config.logging.level.as_deref().and_then(|s| match s.parse() {
                Ok(level) => Some(level),
                Err(_) => {
                    warn!("Ignoring unknown log level in config: {}", s);
                    None
                }
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        source,
        refresh_interval: Duration::from_millis(interval_ms),
        show_debug_panel: cli.debug_panel || config.general.show_debug_panel.unwrap_or(false),
        max_tasks: config
            .general
            .max_tasks
            .unwrap_or(MAX_ENTITIES)
            .min(MAX_ENTITIES),
        log_file,
        log_level,
        summary: cli.summary.or(config.output.summary).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = ProcexConfig::default();
        assert!(config.general.source.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ProcexConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.source, TaskSource::Mock);
        assert_eq!(resolved.refresh_interval, Duration::from_secs(1));
        assert!(!resolved.show_debug_panel);
        assert_eq!(resolved.max_tasks, MAX_ENTITIES);
        assert_eq!(resolved.log_file, PathBuf::from("procex.log"));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.summary, SummaryFormat::Text);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ProcexConfig {
            general: GeneralConfig {
                source: Some(TaskSource::Proc),
                refresh_interval_ms: Some(250),
                show_debug_panel: Some(true),
                max_tasks: Some(5000),
            },
            logging: LoggingConfig {
                file: Some("/tmp/px.log".to_string()),
                level: Some("warn".to_string()),
            },
            output: OutputConfig {
                summary: Some(SummaryFormat::Json),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.source, TaskSource::Proc);
        assert_eq!(resolved.refresh_interval, Duration::from_millis(250));
        assert!(resolved.show_debug_panel);
        // Capped at the snapshot bound
        assert_eq!(resolved.max_tasks, MAX_ENTITIES);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/px.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.summary, SummaryFormat::Json);
    }

    #[test]
    fn test_env_overrides_config() {
        let config = ProcexConfig {
            general: GeneralConfig {
                source: Some(TaskSource::Mock),
                refresh_interval_ms: Some(2000),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "PROCEX_SOURCE" => Some("proc".to_string()),
            "PROCEX_REFRESH_MS" => Some("500".to_string()),
            "PROCEX_LOG_LEVEL" => Some("error".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.source, TaskSource::Proc);
        assert_eq!(resolved.refresh_interval, Duration::from_millis(500));
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ProcexConfig {
            general: GeneralConfig {
                source: Some(TaskSource::Proc),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            source: Some(TaskSource::Mock),
            interval_ms: Some(100),
            debug_panel: true,
            summary: Some(SummaryFormat::Json),
            ..Default::default()
        };
        let env = |key: &str| (key == "PROCEX_SOURCE").then(|| "proc".to_string());
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.source, TaskSource::Mock);
        assert_eq!(resolved.refresh_interval, Duration::from_millis(100));
        assert!(resolved.show_debug_panel);
        assert_eq!(resolved.summary, SummaryFormat::Json);
    }

    #[test]
    fn test_refresh_interval_has_floor() {
        let cli = CliOverrides {
            interval_ms: Some(0),
            ..Default::default()
        };
        let resolved = resolve_with_env(&ProcexConfig::default(), &cli, no_env);
        assert_eq!(resolved.refresh_interval, Duration::from_millis(50));
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = ProcexConfig {
            logging: LoggingConfig {
                level: Some("chatty".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "PROCEX_SOURCE").then(|| "satellite".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.source, TaskSource::Mock);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
source = "proc"
refresh_interval_ms = 750
show_debug_panel = true
max_tasks = 200

[logging]
file = "custom.log"
level = "info"

[output]
summary = "json"
"#;
        let config: ProcexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.source, Some(TaskSource::Proc));
        assert_eq!(config.general.refresh_interval_ms, Some(750));
        assert_eq!(config.general.show_debug_panel, Some(true));
        assert_eq!(config.general.max_tasks, Some(200));
        assert_eq!(config.logging.file.as_deref(), Some("custom.log"));
        assert_eq!(config.output.summary, Some(SummaryFormat::Json));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[general]
max_tasks = 10
"#;
        let config: ProcexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.max_tasks, Some(10));
        assert!(config.general.source.is_none());
        assert!(config.output.summary.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.config.general.source.is_none());
        assert_eq!(loaded.origin, ConfigOrigin::Generated(path.clone()));

        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# [general]"));
        // Everything is commented out, so it parses as an empty config
        let reparsed: ProcexConfig = toml::from_str(&generated).unwrap();
        assert!(reparsed.general.max_tasks.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nsource = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_existing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nsource = \"proc\"\n").unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.config.general.source, Some(TaskSource::Proc));
        assert_eq!(loaded.origin, ConfigOrigin::File(path));
    }

    #[test]
    fn test_unwritable_default_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let loaded = load_config_from(&path).unwrap();
        assert!(matches!(loaded.origin, ConfigOrigin::Defaults(_)));
        assert!(loaded.config.general.source.is_none());
    }
}
