//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.drills/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Colors stay plain strings here; the TUI turns them into a `Theme`.

use clap::ValueEnum;
use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Program;
use crate::core::page::{DEFAULT_BODY, DEFAULT_HEADER};
use crate::core::spinner::DEFAULT_ITEM_COUNT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DrillsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub spinner: SpinnerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_program: Option<String>,
    pub log_level: Option<String>,
    pub frame_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SpinnerConfig {
    pub item_count: Option<usize>,
    pub max_ready_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub focused_color: Option<String>,
    pub muted_color: Option<String>,
    pub accent_color: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub header: Option<String>,
    pub body: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_FRAME_MS: u64 = 80;
pub const DEFAULT_MAX_READY_SECS: u64 = 7;
pub const DEFAULT_FOCUSED_COLOR: &str = "cyan";
pub const DEFAULT_MUTED_COLOR: &str = "darkgray";
pub const DEFAULT_ACCENT_COLOR: &str = "yellow";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub program: Program,
    pub log_level: LevelFilter,
    pub frame_ms: u64,
    pub spinner_items: usize,
    pub spinner_max_ready_secs: u64,
    pub focused_color: String,
    pub muted_color: String,
    pub accent_color: String,
    pub header: String,
    pub body: String,
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

/// Returns the path to `~/.drills/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".drills").join("config.toml"))
}

/// Load config from `~/.drills/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DrillsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DrillsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DrillsConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(DrillsConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<DrillsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DrillsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Drills Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_program = "kanban"         # "kanban", "spinner" or "layout"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# frame_ms = 80                      # input poll timeout / animation frame

# [spinner]
# item_count = 5
# max_ready_secs = 7                 # each item becomes ready after 0..7 seconds

# [theme]
# focused_color = "cyan"             # any ratatui color name or "#rrggbb"
# muted_color = "darkgray"
# accent_color = "yellow"

# [layout]
# header = "Title Here"
# body = "Some text here"
"##;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_program` and `cli_log_level` are from CLI flags (None = not specified).
pub fn resolve(
    config: &DrillsConfig,
    cli_program: Option<Program>,
    cli_log_level: Option<&str>,
) -> ResolvedConfig {
    // Program: CLI → env → config → default
    let program = cli_program
        .or_else(|| {
            std::env::var("DRILLS_PROGRAM")
                .ok()
                .and_then(|s| parse_program(&s))
        })
        .or_else(|| {
            config
                .general
                .default_program
                .as_deref()
                .and_then(parse_program)
        })
        .unwrap_or_default();

    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(str::to_string)
        .or_else(|| std::env::var("DRILLS_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| parse_log_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        program,
        log_level,
        frame_ms: config
            .general
            .frame_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS),
        spinner_items: config.spinner.item_count.unwrap_or(DEFAULT_ITEM_COUNT),
        spinner_max_ready_secs: config
            .spinner
            .max_ready_secs
            .unwrap_or(DEFAULT_MAX_READY_SECS),
        focused_color: config
            .theme
            .focused_color
            .clone()
            .unwrap_or_else(|| DEFAULT_FOCUSED_COLOR.to_string()),
        muted_color: config
            .theme
            .muted_color
            .clone()
            .unwrap_or_else(|| DEFAULT_MUTED_COLOR.to_string()),
        accent_color: config
            .theme
            .accent_color
            .clone()
            .unwrap_or_else(|| DEFAULT_ACCENT_COLOR.to_string()),
        header: config
            .layout
            .header
            .clone()
            .unwrap_or_else(|| DEFAULT_HEADER.to_string()),
        body: config
            .layout
            .body
            .clone()
            .unwrap_or_else(|| DEFAULT_BODY.to_string()),
    }
}

fn parse_program(name: &str) -> Option<Program> {
    match <Program as ValueEnum>::from_str(name, true) {
        Ok(program) => Some(program),
        Err(_) => {
            warn!("Unknown program '{}', ignoring", name);
            None
        }
    }
}

fn parse_log_level(name: &str) -> Option<LevelFilter> {
    match name.parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', ignoring", name);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = DrillsConfig::default();
        assert!(config.general.default_program.is_none());
        assert!(config.spinner.item_count.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = DrillsConfig::default();
        let resolved = resolve(&config, Some(Program::Kanban), Some("debug"));
        assert_eq!(resolved.frame_ms, DEFAULT_FRAME_MS);
        assert_eq!(resolved.spinner_items, DEFAULT_ITEM_COUNT);
        assert_eq!(resolved.spinner_max_ready_secs, DEFAULT_MAX_READY_SECS);
        assert_eq!(resolved.focused_color, DEFAULT_FOCUSED_COLOR);
        assert_eq!(resolved.header, "Title Here");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = DrillsConfig {
            general: GeneralConfig {
                default_program: None,
                log_level: None,
                frame_ms: Some(40),
            },
            spinner: SpinnerConfig {
                item_count: Some(3),
                max_ready_secs: Some(2),
            },
            theme: ThemeConfig {
                focused_color: Some("magenta".to_string()),
                ..Default::default()
            },
            layout: LayoutConfig {
                header: Some("Header".to_string()),
                body: None,
            },
        };
        let resolved = resolve(&config, Some(Program::Spinner), Some("info"));
        assert_eq!(resolved.frame_ms, 40);
        assert_eq!(resolved.spinner_items, 3);
        assert_eq!(resolved.spinner_max_ready_secs, 2);
        assert_eq!(resolved.focused_color, "magenta");
        assert_eq!(resolved.muted_color, DEFAULT_MUTED_COLOR);
        assert_eq!(resolved.header, "Header");
        assert_eq!(resolved.body, "Some text here");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = DrillsConfig {
            general: GeneralConfig {
                default_program: Some("layout".to_string()),
                log_level: Some("trace".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Program::Spinner), Some("warn"));
        assert_eq!(resolved.program, Program::Spinner);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_zero_frame_ms_falls_back() {
        let config = DrillsConfig {
            general: GeneralConfig {
                frame_ms: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Program::Kanban), Some("debug"));
        assert_eq!(resolved.frame_ms, DEFAULT_FRAME_MS);
    }

    #[test]
    fn test_bad_cli_log_level_falls_back() {
        let config = DrillsConfig::default();
        let resolved = resolve(&config, Some(Program::Kanban), Some("loud"));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_parse_program_is_case_insensitive() {
        assert_eq!(parse_program("Spinner"), Some(Program::Spinner));
        assert_eq!(parse_program("LAYOUT"), Some(Program::Layout));
        assert_eq!(parse_program("tetris"), None);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r##"
[general]
default_program = "spinner"
log_level = "info"
frame_ms = 50

[spinner]
item_count = 8
max_ready_secs = 3

[theme]
focused_color = "#ff8800"

[layout]
body = "Hello"
"##;
        let config: DrillsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_program.as_deref(), Some("spinner"));
        assert_eq!(config.general.frame_ms, Some(50));
        assert_eq!(config.spinner.item_count, Some(8));
        assert_eq!(config.theme.focused_color.as_deref(), Some("#ff8800"));
        assert!(config.theme.muted_color.is_none());
        assert_eq!(config.layout.body.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[spinner]
item_count = 2
"#;
        let config: DrillsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.spinner.item_count, Some(2));
        assert!(config.general.default_program.is_none());
        assert!(config.theme.focused_color.is_none());
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "drills-config-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[general\nframe_ms = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_generated_default_file_loads_as_all_defaults() {
        let dir = std::env::temp_dir().join(format!(
            "drills-default-config-{}",
            std::process::id()
        ));
        let path = dir.join("config.toml");
        generate_default_config(&path);

        let content = fs::read_to_string(&path).unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_dir_all(&dir);

        assert!(content.contains(r##""#rrggbb""##));
        assert!(content.contains(r#"# body = "Some text here""#));
        let config = result.unwrap();
        assert!(config.general.default_program.is_none());
        assert!(config.theme.focused_color.is_none());
        assert!(config.layout.body.is_none());
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let path = std::env::temp_dir().join("drills-config-test-does-not-exist.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
