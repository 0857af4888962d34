//! Configuration module for taskboard.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod keybindings;

pub use keybindings::{Action, KeyBindingsConfig, ViewType};

/// Default interval between UI ticks/redraws.
pub const DEFAULT_TICK_RATE_MS: u64 = 200;
/// Default lifetime of the notification banner.
pub const DEFAULT_MESSAGE_TTL_MS: u64 = 2_000;

/// Top-level configuration for taskboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// TUI configuration.
    #[serde(default)]
    pub tui: TuiConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Milliseconds between redraws.
    pub tick_rate_ms: u64,
    /// Milliseconds a notification stays on screen.
    pub message_ttl_ms: u64,
    /// Keybindings configuration.
    pub keybindings: KeyBindingsConfig,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            message_ttl_ms: DEFAULT_MESSAGE_TTL_MS,
            keybindings: KeyBindingsConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Interval between redraws.
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Lifetime of the notification banner.
    pub const fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }
}

/// Returns the default configuration file path.
///
/// On Linux: `~/.config/taskboard/config.toml`
/// On Windows: `%APPDATA%\taskboard\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskboard").join("config.toml"))
}

/// Load configuration from a TOML file.
///
/// `path` overrides the default location. A missing file yields the
/// defaults; an explicitly named file must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                bail!("Config file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

    Ok(config)
}

/// Validate timing values and keybindings.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.tui.tick_rate_ms == 0 {
        bail!("tui.tick_rate_ms must be greater than zero");
    }
    if config.tui.message_ttl_ms == 0 {
        bail!("tui.message_ttl_ms must be greater than zero");
    }
    keybindings::validate_keybindings_config(&config.tui.keybindings)
}

/// Generate default configuration as TOML string.
pub fn generate_default_config_toml() -> Result<String> {
    let toml_str = toml::to_string_pretty(&Config::default())
        .context("Failed to serialize default configuration")?;

    let header = r#"# taskboard configuration
#
# [tui]
# tick_rate_ms   - redraw interval
# message_ttl_ms - how long notifications stay visible
#
# [tui.keybindings.*]
# Each action can have multiple key bindings.
#
# Supported key formats:
# - Single characters: "j", "k", "a", "1"
# - Special keys: "Enter", "Esc", "Tab", "Backspace", "Delete"
# - Arrow keys: "Up", "Down", "Left", "Right"
# - Navigation keys: "Home", "End", "PageUp", "PageDown"
# - Modified keys: "Ctrl+d", "Alt+k", "Shift+Up"
#
# Note: When [tui.keybindings] is present, every view and action must be listed.

"#;

    Ok(format!("{header}{toml_str}"))
}

/// Write the default configuration file.
pub fn init_config(output: Option<&Path>, force: bool) -> Result<()> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_config_path().context("Could not determine config directory")?,
    };

    if output_path.exists() && !force && !confirm_overwrite(&output_path)? {
        println!("Aborted.");
        return Ok(());
    }

    write_default_config(&output_path)?;
    println!("✓ Wrote configuration file: {}", output_path.display());
    println!("Restart taskboard to apply changes.");
    Ok(())
}

fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let content = generate_default_config_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!("File already exists: {}\nOverwrite? [y/N]: ", path.display());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrips_through_generated_toml() {
        let content = generate_default_config_toml().unwrap();
        assert!(content.starts_with("# taskboard configuration"));
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn default_config_path_ends_with_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("taskboard/config.toml"));
        }
    }

    #[test]
    fn init_config_writes_a_loadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        init_config(Some(&path), false).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn timings_can_be_overridden_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tui]\nmessage_ttl_ms = 500\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.tui.message_ttl(), Duration::from_millis(500));
        assert_eq!(config.tui.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.tui.keybindings, KeyBindingsConfig::default());
    }

    #[test]
    fn partial_keybindings_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tui.keybindings.task_list]\nquit = [\"x\"]\n").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tui]\ntick_rate_ms = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("tick_rate_ms"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
