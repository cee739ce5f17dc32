use crate::collectors::drives::VolumeFilter;
use crate::panels::memory_gauge::DEFAULT_PERIOD;
use anyhow::Result;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Shortest memory poll period accepted from the CLI or the config file.
const MIN_POLL_MS: u64 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub volumes: VolumesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Memory gauge refresh period in milliseconds
    pub poll_interval_ms: u64,
    /// Color theme: default, dracula, gruvbox, nord
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// error, warn, info, debug, trace or off. RUST_LOG overrides it.
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumesConfig {
    /// Leave USB sticks and other removable media out of the list.
    #[serde(default)]
    pub hide_removable: bool,
    /// Mount-point prefixes to hide, e.g. ["/snap", "/boot/efi"]
    #[serde(default)]
    pub exclude: Vec<String>,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { poll_interval_ms: DEFAULT_PERIOD.as_millis() as u64, theme: "default".into() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into() }
    }
}

// ── Accessors ─────────────────────────────────────────────────────────

impl Config {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.general.poll_interval_ms.max(MIN_POLL_MS))
    }

    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.logging.level).unwrap_or(LevelFilter::Info)
    }

    pub fn volume_filter(&self) -> VolumeFilter {
        VolumeFilter {
            hide_removable: self.volumes.hide_removable,
            exclude:        self.volumes.exclude.clone(),
        }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        let loaded = Config::config_path()
            .ok_or_else(|| anyhow::anyhow!("no config dir"))
            .and_then(|p| Config::load_from(&p));
        match loaded {
            Ok(c)  => c,
            Err(_) => {
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&text)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, format!("# drivescope configuration\n# Generated on first run, edit freely\n\n{}", text))?;
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("drivescope").join("drivescope.toml"))
    }
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if path.exists() {
        // Present but unparsable: leave the user's file alone.
        return Ok(());
    }
    Config::default().save_to(&path)
}
