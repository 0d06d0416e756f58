use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Let the final status of each day run to 24:00 instead of leaving a gap.
    #[serde(default)]
    pub close_day: bool,
    /// Terminal columns per hour cell in the text sheet.
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default = "default_true")]
    pub show_summary: bool,
    #[serde(default = "default_true")]
    pub show_annotations: bool,
}

fn default_cell_width() -> usize {
    4
}
fn default_true() -> bool {
    true
}

/// Narrowest cell that still shows a segment and its offset.
pub const MIN_CELL_WIDTH: usize = 2;

impl Default for Config {
    fn default() -> Self {
        Self {
            close_day: false,
            cell_width: default_cell_width(),
            show_summary: true,
            show_annotations: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("eldlog"),
            None => {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".eldlog")
            }
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eldlog.conf")
    }

    /// Load configuration from `path` (or the standard file), or return
    /// defaults if it does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.check()?;
        Ok(cfg)
    }

    pub fn check(&self) -> AppResult<()> {
        if self.cell_width < MIN_CELL_WIDTH {
            return Err(AppError::Config(format!(
                "cell_width must be at least {MIN_CELL_WIDTH}, got {}",
                self.cell_width
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}
