//! Runtime configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working setup. A config file may override any subset:
//!
//! ```toml
//! prompt = "└─$"
//! download_dir = "/tmp"
//!
//! [timing]
//! type_ms_per_char = 5
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Environment variable naming a config file when no CLI argument is given.
pub const CONFIG_ENV_VAR: &str = "TERMFOLIO_CONFIG";

/// Delays driving the cosmetic effects, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Typewriter speed for plain-text responses.
    pub type_ms_per_char: u32,
    /// How long heavy commands show the loading indicator.
    pub loading_delay_ms: u32,
    /// Delay between the resume "preparing" note and the download.
    pub resume_delay_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            type_ms_per_char: 10,
            loading_delay_ms: 600,
            resume_delay_ms: 1500,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Prompt drawn before the input buffer.
    pub prompt: String,
    /// Host part of the title bar (`[root@WhoAmI]`).
    pub host: String,
    /// Path part of the title bar.
    pub cwd: String,
    pub timing: TimingConfig,
    /// Verbs that show a loading indicator before their output.
    pub loading_commands: Vec<String>,
    /// Where the generated resume is written.
    pub download_dir: PathBuf,
    /// Optional TOML file replacing the built-in portfolio.
    pub portfolio: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            prompt: "└─$".to_string(),
            host: "root@WhoAmI".to_string(),
            cwd: "/home/portfolio".to_string(),
            timing: TimingConfig::default(),
            loading_commands: vec![
                "projects".to_string(),
                "experience".to_string(),
                "skills".to_string(),
            ],
            download_dir: PathBuf::from("."),
            portfolio: None,
        }
    }
}

impl FolioConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: FolioConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a config file. Relative `download_dir` and `portfolio` paths are
    /// resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut cfg = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            if cfg.download_dir.is_relative() {
                cfg.download_dir = base.join(&cfg.download_dir);
            }
            if let Some(p) = cfg.portfolio.as_mut() {
                if p.is_relative() {
                    *p = base.join(&*p);
                }
            }
        }
        log::info!("Loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Resolve the config from an explicit path, else `TERMFOLIO_CONFIG`,
    /// else defaults.
    pub fn resolve(arg: Option<String>) -> Result<Self> {
        match arg.or_else(|| std::env::var(CONFIG_ENV_VAR).ok()) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::debug!("No config file given, using defaults");
                Ok(Self::default())
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.loading_commands.iter().any(|c| c.trim().is_empty()) {
            return Err(FolioError::Config(
                "loading_commands must not contain empty names".to_string(),
            ));
        }
        Ok(())
    }

    /// True if `verb` should show the loading indicator first.
    pub fn is_loading_command(&self, verb: &str) -> bool {
        self.loading_commands
            .iter()
            .any(|c| c.eq_ignore_ascii_case(verb))
    }
}
