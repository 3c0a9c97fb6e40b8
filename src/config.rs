//! Persisted settings and the data directory they live in.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Bump whenever a settings field is added or its meaning changes.
/// Older files are treated as stale and the settings overlay is shown at startup.
pub const LATEST_SETTINGS_VERSION: u32 = 2;

pub const DEFAULT_LLM_MODEL: &str = "gpt-4o";
pub const DEFAULT_AGENT: &str = "CodeActAgent";
pub const DEFAULT_LANGUAGE: &str = "en";

const SETTINGS_FILE_NAME: &str = "settings.json";
const TOKEN_FILE_NAME: &str = "token";
const LOG_FILE_NAME: &str = "agent-shell.log";

/// Root directory for everything the shell persists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$AGENT_SHELL_HOME`, falling back to `$HOME/.agent-shell`
    pub fn from_env() -> Result<Self> {
        if let Ok(dir) = env::var("AGENT_SHELL_HOME") {
            if !dir.is_empty() {
                return Ok(Self::new(dir));
            }
        }
        let home = env::var("HOME").map_err(|_| anyhow!("Could not determine home directory"))?;
        Ok(Self::new(PathBuf::from(home).join(".agent-shell")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE_NAME)
    }

    pub fn token_path(&self) -> PathBuf {
        self.root.join(TOKEN_FILE_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE_NAME)
    }

    /// Create the directory if it doesn't exist yet
    pub fn ensure(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)
                .with_context(|| format!("Could not create {}", self.root.display()))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version the file was written with
    #[serde(default)]
    pub version: u32,
    pub llm_model: String,
    pub agent: String,
    pub language: String,
    #[serde(default)]
    pub llm_api_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: LATEST_SETTINGS_VERSION,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            agent: DEFAULT_AGENT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            llm_api_key: String::new(),
        }
    }
}

impl Settings {
    /// Load settings, or `None` when the file is missing or unreadable
    pub fn load(dir: &DataDir) -> Option<Settings> {
        let path = dir.settings_path();
        if !path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the settings to disk, stamped with the latest version
    pub fn save(&self, dir: &DataDir) -> Result<()> {
        dir.ensure()?;

        let stamped = Settings {
            version: LATEST_SETTINGS_VERSION,
            ..self.clone()
        };
        let contents = serde_json::to_string_pretty(&stamped)?;
        fs::write(dir.settings_path(), contents)
            .with_context(|| format!("Could not write {}", dir.settings_path().display()))?;

        Ok(())
    }

    /// Whether the persisted settings exist and match the current schema
    pub fn are_up_to_date(dir: &DataDir) -> bool {
        Settings::load(dir)
            .map(|s| s.version == LATEST_SETTINGS_VERSION)
            .unwrap_or(false)
    }
}
