//! Application configuration loaded from a JSON file.
//!
//! ```json
//! {
//!   "username": "commish",
//!   "year": 2023,
//!   "schedule": [
//!     { "week": 1, "award": "highest-starting-score" },
//!     { "week": 13, "award": "blackjack" }
//!   ]
//! }
//! ```
//!
//! `Username` and `Year` are accepted as capitalized keys too, so older
//! config files keep working.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    awards::{Criterion, NonScoringKeys},
    core::try_read_to_string,
    error::{AwardError, Result},
    Season, Week, USERNAME_ENV_VAR,
};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "Config.json";

/// One award to hand out: which week and by which criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAward {
    pub week: Week,
    pub award: Criterion,
}

impl ScheduledAward {
    pub fn new(week: u16, award: Criterion) -> Self {
        Self {
            week: Week::new(week),
            award,
        }
    }
}

/// The season's award calendar when the config does not set one.
pub fn default_schedule() -> Vec<ScheduledAward> {
    vec![
        ScheduledAward::new(1, Criterion::HighestStartingScore),
        ScheduledAward::new(3, Criterion::HighestStarter),
        ScheduledAward::new(12, Criterion::MostFumblesLost),
        ScheduledAward::new(13, Criterion::Blackjack),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default, alias = "Username")]
    pub username: Option<String>,

    #[serde(default, alias = "Year")]
    pub year: Season,

    #[serde(default)]
    pub non_scoring_keys: NonScoringKeys,

    #[serde(default = "default_schedule")]
    pub schedule: Vec<ScheduledAward>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: None,
            year: Season::default(),
            non_scoring_keys: NonScoringKeys::default(),
            schedule: default_schedule(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `path` when given, else `Config.json` if present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        match try_read_to_string(&default_path) {
            Some(content) => {
                debug!(path = %default_path.display(), "config loaded");
                Self::from_json(&content)
            }
            None => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Season from the command line, falling back to the configured year.
    pub fn season(&self, cli: Option<Season>) -> Season {
        cli.unwrap_or(self.year)
    }

    /// Username from the command line, then `SLEEPER_USERNAME`, then the file.
    pub fn resolve_username(&self, cli: Option<String>) -> Result<String> {
        self.username_from(cli, std::env::var(USERNAME_ENV_VAR).ok())
    }

    fn username_from(&self, cli: Option<String>, env: Option<String>) -> Result<String> {
        cli.or(env)
            .or_else(|| self.username.clone())
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| AwardError::MissingUsername {
                env_var: USERNAME_ENV_VAR.to_string(),
            })
    }
}
