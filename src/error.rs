//! Error types for the Sleeper awards engine and CLI

use std::fmt;

use thiserror::Error;

use crate::cli::types::{PlayerId, RosterId, Season, Week};


pub type Result<T> = std::result::Result<T, AwardError>;

/// Which side of a matchup pairing could not be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterRole {
    Matchup,
    Opponent,
}

impl fmt::Display for RosterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterRole::Matchup => write!(f, "matchup"),
            RosterRole::Opponent => write!(f, "opponent"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AwardError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sleeper username not provided and {env_var} environment variable not set")]
    MissingUsername { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Week {week} is outside the regular season (1-18)")]
    InvalidWeek { week: u16 },

    #[error("Sleeper user {username} not found")]
    UserNotFound { username: String },

    #[error("No {season} leagues found for user {username}")]
    NoLeagues { username: String, season: Season },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Failed to find {role} roster (id: {roster_id})")]
    RosterNotFound { roster_id: RosterId, role: RosterRole },

    #[error("Missing {what} for player {player_id}")]
    StatLookupMissing {
        player_id: PlayerId,
        what: &'static str,
    },

    #[error("Failed to retrieve {key} score setting")]
    ScoringSettingMissing { key: String },

    #[error("Failed to retrieve week {week} projections for player {player_id}")]
    ProjectionUnavailable { player_id: PlayerId, week: Week },

    #[error("Week {week}: {what} not supplied")]
    MissingWeekData { week: Week, what: &'static str },
}
