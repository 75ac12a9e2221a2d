//! ID types for Sleeper leagues, rosters and players.

use crate::error::{AwardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper league IDs.
///
/// Sleeper league IDs are large numeric strings, so they are kept as text
/// rather than parsed into an integer.
///
/// # Examples
///
/// ```rust
/// use sleeper_awards::LeagueId;
///
/// let league_id = LeagueId::new("1048313545995296768");
/// assert_eq!(league_id.as_str(), "1048313545995296768");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = AwardError;

    fn from_str(s: &str) -> Result<Self> {
        // Validate that the id is numeric without narrowing it.
        s.parse::<u128>()?;
        Ok(Self(s.to_string()))
    }
}

/// Roster slot number within a league (1-based on Sleeper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterId(pub u32);

impl RosterId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for Sleeper player IDs.
///
/// Most players have numeric ids, but team defenses use the team
/// abbreviation (`"DET"`), so the id is a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sleeper lists an unfilled lineup slot as player `"0"`.
    pub fn is_empty_slot(&self) -> bool {
        self.0 == "0"
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
