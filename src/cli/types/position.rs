//! Fantasy football position types and utilities.

use crate::error::AwardError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions and starting slots.
///
/// The six fixed positions are what Sleeper reports for a player. `FLEX`
/// only ever appears as a lineup slot and can be filled by an RB, WR or TE.
///
/// # Examples
///
/// ```rust
/// use sleeper_awards::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert!(Position::TE.is_flex_eligible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    FLEX,
}

impl Position {
    /// Positions a player can be rostered at, in lineup order.
    pub const FIXED: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
    ];

    /// Whether a player at this position may fill the FLEX slot.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(self, Position::RB | Position::WR | Position::TE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::FLEX => "FLEX",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = AwardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            "FLEX" => Ok(Position::FLEX),
            _ => Err(AwardError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

/// Sleeper reports offensive linemen, punters and defensive players too;
/// anything outside the fantasy positions deserializes as `None`.
pub fn de_optional_position<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
