//! NFL season years and regular-season weeks.

use crate::error::{AwardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Last week of the NFL regular season (17 games plus a bye).
pub const LAST_REGULAR_SEASON_WEEK: u16 = 18;

/// An NFL season, named by the year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2023)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = AwardError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A regular-season week, 1 through [`LAST_REGULAR_SEASON_WEEK`].
///
/// `new` does not check the range so fixtures can use any number; parsed
/// and deserialized weeks are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Key of this week in Sleeper's per-week projection maps (`"1"`, `"2"`, ...).
    pub fn projection_key(&self) -> String {
        self.0.to_string()
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Week {
    type Error = AwardError;

    fn try_from(week: u16) -> Result<Self> {
        if !(1..=LAST_REGULAR_SEASON_WEEK).contains(&week) {
            return Err(AwardError::InvalidWeek { week });
        }
        Ok(Self(week))
    }
}

impl From<Week> for u16 {
    fn from(week: Week) -> Self {
        week.0
    }
}

impl FromStr for Week {
    type Err = AwardError;

    fn from_str(s: &str) -> Result<Self> {
        Week::try_from(s.trim().parse::<u16>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_parse_in_range() {
        assert_eq!("1".parse::<Week>().unwrap(), Week::new(1));
        assert_eq!(" 18 ".parse::<Week>().unwrap(), Week::new(18));
    }

    #[test]
    fn test_week_parse_out_of_range() {
        assert!(matches!(
            "0".parse::<Week>(),
            Err(AwardError::InvalidWeek { week: 0 })
        ));
        assert!(matches!(
            "19".parse::<Week>(),
            Err(AwardError::InvalidWeek { week: 19 })
        ));
        assert!(matches!(
            "wk3".parse::<Week>(),
            Err(AwardError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_week_deserialize_checks_range() {
        let week: Week = serde_json::from_str("7").unwrap();
        assert_eq!(week, Week::new(7));
        assert_eq!(serde_json::to_string(&week).unwrap(), "7");

        let err = serde_json::from_str::<Week>("0").unwrap_err();
        assert!(err.to_string().contains("outside the regular season"));
        assert!(serde_json::from_str::<Week>("19").is_err());
    }

    #[test]
    fn test_projection_key() {
        assert_eq!(Week::new(12).projection_key(), "12");
    }

    #[test]
    fn test_season_parse_and_order_of_weeks() {
        assert_eq!("2022".parse::<Season>().unwrap(), Season::new(2022));
        assert!(Week::new(3) < Week::new(12));
    }
}
