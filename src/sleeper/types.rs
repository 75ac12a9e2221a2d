use crate::cli::types::{
    position::de_optional_position, LeagueId, PlayerId, Position, RosterId, Season, Week,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

#[cfg(test)]
mod tests;

/// Sleeper sends `null` for empty collections on fresh rosters and matchups.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let raw: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub username: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Per-unit point values keyed by Sleeper stat key (`pass_yd`, `rec`, ...).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ScoringSettings(pub BTreeMap<String, f64>);

impl ScoringSettings {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub name: String,
    #[serde(default)]
    pub sport: Option<String>,
    pub season: String,
    pub league_id: LeagueId,
    #[serde(default)]
    pub total_rosters: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub roster_positions: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub scoring_settings: ScoringSettings,
}

impl League {
    /// The league season as a number, when Sleeper reports a parseable year.
    pub fn season_year(&self) -> Option<Season> {
        self.season.parse().ok()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueUser {
    pub user_id: String,
    pub display_name: String,
}

/// One participant's roster snapshot.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    /// `None` for orphaned rosters with no manager.
    #[serde(default)]
    pub owner_id: Option<String>,
    pub roster_id: RosterId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<PlayerId>,
}

/// One roster's weekly performance record.
///
/// `starters_points[i]` is the score of `starters[i]`, and every starter is
/// also listed in `players`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Matchup {
    /// Rosters sharing a matchup id play each other; `None` on bye weeks.
    #[serde(default)]
    pub matchup_id: Option<u32>,
    pub roster_id: RosterId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters_points: Vec<f64>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players_points: HashMap<PlayerId, f64>,
    #[serde(default)]
    pub points: f64,
}

impl Matchup {
    /// Total points scored by the starting lineup.
    pub fn total_starter_points(&self) -> f64 {
        self.starters_points.iter().sum()
    }

    /// Players on the roster that were not in the starting lineup, in roster order.
    pub fn bench_players(&self) -> Vec<&PlayerId> {
        self.players
            .iter()
            .filter(|p| !self.starters.contains(*p))
            .collect()
    }

    pub fn player_points(&self, player_id: &PlayerId) -> Option<f64> {
        self.players_points.get(player_id).copied()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Player {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "de_optional_position")]
    pub position: Option<Position>,
}

/// Every NFL player Sleeper knows about, keyed by player id.
pub type PlayerDirectory = HashMap<PlayerId, Player>;

/// The weekly counters the award criteria read. Sleeper omits zero counters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub fum: f64,
    #[serde(default)]
    pub fum_lost: f64,
    #[serde(default)]
    pub ff: f64,
    #[serde(default)]
    pub rec_td: f64,
    #[serde(default)]
    pub rush_td: f64,
    #[serde(default)]
    pub def_td: f64,
}

impl PlayerStats {
    pub fn non_passing_touchdowns(&self) -> f64 {
        self.rec_td + self.rush_td + self.def_td
    }
}

/// League-wide stats for one week.
pub type WeeklyStats = HashMap<PlayerId, PlayerStats>;

/// One week's projection entry for a player.
///
/// Sleeper sometimes sends a week entry with only player metadata; `stats`
/// is then `None` and the week counts as unprojected.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectedWeek {
    #[serde(default)]
    pub stats: Option<BTreeMap<String, f64>>,
}

/// A player's season projections, keyed by week number as Sleeper sends it
/// (`"1"`, `"2"`, ...). Weeks with no projection come back as `null`.
pub type SeasonProjections = BTreeMap<String, Option<ProjectedWeek>>;

/// Projected stat quantities for `week`, if Sleeper has any.
pub fn projected_week_stats(
    projections: &SeasonProjections,
    week: Week,
) -> Option<&BTreeMap<String, f64>> {
    projections
        .get(&week.projection_key())
        .and_then(Option::as_ref)
        .and_then(|projected| projected.stats.as_ref())
}

/// Projected stat quantities for one week, keyed by player.
pub type WeekProjections = HashMap<PlayerId, BTreeMap<String, f64>>;

/// Everything about a league that stays fixed across the weeks of a season.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueInfo {
    pub league: League,
    pub users: Vec<LeagueUser>,
    pub display_names: HashMap<String, String>,
    pub rosters: Vec<Roster>,
}

impl LeagueInfo {
    pub fn new(league: League, users: Vec<LeagueUser>, rosters: Vec<Roster>) -> Self {
        let display_names = users
            .iter()
            .map(|u| (u.user_id.clone(), u.display_name.clone()))
            .collect();
        Self {
            league,
            users,
            display_names,
            rosters,
        }
    }

    /// Owner display name for a roster; orphaned rosters are named by id.
    pub fn owner_name(&self, roster: &Roster) -> String {
        roster
            .owner_id
            .as_ref()
            .and_then(|id| self.display_names.get(id))
            .cloned()
            .unwrap_or_else(|| format!("Roster {}", roster.roster_id))
    }
}
