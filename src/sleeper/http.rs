//! Thin async client for the public Sleeper API.
//!
//! No authentication is needed; every call is a plain GET returning JSON.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::{AwardError, Result},
    sleeper::types::{
        League, LeagueInfo, LeagueUser, Matchup, PlayerDirectory, Roster, SeasonProjections,
        User, WeeklyStats,
    },
    LeagueId, PlayerId, Season, Week,
};


/// Base path for the Sleeper v1 read API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Per-player projections live on a separate host.
pub const PROJECTIONS_BASE_URL: &str = "https://api.sleeper.com/projections/nfl";

#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
    projections_url: String,
}

impl Default for SleeperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SleeperClient {
    pub fn new() -> Self {
        Self::with_base_urls(SLEEPER_BASE_URL, PROJECTIONS_BASE_URL)
    }

    /// Point the client at other hosts, e.g. a mock server in tests.
    pub fn with_base_urls(base_url: impl Into<String>, projections_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            projections_url: projections_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        debug!(%url, "GET");
        let res = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    async fn get_v1<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        self.get_json(&url, &[]).await
    }

    /// Look up a user by username. Sleeper answers `null` for unknown names.
    pub async fn get_user(&self, username: &str) -> Result<User> {
        let user: Option<User> = self.get_v1(&format!("user/{username}")).await?;
        user.ok_or_else(|| AwardError::UserNotFound {
            username: username.to_string(),
        })
    }

    pub async fn get_user_leagues(&self, user_id: &str, season: Season) -> Result<Vec<League>> {
        let leagues: Option<Vec<League>> = self
            .get_v1(&format!("user/{user_id}/leagues/nfl/{season}"))
            .await?;
        Ok(leagues.unwrap_or_default())
    }

    pub async fn get_league(&self, league_id: &LeagueId) -> Result<League> {
        self.get_v1(&format!("league/{league_id}")).await
    }

    pub async fn get_league_users(&self, league_id: &LeagueId) -> Result<Vec<LeagueUser>> {
        self.get_v1(&format!("league/{league_id}/users")).await
    }

    pub async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_v1(&format!("league/{league_id}/rosters")).await
    }

    pub async fn get_matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Matchup>> {
        let matchups: Option<Vec<Matchup>> = self
            .get_v1(&format!("league/{league_id}/matchups/{week}"))
            .await?;
        Ok(matchups.unwrap_or_default())
    }

    /// Every NFL player Sleeper tracks. This is a large payload; cache it.
    pub async fn get_players(&self) -> Result<PlayerDirectory> {
        self.get_v1("players/nfl").await
    }

    /// Regular-season stat lines for every player in one week.
    pub async fn get_weekly_stats(&self, season: Season, week: Week) -> Result<WeeklyStats> {
        let stats: Option<WeeklyStats> = self
            .get_v1(&format!("stats/nfl/regular/{season}/{week}"))
            .await?;
        Ok(stats.unwrap_or_default())
    }

    /// A player's projections for every week of the regular season.
    pub async fn get_season_projections(
        &self,
        player_id: &PlayerId,
        season: Season,
    ) -> Result<SeasonProjections> {
        let url = format!("{}/player/{}", self.projections_url, player_id);
        let query = [
            ("season_type", "regular".to_string()),
            ("season", season.to_string()),
            ("grouping", "week".to_string()),
        ];
        let projections: Option<SeasonProjections> = self.get_json(&url, &query).await?;
        Ok(projections.unwrap_or_default())
    }

    /// The first of a user's leagues for the season.
    pub async fn find_user_league(&self, username: &str, season: Season) -> Result<League> {
        let user = self.get_user(username).await?;
        self.get_user_leagues(&user.user_id, season)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AwardError::NoLeagues {
                username: username.to_string(),
                season,
            })
    }

    /// League settings, members and rosters in one bundle.
    pub async fn get_league_info(&self, league_id: &LeagueId) -> Result<LeagueInfo> {
        let league = self.get_league(league_id).await?;
        let users = self.get_league_users(league_id).await?;
        let rosters = self.get_rosters(league_id).await?;
        debug!(
            league = %league.name,
            users = users.len(),
            rosters = rosters.len(),
            "league info loaded"
        );
        Ok(LeagueInfo::new(league, users, rosters))
    }
}
