//! Sleeper data access through the two-tier cache.

use std::{future::Future, path::PathBuf};

use tracing::{debug, info};

use crate::{
    core::cache::{
        cache_root, CacheKey, MatchupsCacheKey, PlayersCacheKey, ProjectionsCacheKey,
        UnifiedCache, WeeklyStatsCacheKey,
    },
    error::Result,
    sleeper::{
        http::SleeperClient,
        types::{
            projected_week_stats, Matchup, PlayerDirectory, SeasonProjections, WeekProjections,
            WeeklyStats,
        },
    },
    LeagueId, PlayerId, Season, Week,
};

const MATCHUPS_CAPACITY: usize = 32;
const STATS_CAPACITY: usize = 32;
const PROJECTIONS_CAPACITY: usize = 512;
const PLAYERS_CAPACITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

/// Cached view of the week-varying Sleeper endpoints.
///
/// League settings, users and rosters are always fetched fresh; they are
/// small and can change mid-season.
pub struct CachedSleeper {
    client: SleeperClient,
    refresh: bool,
    matchups: UnifiedCache<MatchupsCacheKey, Vec<Matchup>>,
    stats: UnifiedCache<WeeklyStatsCacheKey, WeeklyStats>,
    projections: UnifiedCache<ProjectionsCacheKey, SeasonProjections>,
    players: UnifiedCache<PlayersCacheKey, PlayerDirectory>,
}

impl CachedSleeper {
    /// Cache under the user cache directory.
    pub fn new(client: SleeperClient, refresh: bool) -> Self {
        Self::with_root(client, refresh, Some(cache_root()))
    }

    /// Cache under `root`, or in memory only when `None`.
    pub fn with_root(client: SleeperClient, refresh: bool, root: Option<PathBuf>) -> Self {
        Self {
            client,
            refresh,
            matchups: UnifiedCache::new(MATCHUPS_CAPACITY, root.clone()),
            stats: UnifiedCache::new(STATS_CAPACITY, root.clone()),
            projections: UnifiedCache::new(PROJECTIONS_CAPACITY, root.clone()),
            players: UnifiedCache::new(PLAYERS_CAPACITY, root),
        }
    }

    async fn load<K, V, F, Fut>(
        &self,
        cache: &UnifiedCache<K, V>,
        key: K,
        fetch: F,
    ) -> Result<(V, CacheStatus)>
    where
        K: CacheKey,
        V: Clone + serde::Serialize + serde::de::DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if !self.refresh {
            if let Some(value) = cache.get(&key) {
                return Ok((value, CacheStatus::Hit));
            }
        }

        let value = fetch().await?;
        cache.put(key, value.clone());
        let status = if self.refresh {
            CacheStatus::Refreshed
        } else {
            CacheStatus::Miss
        };
        Ok((value, status))
    }

    pub async fn matchups(
        &self,
        league_id: &LeagueId,
        week: Week,
    ) -> Result<(Vec<Matchup>, CacheStatus)> {
        let key = MatchupsCacheKey {
            league_id: league_id.clone(),
            week,
        };
        self.load(&self.matchups, key, || self.client.get_matchups(league_id, week))
            .await
    }

    pub async fn weekly_stats(
        &self,
        season: Season,
        week: Week,
    ) -> Result<(WeeklyStats, CacheStatus)> {
        let key = WeeklyStatsCacheKey { season, week };
        self.load(&self.stats, key, || self.client.get_weekly_stats(season, week))
            .await
    }

    pub async fn players(&self, season: Season) -> Result<(PlayerDirectory, CacheStatus)> {
        info!("Loading NFL player directory...");
        self.load(&self.players, PlayersCacheKey { season }, || {
            self.client.get_players()
        })
        .await
    }

    pub async fn season_projections(
        &self,
        player_id: &PlayerId,
        season: Season,
    ) -> Result<SeasonProjections> {
        let key = ProjectionsCacheKey {
            player_id: player_id.clone(),
            season,
        };
        let (projections, _) = self
            .load(&self.projections, key, || {
                self.client.get_season_projections(player_id, season)
            })
            .await?;
        Ok(projections)
    }

    /// One week's projected stats for each listed player.
    ///
    /// Players with no projection for the week are left out; empty lineup
    /// slots are skipped.
    pub async fn week_projections<'p, I>(
        &self,
        player_ids: I,
        season: Season,
        week: Week,
    ) -> Result<WeekProjections>
    where
        I: IntoIterator<Item = &'p PlayerId>,
    {
        let mut out = WeekProjections::new();

        for player_id in player_ids {
            if player_id.is_empty_slot() || out.contains_key(player_id) {
                continue;
            }
            let season_projections = self.season_projections(player_id, season).await?;
            match projected_week_stats(&season_projections, week) {
                Some(stats) => {
                    out.insert(player_id.clone(), stats.clone());
                }
                None => debug!(%player_id, %week, "no projection for week"),
            }
        }

        Ok(out)
    }
}
