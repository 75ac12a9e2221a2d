//! Shared setup for commands: config, league resolution and week fetching.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::{
    awards::{summarize_week, Criterion, NonScoringKeys, WeekData, WeekSummary},
    cli::LeagueArgs,
    config::AppConfig,
    core::cache::cache_root,
    error::Result,
    sleeper::{
        types::{Matchup, PlayerDirectory, WeekProjections, WeeklyStats},
        CacheStatus, CachedSleeper, LeagueInfo, SleeperClient,
    },
    LeagueId, Season, Week,
};

/// Resources every command needs once the league is known.
pub struct CommandContext {
    pub config: AppConfig,
    pub season: Season,
    pub sleeper: CachedSleeper,
    pub league: LeagueInfo,
}

impl CommandContext {
    /// Load config and resolve the league against the live Sleeper API.
    pub async fn new(args: &LeagueArgs) -> Result<Self> {
        let config = AppConfig::load_or_default(args.config.as_deref())?;
        Self::with_client(args, config, SleeperClient::new(), Some(cache_root())).await
    }

    /// Build a context from explicit parts; `cache_dir: None` keeps the cache in memory.
    pub async fn with_client(
        args: &LeagueArgs,
        config: AppConfig,
        client: SleeperClient,
        cache_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let season = config.season(args.season);
        let league_id = resolve_league_id(&client, &config, args, season).await?;

        info!(%league_id, %season, "Loading league");
        let league = client.get_league_info(&league_id).await?;
        if league.league.season_year().is_some_and(|s| s != season) {
            warn!(
                league_season = %league.league.season,
                %season,
                "league season differs from requested season"
            );
        }

        Ok(Self {
            config,
            season,
            sleeper: CachedSleeper::with_root(client, args.refresh, cache_dir),
            league,
        })
    }

    pub fn non_scoring_keys(&self) -> &NonScoringKeys {
        &self.config.non_scoring_keys
    }

    /// Fetch what `criterion` needs for `week` and rank the league.
    ///
    /// Fetch failures become a failed summary so one bad week does not stop
    /// the rest of a schedule.
    pub async fn week_summary(&self, week: Week, criterion: Criterion) -> WeekSummary {
        match self.fetch_week(week, criterion).await {
            Ok(fetched) => {
                let data = fetched.view(self.non_scoring_keys());
                summarize_week(criterion, &self.league, week, &data)
            }
            Err(error) => {
                warn!(%week, %criterion, %error, "week data fetch failed");
                WeekSummary::failed(week, criterion, error)
            }
        }
    }

    /// Fetch the week's matchups plus whatever auxiliary data `criterion` reads.
    pub async fn fetch_week(&self, week: Week, criterion: Criterion) -> Result<FetchedWeek> {
        let inputs = criterion.inputs();
        let league_id = &self.league.league.league_id;

        let (matchups, status) = self.sleeper.matchups(league_id, week).await?;
        log_status("matchups", week, status);

        let stats = if inputs.stats {
            let (stats, status) = self.sleeper.weekly_stats(self.season, week).await?;
            log_status("player stats", week, status);
            Some(stats)
        } else {
            None
        };

        let projections = if inputs.projections {
            let starters = matchups
                .iter()
                .flat_map(|m| m.starters.iter())
                .filter(|p| !p.is_empty_slot());
            let projections = self
                .sleeper
                .week_projections(starters, self.season, week)
                .await?;
            debug!(%week, players = projections.len(), "projections loaded");
            Some(projections)
        } else {
            None
        };

        let players = if inputs.players {
            let (players, status) = self.sleeper.players(self.season).await?;
            log_status("player directory", week, status);
            Some(players)
        } else {
            None
        };

        Ok(FetchedWeek {
            matchups,
            stats,
            projections,
            players,
        })
    }
}

/// Owned week data, borrowed by the awards engine through [`FetchedWeek::view`].
#[derive(Debug, Default)]
pub struct FetchedWeek {
    pub matchups: Vec<Matchup>,
    pub stats: Option<WeeklyStats>,
    pub projections: Option<WeekProjections>,
    pub players: Option<PlayerDirectory>,
}

impl FetchedWeek {
    pub fn view<'a>(&'a self, non_scoring: &'a NonScoringKeys) -> WeekData<'a> {
        let mut data = WeekData::new(&self.matchups, non_scoring);
        if let Some(stats) = &self.stats {
            data = data.with_stats(stats);
        }
        if let Some(projections) = &self.projections {
            data = data.with_projections(projections);
        }
        if let Some(players) = &self.players {
            data = data.with_players(players);
        }
        data
    }
}

/// `--league-id` wins; otherwise the user's first league of the season.
pub async fn resolve_league_id(
    client: &SleeperClient,
    config: &AppConfig,
    args: &LeagueArgs,
    season: Season,
) -> Result<LeagueId> {
    if let Some(league_id) = &args.league_id {
        return Ok(league_id.clone());
    }

    let username = config.resolve_username(args.username.clone())?;
    let league = client.find_user_league(&username, season).await?;
    info!(%username, league = %league.name, "Found league");
    Ok(league.league_id)
}

fn log_status(what: &str, week: Week, status: CacheStatus) {
    match status {
        CacheStatus::Hit => debug!(%week, "✓ {what} loaded (from cache)"),
        CacheStatus::Miss => debug!(%week, "✓ {what} fetched (cache miss)"),
        CacheStatus::Refreshed => debug!(%week, "✓ {what} fetched (refreshed)"),
    }
}

/// Print a serializable value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
