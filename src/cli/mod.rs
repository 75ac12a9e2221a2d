//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, Season, Week};

use crate::awards::Criterion;

/// Arguments that pick the league and control fetching, shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct LeagueArgs {
    /// Config file (defaults to `./Config.json` when present).
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Sleeper username (or set `SLEEPER_USERNAME` env var).
    #[clap(long, short)]
    pub username: Option<String>,

    /// Use this league instead of the user's first league of the season.
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Season year (e.g. 2023). Defaults to the config year.
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Force refresh from Sleeper, overwriting the cache.
    #[clap(long)]
    pub refresh: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Resolve the league and print its settings and owners.
    LeagueData {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rank every roster in the league by one award criterion for one week.
    WeekSummary {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Week of the regular season.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,

        /// Award criterion to rank by.
        #[clap(long, short)]
        award: Criterion,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Hand out every award in the configured schedule.
    Awards {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-awards", about = "Weekly awards for Sleeper fantasy football leagues")]
pub struct SleeperAwards {
    /// Log debug detail (fetches, cache hits, per-roster scores) to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data and awards from a Sleeper league
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
