//! Sleeper fantasy platform integration
//!
//! - `types`: response records for the endpoints the awards read
//! - `http`: async client for the public v1 and projections APIs
//! - `cached`: the same endpoints behind the memory/disk cache

pub mod cached;
pub mod http;
pub mod types;

pub use cached::{CacheStatus, CachedSleeper};
pub use http::SleeperClient;
pub use types::{League, LeagueInfo, Matchup, PlayerDirectory, WeekProjections, WeeklyStats};
