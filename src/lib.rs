//! Sleeper Fantasy Football Weekly Awards Library
//!
//! Computes weekly "awards" for a Sleeper fantasy football league: for a
//! given week and criterion every roster is scored, and the league is ranked
//! by that score.
//!
//! ## Features
//!
//! - **Award Criteria**: hot start, MVP, butterfingers, blackjack, win
//!   margins, projection beaters and more
//! - **Optimal Lineups**: best possible starting score from the full roster,
//!   including FLEX
//! - **Projected Points**: weekly projections scored with league settings
//! - **Sleeper Client**: async access to the public Sleeper API with a
//!   memory and disk cache
//!
//! ## Quick Start
//!
//! ```rust
//! use sleeper_awards::awards::{rank, Direction, PrizeEntry};
//!
//! let ranked = rank(
//!     vec![
//!         PrizeEntry::new("Alice", Some(98.5)),
//!         PrizeEntry::new("Bob", None),
//!         PrizeEntry::new("Carol", Some(120.0)),
//!     ],
//!     Direction::Descending,
//! );
//! assert_eq!(ranked[0].owner, "Carol");
//! assert_eq!(ranked[2].owner, "Bob");
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper username to avoid passing it in every command:
//! ```bash
//! export SLEEPER_USERNAME=commish
//! ```

pub mod awards;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod sleeper;

// Re-export commonly used types
pub use awards::{Criterion, WeekSummary};
pub use cli::types::{LeagueId, PlayerId, Position, RosterId, Season, Week};
pub use config::AppConfig;
pub use error::{AwardError, Result};
pub use sleeper::{LeagueInfo, SleeperClient};

pub const USERNAME_ENV_VAR: &str = "SLEEPER_USERNAME";
