//! Award computation engine
//!
//! Everything in this module is synchronous and pure: it takes already
//! fetched league and week data and returns new values.
//! - `lineup`: position pools and the optimal-lineup calculator
//! - `projection`: projected points from projected stats and league scoring
//! - `criteria`: the weekly award rules
//! - `ranking`: ordering of prize entries
//! - `summary`: one criterion applied to a whole league for a week

pub mod criteria;
pub mod lineup;
pub mod projection;
pub mod ranking;
pub mod summary;

pub use criteria::{Criterion, WeekData};
pub use lineup::{optimal_lineup_points, players_at_position, StartingSlots};
pub use projection::NonScoringKeys;
pub use ranking::{rank, Direction, PrizeEntry};
pub use summary::{summarize_week, WeekSummary};
