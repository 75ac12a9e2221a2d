//! Command implementations for the Sleeper awards CLI

pub mod awards;
pub mod common;
pub mod league_data;
pub mod week_summary;


pub use awards::handle_awards;
pub use league_data::handle_league_data;
pub use week_summary::handle_week_summary;
