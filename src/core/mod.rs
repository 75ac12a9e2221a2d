//! Core utilities shared across the application:
//! - `cache`: memory and file system caching of Sleeper responses
//! - `logging`: tracing subscriber setup

pub mod cache;
pub mod logging;

pub use cache::{cache_root, try_read_to_string, write_string, UnifiedCache};
