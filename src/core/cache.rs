//! Two-tier cache for Sleeper API responses
//!
//! - L1: in-memory LRU cache, so several awards computed for the same week
//!   share one fetch
//! - L2: JSON files under the user cache directory, so repeated runs do not
//!   hit the API again
//!
//! Weekly data for completed weeks does not change, so entries never expire;
//! callers pass `refresh` to bypass reads.

use lru::LruCache;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::debug;

use crate::{LeagueId, PlayerId, Season, Week};

/// Path: ~/.cache/sleeper-awards
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("sleeper-awards")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Key for one cached response.
pub trait CacheKey: Hash + Eq + Clone {
    /// File stem used for the on-disk copy.
    fn to_file_key(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchupsCacheKey {
    pub league_id: LeagueId,
    pub week: Week,
}

impl CacheKey for MatchupsCacheKey {
    fn to_file_key(&self) -> String {
        format!("matchups_l{}_w{}", self.league_id, self.week)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeeklyStatsCacheKey {
    pub season: Season,
    pub week: Week,
}

impl CacheKey for WeeklyStatsCacheKey {
    fn to_file_key(&self) -> String {
        format!("stats_s{}_w{}", self.season, self.week)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectionsCacheKey {
    pub player_id: PlayerId,
    pub season: Season,
}

impl CacheKey for ProjectionsCacheKey {
    fn to_file_key(&self) -> String {
        format!("projections_p{}_s{}", self.player_id, self.season)
    }
}

/// The NFL player directory only changes between seasons for our purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayersCacheKey {
    pub season: Season,
}

impl CacheKey for PlayersCacheKey {
    fn to_file_key(&self) -> String {
        format!("players_s{}", self.season)
    }
}

/// LRU memory cache backed by optional JSON files on disk.
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    memory_cache: Mutex<LruCache<K, V>>,
    disk_root: Option<PathBuf>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Cache persisted under `disk_root`, or memory-only when `None`.
    pub fn new(memory_capacity: usize, disk_root: Option<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            disk_root,
        }
    }

    fn memory(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.memory_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn file_path(&self, key: &K) -> Option<PathBuf> {
        self.disk_root
            .as_ref()
            .map(|root| root.join(format!("{}.json", key.to_file_key())))
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(value) = self.memory().get(key) {
            debug!(key = %key.to_file_key(), "memory cache hit");
            return Some(value.clone());
        }

        let value = self.get_from_disk(key)?;
        debug!(key = %key.to_file_key(), "disk cache hit");
        self.memory().put(key.clone(), value.clone());
        Some(value)
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) {
        if let Err(e) = self.put_to_disk(&key, &value) {
            debug!(key = %key.to_file_key(), error = %e, "failed to write disk cache");
        }
        self.memory().put(key, value);
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = self.file_path(key)?;
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let Some(path) = self.file_path(key) else {
            return Ok(());
        };
        let content = serde_json::to_string(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cache_root() {
        let path = cache_root();
        assert!(path.to_string_lossy().contains("sleeper-awards"));
    }

    #[test]
    fn test_try_read_to_string_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        fs::write(&file_path, "hello world").unwrap();

        let content = try_read_to_string(&file_path);
        assert_eq!(content, Some("hello world".to_string()));
    }

    #[test]
    fn test_try_read_to_string_nonexistent_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.txt");

        assert_eq!(try_read_to_string(&file_path), None);
    }

    #[test]
    fn test_write_string_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("subdir").join("output.txt");

        write_string(&file_path, "test content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "test content");
    }

    #[test]
    fn test_cache_key_generation() {
        let key = MatchupsCacheKey {
            league_id: LeagueId::new("1048313545995296768"),
            week: Week::new(12),
        };
        assert_eq!(key.to_file_key(), "matchups_l1048313545995296768_w12");

        let key = ProjectionsCacheKey {
            player_id: PlayerId::from("4046"),
            season: Season::new(2023),
        };
        assert_eq!(key.to_file_key(), "projections_p4046_s2023");
    }

    #[test]
    fn test_memory_only_cache_evicts_lru() {
        let cache: UnifiedCache<WeeklyStatsCacheKey, String> = UnifiedCache::new(2, None);
        let key = |w| WeeklyStatsCacheKey {
            season: Season::new(2023),
            week: Week::new(w),
        };

        cache.put(key(1), "one".to_string());
        cache.put(key(2), "two".to_string());
        cache.put(key(3), "three".to_string());

        assert_eq!(cache.get(&key(1)), None);
        assert_eq!(cache.get(&key(3)), Some("three".to_string()));
        assert_eq!(cache.memory().len(), 2);
        assert!(cache.file_path(&key(3)).is_none());
    }

    #[test]
    fn test_disk_cache_survives_new_instance() {
        let dir = tempdir().unwrap();
        let cache: UnifiedCache<WeeklyStatsCacheKey, Vec<f64>> =
            UnifiedCache::new(4, Some(dir.path().to_path_buf()));
        let key = WeeklyStatsCacheKey {
            season: Season::new(2023),
            week: Week::new(12),
        };

        cache.put(key.clone(), vec![1.5, 2.5]);
        assert!(dir.path().join("stats_s2023_w12.json").exists());

        let reopened: UnifiedCache<WeeklyStatsCacheKey, Vec<f64>> =
            UnifiedCache::new(4, Some(dir.path().to_path_buf()));
        assert_eq!(reopened.memory().len(), 0);
        assert_eq!(reopened.get(&key), Some(vec![1.5, 2.5]));
        // Promoted into memory.
        assert_eq!(reopened.memory().len(), 1);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache: UnifiedCache<PlayersCacheKey, u8> = UnifiedCache::new(0, None);
        assert_eq!(cache.memory().cap().get(), 1);
        cache.put(PlayersCacheKey { season: Season::new(2023) }, 7);
        assert_eq!(cache.memory().len(), 1);
    }
}
