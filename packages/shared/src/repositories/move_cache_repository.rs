use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::repositories::errors::move_cache_repository_errors::MoveCacheRepositoryError;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait MoveCacheRepository: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, MoveCacheRepositoryError>;
    fn put(&self, key: &str, moves: &str) -> Result<(), MoveCacheRepositoryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCacheSettings {
    pub initial_capacity: usize,
    pub max_capacity: usize,
    pub time_to_live: Duration,
}

impl Default for MoveCacheSettings {
    fn default() -> Self {
        MoveCacheSettings {
            initial_capacity: 100,
            max_capacity: 1000,
            time_to_live: Duration::from_secs(24 * 60 * 60),
        }
    }
}

#[derive(Debug, Clone)]
struct CachedMoves {
    moves: String,
    inserted_at: Instant,
}

impl CachedMoves {
    fn is_expired(&self, time_to_live: Duration) -> bool {
        self.inserted_at.elapsed() >= time_to_live
    }
}

/// Process-local cache with expire-after-write and a hard entry limit.
///
/// When full, expired entries are purged first and then the oldest entry is evicted.
pub struct InMemoryMoveCacheRepository {
    entries: RwLock<HashMap<String, CachedMoves>>,
    settings: MoveCacheSettings,
}

impl InMemoryMoveCacheRepository {
    pub fn new(settings: MoveCacheSettings) -> Self {
        InMemoryMoveCacheRepository {
            entries: RwLock::new(HashMap::with_capacity(settings.initial_capacity)),
            settings,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryMoveCacheRepository {
    fn default() -> Self {
        InMemoryMoveCacheRepository::new(MoveCacheSettings::default())
    }
}

impl MoveCacheRepository for InMemoryMoveCacheRepository {
    fn get(&self, key: &str) -> Result<Option<String>, MoveCacheRepositoryError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| MoveCacheRepositoryError::LockPoisoned)?;

        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired(self.settings.time_to_live))
            .map(|entry| entry.moves.clone()))
    }

    fn put(&self, key: &str, moves: &str) -> Result<(), MoveCacheRepositoryError> {
        if self.settings.max_capacity == 0 {
            return Ok(());
        }

        let mut entries = self
            .entries
            .write()
            .map_err(|_| MoveCacheRepositoryError::LockPoisoned)?;

        if !entries.contains_key(key) && entries.len() >= self.settings.max_capacity {
            let time_to_live = self.settings.time_to_live;
            entries.retain(|_, entry| !entry.is_expired(time_to_live));

            if entries.len() >= self.settings.max_capacity {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.inserted_at)
                    .map(|(oldest_key, _)| oldest_key.clone());
                if let Some(oldest_key) = oldest {
                    debug!("Evicting cached moves for {}", oldest_key);
                    entries.remove(&oldest_key);
                }
            }
        }

        entries.insert(
            key.to_string(),
            CachedMoves {
                moves: moves.to_string(),
                inserted_at: Instant::now(),
            },
        );
        Ok(())
    }
}
