//! Rendered-amount caching using Moka.
//!
//! Document exports render the same handful of amounts over and over; the
//! cache keys on the split (major, minor) counts so `250.5` and `250.500`
//! share an entry.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use tracing::debug;

use montant_shared::{Amount, CacheConfig};

use super::error::WordsError;
use super::speller::AmountSpeller;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 1_000;

/// Default time-to-live for cache entries (1 hour).
const DEFAULT_TTL_SECS: u64 = 3600;

/// Memoizing wrapper around an [`AmountSpeller`].
///
/// Thread-safe and cheap to clone; clones share the same entries.
#[derive(Clone)]
pub struct WordsCache {
    speller: AmountSpeller,
    cache: Cache<(u64, u32), Arc<str>>,
}

impl WordsCache {
    /// Creates a dinar cache with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AmountSpeller::DINAR, DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `speller` - Speller used on cache misses
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(speller: AmountSpeller, max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { speller, cache }
    }

    /// Creates a dinar cache from application configuration.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_config(AmountSpeller::DINAR, config.max_capacity, config.ttl_secs)
    }

    /// Spells `amount`, returning the cached text when available.
    pub fn spell(&self, amount: &Amount) -> Result<Arc<str>, WordsError> {
        let key = amount.split_for(self.speller.currency())?;

        if let Some(hit) = self.cache.get(&key) {
            debug!(major = key.0, minor = key.1, "Amount words cache hit");
            return Ok(hit);
        }

        debug!(major = key.0, minor = key.1, "Amount words cache miss");
        let text: Arc<str> = self.speller.spell_parts(key.0, key.1).into();
        self.cache.insert(key, Arc::clone(&text));
        Ok(text)
    }

    /// Spells a float amount; returns `""` when it cannot be rendered.
    #[must_use]
    pub fn convert(&self, amount: f64) -> String {
        match Amount::from_f64(amount) {
            Ok(amount) => self.convert_amount(&amount),
            // Delegate so the failure is logged the same way.
            Err(_) => self.speller.convert(amount),
        }
    }

    /// Spells a validated amount; returns `""` when it cannot be rendered.
    #[must_use]
    pub fn convert_amount(&self, amount: &Amount) -> String {
        match self.spell(amount) {
            Ok(text) => text.to_string(),
            Err(_) => self.speller.convert_amount(amount),
        }
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for WordsCache {
    fn default() -> Self {
        Self::new()
    }
}
