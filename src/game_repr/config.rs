//! Engine configuration.
//!
//! A [`Position`](super::Position) takes its configuration at construction;
//! clones inherit it.

use std::env;

/// Environment variable overriding [`EngineConfig::move_cache_capacity`].
pub const CACHE_CAPACITY_ENV: &str = "CHESS_RULES_CACHE_CAPACITY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of legal-move sets remembered per position.
    /// 0 disables the cache.
    pub move_cache_capacity: usize,
    /// Check the king-count invariant after every apply/undo. Always on in
    /// debug builds regardless of this flag.
    pub verify_invariants: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            move_cache_capacity: 4096,
            verify_invariants: false,
        }
    }
}

impl EngineConfig {
    pub fn with_move_cache_capacity(mut self, capacity: usize) -> Self {
        self.move_cache_capacity = capacity;
        self
    }

    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }

    /// Defaults, overridden by the environment where set. Unparsable values
    /// are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(CACHE_CAPACITY_ENV).ok().as_deref())
    }

    /// Defaults with the raw value of [`CACHE_CAPACITY_ENV`] applied.
    pub fn from_env_value(cache_capacity: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = cache_capacity {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => config.move_cache_capacity = capacity,
                Err(err) => log::warn!("ignoring {}={:?}: {}", CACHE_CAPACITY_ENV, raw, err),
            }
        }
        config
    }
}
