use calctrace_compute::numerical::ctxt::DEFAULT_MAX_DEPTH;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The budget of one of the engine's caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CacheConfig {
    /// The maximum number of entries.
    pub max_size: usize,

    /// How long an entry stays valid. [`Duration::ZERO`] keeps entries until they are evicted.
    pub ttl: Duration,
}

impl CacheConfig {
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self { max_size, ttl }
    }
}

/// Configuration of an [`Engine`](crate::Engine).
///
/// The default cache budgets split a total of 500 entries between the tiers: half each for parsed
/// expressions and evaluation results, and a quarter for formula matches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Whether parsed expressions, evaluation results, and formula matches are cached.
    pub enable_caching: bool,

    /// Whether the deferred evaluation queue accepts requests.
    pub enable_deferred: bool,

    /// The cache of parsed expressions.
    pub ast_cache: CacheConfig,

    /// The cache of evaluation results.
    pub evaluation_cache: CacheConfig,

    /// The cache of formula matches.
    pub formula_cache: CacheConfig,

    /// The maximum nesting depth of expressions, both when parsing and when evaluating.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::with_total_cache_size(500)
    }
}

impl EngineConfig {
    /// Creates the default configuration, splitting the given number of cache entries between
    /// the tiers.
    pub fn with_total_cache_size(total: usize) -> Self {
        Self {
            enable_caching: true,
            enable_deferred: true,
            ast_cache: CacheConfig::new(total / 2, Duration::from_secs(2 * 60 * 60)),
            evaluation_cache: CacheConfig::new(total / 2, Duration::from_secs(60 * 60)),
            formula_cache: CacheConfig::new(total / 4, Duration::from_secs(30 * 60)),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_caching(mut self, enable_caching: bool) -> Self {
        self.enable_caching = enable_caching;
        self
    }

    pub fn with_deferred(mut self, enable_deferred: bool) -> Self {
        self.enable_deferred = enable_deferred;
        self
    }

    pub fn with_ast_cache(mut self, config: CacheConfig) -> Self {
        self.ast_cache = config;
        self
    }

    pub fn with_evaluation_cache(mut self, config: CacheConfig) -> Self {
        self.evaluation_cache = config;
        self
    }

    pub fn with_formula_cache(mut self, config: CacheConfig) -> Self {
        self.formula_cache = config;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn default_budgets() {
        let config = EngineConfig::default();
        assert_eq!(config.ast_cache, CacheConfig::new(250, Duration::from_secs(7200)));
        assert_eq!(config.evaluation_cache, CacheConfig::new(250, Duration::from_secs(3600)));
        assert_eq!(config.formula_cache, CacheConfig::new(125, Duration::from_secs(1800)));
        assert_eq!(config.max_depth, 256);
        assert!(config.enable_caching);
        assert!(config.enable_deferred);
    }

    #[test]
    fn builder() {
        let config = EngineConfig::default()
            .with_caching(false)
            .with_max_depth(16)
            .with_formula_cache(CacheConfig::new(8, Duration::ZERO));
        assert!(!config.enable_caching);
        assert_eq!(config.max_depth, 16);
        assert_eq!(config.formula_cache.max_size, 8);
    }
}
