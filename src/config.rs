//! Configuration types for parsing, statistics and sampling.
//!
//! These are plain builder-style structs with no CLI framework dependency,
//! so library users and the binary share the same knobs.
//!
//! - [`KakaoConfig`] - transcript parsing
//! - [`StatsConfig`] - participant aggregation
//! - [`SampleConfig`] - downsampling for the analysis collaborator
//!
//! # Example
//!
//! ```rust
//! use kakaopack::config::{KakaoConfig, SampleConfig};
//! use kakaopack::parser::KakaoParser;
//!
//! let config = KakaoConfig::new().with_skip_system_messages(false);
//! let parser = KakaoParser::with_config(config);
//!
//! let sampling = SampleConfig::new().with_max_count(300);
//! assert_eq!(sampling.recent_count(), 150);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for participant statistics.
///
/// # Example
///
/// ```rust
/// use kakaopack::config::StatsConfig;
///
/// let config = StatsConfig::new().with_top_words(5);
/// assert_eq!(config.top_words, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Maximum number of top words kept per participant (default: 10)
    pub top_words: usize,

    /// Tokens shorter than this many characters are ignored (default: 2)
    pub min_word_chars: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_words: 10,
            min_word_chars: 2,
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many top words are kept per participant.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the minimum token length in characters.
    #[must_use]
    pub fn with_min_word_chars(mut self, n: usize) -> Self {
        self.min_word_chars = n;
        self
    }
}

/// Configuration for KakaoTalk transcript parsing.
///
/// # Example
///
/// ```rust
/// use kakaopack::config::KakaoConfig;
///
/// let config = KakaoConfig::new()
///     .with_skip_system_messages(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KakaoConfig {
    /// Drop media placeholders, join/leave notices and very short bodies
    /// (default: true)
    pub skip_system_messages: bool,

    /// Statistics settings used when building participants
    pub stats: StatsConfig,
}

impl Default for KakaoConfig {
    fn default() -> Self {
        Self {
            skip_system_messages: true,
            stats: StatsConfig::default(),
        }
    }
}

impl KakaoConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether system messages are dropped.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Sets the statistics configuration.
    #[must_use]
    pub fn with_stats(mut self, stats: StatsConfig) -> Self {
        self.stats = stats;
        self
    }
}

/// Configuration for [`sample_messages`](crate::core::sampler::sample_messages).
///
/// The newest `min(recent_cap, max_count / 2)` messages are always kept in
/// full; older history is thinned evenly to fill the rest of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Upper bound on the sample size (default: 600)
    pub max_count: usize,

    /// Upper bound on the untouched recent tail (default: 250)
    pub recent_cap: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            max_count: 600,
            recent_cap: 250,
        }
    }
}

impl SampleConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum sample size.
    #[must_use]
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Sets the cap on the recent tail.
    #[must_use]
    pub fn with_recent_cap(mut self, recent_cap: usize) -> Self {
        self.recent_cap = recent_cap;
        self
    }

    /// Number of trailing messages kept verbatim.
    pub fn recent_count(&self) -> usize {
        self.recent_cap.min(self.max_count / 2)
    }
}
