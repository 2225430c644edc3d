//! Game configuration
//!
//! Round limits used by the core plus presentation timings used by the TUI.

use std::time::Duration;
use thiserror::Error;

/// Attempts per round unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("A round needs at least one attempt")]
    ZeroAttempts,
}

/// Delays for revealing a scored row
///
/// Purely cosmetic: the round is already scored when the reveal starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay between consecutive tiles flipping
    pub tile_stagger: Duration,
    /// Pause between the last tile and the result screen
    pub result_delay: Duration,
    /// How long an incomplete row shakes
    pub shake: Duration,
}

impl RevealTiming {
    /// No animation at all
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            tile_stagger: Duration::ZERO,
            result_delay: Duration::ZERO,
            shake: Duration::ZERO,
        }
    }

    /// Time until the whole row of `word_length` tiles is visible
    #[must_use]
    pub fn row_duration(&self, word_length: usize) -> Duration {
        self.tile_stagger * u32::try_from(word_length).unwrap_or(u32::MAX)
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            tile_stagger: Duration::from_millis(100),
            result_delay: Duration::from_millis(1500),
            shake: Duration::from_millis(500),
        }
    }
}

/// Settings shared by every round of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: usize,
    pub timing: RevealTiming,
}

impl GameConfig {
    /// # Errors
    /// Returns `ConfigError::ZeroAttempts` if `max_attempts` is zero.
    pub fn new(max_attempts: usize, timing: RevealTiming) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            max_attempts,
            timing,
        })
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timing: RevealTiming::default(),
        }
    }
}
