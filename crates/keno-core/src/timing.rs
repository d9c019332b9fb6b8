//! Timing profiles for the number reveal sequence

use serde::{Deserialize, Serialize};

/// Timing profile for reveal events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimingProfile {
    /// Normal gameplay timing
    Normal,
    /// Fast mode
    Turbo,
    /// Everything at once (tests, headless runs)
    Instant,
    /// Custom scaled timing
    Custom,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Detailed timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Profile type
    pub profile: TimingProfile,

    /// Gap between two revealed numbers (ms)
    pub reveal_interval_ms: f64,

    /// Pause after the last reveal before the round is scored (ms)
    pub settle_delay_ms: f64,

    /// Delay between scoring and showing the round result (ms)
    pub result_delay_ms: f64,
}

impl TimingConfig {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            profile: TimingProfile::Normal,
            reveal_interval_ms: 200.0,
            settle_delay_ms: 300.0,
            result_delay_ms: 1000.0,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            reveal_interval_ms: 60.0,
            settle_delay_ms: 100.0,
            result_delay_ms: 300.0,
        }
    }

    /// No delays at all
    pub fn instant() -> Self {
        Self {
            profile: TimingProfile::Instant,
            reveal_interval_ms: 0.0,
            settle_delay_ms: 0.0,
            result_delay_ms: 0.0,
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Normal => Self::normal(),
            TimingProfile::Turbo => Self::turbo(),
            TimingProfile::Instant => Self::instant(),
            TimingProfile::Custom => Self::normal(),
        }
    }

    /// Scale timing by factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        let factor = factor.max(0.0);
        Self {
            profile: TimingProfile::Custom,
            reveal_interval_ms: self.reveal_interval_ms * factor,
            settle_delay_ms: self.settle_delay_ms * factor,
            result_delay_ms: self.result_delay_ms * factor,
        }
    }

    /// Time from round start until the result is shown
    pub fn round_duration(&self, reveal_count: usize) -> f64 {
        self.reveal_interval_ms * reveal_count as f64 + self.settle_delay_ms + self.result_delay_ms
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::normal()
    }
}

/// Timestamp generator for sequential reveal events
#[derive(Debug, Clone)]
pub struct RevealClock {
    current_ms: f64,
    config: TimingConfig,
}

impl RevealClock {
    pub fn new(config: TimingConfig) -> Self {
        Self {
            current_ms: 0.0,
            config,
        }
    }

    /// Reset to zero
    pub fn reset(&mut self) {
        self.current_ms = 0.0;
    }

    /// Get current timestamp
    pub fn current(&self) -> f64 {
        self.current_ms
    }

    /// Advance by duration and return new timestamp
    pub fn advance(&mut self, duration_ms: f64) -> f64 {
        self.current_ms += duration_ms.max(0.0);
        self.current_ms
    }

    /// Timestamp of the reveal at `index`; the first reveal fires at round start
    pub fn reveal(&mut self, index: usize) -> f64 {
        if index == 0 {
            self.current_ms
        } else {
            self.advance(self.config.reveal_interval_ms)
        }
    }

    /// Advance past the last reveal to the scoring point
    pub fn settle(&mut self) -> f64 {
        self.advance(self.config.reveal_interval_ms + self.config.settle_delay_ms)
    }

    /// Advance to the result display
    pub fn result(&mut self) -> f64 {
        self.advance(self.config.result_delay_ms)
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }
}
