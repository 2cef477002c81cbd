// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-supplied tuning values.

use core::time::Duration;

/// Tuning values supplied by the platform.
///
/// The detector's own timers (100/140/150/160 ms, see
/// [`TimerSlot::delay`](crate::timer::TimerSlot::delay)) are fixed and do
/// not derive from [`GestureConfig::double_tap_timeout`]; that value is kept
/// for hosts that want to report it alongside gesture diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Minimum movement, in sample coordinates, treated as intentional.
    pub touch_slop: f64,
    /// Platform double-tap timeout. Informational.
    pub double_tap_timeout: Duration,
    /// Maximum number of debug history entries kept; `0` disables history.
    pub history_capacity: usize,
}

impl GestureConfig {
    /// Default touch slop in sample coordinates.
    pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;
    /// Default platform double-tap timeout.
    pub const DEFAULT_DOUBLE_TAP_TIMEOUT: Duration = Duration::from_millis(300);
    /// Default debug history bound.
    pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

    /// Create a configuration with the given slop and defaults elsewhere.
    pub const fn new(touch_slop: f64) -> Self {
        Self {
            touch_slop,
            double_tap_timeout: Self::DEFAULT_DOUBLE_TAP_TIMEOUT,
            history_capacity: Self::DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Set the platform double-tap timeout.
    #[must_use]
    pub const fn with_double_tap_timeout(mut self, timeout: Duration) -> Self {
        self.double_tap_timeout = timeout;
        self
    }

    /// Set the debug history bound.
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Check that the values can drive the detector.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.touch_slop.is_finite() {
            return Err(ConfigError::NonFiniteSlop(self.touch_slop));
        }
        if self.touch_slop < 0.0 {
            return Err(ConfigError::NegativeSlop(self.touch_slop));
        }
        Ok(())
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOUCH_SLOP)
    }
}

/// Rejected configuration value.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Touch slop was NaN or infinite.
    #[error("touch slop must be finite, got {0}")]
    NonFiniteSlop(f64),
    /// Touch slop was below zero.
    #[error("touch slop must not be negative, got {0}")]
    NegativeSlop(f64),
}
