//! Watchdog configuration.

use crate::constants::MAX_TIMEOUT_MS;
use crate::error::{InvalidArgument, Unsupported, WatchdogResult};
use crate::prescaler::{Prescaler, select_prescaler};

/// Watchdog configuration supplied to `init`.
///
/// Plain data; construct directly, through [`WatchdogConfig::new`] or the
/// [builder](WatchdogConfig::builder). Nothing is checked until
/// [`validate`](Self::validate) or `init` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[repr(C)]
pub struct WatchdogConfig {
    /// Milliseconds until reset if the watchdog is not kicked.
    pub timeout_ms: u32,

    /// Lower bound before which a kick counts as too early.
    ///
    /// Validated against the timeout; this peripheral has no window register.
    pub window_ms: u32,

    /// Keep counting while the core sleeps.
    ///
    /// Only `true` is supported.
    pub enable_sleep: bool,
}

impl WatchdogConfig {
    /// Create a configuration with the given timeout, no window and
    /// sleep-counting enabled.
    #[must_use]
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            timeout_ms,
            window_ms: 0,
            enable_sleep: true,
        }
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> WatchdogConfigBuilder {
        WatchdogConfigBuilder::default()
    }

    /// Check every constraint and pick the prescaler for this timeout.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// zero timeout, timeout above maximum, window above maximum, window
    /// above timeout, sleep pausing requested, no prescaler fits.
    ///
    /// # Errors
    ///
    /// Returns [`WatchdogError::InvalidArgument`](crate::WatchdogError) or
    /// [`WatchdogError::NotSupported`](crate::WatchdogError) describing the
    /// first violated constraint.
    pub fn validate(&self) -> WatchdogResult<Prescaler> {
        if self.timeout_ms == 0 {
            return Err(InvalidArgument::ZeroTimeout.into());
        }
        if self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(InvalidArgument::TimeoutTooLong {
                timeout_ms: self.timeout_ms,
                max_ms: MAX_TIMEOUT_MS,
            }
            .into());
        }
        if self.window_ms > MAX_TIMEOUT_MS {
            return Err(InvalidArgument::WindowTooLong {
                window_ms: self.window_ms,
                max_ms: MAX_TIMEOUT_MS,
            }
            .into());
        }
        if self.window_ms > self.timeout_ms {
            return Err(InvalidArgument::WindowExceedsTimeout {
                window_ms: self.window_ms,
                timeout_ms: self.timeout_ms,
            }
            .into());
        }
        if !self.enable_sleep {
            return Err(Unsupported::PauseDuringSleep.into());
        }

        select_prescaler(self.timeout_ms).ok_or_else(|| {
            InvalidArgument::NoPrescaler {
                timeout_ms: self.timeout_ms,
            }
            .into()
        })
    }
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// Builder for `WatchdogConfig`.
#[derive(Debug, Default)]
pub struct WatchdogConfigBuilder {
    config: WatchdogConfig,
}

impl WatchdogConfigBuilder {
    /// Set the timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(mut self, ms: u32) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set the window in milliseconds.
    #[must_use]
    pub fn window_ms(mut self, ms: u32) -> Self {
        self.config.window_ms = ms;
        self
    }

    /// Set whether the watchdog keeps counting during sleep.
    #[must_use]
    pub fn enable_sleep(mut self, enabled: bool) -> Self {
        self.config.enable_sleep = enabled;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> WatchdogResult<WatchdogConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
