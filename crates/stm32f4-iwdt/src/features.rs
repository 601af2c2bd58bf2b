//! Static capability record of the IWDG.

use crate::constants::MAX_TIMEOUT_MS;

/// What this watchdog can and cannot do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatchdogFeatures {
    /// Longest timeout accepted, in milliseconds.
    pub max_timeout: u32,
    /// Longest timeout accepted in window mode, in milliseconds.
    pub max_timeout_window_mode: u32,
    /// Re-running `init` after start reprograms the timeout.
    pub update_config: bool,
    /// The watchdog can be stopped once started.
    pub disable_watchdog: bool,
    /// Sleep behavior is fixed by hardware.
    pub pause_during_sleep: bool,
}

impl WatchdogFeatures {
    /// Capabilities of the STM32F4 IWDG.
    pub const IWDG: Self = Self {
        max_timeout: MAX_TIMEOUT_MS,
        max_timeout_window_mode: MAX_TIMEOUT_MS,
        update_config: true,
        disable_watchdog: false,
        pause_during_sleep: true,
    };
}
