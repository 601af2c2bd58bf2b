//! Watchdog trait definition.
//!
//! This module provides the `Watchdog` trait: the operation set every
//! watchdog driver exposes to the rest of the firmware.

use crate::config::WatchdogConfig;
use crate::error::WatchdogResult;
use crate::features::WatchdogFeatures;

/// Hardware watchdog operations.
///
/// Every method is synchronous and non-blocking. Implementations own their
/// register block; callers sharing a driver between thread or interrupt
/// contexts must provide their own mutual exclusion, since the `init`
/// register sequence is not atomic with respect to a concurrent `kick`.
///
/// Deciding *when* to kick is the caller's job: `kick` must run more often
/// than the configured timeout or the system resets.
pub trait Watchdog {
    /// Validate `config` and start (or reprogram) the watchdog.
    ///
    /// `None` stands for an absent configuration and is rejected.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the configuration violates a constraint or no
    ///   prescaler can represent the timeout
    /// - `NotSupported` if pausing during sleep is requested
    ///
    /// No register is written when an error is returned.
    fn init(&mut self, config: Option<&WatchdogConfig>) -> WatchdogResult;

    /// Reload the counter. Always succeeds.
    fn kick(&mut self);

    /// Stop the watchdog.
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` when the hardware cannot be stopped.
    fn stop(&mut self) -> WatchdogResult;

    /// Programmed timeout read back from hardware, in milliseconds.
    fn reload_value_ms(&self) -> u32;

    /// Static capabilities of the watchdog.
    fn features(&self) -> WatchdogFeatures;
}
