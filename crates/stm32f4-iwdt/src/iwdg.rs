//! Independent watchdog controller.
//!
//! `IndependentWatchdog` validates a [`WatchdogConfig`], selects a prescaler
//! and drives the key sequence that programs and starts the IWDG.

use tracing::{debug, trace, warn};

use crate::config::WatchdogConfig;
use crate::constants::{KEY_ENABLE, KEY_RELOAD, KEY_UNLOCK};
use crate::error::{InvalidArgument, Unsupported, WatchdogError, WatchdogResult};
use crate::features::WatchdogFeatures;
use crate::prescaler::Prescaler;
use crate::registers::RegisterBlock;
use crate::state::{WatchdogMetrics, WatchdogState, WatchdogStatus};
use crate::watchdog::Watchdog;

/// Driver for the STM32F4 independent watchdog.
///
/// Owns the register block, so holding `&mut IndependentWatchdog` is holding
/// the peripheral.
///
/// # Example
///
/// ```rust
/// use stm32f4_iwdt::prelude::*;
///
/// let mut iwdg = IndependentWatchdog::new(SimulatedIwdg::new());
/// iwdg.init(&WatchdogConfig::new(2000)).expect("valid config");
///
/// assert_eq!(iwdg.prescaler(), Prescaler::DIV32);
/// assert_eq!(iwdg.reload_value_ms(), 1984);
///
/// iwdg.kick();
/// assert_eq!(Status::from(&iwdg.stop()), Status::NotSupported);
/// ```
#[derive(Debug)]
pub struct IndependentWatchdog<R> {
    registers: R,
    state: WatchdogState,
}

impl<R: RegisterBlock> IndependentWatchdog<R> {
    /// Take ownership of the register block. Nothing is written.
    #[must_use]
    pub fn new(registers: R) -> Self {
        Self {
            registers,
            state: WatchdogState::new(),
        }
    }

    /// Validate `config`, then program and start the watchdog.
    ///
    /// Accepts `&WatchdogConfig` or `None` (an absent configuration).
    /// Calling again while armed reprograms the prescaler and reload value.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, in the order documented on
    /// [`WatchdogConfig::validate`], preceded by
    /// [`InvalidArgument::MissingConfig`] for an absent configuration.
    /// Registers are left untouched on error.
    pub fn init<'a>(&mut self, config: impl Into<Option<&'a WatchdogConfig>>) -> WatchdogResult {
        let Some(config) = config.into() else {
            return Err(self.reject(InvalidArgument::MissingConfig.into()));
        };

        let prescaler = config.validate().map_err(|err| self.reject(err))?;
        let Some(reload) = prescaler.reload_for(config.timeout_ms) else {
            return Err(self.reject(
                InvalidArgument::NoPrescaler {
                    timeout_ms: config.timeout_ms,
                }
                .into(),
            ));
        };

        self.registers.write_key(KEY_UNLOCK);
        self.registers.write_reload(reload);
        self.registers.write_prescaler(prescaler.bits());
        self.registers.write_key(KEY_RELOAD);
        self.registers.write_key(KEY_ENABLE);

        let previous = self.state.arm();
        debug!(
            timeout_ms = config.timeout_ms,
            window_ms = config.window_ms,
            %prescaler,
            reload,
            %previous,
            "independent watchdog programmed"
        );
        Ok(())
    }

    /// Reload the counter from the reload register.
    pub fn kick(&mut self) {
        self.registers.write_key(KEY_RELOAD);
        self.state.record_kick();
        trace!("independent watchdog kicked");
    }

    /// The IWDG cannot be stopped once started.
    ///
    /// # Errors
    ///
    /// Always returns [`Unsupported::Stop`].
    pub fn stop(&mut self) -> WatchdogResult {
        Err(Unsupported::Stop.into())
    }

    /// Programmed timeout in milliseconds, reconstructed from `RLR` and `PR`.
    ///
    /// The reconstruction is lossy: `init(t)` followed by this call yields a
    /// value `v <= t` with `t - v` below the divisor (for 2000 ms at divisor
    /// 32 it reports 1984 ms).
    #[must_use]
    pub fn reload_value_ms(&self) -> u32 {
        self.prescaler().timeout_ms_for(self.registers.reload())
    }

    /// Prescaler currently held in `PR`.
    #[must_use]
    pub fn prescaler(&self) -> Prescaler {
        Prescaler::from_bits(self.registers.prescaler())
    }

    /// Static capabilities; independent of any `init` call.
    #[must_use]
    pub fn features(&self) -> WatchdogFeatures {
        WatchdogFeatures::IWDG
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> WatchdogStatus {
        self.state.status()
    }

    /// Snapshot of the operation counters.
    #[must_use]
    pub fn metrics(&self) -> WatchdogMetrics {
        self.state.metrics()
    }

    /// Shared access to the register block.
    #[must_use]
    pub fn registers(&self) -> &R {
        &self.registers
    }

    /// Exclusive access to the register block.
    ///
    /// Writes made through it bypass validation and are not tracked in
    /// [`metrics`](Self::metrics).
    #[must_use]
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.registers
    }

    /// Release the register block. An armed watchdog keeps running.
    #[must_use]
    pub fn free(self) -> R {
        self.registers
    }

    fn reject(&self, err: WatchdogError) -> WatchdogError {
        self.state.record_rejection();
        warn!(error = %err, "independent watchdog configuration rejected");
        err
    }
}

impl<R: RegisterBlock> Watchdog for IndependentWatchdog<R> {
    fn init(&mut self, config: Option<&WatchdogConfig>) -> WatchdogResult {
        IndependentWatchdog::init(self, config)
    }

    fn kick(&mut self) {
        IndependentWatchdog::kick(self);
    }

    fn stop(&mut self) -> WatchdogResult {
        IndependentWatchdog::stop(self)
    }

    fn reload_value_ms(&self) -> u32 {
        IndependentWatchdog::reload_value_ms(self)
    }

    fn features(&self) -> WatchdogFeatures {
        IndependentWatchdog::features(self)
    }
}
