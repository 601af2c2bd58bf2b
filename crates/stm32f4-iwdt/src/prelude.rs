//! Prelude for stm32f4-iwdt.
//!
//! This module re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use stm32f4_iwdt::prelude::*;
//!
//! let mut iwdg = IndependentWatchdog::new(SimulatedIwdg::new());
//! iwdg.init(&WatchdogConfig::default()).expect("Failed to init");
//! iwdg.kick();
//! ```

pub use crate::config::{WatchdogConfig, WatchdogConfigBuilder};
pub use crate::constants::MAX_TIMEOUT_MS;
pub use crate::error::{InvalidArgument, Status, Unsupported, WatchdogError, WatchdogResult};
pub use crate::features::WatchdogFeatures;
pub use crate::iwdg::IndependentWatchdog;
pub use crate::prescaler::{Prescaler, select_prescaler};
pub use crate::registers::RegisterBlock;
pub use crate::sim::{RegisterWrite, SimulatedIwdg};
pub use crate::state::{WatchdogMetrics, WatchdogStatus};
pub use crate::watchdog::Watchdog;
