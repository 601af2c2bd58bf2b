//! # stm32f4-iwdt
//!
//! Independent watchdog (IWDG) driver for STM32F4 microcontrollers.
//!
//! This crate is `#![no_std]` and provides:
//! - `select_prescaler`, mapping a timeout to the smallest fitting divisor
//! - `WatchdogConfig` with ordered validation
//! - `IndependentWatchdog`, which programs the unlock / reload / enable key
//!   sequence and exposes kick, stop and read-back operations
//! - `RegisterBlock`, the seam between driver and peripheral, implemented by
//!   by the `stm32f4` PAC's `IWDG` (feature `stm32f4`) and by `SimulatedIwdg`
//!   for host testing
//!
//! ## Timing
//!
//! The IWDG counts a 40 kHz LSI clock through a `4 << code` prescaler into a
//! 12-bit down-counter. The longest accepted timeout is
//! `(0xFFF / 40) * 256 = 26112` ms.
//!
//! | code | divisor | timeouts (ms) |
//! |------|---------|---------------|
//! | 0    | 4       | 1 – 407       |
//! | 1    | 8       | 408 – 815     |
//! | 2    | 16      | 816 – 1631    |
//! | 3    | 32      | 1632 – 3263   |
//! | 4    | 64      | 3264 – 6527   |
//! | 5    | 128     | 6528 – 13055  |
//! | 6    | 256     | 13056 – 26111 |
//!
//! ## State Machine
//!
//! ```text
//! Uninitialized ──init()──► Armed ◄──init()/kick()──┐
//!                             │                     │
//!                             └─────────────────────┘
//! ```
//!
//! There is no way back: `stop()` always reports `NotSupported`.
//!
//! ## Concurrency
//!
//! Operations are synchronous and never block. The driver owns its register
//! block and mutating calls take `&mut self`; sharing it with interrupt
//! handlers needs caller-supplied mutual exclusion.
//!
//! ## Example
//!
//! ```rust
//! use stm32f4_iwdt::prelude::*;
//!
//! let mut iwdg = IndependentWatchdog::new(SimulatedIwdg::new());
//!
//! let config = WatchdogConfig::builder()
//!     .timeout_ms(500)
//!     .window_ms(0)
//!     .build()
//!     .expect("valid config");
//! iwdg.init(&config).expect("init");
//!
//! iwdg.kick();
//! assert_eq!(iwdg.status(), WatchdogStatus::Armed);
//! assert_eq!(iwdg.stop().map_err(|e| e.status()), Err(Status::NotSupported));
//! ```

#![no_std]
#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(test)]
extern crate alloc;

pub mod config;
pub mod constants;
pub mod error;
pub mod features;
pub mod iwdg;
pub mod prelude;
pub mod prescaler;
pub mod registers;
pub mod sim;
pub mod state;
pub mod watchdog;

pub use config::WatchdogConfig;
pub use constants::MAX_TIMEOUT_MS;
pub use error::{InvalidArgument, Status, Unsupported, WatchdogError, WatchdogResult};
pub use features::WatchdogFeatures;
pub use iwdg::IndependentWatchdog;
pub use prescaler::{Prescaler, select_prescaler};
pub use registers::RegisterBlock;
pub use sim::SimulatedIwdg;
pub use state::{WatchdogMetrics, WatchdogState, WatchdogStatus};
pub use watchdog::Watchdog;
