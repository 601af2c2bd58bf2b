//! Error types for watchdog configuration and control.
//!
//! Every failure is reported as a value. The two error families map onto the
//! coarse [`Status`] codes used by status-returning callers.

use thiserror::Error;

/// Why a configuration was rejected as an invalid argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidArgument {
    /// No configuration was supplied.
    #[error("no watchdog configuration supplied")]
    MissingConfig,
    /// Timeout of zero milliseconds.
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    /// Timeout exceeds the hardware maximum.
    #[error("timeout {timeout_ms}ms exceeds maximum {max_ms}ms")]
    TimeoutTooLong {
        /// Requested timeout.
        timeout_ms: u32,
        /// Hardware maximum.
        max_ms: u32,
    },
    /// Window exceeds the hardware maximum.
    #[error("window {window_ms}ms exceeds maximum {max_ms}ms")]
    WindowTooLong {
        /// Requested window.
        window_ms: u32,
        /// Hardware maximum.
        max_ms: u32,
    },
    /// Window is longer than the timeout it sits in.
    #[error("window {window_ms}ms exceeds timeout {timeout_ms}ms")]
    WindowExceedsTimeout {
        /// Requested window.
        window_ms: u32,
        /// Requested timeout.
        timeout_ms: u32,
    },
    /// No selectable prescaler represents the timeout.
    #[error("no prescaler can represent a timeout of {timeout_ms}ms")]
    NoPrescaler {
        /// Requested timeout.
        timeout_ms: u32,
    },
}

/// Capabilities this peripheral permanently lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Unsupported {
    /// The counter cannot be paused while the core sleeps.
    #[error("pausing the watchdog during sleep")]
    PauseDuringSleep,
    /// The watchdog cannot be stopped once started.
    #[error("stopping the watchdog")]
    Stop,
}

/// Errors returned by watchdog operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum WatchdogError {
    /// Caller-supplied configuration violates a constraint.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    /// The requested capability is absent from this hardware.
    #[error("not supported: {0}")]
    NotSupported(#[from] Unsupported),
}

impl WatchdogError {
    /// Coarse status code for this error.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidArgument(_) => Status::InvalidArgument,
            Self::NotSupported(_) => Status::NotSupported,
        }
    }
}

/// A specialized `Result` type for watchdog operations.
pub type WatchdogResult<T = ()> = core::result::Result<T, WatchdogError>;

/// Three-valued outcome of a watchdog operation.
///
/// Numeric codes are stable and suitable for status registers or FFI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// Operation completed.
    Ok = 0,
    /// Configuration rejected.
    InvalidArgument = 1,
    /// Capability not available.
    NotSupported = 2,
}

impl Status {
    /// Numeric status code.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether this status reports success.
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl<T> From<&WatchdogResult<T>> for Status {
    fn from(result: &WatchdogResult<T>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => err.status(),
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Ok => "OK",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotSupported => "NOT_SUPPORTED",
        };
        f.write_str(name)
    }
}
