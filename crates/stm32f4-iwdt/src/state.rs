//! Watchdog lifecycle state and metrics.
//!
//! The IWDG has two reachable states. Once armed it stays armed until the
//! chip resets, so the only transition is `Uninitialized -> Armed`.

use portable_atomic::{AtomicU32, Ordering};

/// Watchdog lifecycle status.
///
/// ```text
/// Uninitialized ──init()──► Armed ──init()──┐
///                             ▲             │
///                             └─────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum WatchdogStatus {
    /// No successful `init` yet.
    #[default]
    Uninitialized = 0,
    /// Counter is running. Terminal.
    Armed = 1,
}

impl WatchdogStatus {
    /// Convert from raw u32 value.
    #[must_use]
    pub fn from_raw(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Uninitialized),
            1 => Some(Self::Armed),
            _ => None,
        }
    }

    /// Convert to raw u32 value.
    #[must_use]
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    /// Check if the watchdog is in a terminal state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Armed)
    }

    /// Get the status as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "Uninitialized",
            Self::Armed => "Armed",
        }
    }
}

impl core::fmt::Display for WatchdogStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Atomic lifecycle state and operation counters.
///
/// Lock-free, so status and metrics can be read through a shared reference
/// from another context while the owner keeps kicking.
#[derive(Debug)]
pub struct WatchdogState {
    status: AtomicU32,
    init_count: AtomicU32,
    kick_count: AtomicU32,
    rejected_count: AtomicU32,
}

impl WatchdogState {
    /// Create a new state in `Uninitialized`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: AtomicU32::new(WatchdogStatus::Uninitialized as u32),
            init_count: AtomicU32::new(0),
            kick_count: AtomicU32::new(0),
            rejected_count: AtomicU32::new(0),
        }
    }

    /// Get the current status.
    #[must_use]
    pub fn status(&self) -> WatchdogStatus {
        let raw = self.status.load(Ordering::Acquire);
        WatchdogStatus::from_raw(raw).unwrap_or_default()
    }

    /// Record a successful programming sequence and move to `Armed`.
    ///
    /// Returns the status held before the call.
    pub fn arm(&self) -> WatchdogStatus {
        let previous = self
            .status
            .swap(WatchdogStatus::Armed.to_raw(), Ordering::AcqRel);
        self.init_count.fetch_add(1, Ordering::Relaxed);
        WatchdogStatus::from_raw(previous).unwrap_or_default()
    }

    /// Record a kick.
    pub fn record_kick(&self) {
        self.kick_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a configuration rejected by `init`.
    pub fn record_rejection(&self) {
        self.rejected_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of the counters.
    #[must_use]
    pub fn metrics(&self) -> WatchdogMetrics {
        WatchdogMetrics {
            init_count: self.init_count.load(Ordering::Acquire),
            kick_count: self.kick_count.load(Ordering::Acquire),
            rejected_count: self.rejected_count.load(Ordering::Acquire),
        }
    }
}

impl Default for WatchdogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters of watchdog operations. Wrap on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatchdogMetrics {
    /// Successful `init` calls.
    pub init_count: u32,
    /// `kick` calls, armed or not.
    pub kick_count: u32,
    /// `init` calls rejected by validation.
    pub rejected_count: u32,
}
