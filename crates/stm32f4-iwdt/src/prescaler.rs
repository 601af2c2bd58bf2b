//! Prescaler scale codes and the timeout-to-prescaler selector.
//!
//! The IWDG divides the LSI clock by `4 << code` before it reaches the
//! 12-bit down-counter. Larger divisors reach longer timeouts at coarser
//! resolution, so the selector picks the smallest divisor that still fits.

use crate::constants::{MAX_TIMEOUT, MAX_TIMEOUT_MS, PR_MASK, RLR_MASK, TICKS_PER_MS};

/// Number of scale codes the selector considers (codes `0..7`).
///
/// Code 7 (divisor 512) is representable in the register but never selected.
pub const SELECTABLE_SCALES: u8 = 7;

/// A 3-bit IWDG prescaler code.
///
/// The wrapped value is always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Prescaler(u8);

impl Prescaler {
    /// Divide by 4.
    pub const DIV4: Self = Self(0);
    /// Divide by 8.
    pub const DIV8: Self = Self(1);
    /// Divide by 16.
    pub const DIV16: Self = Self(2);
    /// Divide by 32.
    pub const DIV32: Self = Self(3);
    /// Divide by 64.
    pub const DIV64: Self = Self(4);
    /// Divide by 128.
    pub const DIV128: Self = Self(5);
    /// Divide by 256.
    pub const DIV256: Self = Self(6);
    /// Divide by 512. Only reachable by reading back a register.
    pub const DIV512: Self = Self(7);

    /// Build a prescaler from raw register bits, keeping the low three.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & PR_MASK)
    }

    /// Raw scale code as written to `PR`.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Clock divisor, `4 << code`.
    #[must_use]
    pub const fn divisor(self) -> u32 {
        4 << self.0
    }

    /// Longest timeout (exclusive) this prescaler can represent, in ms.
    #[must_use]
    pub const fn max_timeout_ms(self) -> u32 {
        (MAX_TIMEOUT / TICKS_PER_MS) * self.divisor()
    }

    /// Reload value in counter ticks for `timeout_ms`.
    ///
    /// Returns `None` if the value does not fit the 12-bit reload register.
    #[must_use]
    pub const fn reload_for(self, timeout_ms: u32) -> Option<u16> {
        let Some(ticks) = TICKS_PER_MS.checked_mul(timeout_ms) else {
            return None;
        };
        let reload = ticks / self.divisor();
        if reload > RLR_MASK as u32 {
            None
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "reload is bounded by RLR_MASK above"
            )]
            let reload = reload as u16;
            Some(reload)
        }
    }

    /// Millisecond timeout equivalent of a reload register value.
    ///
    /// Divides by `TICKS_PER_MS` before multiplying, matching how the value
    /// is reported back by the driver. The result is at most the timeout that
    /// produced `reload` and short of it by less than one divisor.
    #[must_use]
    pub const fn timeout_ms_for(self, reload: u16) -> u32 {
        ((reload & RLR_MASK) as u32 / TICKS_PER_MS) * self.divisor()
    }
}

impl From<u8> for Prescaler {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Prescaler> for u8 {
    fn from(prescaler: Prescaler) -> Self {
        prescaler.bits()
    }
}

impl core::fmt::Display for Prescaler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "/{}", self.divisor())
    }
}

/// Pick the smallest prescaler whose range strictly exceeds `timeout_ms`.
///
/// Returns `None` when no selectable prescaler fits, including the exact
/// global maximum [`MAX_TIMEOUT_MS`] since the comparison is strict.
#[must_use]
pub const fn select_prescaler(timeout_ms: u32) -> Option<Prescaler> {
    if timeout_ms > MAX_TIMEOUT_MS {
        return None;
    }

    let mut scale = 0;
    while scale < SELECTABLE_SCALES {
        let prescaler = Prescaler(scale);
        if timeout_ms < prescaler.max_timeout_ms() {
            return Some(prescaler);
        }
        scale += 1;
    }

    None
}
