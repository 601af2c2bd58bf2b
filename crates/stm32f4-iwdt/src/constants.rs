//! Fixed clock, counter and register-protocol constants for the STM32F4 IWDG.
//!
//! The key values and masks are part of the hardware contract and must stay
//! bit-exact.

/// Frequency of the low-power oscillator (LSI) feeding the watchdog, in Hz.
pub const LPO_CLOCK_FREQUENCY: u32 = 40_000;

/// Counter decrements per millisecond before prescaling.
pub const TICKS_PER_MS: u32 = LPO_CLOCK_FREQUENCY / 1000;

/// Largest value the 12-bit down-counter can hold.
pub const MAX_TIMEOUT: u32 = 0xFFF;

/// Largest prescaler divisor the selector will choose.
pub const MAX_PRESCALER: u32 = 256;

/// Maximum timeout in milliseconds at the largest selectable divisor.
///
/// Evaluates to `(4095 / 40) * 256 = 26112`; the division truncates first.
pub const MAX_TIMEOUT_MS: u32 = (MAX_TIMEOUT / TICKS_PER_MS) * MAX_PRESCALER;

/// Key register value granting write access to `PR` and `RLR`.
pub const KEY_UNLOCK: u16 = 0x5555;

/// Key register value reloading the counter from `RLR` (the kick).
pub const KEY_RELOAD: u16 = 0xAAAA;

/// Key register value starting the watchdog. Irreversible until reset.
pub const KEY_ENABLE: u16 = 0xCCCC;

/// Width mask of the reload register.
pub const RLR_MASK: u16 = 0xFFF;

/// Width mask of the prescaler register.
pub const PR_MASK: u8 = 0x7;
