//! Simulated IWDG register block.
//!
//! `SimulatedIwdg` implements [`RegisterBlock`] in memory and emulates the
//! parts of the peripheral the driver relies on:
//!
//! - `PR`/`RLR` writes only land after the unlock key; any other key relocks.
//! - The reload key copies `RLR` into the down-counter.
//! - The enable key starts the counter; nothing stops it again.
//! - [`advance_ms`](SimulatedIwdg::advance_ms) feeds LSI ticks through the
//!   prescaler and latches expiry when the counter reaches zero.
//!
//! Every register write is recorded in a bounded history for inspection.

use heapless::HistoryBuffer;

use crate::constants::{
    KEY_ENABLE, KEY_RELOAD, KEY_UNLOCK, MAX_TIMEOUT, PR_MASK, RLR_MASK, TICKS_PER_MS,
};
use crate::prescaler::Prescaler;
use crate::registers::RegisterBlock;

/// Number of register writes retained by the history.
pub const HISTORY_LEN: usize = 32;

/// A single register write seen by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterWrite {
    /// Value written to `KR`.
    Key(u16),
    /// Value written to `RLR`, as given by the caller.
    Reload(u16),
    /// Value written to `PR`, as given by the caller.
    Prescaler(u8),
}

/// In-memory IWDG with countdown emulation.
#[derive(Debug, Clone)]
pub struct SimulatedIwdg {
    prescaler: u8,
    reload: u16,
    counter: u16,
    unlocked: bool,
    running: bool,
    expired: bool,
    /// LSI ticks not yet worth a full prescaled decrement.
    pending_ticks: u64,
    ignored_writes: u32,
    history: HistoryBuffer<RegisterWrite, HISTORY_LEN>,
}

impl SimulatedIwdg {
    /// A peripheral in its reset state: stopped, locked, `PR = 0`,
    /// `RLR = 0xFFF`.
    #[must_use]
    pub fn new() -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "MAX_TIMEOUT is the 12-bit counter width"
        )]
        let reset_reload = MAX_TIMEOUT as u16;
        Self {
            prescaler: 0,
            reload: reset_reload,
            counter: reset_reload,
            unlocked: false,
            running: false,
            expired: false,
            pending_ticks: 0,
            ignored_writes: 0,
            history: HistoryBuffer::new(),
        }
    }

    /// Current down-counter value.
    #[must_use]
    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// Whether the enable key has been written.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether `PR`/`RLR` currently accept writes.
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Whether the counter has reached zero, which on hardware resets the
    /// system. Latched until the simulator is dropped.
    #[must_use]
    pub fn has_expired(&self) -> bool {
        self.expired
    }

    /// `PR`/`RLR` writes dropped because the registers were locked.
    #[must_use]
    pub fn ignored_writes(&self) -> u32 {
        self.ignored_writes
    }

    /// Retained register writes, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &RegisterWrite> {
        self.history.oldest_ordered()
    }

    /// Most recent register write.
    #[must_use]
    pub fn last_write(&self) -> Option<RegisterWrite> {
        self.history.recent().copied()
    }

    /// Forget the recorded writes.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Let `ms` milliseconds of LSI clock elapse.
    ///
    /// No effect until the watchdog runs.
    pub fn advance_ms(&mut self, ms: u32) {
        self.advance_ticks(u64::from(ms) * u64::from(TICKS_PER_MS));
    }

    /// Let `ticks` raw LSI ticks elapse.
    pub fn advance_ticks(&mut self, ticks: u64) {
        if !self.running || self.expired {
            return;
        }

        let divisor = u64::from(Prescaler::from_bits(self.prescaler).divisor());
        let total = self.pending_ticks.saturating_add(ticks);
        let decrements = total / divisor;
        self.pending_ticks = total % divisor;

        if decrements >= u64::from(self.counter) {
            self.counter = 0;
            self.expired = true;
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "decrements is below the current 16-bit counter"
            )]
            let decrements = decrements as u16;
            self.counter -= decrements;
        }
    }
}

impl Default for SimulatedIwdg {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBlock for SimulatedIwdg {
    fn write_key(&mut self, key: u16) {
        self.history.write(RegisterWrite::Key(key));
        match key {
            KEY_UNLOCK => {
                self.unlocked = true;
                return;
            }
            KEY_RELOAD => {
                self.counter = self.reload;
                self.pending_ticks = 0;
            }
            KEY_ENABLE => self.running = true,
            _ => {}
        }
        self.unlocked = false;
    }

    fn write_reload(&mut self, reload: u16) {
        self.history.write(RegisterWrite::Reload(reload));
        if self.unlocked {
            self.reload = reload & RLR_MASK;
        } else {
            self.ignored_writes = self.ignored_writes.saturating_add(1);
        }
    }

    fn write_prescaler(&mut self, bits: u8) {
        self.history.write(RegisterWrite::Prescaler(bits));
        if self.unlocked {
            self.prescaler = bits & PR_MASK;
        } else {
            self.ignored_writes = self.ignored_writes.saturating_add(1);
        }
    }

    fn reload(&self) -> u16 {
        self.reload
    }

    fn prescaler(&self) -> u8 {
        self.prescaler
    }
}
