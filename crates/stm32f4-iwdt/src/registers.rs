//! Register block abstraction for the IWDG.
//!
//! The controller only ever touches the peripheral through [`RegisterBlock`],
//! so it can drive the peripheral access crate's `IWDG` (behind the `stm32f4`
//! feature) or the host-side [`SimulatedIwdg`](crate::sim::SimulatedIwdg).

/// Access to the IWDG key, prescaler and reload registers.
///
/// Writes take `&mut self`: whoever holds the block has exclusive access to
/// the peripheral. Implementations must not block and must not fail.
pub trait RegisterBlock {
    /// Write a value to the key register (`KR`).
    fn write_key(&mut self, key: u16);

    /// Write the reload register (`RLR`). Only the low 12 bits are kept.
    ///
    /// Ignored by hardware unless preceded by an unlock key write.
    fn write_reload(&mut self, reload: u16);

    /// Write the prescaler register (`PR`). Only the low 3 bits are kept.
    ///
    /// Ignored by hardware unless preceded by an unlock key write.
    fn write_prescaler(&mut self, bits: u8);

    /// Read the reload register.
    fn reload(&self) -> u16;

    /// Read the prescaler register.
    fn prescaler(&self) -> u8;
}

impl<R: RegisterBlock + ?Sized> RegisterBlock for &mut R {
    fn write_key(&mut self, key: u16) {
        (**self).write_key(key);
    }

    fn write_reload(&mut self, reload: u16) {
        (**self).write_reload(reload);
    }

    fn write_prescaler(&mut self, bits: u8) {
        (**self).write_prescaler(bits);
    }

    fn reload(&self) -> u16 {
        (**self).reload()
    }

    fn prescaler(&self) -> u8 {
        (**self).prescaler()
    }
}

/// Register access through the `stm32f4` peripheral access crate.
///
/// `KR` only accepts the three documented keys, so any other value passed to
/// `write_key` is not forwarded. `PR` codes 6 and 7 both divide by 256 on
/// this part and are written as code 6.
#[cfg(feature = "stm32f4")]
mod pac {
    use stm32f4::stm32f407::IWDG;

    use super::RegisterBlock;
    use crate::constants::{KEY_ENABLE, KEY_RELOAD, KEY_UNLOCK, PR_MASK, RLR_MASK};

    /// Key register command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) enum KeyCommand {
        Unlock,
        Reload,
        Start,
    }

    impl KeyCommand {
        pub(super) const fn from_key(key: u16) -> Option<Self> {
            match key {
                KEY_UNLOCK => Some(Self::Unlock),
                KEY_RELOAD => Some(Self::Reload),
                KEY_ENABLE => Some(Self::Start),
                _ => None,
            }
        }
    }

    impl RegisterBlock for IWDG {
        fn write_key(&mut self, key: u16) {
            match KeyCommand::from_key(key) {
                Some(KeyCommand::Unlock) => self.kr.write(|w| w.key().enable()),
                Some(KeyCommand::Reload) => self.kr.write(|w| w.key().reset()),
                Some(KeyCommand::Start) => self.kr.write(|w| w.key().start()),
                None => {}
            }
        }

        fn write_reload(&mut self, reload: u16) {
            self.rlr.write(|w| w.rl().bits(reload & RLR_MASK));
        }

        fn write_prescaler(&mut self, bits: u8) {
            self.pr.write(|w| match bits & PR_MASK {
                0 => w.pr().divide_by4(),
                1 => w.pr().divide_by8(),
                2 => w.pr().divide_by16(),
                3 => w.pr().divide_by32(),
                4 => w.pr().divide_by64(),
                5 => w.pr().divide_by128(),
                _ => w.pr().divide_by256(),
            });
        }

        fn reload(&self) -> u16 {
            self.rlr.read().rl().bits()
        }

        fn prescaler(&self) -> u8 {
            self.pr.read().pr().bits()
        }
    }
}
