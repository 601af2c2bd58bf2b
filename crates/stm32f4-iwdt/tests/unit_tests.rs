//! Unit tests for the independent watchdog driver.

#![cfg(test)]

use stm32f4_iwdt::constants::{KEY_ENABLE, KEY_RELOAD, KEY_UNLOCK};
use stm32f4_iwdt::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn watchdog() -> IndependentWatchdog<SimulatedIwdg> {
    IndependentWatchdog::new(SimulatedIwdg::new())
}

mod prescaler_selection {
    use super::*;

    #[test]
    fn test_2000ms_selects_divisor_32() {
        assert_eq!(select_prescaler(2000), Some(Prescaler::DIV32));
        assert_eq!(Prescaler::DIV32.divisor(), 32);
    }

    #[test]
    fn test_each_scale_upper_edge() {
        let edges = [
            (407, Prescaler::DIV4),
            (815, Prescaler::DIV8),
            (1631, Prescaler::DIV16),
            (3263, Prescaler::DIV32),
            (6527, Prescaler::DIV64),
            (13_055, Prescaler::DIV128),
            (26_111, Prescaler::DIV256),
        ];
        for (timeout_ms, expected) in edges {
            assert_eq!(select_prescaler(timeout_ms), Some(expected), "{timeout_ms}ms");
        }
    }

    #[test]
    fn test_divisor_512_never_selected() {
        for timeout_ms in [0, 1, 13_056, 20_000, 26_111, MAX_TIMEOUT_MS] {
            assert_ne!(select_prescaler(timeout_ms), Some(Prescaler::DIV512));
        }
    }

    #[test]
    fn test_not_found_is_distinct_from_scale_zero() {
        assert_eq!(select_prescaler(1), Some(Prescaler::DIV4));
        assert_eq!(select_prescaler(MAX_TIMEOUT_MS), None);
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_absent_config() {
        let mut iwdg = watchdog();
        let result = iwdg.init(None);
        assert_eq!(Status::from(&result), Status::InvalidArgument);
    }

    #[test]
    fn test_zero_timeout() {
        let mut iwdg = watchdog();
        assert_eq!(
            iwdg.init(&WatchdogConfig::new(0)),
            Err(WatchdogError::InvalidArgument(InvalidArgument::ZeroTimeout))
        );
    }

    #[test]
    fn test_timeout_one_past_maximum() {
        let mut iwdg = watchdog();
        assert_eq!(
            iwdg.init(&WatchdogConfig::new(MAX_TIMEOUT_MS + 1)),
            Err(WatchdogError::InvalidArgument(
                InvalidArgument::TimeoutTooLong {
                    timeout_ms: MAX_TIMEOUT_MS + 1,
                    max_ms: MAX_TIMEOUT_MS,
                }
            ))
        );
    }

    #[test]
    fn test_timeout_at_maximum_has_no_prescaler() {
        let mut iwdg = watchdog();
        assert_eq!(
            iwdg.init(&WatchdogConfig::new(MAX_TIMEOUT_MS)),
            Err(WatchdogError::InvalidArgument(
                InvalidArgument::NoPrescaler {
                    timeout_ms: MAX_TIMEOUT_MS
                }
            ))
        );
    }

    #[test]
    fn test_window_above_maximum() {
        let mut iwdg = watchdog();
        let config = WatchdogConfig {
            timeout_ms: 1000,
            window_ms: MAX_TIMEOUT_MS + 1,
            enable_sleep: true,
        };
        assert!(matches!(
            iwdg.init(&config),
            Err(WatchdogError::InvalidArgument(
                InvalidArgument::WindowTooLong { .. }
            ))
        ));
    }

    #[test]
    fn test_window_above_timeout() {
        let mut iwdg = watchdog();
        let config = WatchdogConfig {
            timeout_ms: 1000,
            window_ms: 1001,
            enable_sleep: true,
        };
        assert_eq!(
            iwdg.init(&config),
            Err(WatchdogError::InvalidArgument(
                InvalidArgument::WindowExceedsTimeout {
                    window_ms: 1001,
                    timeout_ms: 1000,
                }
            ))
        );
    }

    #[test]
    fn test_window_equal_to_timeout_is_accepted() {
        let mut iwdg = watchdog();
        let config = WatchdogConfig {
            timeout_ms: 1000,
            window_ms: 1000,
            enable_sleep: true,
        };
        assert_eq!(iwdg.init(&config), Ok(()));
    }

    #[test]
    fn test_sleep_pause_not_supported() {
        let mut iwdg = watchdog();
        let config = WatchdogConfig {
            enable_sleep: false,
            ..WatchdogConfig::new(1000)
        };
        let result = iwdg.init(&config);
        assert_eq!(Status::from(&result), Status::NotSupported);
    }
}

mod programming {
    use super::*;

    #[test]
    fn test_register_sequence() -> TestResult {
        let mut iwdg = watchdog();
        iwdg.init(&WatchdogConfig::new(10_000))?;

        let expected = [
            RegisterWrite::Key(KEY_UNLOCK),
            RegisterWrite::Reload(3125),
            RegisterWrite::Prescaler(5),
            RegisterWrite::Key(KEY_RELOAD),
            RegisterWrite::Key(KEY_ENABLE),
        ];
        assert!(iwdg.registers().history().copied().eq(expected));
        assert_eq!(iwdg.registers().ignored_writes(), 0);
        Ok(())
    }

    #[test]
    fn test_init_twice_same_registers() -> TestResult {
        let config = WatchdogConfig::new(5000);

        let mut once = watchdog();
        once.init(&config)?;

        let mut twice = watchdog();
        twice.init(&config)?;
        twice.init(&config)?;

        assert_eq!(once.registers().reload(), twice.registers().reload());
        assert_eq!(once.registers().prescaler(), twice.registers().prescaler());
        assert_eq!(twice.status(), WatchdogStatus::Armed);
        Ok(())
    }

    #[test]
    fn test_kick_before_init_still_writes() {
        let mut iwdg = watchdog();
        iwdg.kick();
        assert_eq!(
            iwdg.registers().last_write(),
            Some(RegisterWrite::Key(KEY_RELOAD))
        );
        assert_eq!(iwdg.status(), WatchdogStatus::Uninitialized);
    }

    #[test]
    fn test_free_returns_registers() -> TestResult {
        let mut iwdg = watchdog();
        iwdg.init(&WatchdogConfig::new(300))?;
        let registers = iwdg.free();
        assert!(registers.is_running());
        assert_eq!(registers.reload(), 3000);
        Ok(())
    }

    #[test]
    fn test_borrowed_register_block() -> TestResult {
        let mut sim = SimulatedIwdg::new();
        {
            let mut iwdg = IndependentWatchdog::new(&mut sim);
            iwdg.init(&WatchdogConfig::new(700))?;
        }
        assert_eq!(sim.prescaler(), Prescaler::DIV8.bits());
        assert_eq!(sim.reload(), 3500);
        Ok(())
    }
}

mod queries {
    use super::*;

    #[test]
    fn test_stop_before_and_after_init() -> TestResult {
        let mut iwdg = watchdog();
        assert_eq!(
            iwdg.stop(),
            Err(WatchdogError::NotSupported(Unsupported::Stop))
        );
        iwdg.init(&WatchdogConfig::new(1000))?;
        assert_eq!(
            iwdg.stop(),
            Err(WatchdogError::NotSupported(Unsupported::Stop))
        );
        Ok(())
    }

    #[test]
    fn test_features_constant() -> TestResult {
        let mut iwdg = watchdog();
        let before = iwdg.features();
        iwdg.init(&WatchdogConfig::new(1000))?;
        assert_eq!(iwdg.features(), before);
        assert_eq!(before.max_timeout, MAX_TIMEOUT_MS);
        assert!(!before.disable_watchdog);
        Ok(())
    }

    #[test]
    fn test_reload_value_before_init_reflects_reset_state() {
        let iwdg = watchdog();
        // RLR = 0xFFF, PR = 0: (4095 / 40) * 4
        assert_eq!(iwdg.reload_value_ms(), 408);
    }

    #[test]
    fn test_metrics_track_operations() -> TestResult {
        let mut iwdg = watchdog();
        iwdg.init(&WatchdogConfig::new(1000))?;
        assert_eq!(
            Status::from(&iwdg.init(&WatchdogConfig::new(0))),
            Status::InvalidArgument
        );
        iwdg.kick();
        iwdg.kick();

        let metrics = iwdg.metrics();
        assert_eq!(metrics.init_count, 1);
        assert_eq!(metrics.rejected_count, 1);
        assert_eq!(metrics.kick_count, 2);
        Ok(())
    }
}
