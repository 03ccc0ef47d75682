//! In-target test harness.
//!
//! `cargo test` is not available on the boards this library ships to, so the
//! formatting suites are also compiled into the firmware and run at boot when
//! `fmtests=on` is present on the command line. Test functions return a
//! [`TestResult`] instead of panicking; the assertion macros log the mismatch
//! through klog and return early.

pub mod config;
pub mod harness;
mod runner;

mod assertions;
pub use config::{TestConfig, Verbosity, config_from_cmdline};
pub use harness::{
    HARNESS_MAX_SUITES, SuiteRunnerFn, TestRunSummary, TestSuiteDesc, TestSuiteResult,
};
pub use runner::run_single_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skipped,
}

impl TestResult {
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail)
    }

    #[inline]
    pub fn to_c_int(self) -> i32 {
        match self {
            Self::Pass | Self::Skipped => 0,
            Self::Fail => -1,
        }
    }
}

#[macro_export]
macro_rules! pass {
    () => {
        $crate::testing::TestResult::Pass
    };
}

#[macro_export]
macro_rules! fail {
    () => {
        $crate::testing::TestResult::Fail
    };
    ($msg:expr) => {{
        $crate::klog_info!("TEST FAIL: {}", $msg);
        $crate::testing::TestResult::Fail
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        $crate::klog_info!(concat!("TEST FAIL: ", $fmt), $($arg)*);
        $crate::testing::TestResult::Fail
    }};
}

#[macro_export]
macro_rules! run_test {
    ($config:expr, $passed:expr, $total:expr, $test_fn:expr) => {{
        $total += 1;
        let result =
            $crate::testing::run_single_test($config, stringify!($test_fn), || $test_fn());
        if !result.is_failure() {
            $passed += 1;
        }
        result
    }};

    ($config:expr, $test_fn:expr) => {{
        $crate::testing::run_single_test($config, stringify!($test_fn), || $test_fn())
    }};
}

/// Declare a suite: a runner function plus a `<NAME>_SUITE_DESC` static that
/// callers collect into the list handed to the suite driver.
#[macro_export]
macro_rules! define_test_suite {
    ($suite_name:ident, [$($test_fn:path),* $(,)?]) => {
        $crate::paste::paste! {
            fn [<run_ $suite_name _suite>](
                config: &$crate::testing::TestConfig,
            ) -> $crate::testing::TestSuiteResult {
                let mut passed = 0u32;
                let mut total = 0u32;

                $(
                    $crate::run_test!(config, passed, total, $test_fn);
                )*

                let mut result = $crate::testing::TestSuiteResult::new(stringify!($suite_name));
                result.fill(passed, total);
                result
            }

            pub static [<$suite_name:upper _SUITE_DESC>]: $crate::testing::TestSuiteDesc =
                $crate::testing::TestSuiteDesc {
                    name: stringify!($suite_name),
                    run: [<run_ $suite_name _suite>],
                };
        }
    };
}
