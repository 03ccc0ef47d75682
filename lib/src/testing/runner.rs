use super::TestResult;
use super::config::{TestConfig, Verbosity};

/// Run one test function and report its outcome through klog.
pub fn run_single_test<F>(config: &TestConfig, name: &str, test: F) -> TestResult
where
    F: FnOnce() -> TestResult,
{
    let result = test();
    match result {
        TestResult::Pass => {
            if config.verbosity == Verbosity::Verbose {
                crate::klog_info!("TEST PASS: {}", name);
            }
        }
        TestResult::Skipped => {
            if config.verbosity != Verbosity::Quiet {
                crate::klog_info!("TEST SKIP: {}", name);
            }
        }
        TestResult::Fail => crate::klog_info!("TEST FAIL: {}", name),
    }
    result
}
