#![no_std]

use bareprintf_core::{FormatArg, format_into};
use bareprintf_lib::{BootConfig, klog_info};

pub use bareprintf_lib::testing::{
    HARNESS_MAX_SUITES, TestConfig, TestRunSummary, TestSuiteDesc, TestSuiteResult, Verbosity,
};

pub mod float_tests;
pub mod format_tests;

pub const TESTS_MAX_SUITES: usize = HARNESS_MAX_SUITES;

/// Scratch size used by the suites; large enough that nothing they format is
/// truncated unless a test asks for it.
pub(crate) const RENDER_MAX: usize = 256;

pub static ALL_SUITES: [&TestSuiteDesc; 3] = [
    &format_tests::FORMAT_SUITE_DESC,
    &float_tests::FLOAT_SUITE_DESC,
    &bounds_tests::BOUNDS_SUITE_DESC,
];

/// Format into `buf` and return the stored bytes.
pub(crate) fn render<'b>(
    buf: &'b mut [u8; RENDER_MAX],
    template: &[u8],
    args: &[FormatArg<'_>],
) -> &'b [u8] {
    let outcome = format_into(buf, template, args);
    &buf[..outcome.written]
}

pub fn tests_run_all(
    config: &TestConfig,
    suites: &[&TestSuiteDesc],
    summary: &mut TestRunSummary,
) -> i32 {
    *summary = TestRunSummary::default();

    if !config.enabled {
        klog_info!("TESTS: Harness disabled");
        return 0;
    }

    klog_info!("TESTS: Starting {} test suites", suites.len());

    for (idx, desc) in suites.iter().enumerate() {
        let res = (desc.run)(config);
        klog_info!(
            "SUITE{} {} total={} pass={} fail={}",
            idx as u32,
            res.name,
            res.total,
            res.passed,
            res.failed,
        );
        summary.add_suite_result(&res);
    }

    klog_info!(
        "TESTS SUMMARY: total={} passed={} failed={}",
        summary.total_tests,
        summary.passed,
        summary.failed,
    );

    if summary.failed == 0 { 0 } else { -1 }
}

/// Boot entry: apply the command line, then run every suite if `fmtests` is
/// enabled. Returns 0 when nothing failed.
pub fn tests_run_from_cmdline(cmdline: Option<&str>) -> i32 {
    let boot = BootConfig::from_cmdline(cmdline);
    boot.apply();
    let mut summary = TestRunSummary::default();
    tests_run_all(&boot.tests, &ALL_SUITES, &mut summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_suites_pass() {
        let config = TestConfig::enabled(Verbosity::Verbose);
        let mut summary = TestRunSummary::default();
        let rc = tests_run_all(&config, &ALL_SUITES, &mut summary);

        for suite in summary.suites() {
            assert!(suite.all_passed(), "suite {} had failures", suite.name);
        }
        assert_eq!(rc, 0);
        assert_eq!(summary.suites().len(), ALL_SUITES.len());
        assert!(summary.total_tests > 0);
        assert_eq!(summary.passed, summary.total_tests);
    }

    #[test]
    fn test_disabled_harness_runs_nothing() {
        let mut summary = TestRunSummary::default();
        let rc = tests_run_all(&TestConfig::default(), &ALL_SUITES, &mut summary);
        assert_eq!(rc, 0);
        assert_eq!(summary.total_tests, 0);

        assert_eq!(tests_run_from_cmdline(Some("loglevel=info fmtests=off")), 0);
        assert_eq!(tests_run_from_cmdline(None), 0);
    }

    #[test]
    fn test_cmdline_enables_suites() {
        assert_eq!(
            tests_run_from_cmdline(Some("fmtests=on fmtests.verbosity=quiet")),
            0
        );
    }
}
