//! Boot command-line configuration.
//!
//! The embedding runtime hands over a whitespace-separated `key=value`
//! command line (or nothing). Recognised keys:
//!
//! | key | values |
//! |---|---|
//! | `loglevel` | `error`, `warn`, `info`, `debug`, `trace` |
//! | `fmtests` | boolean, or any other word to enable |
//! | `fmtests.verbosity` | `quiet`, `summary`, `verbose` |
//!
//! Unknown keys and malformed values are ignored.

use crate::klog::{KlogLevel, klog_set_level};
use crate::testing::TestConfig;

const DEFAULT_LOG_LEVEL: KlogLevel = KlogLevel::Info;

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("on")
        || value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value.eq_ignore_ascii_case("enabled")
        || value == "1"
    {
        Some(true)
    } else if value.eq_ignore_ascii_case("off")
        || value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("no")
        || value.eq_ignore_ascii_case("disabled")
        || value == "0"
    {
        Some(false)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BootConfig {
    pub log_level: KlogLevel,
    pub tests: TestConfig,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            tests: TestConfig::default(),
        }
    }
}

impl BootConfig {
    pub fn from_cmdline(cmdline: Option<&str>) -> Self {
        let mut cfg = Self {
            tests: crate::testing::config_from_cmdline(cmdline),
            ..Self::default()
        };
        if let Some(cmdline) = cmdline {
            for token in cmdline.split_whitespace() {
                if let Some(value) = token.strip_prefix("loglevel=") {
                    if let Some(level) = KlogLevel::from_name(value) {
                        cfg.log_level = level;
                    }
                }
            }
        }
        cfg
    }

    /// Push the settings into the global subsystems.
    pub fn apply(&self) {
        klog_set_level(self.log_level);
    }
}
