//! Freestanding support code shared by the formatting engine: digit codecs,
//! byte-string helpers, logging, boot configuration and the in-target test
//! harness.

#![no_std]

pub mod config;
pub mod klog;
pub mod numfmt;
pub mod string;
pub mod testing;

#[doc(hidden)]
pub use paste;

pub use config::BootConfig;
pub use klog::{
    KlogBackend, KlogLevel, klog_clear_backend, klog_get_level, klog_init, klog_is_enabled,
    klog_register_backend, klog_set_level,
};
pub use numfmt::{DigitBuf, FLOAT_SCRATCH, INT_SCRATCH, Radix};
