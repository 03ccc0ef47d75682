//! Bounded `printf`-family formatting for freestanding targets.
//!
//! [`format_into`] is the engine: it never allocates, never fails, and always
//! reports the length an unbounded buffer would have needed. Arguments arrive
//! as a typed [`FormatArg`] slice built with [`fmt_args!`]. [`check_args`]
//! validates a template against its arguments ahead of time, the console
//! module wires output to the runtime's byte sink, and with the `alloc`
//! feature [`format`] returns an owned buffer.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod args;
pub mod check;
pub mod console;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod field;
#[cfg(feature = "alloc")]
pub mod owned;
pub mod spec;

pub use args::{ArgKind, FormatArg};
pub use check::{check_args, format_into_checked};
pub use console::{
    CONSOLE_LINE_MAX, ConsoleSink, console_klog_backend, console_print_hex, console_printf,
    console_register_sink, console_unregister_sink, console_write,
};
pub use cursor::FormatOutcome;
pub use driver::format_into;
pub use error::{FmtError, FmtResult};
#[cfg(feature = "alloc")]
pub use owned::format;
