//! Console output.
//!
//! A freestanding runtime has exactly one way to get text out, usually a
//! byte-at-a-time host call or a UART register. The runtime hands that
//! primitive to [`console_register_sink`]; everything printed here, and every
//! klog line once [`console_klog_backend`] is registered, goes through it.
//! Until a sink is registered output is dropped.

use core::fmt::{self, Write};

use bareprintf_lib::klog_warn;
use spin::Mutex;

use crate::args::FormatArg;
use crate::cursor::OutCursor;
use crate::driver::format_into;
use crate::fmt_args;

/// Byte-output primitive supplied by the runtime.
pub type ConsoleSink = fn(&[u8]);

/// Stack buffer size for one `console_printf` call, terminator included.
pub const CONSOLE_LINE_MAX: usize = 256;

static SINK: Mutex<Option<ConsoleSink>> = Mutex::new(None);

pub fn console_register_sink(sink: ConsoleSink) {
    *SINK.lock() = Some(sink);
}

pub fn console_unregister_sink() {
    *SINK.lock() = None;
}

/// Send raw bytes to the sink. Concurrent writes are serialized.
pub fn console_write(bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    let sink = SINK.lock();
    if let Some(sink) = *sink {
        sink(bytes);
    }
}

/// Format into a [`CONSOLE_LINE_MAX`] stack buffer and write what fits.
///
/// Returns the length the full output would have had.
pub fn console_printf(template: &[u8], args: &[FormatArg<'_>]) -> usize {
    let mut line = [0u8; CONSOLE_LINE_MAX];
    let outcome = format_into(&mut line, template, args);
    console_write(&line[..outcome.written]);
    // Logged after the sink lock is released; klog may write to the console.
    if outcome.is_truncated() {
        klog_warn!(
            "console: line truncated, {} of {} bytes written",
            outcome.written,
            outcome.required
        );
    }
    outcome.required
}

/// Print `value` as `0x` and 8 hex digits, or 16 when it does not fit in
/// 32 bits, followed by a newline.
pub fn console_print_hex(value: u64) {
    if value <= u32::MAX as u64 {
        console_printf(b"0x%08x\n", &fmt_args![value as u32]);
    } else {
        console_printf(b"0x%016llx\n", &fmt_args![value]);
    }
}

/// klog backend that writes each line, newline included, in a single sink
/// call. Lines longer than [`CONSOLE_LINE_MAX`] are cut.
pub fn console_klog_backend(args: fmt::Arguments<'_>) {
    let mut line = [0u8; CONSOLE_LINE_MAX];
    let mut out = OutCursor::new(&mut line[..CONSOLE_LINE_MAX - 1]);
    let _ = out.write_fmt(args);
    let len = out.finish().written;
    line[len] = b'\n';
    console_write(&line[..=len]);
}
