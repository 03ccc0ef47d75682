//! Heap-backed formatting for targets that have an allocator.

use alloc::vec;
use alloc::vec::Vec;

use crate::args::FormatArg;
use crate::driver::format_into;

/// Format into a freshly allocated buffer sized by a probe pass. The
/// returned bytes carry no terminator.
pub fn format(template: &[u8], args: &[FormatArg<'_>]) -> Vec<u8> {
    let required = format_into(&mut [0u8; 0], template, args).required;
    let mut out = vec![0u8; required + 1];
    let written = format_into(&mut out, template, args).written;
    out.truncate(written);
    out
}
