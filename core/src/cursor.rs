//! Bounded output cursor.
//!
//! [`OutCursor::put`] is the only place in the engine that stores a byte
//! into the caller's buffer. It keeps one byte of capacity back for the
//! terminator and counts every byte offered, stored or not, so the final
//! count is what an unbounded buffer would have needed.

use core::fmt;

/// Result of one formatting call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOutcome {
    /// Bytes the output needs, excluding the terminator.
    pub required: usize,
    /// Bytes actually stored, excluding the terminator.
    pub written: usize,
}

impl FormatOutcome {
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.required > self.written
    }
}

pub struct OutCursor<'a> {
    buf: &'a mut [u8],
    position: usize,
    remaining: usize,
    logical: usize,
}

impl<'a> OutCursor<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        let remaining = buf.len();
        Self {
            buf,
            position: 0,
            remaining,
            logical: 0,
        }
    }

    /// Store `byte` if more than one slot is left; always count it.
    #[inline]
    pub fn put(&mut self, byte: u8) {
        if self.remaining > 1 {
            self.buf[self.position] = byte;
            self.position += 1;
            self.remaining -= 1;
        }
        self.logical += 1;
    }

    pub fn put_repeat(&mut self, byte: u8, count: usize) {
        for _ in 0..count {
            self.put(byte);
        }
    }

    pub fn put_slice(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put(b);
        }
    }

    /// Emit a reverse-order digit run in reading order.
    pub fn put_reversed(&mut self, digits: &[u8]) {
        for &b in digits.iter().rev() {
            self.put(b);
        }
    }

    #[inline]
    pub fn logical_len(&self) -> usize {
        self.logical
    }

    #[inline]
    pub fn written(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Terminate the stored bytes (when any capacity exists) and report.
    pub fn finish(self) -> FormatOutcome {
        if self.remaining > 0 {
            self.buf[self.position] = 0;
        }
        FormatOutcome {
            required: self.logical,
            written: self.position,
        }
    }
}

/// Lets `core::fmt` machinery (klog lines, `write!`) share the same bounded
/// buffer. Never fails; overflow is truncation, as for the engine itself.
impl fmt::Write for OutCursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_slice(s.as_bytes());
        Ok(())
    }
}
