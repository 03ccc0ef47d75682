//! Stack-only digit codecs for `no_std` contexts.
//!
//! Every encoder writes into a caller-provided `&mut [u8]` and returns the
//! number of bytes written. Digits are stored in **reverse order**: the
//! least-significant digit lands at index 0 and the run grows towards the end
//! of the slice. The field formatter walks the run backwards, so padding and
//! prefixes never have to shift bytes around. No heap, no allocator, no float
//! library.
//!
//! # Typed wrapper
//!
//! [`DigitBuf`] bundles a correctly-sized scratch array with its length:
//!
//! ```ignore
//! let mut digits = DigitBuf::<INT_SCRATCH>::new();
//! digits.encode_u32(0xbeef, Radix::Hex);   // digits() == b"feeb"
//! let forward: [u8; 4] = ...;              // reversed() yields b"beef"
//! ```

/// Lowercase digit table shared by both radices.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Scratch size for any integer conversion (`u64::MAX` in octal would need 22).
pub const INT_SCRATCH: usize = 32;

/// Scratch size for a fixed-point conversion: 20 integer digits, the point and
/// [`MAX_FRACTION_DIGITS`] fraction digits, with headroom.
pub const FLOAT_SCRATCH: usize = 64;

/// Largest fraction precision representable exactly in a `u64`.
pub const MAX_FRACTION_DIGITS: u32 = 19;

const POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
}

impl Radix {
    #[inline]
    pub const fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

// ---------------------------------------------------------------------------
// Integer codecs
// ---------------------------------------------------------------------------

/// Encode a `u32` in reverse digit order using 32-bit arithmetic only.
///
/// Zero encodes as the single digit `'0'`. Encoding stops once `buf` is full.
pub fn encode_u32(buf: &mut [u8], value: u32, radix: Radix) -> usize {
    if buf.is_empty() {
        return 0;
    }
    if value == 0 {
        buf[0] = b'0';
        return 1;
    }

    let base = radix.base();
    let mut n = value;
    let mut len = 0;
    while n != 0 && len < buf.len() {
        buf[len] = HEX_DIGITS[(n % base) as usize];
        n /= base;
        len += 1;
    }
    len
}

/// Encode a `u64` in reverse digit order.
///
/// Zero encodes as the single digit `'0'`. Encoding stops once `buf` is full.
pub fn encode_u64(buf: &mut [u8], value: u64, radix: Radix) -> usize {
    if buf.is_empty() {
        return 0;
    }
    if value == 0 {
        buf[0] = b'0';
        return 1;
    }

    let base = radix.base() as u64;
    let mut n = value;
    let mut len = 0;
    while n != 0 && len < buf.len() {
        buf[len] = HEX_DIGITS[(n % base) as usize];
        n /= base;
        len += 1;
    }
    len
}

// ---------------------------------------------------------------------------
// Fixed-point codecs
// ---------------------------------------------------------------------------

/// Encode the fraction digits of a remainder in `[0, 1)` followed by the
/// decimal point, in reverse order.
///
/// `precision` is clamped to [`MAX_FRACTION_DIGITS`]. The remainder is scaled
/// by `10^precision` and truncated, then rounded half up on the next digit.
/// A round-up that would carry into the integer part saturates at
/// `10^precision - 1` instead (`0.9995` at three places gives `.999`).
///
/// Precision 0 writes nothing.
pub fn encode_fraction(buf: &mut [u8], fraction: f64, precision: u32) -> usize {
    let precision = precision.min(MAX_FRACTION_DIGITS);
    if precision == 0 {
        return 0;
    }

    let limit = POW10[precision as usize];
    let scaled = fraction * limit as f64;
    let mut whole = scaled as u64;
    let next_digit = ((scaled - whole as f64) * 10.0) as u64;
    if next_digit >= 5 {
        whole = whole.saturating_add(1);
    }
    if whole >= limit {
        whole = limit - 1;
    }

    let mut len = encode_u64(buf, whole, Radix::Decimal);
    while len < precision as usize && len < buf.len() {
        buf[len] = b'0';
        len += 1;
    }
    if len < buf.len() {
        buf[len] = b'.';
        len += 1;
    }
    len
}

/// Encode a non-negative `f64` as fixed point, in reverse order.
///
/// The fraction run (digits and point) comes first in the buffer, the integer
/// run after it, so reading the buffer backwards yields `int.frac`. With
/// precision 0 the value is truncated and no point is emitted. NaN and
/// infinities are not special-cased; the integer conversion saturates.
pub fn encode_float(buf: &mut [u8], value: f64, precision: u32) -> usize {
    let whole = value as u64;
    let mut len = 0;
    if precision != 0 {
        len = encode_fraction(buf, value - whole as f64, precision);
    }
    len + encode_u64(&mut buf[len..], whole, Radix::Decimal)
}

// ---------------------------------------------------------------------------
// DigitBuf --- typed scratch helper
// ---------------------------------------------------------------------------

/// Stack-allocated reverse-order digit run.
///
/// `N` should cover the largest run expected:
/// - any integer in either radix: [`INT_SCRATCH`]
/// - fixed point at full precision: [`FLOAT_SCRATCH`]
pub struct DigitBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> DigitBuf<N> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The run as stored: least-significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The run in reading order.
    #[inline]
    pub fn reversed(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits().iter().rev().copied()
    }

    /// Append one byte after the current run; it reads as a prefix.
    /// Returns `false` when the scratch is full.
    #[inline]
    pub fn push(&mut self, byte: u8) -> bool {
        if self.len >= N {
            return false;
        }
        self.buf[self.len] = byte;
        self.len += 1;
        true
    }

    pub fn encode_u32(&mut self, value: u32, radix: Radix) -> usize {
        self.len = encode_u32(&mut self.buf, value, radix);
        self.len
    }

    pub fn encode_u64(&mut self, value: u64, radix: Radix) -> usize {
        self.len = encode_u64(&mut self.buf, value, radix);
        self.len
    }

    pub fn encode_float(&mut self, value: f64, precision: u32) -> usize {
        self.len = encode_float(&mut self.buf, value, precision);
        self.len
    }
}

impl<const N: usize> Default for DigitBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}
