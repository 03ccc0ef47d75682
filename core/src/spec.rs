//! Conversion specifications and the template scanner.
//!
//! A template is split into literal runs and `%` conversions. Each
//! conversion is parsed left to right in a fixed order:
//!
//! ```text
//! % FLAGS* WIDTH? ('.' PRECISION?)? LENGTH? CONVERSION
//! ```
//!
//! Nothing here consumes arguments; `*` width and precision are recorded as
//! [`Width::FromArg`] / [`Precision::FromArg`] and resolved by the driver.
//! The template ends at its first NUL byte or at the end of the slice.

use bareprintf_lib::string::cstr_bytes;
use bitflags::bitflags;

bitflags! {
    /// Flag characters between `%` and the width.
    ///
    /// Each may appear any number of times in any order; repeats are no-ops.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct FormatFlags: u8 {
        /// `0`: pad numbers with zeros up to the width.
        const ZERO_PAD     = 1 << 0;
        /// `-`: pad on the right instead of the left.
        const LEFT_JUSTIFY = 1 << 1;
        /// `+`: always print a sign on signed conversions.
        const FORCE_SIGN   = 1 << 2;
        /// ` `: print a space where a `+` would go.
        const SPACE_SIGN   = 1 << 3;
    }
}

impl FormatFlags {
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'0' => Some(Self::ZERO_PAD),
            b'-' => Some(Self::LEFT_JUSTIFY),
            b'+' => Some(Self::FORCE_SIGN),
            b' ' => Some(Self::SPACE_SIGN),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    Fixed(u32),
    FromArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    Unspecified,
    Fixed(u32),
    FromArg,
}

/// Integer argument width selected by `l` / `ll`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LengthMod {
    /// 32-bit `int`.
    #[default]
    Native,
    /// C `long`: the target's `c_long`.
    Long,
    /// 64-bit `long long`.
    LongLong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    /// `d`, `i`
    SignedDecimal,
    /// `u`
    UnsignedDecimal,
    /// `x`
    Hex,
    /// `s`
    Str,
    /// `c`
    Char,
    /// `p`
    Pointer,
    /// `n`
    WriteCount,
    /// `m`: no errno exists here, prints nothing.
    Errno,
    /// `%%`
    Percent,
    /// `f`
    Float,
    /// Any other byte; discarded.
    Unknown(u8),
    /// The template ended inside the conversion.
    Truncated,
}

impl Conversion {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'd' | b'i' => Self::SignedDecimal,
            b'u' => Self::UnsignedDecimal,
            b'x' => Self::Hex,
            b's' => Self::Str,
            b'c' => Self::Char,
            b'p' => Self::Pointer,
            b'n' => Self::WriteCount,
            b'm' => Self::Errno,
            b'%' => Self::Percent,
            b'f' => Self::Float,
            other => Self::Unknown(other),
        }
    }

    /// The template byte this conversion was parsed from (`0` if truncated).
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::SignedDecimal => b'd',
            Self::UnsignedDecimal => b'u',
            Self::Hex => b'x',
            Self::Str => b's',
            Self::Char => b'c',
            Self::Pointer => b'p',
            Self::WriteCount => b'n',
            Self::Errno => b'm',
            Self::Percent => b'%',
            Self::Float => b'f',
            Self::Unknown(byte) => *byte,
            Self::Truncated => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionSpec {
    pub flags: FormatFlags,
    pub width: Width,
    pub precision: Precision,
    pub length: LengthMod,
    pub conversion: Conversion,
}

impl Default for ConversionSpec {
    fn default() -> Self {
        Self {
            flags: FormatFlags::empty(),
            width: Width::Fixed(0),
            precision: Precision::Unspecified,
            length: LengthMod::Native,
            conversion: Conversion::Truncated,
        }
    }
}

/// Parse ASCII digits starting at `pos`. Wraps on overflow.
fn parse_decimal(bytes: &[u8], mut pos: usize) -> (u32, usize) {
    let mut value = 0u32;
    while let Some(&c) = bytes.get(pos) {
        if !c.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add((c - b'0') as u32);
        pos += 1;
    }
    (value, pos)
}

/// Parse one conversion. `pos` indexes the byte after `%`; returns the spec
/// and the index just past it.
pub fn parse_conversion(bytes: &[u8], mut pos: usize) -> (ConversionSpec, usize) {
    let mut spec = ConversionSpec::default();

    while let Some(flag) = bytes.get(pos).copied().and_then(FormatFlags::from_byte) {
        spec.flags |= flag;
        pos += 1;
    }

    if bytes.get(pos) == Some(&b'*') {
        spec.width = Width::FromArg;
        pos += 1;
    } else {
        let (width, next) = parse_decimal(bytes, pos);
        spec.width = Width::Fixed(width);
        pos = next;
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if bytes.get(pos) == Some(&b'*') {
            spec.precision = Precision::FromArg;
            pos += 1;
        } else {
            let (precision, next) = parse_decimal(bytes, pos);
            spec.precision = Precision::Fixed(precision);
            pos = next;
        }
    }

    if bytes.get(pos) == Some(&b'l') {
        spec.length = LengthMod::Long;
        pos += 1;
        if bytes.get(pos) == Some(&b'l') {
            spec.length = LengthMod::LongLong;
            pos += 1;
        }
    }

    spec.conversion = match bytes.get(pos) {
        Some(&byte) => {
            pos += 1;
            Conversion::from_byte(byte)
        }
        None => Conversion::Truncated,
    };

    (spec, pos)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'t> {
    Literal(&'t [u8]),
    Conversion(ConversionSpec),
}

/// Iterator over the literal runs and conversions of a template.
pub struct Scanner<'t> {
    bytes: &'t [u8],
    pos: usize,
}

impl<'t> Scanner<'t> {
    pub fn new(template: &'t [u8]) -> Self {
        Self {
            bytes: cstr_bytes(template),
            pos: 0,
        }
    }
}

impl<'t> Iterator for Scanner<'t> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Segment<'t>> {
        let rest = self.bytes.get(self.pos..)?;
        if rest.is_empty() {
            return None;
        }

        if rest[0] == b'%' {
            let (spec, next) = parse_conversion(self.bytes, self.pos + 1);
            self.pos = next;
            return Some(Segment::Conversion(spec));
        }

        let run = rest.iter().position(|&b| b == b'%').unwrap_or(rest.len());
        self.pos += run;
        Some(Segment::Literal(&rest[..run]))
    }
}
