//! Typed argument list.
//!
//! C `printf` trusts an untyped variadic cursor. Here the caller passes a
//! slice of [`FormatArg`] values instead, so the driver always knows what it
//! is reading. Integer-like arguments are reinterpreted at the width the
//! length modifier asks for, the same way a C callee would read the register;
//! anything else that does not fit the conversion is skipped.
//!
//! ```ignore
//! let hits = Cell::new(0i32);
//! let args = fmt_args![-3, "imp", 0.5, &hits];
//! format_into(&mut buf, b"%d %s %.1f%n", &args);
//! ```

use core::cell::Cell;
use core::ffi::{c_long, c_ulong};
use core::fmt;

use crate::spec::LengthMod;

#[derive(Clone, Copy, Debug)]
pub enum FormatArg<'a> {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    Char(u8),
    Str(&'a [u8]),
    F64(f64),
    Ptr(usize),
    /// Destination for `%n`.
    Count(&'a Cell<i32>),
}

/// Argument type tag, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    I32,
    I64,
    U32,
    U64,
    Char,
    Str,
    F64,
    Ptr,
    Count,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgKind::I32 => "int",
            ArgKind::I64 => "long long",
            ArgKind::U32 => "unsigned int",
            ArgKind::U64 => "unsigned long long",
            ArgKind::Char => "char",
            ArgKind::Str => "string",
            ArgKind::F64 => "double",
            ArgKind::Ptr => "pointer",
            ArgKind::Count => "int *",
        };
        f.write_str(name)
    }
}

impl<'a> FormatArg<'a> {
    pub fn kind(&self) -> ArgKind {
        match self {
            FormatArg::I32(_) => ArgKind::I32,
            FormatArg::I64(_) => ArgKind::I64,
            FormatArg::U32(_) => ArgKind::U32,
            FormatArg::U64(_) => ArgKind::U64,
            FormatArg::Char(_) => ArgKind::Char,
            FormatArg::Str(_) => ArgKind::Str,
            FormatArg::F64(_) => ArgKind::F64,
            FormatArg::Ptr(_) => ArgKind::Ptr,
            FormatArg::Count(_) => ArgKind::Count,
        }
    }

    /// 64-bit pattern of an integer-like argument: signed values are sign
    /// extended, unsigned ones zero extended.
    pub fn integer_bits(&self) -> Option<u64> {
        match *self {
            FormatArg::I32(v) => Some(v as i64 as u64),
            FormatArg::I64(v) => Some(v as u64),
            FormatArg::U32(v) => Some(v as u64),
            FormatArg::U64(v) => Some(v),
            FormatArg::Char(v) => Some(v as u64),
            FormatArg::Ptr(v) => Some(v as u64),
            _ => None,
        }
    }

    /// Read as a signed integer of the width `length` selects.
    pub fn to_signed(&self, length: LengthMod) -> Option<i64> {
        let bits = self.integer_bits()?;
        Some(match length {
            LengthMod::Native => bits as u32 as i32 as i64,
            LengthMod::Long => bits as c_long as i64,
            LengthMod::LongLong => bits as i64,
        })
    }

    /// Read as an unsigned integer of the width `length` selects.
    pub fn to_unsigned(&self, length: LengthMod) -> Option<u64> {
        let bits = self.integer_bits()?;
        Some(match length {
            LengthMod::Native => bits as u32 as u64,
            LengthMod::Long => bits as c_ulong as u64,
            LengthMod::LongLong => bits,
        })
    }

    /// `%p` takes a pointer or an unsigned integer holding an address.
    pub fn as_pointer(&self) -> Option<usize> {
        match *self {
            FormatArg::Ptr(p) => Some(p),
            FormatArg::U32(v) => Some(v as usize),
            FormatArg::U64(v) => Some(v as usize),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            FormatArg::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            FormatArg::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<&'a Cell<i32>> {
        match *self {
            FormatArg::Count(cell) => Some(cell),
            _ => None,
        }
    }
}

// C default argument promotions: narrow integers widen to int, float to
// double.
impl From<i8> for FormatArg<'_> {
    fn from(v: i8) -> Self {
        FormatArg::I32(v as i32)
    }
}

impl From<i16> for FormatArg<'_> {
    fn from(v: i16) -> Self {
        FormatArg::I32(v as i32)
    }
}

impl From<i32> for FormatArg<'_> {
    fn from(v: i32) -> Self {
        FormatArg::I32(v)
    }
}

impl From<i64> for FormatArg<'_> {
    fn from(v: i64) -> Self {
        FormatArg::I64(v)
    }
}

impl From<isize> for FormatArg<'_> {
    fn from(v: isize) -> Self {
        FormatArg::I64(v as i64)
    }
}

impl From<u8> for FormatArg<'_> {
    fn from(v: u8) -> Self {
        FormatArg::Char(v)
    }
}

impl From<u16> for FormatArg<'_> {
    fn from(v: u16) -> Self {
        FormatArg::U32(v as u32)
    }
}

impl From<u32> for FormatArg<'_> {
    fn from(v: u32) -> Self {
        FormatArg::U32(v)
    }
}

impl From<u64> for FormatArg<'_> {
    fn from(v: u64) -> Self {
        FormatArg::U64(v)
    }
}

impl From<usize> for FormatArg<'_> {
    fn from(v: usize) -> Self {
        FormatArg::U64(v as u64)
    }
}

/// Only the low byte survives, as with `%c` of an `int`.
impl From<char> for FormatArg<'_> {
    fn from(v: char) -> Self {
        FormatArg::Char(v as u32 as u8)
    }
}

impl From<f32> for FormatArg<'_> {
    fn from(v: f32) -> Self {
        FormatArg::F64(v as f64)
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(v: f64) -> Self {
        FormatArg::F64(v)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(v: &'a str) -> Self {
        FormatArg::Str(v.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for FormatArg<'a> {
    fn from(v: &'a [u8]) -> Self {
        FormatArg::Str(v)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for FormatArg<'a> {
    fn from(v: &'a [u8; N]) -> Self {
        FormatArg::Str(v)
    }
}

impl<'a> From<&'a Cell<i32>> for FormatArg<'a> {
    fn from(v: &'a Cell<i32>) -> Self {
        FormatArg::Count(v)
    }
}

impl<T> From<*const T> for FormatArg<'_> {
    fn from(v: *const T) -> Self {
        FormatArg::Ptr(v as usize)
    }
}

impl<T> From<*mut T> for FormatArg<'_> {
    fn from(v: *mut T) -> Self {
        FormatArg::Ptr(v as usize)
    }
}

/// Build a `[FormatArg; N]` from plain Rust values.
#[macro_export]
macro_rules! fmt_args {
    () => {{
        let args: [$crate::args::FormatArg<'static>; 0] = [];
        args
    }};
    ($($arg:expr),+ $(,)?) => {
        [$($crate::args::FormatArg::from($arg)),+]
    };
}

/// Walks the argument slice; each conversion takes at most one entry.
pub struct ArgCursor<'s, 'a> {
    args: &'s [FormatArg<'a>],
    next: usize,
}

impl<'s, 'a> ArgCursor<'s, 'a> {
    pub fn new(args: &'s [FormatArg<'a>]) -> Self {
        Self { args, next: 0 }
    }

    /// Take the next argument. Returns `None` once the list is exhausted,
    /// without advancing.
    #[inline]
    pub fn next_arg(&mut self) -> Option<FormatArg<'a>> {
        let arg = self.args.get(self.next).copied()?;
        self.next += 1;
        Some(arg)
    }

    #[inline]
    pub fn consumed(&self) -> usize {
        self.next
    }

    #[inline]
    pub fn supplied(&self) -> usize {
        self.args.len()
    }
}
