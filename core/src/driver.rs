//! Format-string driver.
//!
//! One call owns one [`OutCursor`] and one [`ArgCursor`]. Literal runs are
//! copied through the cursor; each conversion resolves its `*` width and
//! precision, takes at most one argument and hands the encoded digits to the
//! field formatter. Nothing here can fail: unknown conversions, a template
//! that ends after `%`, a missing argument or an argument of the wrong kind
//! all produce no output for that conversion.

use bareprintf_lib::klog_debug;
use bareprintf_lib::numfmt::{DigitBuf, FLOAT_SCRATCH, INT_SCRATCH, Radix};
use bareprintf_lib::string::cstr_len;

use crate::args::{ArgCursor, FormatArg};
use crate::cursor::{FormatOutcome, OutCursor};
use crate::field::{FieldSpec, emit_field, emit_padded};
use crate::spec::{
    Conversion, ConversionSpec, FormatFlags, LengthMod, Precision, Scanner, Segment, Width,
};

/// Default digits after the point for `%f`.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

const NIL_POINTER: &[u8] = b"(nil)";

/// Format `template` with `args` into `buf`, `vsnprintf` style.
///
/// At most `buf.len() - 1` bytes are stored, followed by a NUL whenever
/// `buf` is not empty. [`FormatOutcome::required`] is the length an
/// unbounded buffer would have received; compare it with `written` to detect
/// truncation, or call once with an empty buffer to size the real one.
pub fn format_into(buf: &mut [u8], template: &[u8], args: &[FormatArg<'_>]) -> FormatOutcome {
    let mut out = OutCursor::new(buf);
    let mut args = ArgCursor::new(args);

    for segment in Scanner::new(template) {
        match segment {
            Segment::Literal(bytes) => out.put_slice(bytes),
            Segment::Conversion(spec) => emit_conversion(&mut out, &mut args, &spec),
        }
    }

    out.finish()
}

/// Read a `*` width or precision. A missing or non-integer argument reads as 0.
fn star_arg(args: &mut ArgCursor<'_, '_>) -> i32 {
    match args.next_arg() {
        Some(arg) => match arg.to_signed(LengthMod::Native) {
            Some(value) => value as i32,
            None => {
                klog_debug!("printf: '*' expects int, got {}", arg.kind());
                0
            }
        },
        None => {
            klog_debug!("printf: '*' with no argument left");
            0
        }
    }
}

/// Take the next argument and project it with `accept`. Logs and returns
/// `None` when the list is exhausted or the argument has the wrong kind; a
/// wrong-kind argument is still consumed.
fn take<'a, T>(
    args: &mut ArgCursor<'_, 'a>,
    conversion: Conversion,
    accept: impl FnOnce(&FormatArg<'a>) -> Option<T>,
) -> Option<T> {
    let Some(arg) = args.next_arg() else {
        klog_debug!("printf: no argument left for %{}", conversion.as_byte() as char);
        return None;
    };
    let value = accept(&arg);
    if value.is_none() {
        klog_debug!(
            "printf: %{} cannot take {}, skipped",
            conversion.as_byte() as char,
            arg.kind()
        );
    }
    value
}

fn sign_for(negative: bool, flags: FormatFlags) -> Option<u8> {
    if negative {
        Some(b'-')
    } else if flags.contains(FormatFlags::FORCE_SIGN) {
        Some(b'+')
    } else if flags.contains(FormatFlags::SPACE_SIGN) {
        Some(b' ')
    } else {
        None
    }
}

fn encode_integer(digits: &mut DigitBuf<INT_SCRATCH>, value: u64, length: LengthMod, radix: Radix) {
    match length {
        LengthMod::Native => digits.encode_u32(value as u32, radix),
        LengthMod::Long | LengthMod::LongLong => digits.encode_u64(value, radix),
    };
}

fn emit_conversion(out: &mut OutCursor<'_>, args: &mut ArgCursor<'_, '_>, spec: &ConversionSpec) {
    let mut flags = spec.flags;

    let width = match spec.width {
        Width::Fixed(width) => width as usize,
        Width::FromArg => {
            let width = star_arg(args);
            if width < 0 {
                flags |= FormatFlags::LEFT_JUSTIFY;
            }
            width.unsigned_abs() as usize
        }
    };

    let (precision, precision_given) = match spec.precision {
        Precision::Unspecified => (0, false),
        Precision::Fixed(precision) => (precision as usize, true),
        Precision::FromArg => (star_arg(args).max(0) as usize, true),
    };

    let mut field = FieldSpec {
        flags,
        width,
        precision,
        precision_given,
        sign: None,
        is_zero: false,
    };

    match spec.conversion {
        Conversion::SignedDecimal => {
            let Some(value) = take(args, spec.conversion, |a| a.to_signed(spec.length)) else {
                return;
            };
            let magnitude = value.unsigned_abs();
            let mut digits = DigitBuf::<INT_SCRATCH>::new();
            encode_integer(&mut digits, magnitude, spec.length, Radix::Decimal);
            field.sign = sign_for(value < 0, flags);
            field.is_zero = magnitude == 0;
            emit_field(out, &field, digits.digits());
        }
        Conversion::UnsignedDecimal | Conversion::Hex => {
            let Some(value) = take(args, spec.conversion, |a| a.to_unsigned(spec.length)) else {
                return;
            };
            let radix = if spec.conversion == Conversion::Hex {
                Radix::Hex
            } else {
                Radix::Decimal
            };
            let mut digits = DigitBuf::<INT_SCRATCH>::new();
            encode_integer(&mut digits, value, spec.length, radix);
            field.is_zero = value == 0;
            emit_field(out, &field, digits.digits());
        }
        Conversion::Str => {
            let Some(bytes) = take(args, spec.conversion, FormatArg::as_bytes) else {
                return;
            };
            let len = cstr_len(bytes, precision_given.then_some(precision));
            emit_padded(out, flags, width, &bytes[..len]);
        }
        Conversion::Char => {
            let Some(value) = take(args, spec.conversion, FormatArg::integer_bits) else {
                return;
            };
            emit_padded(out, flags, width, &[value as u8]);
        }
        Conversion::Pointer => {
            let Some(address) = take(args, spec.conversion, FormatArg::as_pointer) else {
                return;
            };
            if address == 0 {
                emit_padded(out, flags, width, NIL_POINTER);
                return;
            }
            let mut digits = DigitBuf::<INT_SCRATCH>::new();
            digits.encode_u64(address as u64, Radix::Hex);
            // Reverse order: "x0" after the digits reads as a "0x" prefix.
            digits.push(b'x');
            digits.push(b'0');
            field.flags.remove(FormatFlags::ZERO_PAD);
            field.precision = 0;
            field.precision_given = false;
            emit_field(out, &field, digits.digits());
        }
        Conversion::WriteCount => {
            if let Some(counter) = take(args, spec.conversion, FormatArg::as_count) {
                counter.set(out.logical_len() as i32);
            }
        }
        Conversion::Errno => {}
        Conversion::Percent => out.put(b'%'),
        Conversion::Float => {
            let Some(value) = take(args, spec.conversion, FormatArg::as_f64) else {
                return;
            };
            let precision = if precision_given {
                precision
            } else {
                DEFAULT_FLOAT_PRECISION
            };
            let negative = value < 0.0;
            let magnitude = if negative { -value } else { value };
            let mut digits = DigitBuf::<FLOAT_SCRATCH>::new();
            digits.encode_float(magnitude, precision.min(u32::MAX as usize) as u32);
            // The digit run already carries the requested fraction digits.
            field.precision = 0;
            field.precision_given = false;
            field.sign = sign_for(negative, flags);
            emit_field(out, &field, digits.digits());
        }
        Conversion::Unknown(byte) => {
            klog_debug!("printf: unknown conversion %{} discarded", byte as char);
        }
        Conversion::Truncated => {}
    }
}
