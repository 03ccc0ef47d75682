//! Field layout: sign, zero padding, space padding, justification.
//!
//! Numeric conversions arrive here with their digits already encoded in
//! reverse order. Layouts, for a field of `sign + max(precision, digits)`
//! bytes:
//!
//! ```text
//! left:            [sign][0 * (prec - digits)][digits][' ' * rest]
//! right, 0 flag:   [sign][0 * (width - sign - digits)][digits]
//! right:           [' ' * rest][sign][0 * (prec - digits)][digits]
//! ```
//!
//! The `0` flag only applies when no precision was given. A zero value with
//! an explicit precision of 0 has no digit body at all, so `%.0d` of 0 is
//! empty and `%5.0d` of 0 is five spaces.

use crate::cursor::OutCursor;
use crate::spec::FormatFlags;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub flags: FormatFlags,
    pub width: usize,
    pub precision: usize,
    pub precision_given: bool,
    pub sign: Option<u8>,
    pub is_zero: bool,
}

impl FieldSpec {
    #[inline]
    fn suppresses_body(&self) -> bool {
        self.precision_given && self.precision == 0 && self.is_zero
    }
}

/// Lay out a numeric field. `digits` is in reverse order.
pub fn emit_field(out: &mut OutCursor<'_>, field: &FieldSpec, digits: &[u8]) {
    let suppressed = field.suppresses_body();
    let digit_count = if suppressed { 0 } else { digits.len() };
    let precision_pad = if suppressed {
        0
    } else {
        field.precision.saturating_sub(digit_count)
    };
    let sign_len = field.sign.is_some() as usize;
    let body_len = digit_count + precision_pad;
    let rest = field.width.saturating_sub(sign_len + body_len);

    if field.flags.contains(FormatFlags::LEFT_JUSTIFY) {
        emit_sign(out, field.sign);
        if !suppressed {
            out.put_repeat(b'0', precision_pad);
            out.put_reversed(digits);
        }
        out.put_repeat(b' ', rest);
        return;
    }

    if field.flags.contains(FormatFlags::ZERO_PAD) && !field.precision_given {
        emit_sign(out, field.sign);
        out.put_repeat(b'0', rest + precision_pad);
        out.put_reversed(digits);
        return;
    }

    out.put_repeat(b' ', rest);
    emit_sign(out, field.sign);
    if !suppressed {
        out.put_repeat(b'0', precision_pad);
        out.put_reversed(digits);
    }
}

#[inline]
fn emit_sign(out: &mut OutCursor<'_>, sign: Option<u8>) {
    if let Some(sign) = sign {
        out.put(sign);
    }
}

/// Lay out a byte run (`%s`, `%c`, `(nil)`) padded with spaces to `width`.
/// The `0` flag does not apply to text.
pub fn emit_padded(out: &mut OutCursor<'_>, flags: FormatFlags, width: usize, bytes: &[u8]) {
    let rest = width.saturating_sub(bytes.len());
    if flags.contains(FormatFlags::LEFT_JUSTIFY) {
        out.put_slice(bytes);
        out.put_repeat(b' ', rest);
    } else {
        out.put_repeat(b' ', rest);
        out.put_slice(bytes);
    }
}
