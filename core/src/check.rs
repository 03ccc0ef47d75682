//! Ahead-of-time argument checking.
//!
//! [`check_args`] walks a template with the same scanner the driver uses and
//! verifies every argument the driver would read, in order. It turns the
//! silent "skip the conversion" behaviour into an error before any output is
//! produced, which suits callers that build argument lists at runtime.

use crate::args::{ArgCursor, FormatArg};
use crate::cursor::FormatOutcome;
use crate::driver::format_into;
use crate::error::{FmtError, FmtResult};
use crate::spec::{Conversion, Precision, Scanner, Segment, Width};

fn expect(
    args: &mut ArgCursor<'_, '_>,
    conversion: u8,
    accepts: impl FnOnce(&FormatArg<'_>) -> bool,
) -> FmtResult {
    let index = args.consumed();
    let arg = args.next_arg().ok_or(FmtError::MissingArgument { index, conversion })?;
    if accepts(&arg) {
        Ok(())
    } else {
        Err(FmtError::TypeMismatch {
            index,
            conversion,
            found: arg.kind(),
        })
    }
}

fn is_integer(arg: &FormatArg<'_>) -> bool {
    arg.integer_bits().is_some()
}

/// Check `args` against `template`. Returns how many arguments it reads.
pub fn check_args(template: &[u8], args: &[FormatArg<'_>]) -> FmtResult<usize> {
    let mut cursor = ArgCursor::new(args);

    for segment in Scanner::new(template) {
        let Segment::Conversion(spec) = segment else {
            continue;
        };

        if spec.width == Width::FromArg {
            expect(&mut cursor, b'*', is_integer)?;
        }
        if spec.precision == Precision::FromArg {
            expect(&mut cursor, b'*', is_integer)?;
        }

        let byte = spec.conversion.as_byte();
        match spec.conversion {
            Conversion::SignedDecimal
            | Conversion::UnsignedDecimal
            | Conversion::Hex
            | Conversion::Char => expect(&mut cursor, byte, is_integer)?,
            Conversion::Str => expect(&mut cursor, byte, |a| a.as_bytes().is_some())?,
            Conversion::Pointer => expect(&mut cursor, byte, |a| a.as_pointer().is_some())?,
            Conversion::WriteCount => expect(&mut cursor, byte, |a| a.as_count().is_some())?,
            Conversion::Float => expect(&mut cursor, byte, |a| a.as_f64().is_some())?,
            Conversion::Errno
            | Conversion::Percent
            | Conversion::Unknown(_)
            | Conversion::Truncated => {}
        }
    }

    if cursor.consumed() < cursor.supplied() {
        return Err(FmtError::ExtraArguments {
            consumed: cursor.consumed(),
            supplied: cursor.supplied(),
        });
    }
    Ok(cursor.consumed())
}

/// [`format_into`] after a successful [`check_args`]. On error nothing is
/// written to `buf`.
pub fn format_into_checked(
    buf: &mut [u8],
    template: &[u8],
    args: &[FormatArg<'_>],
) -> FmtResult<FormatOutcome> {
    check_args(template, args)?;
    Ok(format_into(buf, template, args))
}
