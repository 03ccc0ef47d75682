use core::cell::Cell;

use bareprintf_core::fmt_args;
use bareprintf_lib::testing::TestResult;
use bareprintf_lib::{assert_bytes_eq_test, assert_eq_test, define_test_suite, pass};

use crate::{RENDER_MAX, render};

// ============================================================================
// INTEGERS
// ============================================================================

pub fn test_signed_decimal() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"%d", &fmt_args![0]), b"0");
    assert_bytes_eq_test!(render(&mut buf, b"%d", &fmt_args![-42]), b"-42");
    assert_bytes_eq_test!(render(&mut buf, b"%i", &fmt_args![i32::MAX]), b"2147483647");
    assert_bytes_eq_test!(render(&mut buf, b"%d", &fmt_args![i32::MIN]), b"-2147483648");
    pass!()
}

pub fn test_unsigned_and_hex() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"%u", &fmt_args![u32::MAX]), b"4294967295");
    assert_bytes_eq_test!(render(&mut buf, b"%u", &fmt_args![-1]), b"4294967295");
    assert_bytes_eq_test!(render(&mut buf, b"%x", &fmt_args![0xdead_beefu32]), b"deadbeef");
    assert_bytes_eq_test!(render(&mut buf, b"%x", &fmt_args![0u32]), b"0");
    pass!()
}

pub fn test_length_modifiers() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(
        render(&mut buf, b"%lld", &fmt_args![i64::MIN]),
        b"-9223372036854775808"
    );
    assert_bytes_eq_test!(
        render(&mut buf, b"%llu", &fmt_args![u64::MAX]),
        b"18446744073709551615"
    );
    assert_bytes_eq_test!(
        render(&mut buf, b"%llx", &fmt_args![u64::MAX]),
        b"ffffffffffffffff"
    );
    // Without a modifier only the low 32 bits are read.
    assert_bytes_eq_test!(
        render(&mut buf, b"%x", &fmt_args![0x1_0000_00ffu64]),
        b"ff"
    );
    pass!()
}

// ============================================================================
// FLAGS, WIDTH, PRECISION
// ============================================================================

pub fn test_sign_flags() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"%+d", &fmt_args![5]), b"+5");
    assert_bytes_eq_test!(render(&mut buf, b"% d", &fmt_args![5]), b" 5");
    assert_bytes_eq_test!(render(&mut buf, b"%+ d", &fmt_args![5]), b"+5");
    assert_bytes_eq_test!(render(&mut buf, b"% d", &fmt_args![-5]), b"-5");
    pass!()
}

pub fn test_width_and_padding() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"[%6d]", &fmt_args![-42]), b"[   -42]");
    assert_bytes_eq_test!(render(&mut buf, b"[%-6d]", &fmt_args![-42]), b"[-42   ]");
    assert_bytes_eq_test!(render(&mut buf, b"[%06d]", &fmt_args![-42]), b"[-00042]");
    assert_bytes_eq_test!(render(&mut buf, b"[%-06d]", &fmt_args![42]), b"[42    ]");
    assert_bytes_eq_test!(render(&mut buf, b"[%08x]", &fmt_args![0xbeefu32]), b"[0000beef]");
    assert_bytes_eq_test!(render(&mut buf, b"[%2d]", &fmt_args![12345]), b"[12345]");
    pass!()
}

pub fn test_precision() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"%.5d", &fmt_args![42]), b"00042");
    assert_bytes_eq_test!(render(&mut buf, b"[%8.4d]", &fmt_args![-7]), b"[   -0007]");
    assert_bytes_eq_test!(render(&mut buf, b"[%08.3d]", &fmt_args![7]), b"[     007]");
    assert_bytes_eq_test!(render(&mut buf, b"[%.0d]", &fmt_args![0]), b"[]");
    assert_bytes_eq_test!(render(&mut buf, b"[%3.0u]", &fmt_args![0u32]), b"[   ]");
    assert_bytes_eq_test!(render(&mut buf, b"[%+.0d]", &fmt_args![0]), b"[+]");
    assert_bytes_eq_test!(render(&mut buf, b"[%.0d]", &fmt_args![3]), b"[3]");
    pass!()
}

pub fn test_star_arguments() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"[%*d]", &fmt_args![5, 42]), b"[   42]");
    assert_bytes_eq_test!(render(&mut buf, b"[%*d]", &fmt_args![-5, 42]), b"[42   ]");
    assert_bytes_eq_test!(render(&mut buf, b"[%.*d]", &fmt_args![4, 9]), b"[0009]");
    // A negative precision counts as given but zero.
    assert_bytes_eq_test!(render(&mut buf, b"[%.*d]", &fmt_args![-1, 0]), b"[]");
    assert_bytes_eq_test!(
        render(&mut buf, b"[%*.*s]", &fmt_args![6, 3, "revenant"]),
        b"[   rev]"
    );
    pass!()
}

// ============================================================================
// TEXT, POINTERS, COUNTS
// ============================================================================

pub fn test_strings() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"%s", &fmt_args!["e1m1"]), b"e1m1");
    assert_bytes_eq_test!(render(&mut buf, b"[%7s]", &fmt_args!["e1m1"]), b"[   e1m1]");
    assert_bytes_eq_test!(render(&mut buf, b"[%-7s]", &fmt_args!["e1m1"]), b"[e1m1   ]");
    assert_bytes_eq_test!(render(&mut buf, b"[%07s]", &fmt_args!["e1m1"]), b"[   e1m1]");
    assert_bytes_eq_test!(render(&mut buf, b"%.2s", &fmt_args!["e1m1"]), b"e1");
    assert_bytes_eq_test!(render(&mut buf, b"[%s]", &fmt_args![""]), b"[]");
    // Text stops at an embedded NUL.
    assert_bytes_eq_test!(render(&mut buf, b"%s", &fmt_args![b"ab\0cd"]), b"ab");
    pass!()
}

pub fn test_chars() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"%c%c", &fmt_args!['o', 'k']), b"ok");
    assert_bytes_eq_test!(render(&mut buf, b"[%3c]", &fmt_args!['x']), b"[  x]");
    assert_bytes_eq_test!(render(&mut buf, b"[%-3c]", &fmt_args!['x']), b"[x  ]");
    assert_bytes_eq_test!(render(&mut buf, b"%c", &fmt_args![0x141]), b"A");
    pass!()
}

pub fn test_pointers() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    let addr = 0xb800usize as *const u8;
    assert_bytes_eq_test!(render(&mut buf, b"%p", &fmt_args![addr]), b"0xb800");
    assert_bytes_eq_test!(render(&mut buf, b"[%10p]", &fmt_args![addr]), b"[    0xb800]");
    assert_bytes_eq_test!(render(&mut buf, b"[%-10p]", &fmt_args![addr]), b"[0xb800    ]");
    assert_bytes_eq_test!(render(&mut buf, b"[%010p]", &fmt_args![addr]), b"[    0xb800]");

    let null = core::ptr::null::<u8>();
    assert_bytes_eq_test!(render(&mut buf, b"%p", &fmt_args![null]), b"(nil)");
    assert_bytes_eq_test!(render(&mut buf, b"[%7p]", &fmt_args![null]), b"[  (nil)]");
    pass!()
}

pub fn test_write_count() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    let first = Cell::new(-1i32);
    let second = Cell::new(-1i32);
    assert_bytes_eq_test!(
        render(&mut buf, b"%n%d bullets%n", &fmt_args![&first, 50, &second]),
        b"50 bullets"
    );
    assert_eq_test!(first.get(), 0);
    assert_eq_test!(second.get(), 10);

    // The count is the logical length, even past the end of a short buffer.
    let truncated = Cell::new(-1i32);
    let mut small = [0u8; 4];
    bareprintf_core::format_into(&mut small, b"overflowing%n", &fmt_args![&truncated]);
    assert_eq_test!(truncated.get(), 11);
    pass!()
}

pub fn test_percent_and_unknown() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"100%%", &[]), b"100%");
    assert_bytes_eq_test!(render(&mut buf, b"[%5%]", &[]), b"[%]");
    assert_bytes_eq_test!(render(&mut buf, b"a%qb", &[]), b"ab");
    assert_bytes_eq_test!(render(&mut buf, b"err%m!", &[]), b"err!");
    assert_bytes_eq_test!(render(&mut buf, b"tail%", &[]), b"tail");
    assert_bytes_eq_test!(render(&mut buf, b"tail%-08", &[]), b"tail");
    pass!()
}

pub fn test_argument_mismatch_skips() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    // Wrong kind: consumed, conversion skipped, later ones still line up.
    assert_bytes_eq_test!(
        render(&mut buf, b"[%d][%s]", &fmt_args!["imp", "demon"]),
        b"[][demon]"
    );
    // Exhausted list: no output for the remaining conversions.
    assert_bytes_eq_test!(render(&mut buf, b"[%d][%d]", &fmt_args![1]), b"[1][]");
    assert_bytes_eq_test!(render(&mut buf, b"[%*d]", &[]), b"[]");
    pass!()
}

define_test_suite!(
    format,
    [
        test_signed_decimal,
        test_unsigned_and_hex,
        test_length_modifiers,
        test_sign_flags,
        test_width_and_padding,
        test_precision,
        test_star_arguments,
        test_strings,
        test_chars,
        test_pointers,
        test_write_count,
        test_percent_and_unknown,
        test_argument_mismatch_skips,
    ]
);
