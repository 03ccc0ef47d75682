use bareprintf_core::fmt_args;
use bareprintf_lib::testing::TestResult;
use bareprintf_lib::{assert_bytes_eq_test, define_test_suite, pass};

use crate::{RENDER_MAX, render};

pub fn test_default_precision() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"%f", &fmt_args![3.14159]), b"3.141590");
    assert_bytes_eq_test!(render(&mut buf, b"%f", &fmt_args![0.0]), b"0.000000");
    assert_bytes_eq_test!(render(&mut buf, b"%f", &fmt_args![-2.5]), b"-2.500000");
    pass!()
}

pub fn test_explicit_precision() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"%.2f", &fmt_args![1.5]), b"1.50");
    assert_bytes_eq_test!(render(&mut buf, b"%.2f", &fmt_args![0.05]), b"0.05");
    assert_bytes_eq_test!(render(&mut buf, b"%.1f", &fmt_args![1e10]), b"10000000000.0");
    assert_bytes_eq_test!(render(&mut buf, b"%.*f", &fmt_args![3, 0.5]), b"0.500");
    pass!()
}

pub fn test_rounding() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    // Half rounds up on the first dropped digit.
    assert_bytes_eq_test!(render(&mut buf, b"%.1f", &fmt_args![0.25]), b"0.3");
    assert_bytes_eq_test!(render(&mut buf, b"%.2f", &fmt_args![0.375]), b"0.38");
    assert_bytes_eq_test!(render(&mut buf, b"%.1f", &fmt_args![0.21]), b"0.2");
    // Precision 0 truncates.
    assert_bytes_eq_test!(render(&mut buf, b"%.0f", &fmt_args![2.7]), b"2");
    // A carry out of the fraction is not propagated into the integer part.
    assert_bytes_eq_test!(render(&mut buf, b"%.1f", &fmt_args![0.96]), b"0.9");
    pass!()
}

pub fn test_float_fields() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"[%8.2f]", &fmt_args![1.5]), b"[    1.50]");
    assert_bytes_eq_test!(render(&mut buf, b"[%-8.1f]", &fmt_args![-0.5]), b"[-0.5    ]");
    assert_bytes_eq_test!(render(&mut buf, b"[%08.2f]", &fmt_args![-3.25]), b"[-0003.25]");
    assert_bytes_eq_test!(render(&mut buf, b"%+.1f", &fmt_args![2.0]), b"+2.0");
    assert_bytes_eq_test!(render(&mut buf, b"% .1f", &fmt_args![2.0]), b" 2.0");
    pass!()
}

pub fn test_float_edges() -> TestResult {
    let mut buf = [0u8; RENDER_MAX];
    assert_bytes_eq_test!(render(&mut buf, b"%.1f", &fmt_args![-0.0]), b"0.0");
    // f32 arguments are promoted.
    assert_bytes_eq_test!(render(&mut buf, b"%.2f", &fmt_args![0.75f32]), b"0.75");
    // Non-float arguments are skipped.
    assert_bytes_eq_test!(render(&mut buf, b"[%f]", &fmt_args![1]), b"[]");
    pass!()
}

define_test_suite!(
    float,
    [
        test_default_precision,
        test_explicit_precision,
        test_rounding,
        test_float_fields,
        test_float_edges,
    ]
);
