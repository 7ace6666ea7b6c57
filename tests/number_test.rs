// number_test.rs - Integration tests for decimal and hex conversion.
//
// Boundary values of each integer width, both through the free parsing
// functions and through the Matcher result/parse family.

use text_matcher::number::{parse_decimal, parse_hex};
use text_matcher::{digit_value, hex_digit_value};
use text_matcher::prelude::*;

fn matched_dec(text: &str) -> Matcher<'_> {
    let mut m = Matcher::new(text);
    assert!(m.match_dec(), "no digits in {text:?}");
    m
}

fn matched_hex(text: &str) -> Matcher<'_> {
    let mut m = Matcher::new(text);
    assert!(m.match_hex(), "no hex digits in {text:?}");
    m
}

fn format_err<T: std::fmt::Debug>(r: Result<T, MatchError>) -> NumberFormatError {
    match r.unwrap_err() {
        MatchError::NumberFormat(err) => err,
        other => panic!("expected a number format error, got {other:?}"),
    }
}

// === i32 ===

#[test]
fn int_max_fits() {
    let m = matched_dec("2147483647");
    assert_eq!(m.result_int().unwrap(), i32::MAX);
    assert_eq!(m.result_int_signed(true).unwrap(), -i32::MAX);
}

#[test]
fn int_max_plus_one_only_fits_negated() {
    let m = matched_dec("2147483648");
    assert_eq!(format_err(m.result_int()), NumberFormatError::Overflow);
    assert_eq!(m.result_int_signed(true).unwrap(), i32::MIN);
}

#[test]
fn int_min_minus_one_overflows() {
    let m = matched_dec("2147483649");
    assert_eq!(format_err(m.result_int_signed(true)), NumberFormatError::Overflow);
    assert_eq!(format_err(m.result_int_signed(false)), NumberFormatError::Overflow);
}

#[test]
fn int_many_digits_overflow() {
    let m = matched_dec("99999999999");
    assert_eq!(m.result_int().unwrap_err().kind(), ErrorKind::NumberFormat);
    assert_eq!(m.result_long().unwrap(), 99_999_999_999);
}

#[test]
fn int_leading_zeros_do_not_count() {
    let m = matched_dec("000000000002147483647");
    assert_eq!(m.result_int().unwrap(), i32::MAX);
    let m = matched_dec("0000");
    assert_eq!(m.result_int().unwrap(), 0);
    assert_eq!(m.result_int_signed(true).unwrap(), 0);
}

// === i64 ===

#[test]
fn long_bounds() {
    let m = matched_dec("9223372036854775807");
    assert_eq!(m.result_long().unwrap(), i64::MAX);

    let m = matched_dec("9223372036854775808");
    assert_eq!(format_err(m.result_long()), NumberFormatError::Overflow);
    assert_eq!(m.result_long_signed(true).unwrap(), i64::MIN);

    let m = matched_dec("9223372036854775809");
    assert_eq!(format_err(m.result_long_signed(true)), NumberFormatError::Overflow);
}

// === Hex ===

#[test]
fn hex_whole_and_sub_range() {
    let m = matched_hex("123abc");
    assert_eq!(m.result_hex_int().unwrap(), 0x12_3abc);
    assert_eq!(m.result_hex_long().unwrap(), 0x12_3abc);
    assert_eq!(m.parse_hex_int(1, 4).unwrap(), 0x23a);
}

#[test]
fn hex_mixed_case() {
    let m = matched_hex("DeadBeef");
    assert_eq!(m.result_hex_int().unwrap(), 0xdead_beef);
}

#[test]
fn hex_int_bounds() {
    let m = matched_hex("ffffffff");
    assert_eq!(m.result_hex_int().unwrap(), u32::MAX);

    let m = matched_hex("100000000");
    assert_eq!(format_err(m.result_hex_int()), NumberFormatError::Overflow);
    assert_eq!(m.result_hex_long().unwrap(), 0x1_0000_0000);

    let m = matched_hex("0000000ffffffff");
    assert_eq!(m.result_hex_int().unwrap(), u32::MAX);
}

#[test]
fn hex_long_bounds() {
    let m = matched_hex("FFFFFFFFFFFFFFFF");
    assert_eq!(m.result_hex_long().unwrap(), u64::MAX);
    let m = matched_hex("10000000000000000");
    assert_eq!(format_err(m.result_hex_long()), NumberFormatError::Overflow);
}

// === Ranges ===

#[test]
fn empty_and_inverted_ranges() {
    let m = Matcher::new("12345");
    assert_eq!(format_err(m.parse_int(2, 2)), NumberFormatError::Empty);
    assert_eq!(format_err(m.parse_long(4, 1)), NumberFormatError::Empty);
    assert_eq!(format_err(m.parse_hex_int(3, 3)), NumberFormatError::Empty);
    assert_eq!(format_err(m.result_int()), NumberFormatError::Empty);
}

#[test]
fn range_past_end_is_out_of_range() {
    let m = Matcher::new("12345");
    let err = m.parse_int(2, 9).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert!(matches!(err, MatchError::RangeOutOfBounds { from: 2, to: 9, length: 5 }));
}

#[test]
fn invalid_digit_is_reported() {
    let m = Matcher::new("12x45 0x1g");
    assert_eq!(format_err(m.parse_int(0, 5)), NumberFormatError::InvalidDigit('x'));
    assert_eq!(format_err(m.parse_hex_int(8, 10)), NumberFormatError::InvalidDigit('g'));
    assert_eq!(format_err(m.parse_long(0, 3)), NumberFormatError::InvalidDigit('x'));
}

#[test]
fn number_format_error_is_source() {
    use std::error::Error;

    let m = matched_dec("99999999999");
    let err = m.result_int().unwrap_err();
    let source = err.source().expect("number format errors carry a source");
    assert_eq!(source.to_string(), NumberFormatError::Overflow.to_string());
}

// === Free functions ===

#[test]
fn free_functions_agree_with_matcher() {
    for digits in ["0", "7", "65535", "2147483647", "2147483648"] {
        let m = matched_dec(digits);
        assert_eq!(parse_decimal::<i32>(digits, false).ok(), m.result_int().ok());
        assert_eq!(parse_decimal::<i64>(digits, true).ok(), m.result_long_signed(true).ok());
    }
    for digits in ["0", "a", "FFFF", "ffffffff", "100000000"] {
        let m = matched_hex(digits);
        assert_eq!(parse_hex::<u32>(digits).ok(), m.result_hex_int().ok());
        assert_eq!(parse_hex::<u64>(digits).ok(), m.result_hex_long().ok());
    }
}

#[test]
fn digit_values() {
    assert_eq!(digit_value('7'), Ok(7));
    assert_eq!(digit_value('a'), Err(NumberFormatError::InvalidDigit('a')));
    assert_eq!(hex_digit_value('a'), Ok(10));
    assert_eq!(hex_digit_value('F'), Ok(15));
    assert_eq!(hex_digit_value('\u{ff10}'), Err(NumberFormatError::InvalidDigit('\u{ff10}')));
}

// === Match then convert ===

#[test]
fn bounded_hex_escape() {
    let mut m = Matcher::new("\\u00e9\\u12");
    assert!(m.match_str("\\u") && m.match_hex_bounded(4, 4));
    assert_eq!(char::from_u32(m.result_hex_int().unwrap()), Some('\u{e9}'));
    assert!(m.match_str("\\u"));
    assert!(!m.match_hex_bounded(4, 4));
    assert_eq!(m.result(), "\\u");
}

#[test]
fn signed_values_in_a_list() {
    let mut m = Matcher::new("3,-17,+4,-2147483648");
    let mut values = Vec::new();
    loop {
        let negative = m.match_char('-');
        if !negative {
            m.skip_char('+');
        }
        assert!(m.match_dec());
        values.push(m.result_int_signed(negative).unwrap());
        if !m.match_char(',') {
            break;
        }
    }
    assert!(m.is_at_end());
    assert_eq!(values, [3, -17, 4, i32::MIN]);
}
