// number.rs - Overflow-checked conversion of digit runs to integers.
//
// Decimal values accumulate toward the sign of the result, so a negative
// value is built by subtraction and can reach `MIN` even though `-MIN` does
// not fit. Hex values are unsigned and reject any digit that would shift a
// set bit out of the top nibble.

use crate::error::{MatchError, NumberFormatError};
use crate::matcher::Matcher;

static HEX_VALUES: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     0,  1,  2,  3,  4,  5,  6,  7,  8,  9, -1, -1, -1, -1, -1, -1,
    -1, 10, 11, 12, 13, 14, 15, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 10, 11, 12, 13, 14, 15, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
];

/// Value of a decimal digit.
#[inline]
pub fn digit_value(ch: char) -> Result<u32, NumberFormatError> {
    ch.to_digit(10).ok_or(NumberFormatError::InvalidDigit(ch))
}

/// Value of a hexadecimal digit (either case).
#[inline]
pub fn hex_digit_value(ch: char) -> Result<u32, NumberFormatError> {
    if ch.is_ascii() {
        let value = HEX_VALUES[ch as usize];
        if value >= 0 {
            return Ok(value as u32);
        }
    }
    Err(NumberFormatError::InvalidDigit(ch))
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Signed integer types that [`parse_decimal`] can produce.
pub trait DecimalInt: Copy + sealed::Sealed {
    #[doc(hidden)]
    const ZERO: Self;

    /// `self * 10 + digit` (or `- digit` when `negative`), `None` on overflow.
    #[doc(hidden)]
    fn push_digit(self, digit: u32, negative: bool) -> Option<Self>;
}

/// Unsigned integer types that [`parse_hex`] can produce.
pub trait HexInt: Copy + sealed::Sealed {
    #[doc(hidden)]
    const ZERO: Self;

    /// `self << 4 | digit`, `None` if the top nibble is already occupied.
    #[doc(hidden)]
    fn push_nibble(self, digit: u32) -> Option<Self>;
}

macro_rules! decimal_int {
    ($($t:ty),*) => {$(
        impl DecimalInt for $t {
            const ZERO: Self = 0;

            #[inline]
            fn push_digit(self, digit: u32, negative: bool) -> Option<Self> {
                let scaled = self.checked_mul(10)?;
                if negative {
                    scaled.checked_sub(digit as $t)
                } else {
                    scaled.checked_add(digit as $t)
                }
            }
        }
    )*};
}

macro_rules! hex_int {
    ($($t:ty),*) => {$(
        impl HexInt for $t {
            const ZERO: Self = 0;

            #[inline]
            fn push_nibble(self, digit: u32) -> Option<Self> {
                if self >> (<$t>::BITS - 4) != 0 {
                    return None;
                }
                Some(self << 4 | digit as $t)
            }
        }
    )*};
}

decimal_int!(i32, i64);
hex_int!(u32, u64);

/// Convert a run of decimal digits.
///
/// With `negative` set the result is the negated value, so the full range
/// down to `T::MIN` is reachable. Leading zeros are ignored.
///
/// ```
/// use text_matcher::number::parse_decimal;
///
/// assert_eq!(parse_decimal::<i32>("2147483648", true), Ok(i32::MIN));
/// assert!(parse_decimal::<i32>("2147483648", false).is_err());
/// ```
pub fn parse_decimal<T: DecimalInt>(digits: &str, negative: bool) -> Result<T, NumberFormatError> {
    if digits.is_empty() {
        return Err(NumberFormatError::Empty);
    }
    let mut value = T::ZERO;
    for ch in digits.trim_start_matches('0').chars() {
        let digit = digit_value(ch)?;
        value = value
            .push_digit(digit, negative)
            .ok_or(NumberFormatError::Overflow)?;
    }
    Ok(value)
}

/// Convert a run of hexadecimal digits.
pub fn parse_hex<T: HexInt>(digits: &str) -> Result<T, NumberFormatError> {
    if digits.is_empty() {
        return Err(NumberFormatError::Empty);
    }
    let mut value = T::ZERO;
    for ch in digits.chars() {
        let digit = hex_digit_value(ch)?;
        value = value.push_nibble(digit).ok_or(NumberFormatError::Overflow)?;
    }
    Ok(value)
}

// === Matcher conversions ===
//
// Each takes a byte range `from..to` of the text. An empty or inverted range
// is a number format error; a range outside the text is an out-of-range
// error.

impl<'t> Matcher<'t> {
    fn digits(&self, from: usize, to: usize) -> Result<&'t str, MatchError> {
        if to <= from {
            return Err(NumberFormatError::Empty.into());
        }
        self.substring(from, to)
    }

    fn decimal<T: DecimalInt>(&self, from: usize, to: usize, negative: bool) -> Result<T, MatchError> {
        let digits = self.digits(from, to)?;
        parse_decimal(digits, negative).map_err(|err| {
            debug!("decimal conversion of {:?} failed: {}", digits, err);
            MatchError::from(err)
        })
    }

    fn hex<T: HexInt>(&self, from: usize, to: usize) -> Result<T, MatchError> {
        let digits = self.digits(from, to)?;
        parse_hex(digits).map_err(|err| {
            debug!("hex conversion of {:?} failed: {}", digits, err);
            MatchError::from(err)
        })
    }

    /// Non-negative `i32` from the decimal digits in `from..to`.
    pub fn parse_int(&self, from: usize, to: usize) -> Result<i32, MatchError> {
        self.decimal(from, to, false)
    }

    /// `i32` from the decimal digits in `from..to`, negated if `negative`.
    pub fn parse_int_signed(&self, from: usize, to: usize, negative: bool) -> Result<i32, MatchError> {
        self.decimal(from, to, negative)
    }

    /// Non-negative `i64` from the decimal digits in `from..to`.
    pub fn parse_long(&self, from: usize, to: usize) -> Result<i64, MatchError> {
        self.decimal(from, to, false)
    }

    /// `i64` from the decimal digits in `from..to`, negated if `negative`.
    pub fn parse_long_signed(&self, from: usize, to: usize, negative: bool) -> Result<i64, MatchError> {
        self.decimal(from, to, negative)
    }

    pub fn parse_hex_int(&self, from: usize, to: usize) -> Result<u32, MatchError> {
        self.hex(from, to)
    }

    pub fn parse_hex_long(&self, from: usize, to: usize) -> Result<u64, MatchError> {
        self.hex(from, to)
    }

    /// The result of the last match as a non-negative `i32`.
    pub fn result_int(&self) -> Result<i32, MatchError> {
        self.parse_int(self.start(), self.index())
    }

    pub fn result_int_signed(&self, negative: bool) -> Result<i32, MatchError> {
        self.parse_int_signed(self.start(), self.index(), negative)
    }

    pub fn result_long(&self) -> Result<i64, MatchError> {
        self.parse_long(self.start(), self.index())
    }

    pub fn result_long_signed(&self, negative: bool) -> Result<i64, MatchError> {
        self.parse_long_signed(self.start(), self.index(), negative)
    }

    pub fn result_hex_int(&self) -> Result<u32, MatchError> {
        self.parse_hex_int(self.start(), self.index())
    }

    pub fn result_hex_long(&self) -> Result<u64, MatchError> {
        self.parse_hex_long(self.start(), self.index())
    }
}
