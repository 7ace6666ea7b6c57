// ctype.rs - ASCII character classes.
//
// Bit layout and table values follow the usual regex ctype numbering
// (newline, alpha, blank, cntrl, digit, graph, lower, print, punct, space,
// upper, xdigit, word, alnum, ascii). Characters outside ASCII belong to
// no class.

use bitflags::bitflags;

use crate::predicate::CharPredicate;

bitflags! {
    /// A set of ASCII character classes.
    ///
    /// As a [`CharPredicate`] a `CharClass` accepts any character that belongs
    /// to at least one of the classes in the set.
    ///
    /// ```
    /// use text_matcher::{CharClass, Matcher};
    ///
    /// let mut m = Matcher::new("ab_12 rest");
    /// assert!(m.match_while(CharClass::WORD));
    /// assert_eq!(m.result(), "ab_12");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u16 {
        const NEWLINE = 1 << 0;
        const ALPHA   = 1 << 1;
        const BLANK   = 1 << 2;
        const CNTRL   = 1 << 3;
        const DIGIT   = 1 << 4;
        const GRAPH   = 1 << 5;
        const LOWER   = 1 << 6;
        const PRINT   = 1 << 7;
        const PUNCT   = 1 << 8;
        const SPACE   = 1 << 9;
        const UPPER   = 1 << 10;
        const XDIGIT  = 1 << 11;
        const WORD    = 1 << 12;
        const ALNUM   = 1 << 13;
        const ASCII   = 1 << 14;
    }
}

static ASCII_CTYPE_TABLE: [u16; 128] = [
    0x4008, 0x4008, 0x4008, 0x4008, 0x4008, 0x4008, 0x4008, 0x4008,
    0x4008, 0x420c, 0x4209, 0x4208, 0x4208, 0x4208, 0x4008, 0x4008,
    0x4008, 0x4008, 0x4008, 0x4008, 0x4008, 0x4008, 0x4008, 0x4008,
    0x4008, 0x4008, 0x4008, 0x4008, 0x4008, 0x4008, 0x4008, 0x4008,
    0x4284, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x41a0,
    0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x41a0,
    0x78b0, 0x78b0, 0x78b0, 0x78b0, 0x78b0, 0x78b0, 0x78b0, 0x78b0,
    0x78b0, 0x78b0, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x41a0,
    0x41a0, 0x7ca2, 0x7ca2, 0x7ca2, 0x7ca2, 0x7ca2, 0x7ca2, 0x74a2,
    0x74a2, 0x74a2, 0x74a2, 0x74a2, 0x74a2, 0x74a2, 0x74a2, 0x74a2,
    0x74a2, 0x74a2, 0x74a2, 0x74a2, 0x74a2, 0x74a2, 0x74a2, 0x74a2,
    0x74a2, 0x74a2, 0x74a2, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x51a0,
    0x41a0, 0x78e2, 0x78e2, 0x78e2, 0x78e2, 0x78e2, 0x78e2, 0x70e2,
    0x70e2, 0x70e2, 0x70e2, 0x70e2, 0x70e2, 0x70e2, 0x70e2, 0x70e2,
    0x70e2, 0x70e2, 0x70e2, 0x70e2, 0x70e2, 0x70e2, 0x70e2, 0x70e2,
    0x70e2, 0x70e2, 0x70e2, 0x41a0, 0x41a0, 0x41a0, 0x41a0, 0x4008,
];

impl CharClass {
    /// All classes `ch` belongs to. Empty for non-ASCII characters.
    #[inline]
    pub fn of(ch: char) -> CharClass {
        if ch.is_ascii() {
            CharClass::from_bits_retain(ASCII_CTYPE_TABLE[ch as usize])
        } else {
            CharClass::empty()
        }
    }

    /// Does `ch` belong to any class in `self`?
    #[inline]
    pub fn contains_char(self, ch: char) -> bool {
        CharClass::of(ch).intersects(self)
    }
}

impl CharPredicate for CharClass {
    #[inline]
    fn test(&self, ch: char) -> bool {
        self.contains_char(ch)
    }
}

/// Is `ch` a decimal digit (`'0'..='9'`)?
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Is `ch` a hexadecimal digit (`'0'..='9'`, `'A'..='F'`, `'a'..='f'`)?
#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    CharClass::XDIGIT.contains_char(ch)
}
