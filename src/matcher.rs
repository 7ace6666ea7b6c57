// matcher.rs - Cursor over an immutable text with match/skip/result operations.
//
// State is two byte offsets, `start <= index <= len`. A successful match or
// any skip sets `start` to the old `index` and moves `index` past the consumed
// run, so `text[start..index]` is always the result of the last operation.
// Failed matches leave both offsets untouched (except `match_continue*`,
// which rewinds `index` to `start`).

use std::fmt;

use memchr::memmem;

use crate::ctype::{is_digit, is_hex_digit};
use crate::error::MatchError;
use crate::predicate::CharPredicate;
use crate::view::{check_range, TextView};

/// A text matcher for hand-written parsers.
///
/// `Matcher` keeps a current index into a borrowed string and advances it on
/// successful matches. It has four kinds of operations:
///
/// - **match** functions test the characters at the current index and, on
///   success, record the matched run; they return `false` and change nothing
///   on failure.
/// - **skip** functions always succeed and advance past zero or more
///   characters.
/// - **result** functions return the run consumed by the last operation, as a
///   `&str`, a [`TextView`], a length, or a number.
/// - **position** functions read or set the start and current index.
///
/// All offsets are byte offsets into the text and always lie on character
/// boundaries. Character counts (`max`, `min`, `skip_fixed`) count `char`s.
///
/// # Examples
///
/// ```
/// use text_matcher::Matcher;
///
/// let mut m = Matcher::new("width=640");
/// assert!(m.match_while(char::is_alphabetic));
/// let key = m.result();
/// assert!(m.match_char('='));
/// assert!(m.match_dec());
/// assert_eq!(key, "width");
/// assert_eq!(m.result_int().unwrap(), 640);
/// assert!(m.is_at_end());
/// ```
#[derive(Debug, Clone)]
pub struct Matcher<'t> {
    text: &'t str,
    length: usize,
    start: usize,
    index: usize,
}

impl<'t> Matcher<'t> {
    /// Create a matcher positioned at the beginning of `text`.
    pub fn new(text: &'t str) -> Matcher<'t> {
        Matcher {
            text,
            length: text.len(),
            start: 0,
            index: 0,
        }
    }

    /// Create a matcher over raw bytes, which must be valid UTF-8.
    pub fn from_utf8(bytes: &'t [u8]) -> Result<Matcher<'t>, MatchError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Matcher::new(text)),
            Err(err) => {
                debug!("rejecting matcher text: {}", err);
                Err(MatchError::InvalidArgument(format!(
                    "text is not valid UTF-8: {}",
                    err
                )))
            }
        }
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The character at byte `offset`. Does not move the matcher.
    pub fn char_at(&self, offset: usize) -> Result<char, MatchError> {
        if offset >= self.length {
            return Err(MatchError::IndexOutOfRange {
                index: offset,
                length: self.length,
            });
        }
        if !self.text.is_char_boundary(offset) {
            return Err(MatchError::NotCharBoundary { offset });
        }
        self.text[offset..]
            .chars()
            .next()
            .ok_or(MatchError::IndexOutOfRange {
                index: offset,
                length: self.length,
            })
    }

    // === Position ===

    /// Start of the run consumed by the last operation.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current index: the offset of the next character to examine.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Set the start offset. If the current index is before it, the index is
    /// moved up to `start` as well.
    pub fn set_start(&mut self, start: usize) -> Result<(), MatchError> {
        self.check_offset(start)?;
        trace!("set_start {} (index {})", start, self.index);
        self.start = start;
        if self.index < start {
            self.index = start;
        }
        Ok(())
    }

    /// Set the current index. If it is before the start offset, the start is
    /// moved back to `index` as well.
    pub fn set_index(&mut self, index: usize) -> Result<(), MatchError> {
        self.check_offset(index)?;
        trace!("set_index {} (start {})", index, self.start);
        self.index = index;
        if index < self.start {
            self.start = index;
        }
        Ok(())
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.length
    }

    /// Undo the advance of the last operation by moving the index back to the
    /// start offset.
    pub fn revert(&mut self) {
        trace!("revert {} -> {}", self.index, self.start);
        self.index = self.start;
    }

    fn check_offset(&self, offset: usize) -> Result<(), MatchError> {
        if offset > self.length {
            debug!("offset {} beyond length {}", offset, self.length);
            return Err(MatchError::IndexOutOfRange {
                index: offset,
                length: self.length,
            });
        }
        if !self.text.is_char_boundary(offset) {
            debug!("offset {} splits a character", offset);
            return Err(MatchError::NotCharBoundary { offset });
        }
        Ok(())
    }

    // === Match ===

    #[inline]
    fn rest(&self) -> &'t str {
        &self.text[self.index..]
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn accept(&mut self, end: usize) {
        self.start = self.index;
        self.index = end;
    }

    /// Scan forward from the index while `pred` holds, stopping after `max`
    /// characters (0 for no limit). Returns the end offset and the number of
    /// characters scanned.
    fn scan<P: CharPredicate>(&self, max: usize, pred: &P) -> (usize, usize) {
        let mut end = self.index;
        let mut count = 0;
        for ch in self.rest().chars() {
            if max > 0 && count == max {
                break;
            }
            if !pred.test(ch) {
                break;
            }
            end += ch.len_utf8();
            count += 1;
        }
        (end, count)
    }

    /// Match a single character.
    pub fn match_char(&mut self, ch: char) -> bool {
        match self.peek() {
            Some(next) if next == ch => {
                self.accept(self.index + ch.len_utf8());
                true
            }
            _ => false,
        }
    }

    /// Match a literal string. Nothing is consumed unless the whole literal
    /// matches.
    pub fn match_str(&mut self, literal: &str) -> bool {
        if !self.rest().starts_with(literal) {
            return false;
        }
        self.accept(self.index + literal.len());
        true
    }

    /// Match a single character accepted by `pred`.
    pub fn match_char_if<P: CharPredicate>(&mut self, pred: P) -> bool {
        match self.peek() {
            Some(next) if pred.test(next) => {
                self.accept(self.index + next.len_utf8());
                true
            }
            _ => false,
        }
    }

    /// Match a single character that occurs anywhere in `set`.
    pub fn match_any_of(&mut self, set: &str) -> bool {
        match self.peek() {
            Some(next) if set.contains(next) => {
                self.accept(self.index + next.len_utf8());
                true
            }
            _ => false,
        }
    }

    /// Match one or more characters accepted by `pred`.
    pub fn match_while<P: CharPredicate>(&mut self, pred: P) -> bool {
        self.match_while_bounded(0, 1, pred)
    }

    /// Match between one and `max` characters accepted by `pred` (`max` of 0
    /// means no limit).
    pub fn match_while_max<P: CharPredicate>(&mut self, max: usize, pred: P) -> bool {
        self.match_while_bounded(max, 1, pred)
    }

    /// Match between `min` and `max` characters accepted by `pred`.
    ///
    /// The scan stops at the first rejected character, at the end of the
    /// text, or after `max` characters (0 means no limit). The match succeeds
    /// if at least `min` characters were scanned; with `min == 0` it always
    /// succeeds, possibly consuming nothing.
    pub fn match_while_bounded<P: CharPredicate>(
        &mut self,
        max: usize,
        min: usize,
        pred: P,
    ) -> bool {
        let (end, count) = self.scan(max, &pred);
        if count < min {
            return false;
        }
        self.accept(end);
        true
    }

    /// Match one or more decimal digits.
    pub fn match_dec(&mut self) -> bool {
        self.match_while_bounded(0, 1, is_digit)
    }

    pub fn match_dec_max(&mut self, max: usize) -> bool {
        self.match_while_bounded(max, 1, is_digit)
    }

    pub fn match_dec_bounded(&mut self, max: usize, min: usize) -> bool {
        self.match_while_bounded(max, min, is_digit)
    }

    /// Match one or more hexadecimal digits.
    pub fn match_hex(&mut self) -> bool {
        self.match_while_bounded(0, 1, is_hex_digit)
    }

    pub fn match_hex_max(&mut self, max: usize) -> bool {
        self.match_while_bounded(max, 1, is_hex_digit)
    }

    pub fn match_hex_bounded(&mut self, max: usize, min: usize) -> bool {
        self.match_while_bounded(max, min, is_hex_digit)
    }

    /// Extend the last match with any number of characters accepted by
    /// `pred`. Always succeeds.
    pub fn match_continue<P: CharPredicate>(&mut self, pred: P) -> bool {
        self.match_continue_bounded(0, 0, pred)
    }

    /// Extend the last match with at most `max` characters accepted by
    /// `pred` (0 means no limit). Always succeeds.
    pub fn match_continue_max<P: CharPredicate>(&mut self, max: usize, pred: P) -> bool {
        self.match_continue_bounded(max, 0, pred)
    }

    /// Extend the last match with between `min` and `max` characters accepted
    /// by `pred`.
    ///
    /// Unlike the other match functions this leaves `start` where the previous
    /// match put it, so the result covers both matches. On failure the index
    /// is rewound to `start`, undoing the previous match as well; use it only
    /// directly after a successful match that began the same token.
    ///
    /// ```
    /// use text_matcher::{is_hex_digit, Matcher};
    ///
    /// let mut m = Matcher::new("%20%AX");
    /// assert!(m.match_char('%') && m.match_continue_bounded(2, 2, is_hex_digit));
    /// assert_eq!(m.result(), "%20");
    /// assert!(!(m.match_char('%') && m.match_continue_bounded(2, 2, is_hex_digit)));
    /// assert_eq!(m.index(), 3);
    /// ```
    pub fn match_continue_bounded<P: CharPredicate>(
        &mut self,
        max: usize,
        min: usize,
        pred: P,
    ) -> bool {
        let (end, count) = self.scan(max, &pred);
        if count < min {
            self.index = self.start;
            return false;
        }
        self.index = end;
        true
    }

    // === Skip ===

    /// Skip any number of characters that occur in `set`.
    pub fn skip_any_of(&mut self, set: &str) {
        self.start = self.index;
        while let Some(next) = self.peek() {
            if !set.contains(next) {
                break;
            }
            self.index += next.len_utf8();
        }
    }

    /// Skip any number of characters accepted by `pred`.
    pub fn skip_while<P: CharPredicate>(&mut self, pred: P) {
        let (end, _) = self.scan(0, &pred);
        self.accept(end);
    }

    /// Skip any number of repetitions of `ch`.
    pub fn skip_char(&mut self, ch: char) {
        self.skip_while(|next: char| next == ch);
    }

    /// Skip up to (not past) the next occurrence of `ch`, or to the end of the
    /// text if there is none.
    pub fn skip_to_char(&mut self, ch: char) {
        self.start = self.index;
        let haystack = &self.text.as_bytes()[self.index..];
        let found = if ch.is_ascii() {
            memchr::memchr(ch as u8, haystack)
        } else {
            let mut buf = [0u8; 4];
            memmem::find(haystack, ch.encode_utf8(&mut buf).as_bytes())
        };
        self.index = match found {
            Some(offset) => self.index + offset,
            None => self.length,
        };
    }

    /// Skip up to (not past) the next occurrence of `literal`, or to the end
    /// of the text if there is none. An empty literal skips nothing.
    pub fn skip_to_str(&mut self, literal: &str) {
        let mut chars = literal.chars();
        match (chars.next(), chars.next()) {
            (None, _) => self.start = self.index,
            (Some(ch), None) => self.skip_to_char(ch),
            _ => {
                self.start = self.index;
                let haystack = &self.text.as_bytes()[self.index..];
                self.index = match memmem::find(haystack, literal.as_bytes()) {
                    Some(offset) => self.index + offset,
                    None => self.length,
                };
            }
        }
    }

    /// Skip to the end of the text.
    pub fn skip_to_end(&mut self) {
        self.accept(self.length);
    }

    /// Skip exactly `n` characters.
    pub fn skip_fixed(&mut self, n: usize) -> Result<(), MatchError> {
        let mut end = self.index;
        let mut chars = self.rest().chars();
        for _ in 0..n {
            match chars.next() {
                Some(ch) => end += ch.len_utf8(),
                None => {
                    debug!("skip_fixed({}) runs past end at {}", n, end);
                    return Err(MatchError::IndexOutOfRange {
                        index: self.index.saturating_add(n),
                        length: self.length,
                    });
                }
            }
        }
        trace!("skip_fixed {}..{}", self.index, end);
        self.accept(end);
        Ok(())
    }

    /// Return the character at the index and advance past it.
    pub fn next_char(&mut self) -> Result<char, MatchError> {
        match self.peek() {
            Some(ch) => {
                self.accept(self.index + ch.len_utf8());
                Ok(ch)
            }
            None => {
                debug!("next_char at end of text ({})", self.index);
                Err(MatchError::IndexOutOfRange {
                    index: self.index,
                    length: self.length,
                })
            }
        }
    }

    // === Result ===

    /// The run consumed by the last operation, `text[start..index]`.
    pub fn result(&self) -> &'t str {
        &self.text[self.start..self.index]
    }

    /// The run consumed by the last operation, as an owned string.
    pub fn result_string(&self) -> String {
        self.result().to_string()
    }

    pub fn result_view(&self) -> TextView<'t> {
        TextView::new(self.text, self.start, self.index)
    }

    /// Length of the result in bytes.
    pub fn result_len(&self) -> usize {
        self.index - self.start
    }

    /// The first character of the result (the character at `start`).
    pub fn result_char(&self) -> Result<char, MatchError> {
        if self.start >= self.length {
            return Err(MatchError::IndexOutOfRange {
                index: self.start,
                length: self.length,
            });
        }
        self.char_at(self.start)
    }

    /// Write the result to `sink` without allocating.
    pub fn append_result_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.result())
    }

    /// `text[from..to]`. Does not move the matcher.
    pub fn substring(&self, from: usize, to: usize) -> Result<&'t str, MatchError> {
        check_range(self.text, from, to)?;
        Ok(&self.text[from..to])
    }

    pub fn substring_string(&self, from: usize, to: usize) -> Result<String, MatchError> {
        self.substring(from, to).map(str::to_string)
    }

    pub fn substring_view(&self, from: usize, to: usize) -> Result<TextView<'t>, MatchError> {
        check_range(self.text, from, to)?;
        Ok(TextView::new(self.text, from, to))
    }

    /// Write `text[from..to]` to `sink`. A sink failure is returned as
    /// [`MatchError::Write`].
    pub fn append_substring_to<W: fmt::Write + ?Sized>(
        &self,
        sink: &mut W,
        from: usize,
        to: usize,
    ) -> Result<(), MatchError> {
        let s = self.substring(from, to)?;
        sink.write_str(s)?;
        Ok(())
    }
}

impl<'t> From<&'t str> for Matcher<'t> {
    fn from(text: &'t str) -> Self {
        Matcher::new(text)
    }
}
