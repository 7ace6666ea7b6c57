// view.rs - Borrowed sub-range of the matcher text.

use std::fmt;
use std::ops::Range;

use crate::error::MatchError;

/// A read-only view of `text[start..end]` that never copies the text.
///
/// Offsets are byte offsets into the backing text and always lie on
/// character boundaries.
///
/// ```
/// use text_matcher::Matcher;
///
/// let m = Matcher::new("Hello, world!");
/// let view = m.substring_view(7, 12).unwrap();
/// assert_eq!(view, "world");
/// assert_eq!(view.char_at(1).unwrap(), 'o');
/// assert_eq!(view.sub_view(1, 3).unwrap(), "or");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextView<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> TextView<'t> {
    /// Callers must have checked `start <= end <= text.len()` and the character
    /// boundaries.
    pub(crate) fn new(text: &'t str, start: usize, end: usize) -> TextView<'t> {
        debug_assert!(start <= end && end <= text.len());
        TextView { text, start, end }
    }

    /// Byte offset of the start of the view in the backing text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the view in the backing text (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the view in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    pub fn chars(&self) -> std::str::Chars<'t> {
        self.as_str().chars()
    }

    /// The character at byte `offset` relative to the start of the view.
    pub fn char_at(&self, offset: usize) -> Result<char, MatchError> {
        let s = self.as_str();
        if offset >= s.len() {
            return Err(MatchError::IndexOutOfRange {
                index: offset,
                length: s.len(),
            });
        }
        if !s.is_char_boundary(offset) {
            return Err(MatchError::NotCharBoundary { offset });
        }
        s[offset..]
            .chars()
            .next()
            .ok_or(MatchError::IndexOutOfRange {
                index: offset,
                length: s.len(),
            })
    }

    /// A view of `from..to`, relative to the start of this view.
    pub fn sub_view(&self, from: usize, to: usize) -> Result<TextView<'t>, MatchError> {
        let s = self.as_str();
        check_range(s, from, to)?;
        Ok(TextView::new(self.text, self.start + from, self.start + to))
    }
}

/// Validate `from..to` against `text`: not inverted, within bounds, and on
/// character boundaries.
pub(crate) fn check_range(text: &str, from: usize, to: usize) -> Result<(), MatchError> {
    if from > to || to > text.len() {
        return Err(MatchError::RangeOutOfBounds {
            from,
            to,
            length: text.len(),
        });
    }
    if !text.is_char_boundary(from) {
        return Err(MatchError::NotCharBoundary { offset: from });
    }
    if !text.is_char_boundary(to) {
        return Err(MatchError::NotCharBoundary { offset: to });
    }
    Ok(())
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextView({}..{}, {:?})", self.start, self.end, self.as_str())
    }
}

impl AsRef<str> for TextView<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for TextView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<'t> From<TextView<'t>> for String {
    fn from(view: TextView<'t>) -> String {
        view.as_str().to_string()
    }
}
