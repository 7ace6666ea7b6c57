// predicate.rs - Single-character tests and their composition.

use smallvec::SmallVec;

/// A test applied to one character at a time.
///
/// Implemented for every `Fn(char) -> bool`, so closures and functions such as
/// [`char::is_alphabetic`] or [`is_digit`](crate::is_digit) can be passed
/// wherever a predicate is expected.
///
/// ```
/// use text_matcher::{is_digit, CharPredicate};
///
/// let ident = char::is_alphabetic.or(is_digit).or(|c: char| c == '_');
/// assert!(ident.test('_'));
/// assert!(!ident.test('-'));
/// assert!(ident.negate().test('-'));
/// ```
pub trait CharPredicate {
    fn test(&self, ch: char) -> bool;

    /// Accepts a character only if both `self` and `other` accept it.
    fn and<P: CharPredicate>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Accepts a character if either `self` or `other` accepts it.
    fn or<P: CharPredicate>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Accepts exactly the characters `self` rejects.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<F> CharPredicate for F
where
    F: Fn(char) -> bool,
{
    #[inline]
    fn test(&self, ch: char) -> bool {
        self(ch)
    }
}

/// Conjunction of two predicates, see [`CharPredicate::and`].
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<A: CharPredicate, B: CharPredicate> CharPredicate for And<A, B> {
    #[inline]
    fn test(&self, ch: char) -> bool {
        self.0.test(ch) && self.1.test(ch)
    }
}

/// Disjunction of two predicates, see [`CharPredicate::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<A: CharPredicate, B: CharPredicate> CharPredicate for Or<A, B> {
    #[inline]
    fn test(&self, ch: char) -> bool {
        self.0.test(ch) || self.1.test(ch)
    }
}

/// Negation of a predicate, see [`CharPredicate::negate`].
#[derive(Debug, Clone, Copy)]
pub struct Not<P>(P);

impl<P: CharPredicate> CharPredicate for Not<P> {
    #[inline]
    fn test(&self, ch: char) -> bool {
        !self.0.test(ch)
    }
}

/// A precompiled set of characters.
///
/// ASCII members live in a bitmap; anything else is kept in a short inline
/// list. Use it instead of a `&str` set when the same set is tested many times.
///
/// ```
/// use text_matcher::{CharSet, Matcher};
///
/// let blanks = CharSet::new(" \t\u{a0}");
/// let mut m = Matcher::new(" \u{a0}\tx");
/// m.skip_while(&blanks);
/// assert_eq!(m.result(), " \u{a0}\t");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    ascii: u128,
    other: SmallVec<[char; 4]>,
}

impl CharSet {
    /// Build a set holding every character of `chars`.
    pub fn new(chars: &str) -> CharSet {
        chars.chars().collect()
    }

    pub fn insert(&mut self, ch: char) {
        if ch.is_ascii() {
            self.ascii |= 1u128 << (ch as u32);
        } else if !self.other.contains(&ch) {
            self.other.push(ch);
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii & (1u128 << (ch as u32)) != 0
        } else {
            self.other.contains(&ch)
        }
    }

    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.other.is_empty()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = CharSet::default();
        for ch in iter {
            set.insert(ch);
        }
        set
    }
}

impl CharPredicate for CharSet {
    #[inline]
    fn test(&self, ch: char) -> bool {
        self.contains(ch)
    }
}

impl CharPredicate for &CharSet {
    #[inline]
    fn test(&self, ch: char) -> bool {
        self.contains(ch)
    }
}
