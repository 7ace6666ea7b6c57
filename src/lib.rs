//! # text-matcher
//!
//! A cursor-based text matching primitive for hand-written parsers:
//! tokenizers, protocol readers, format decoders.
//!
//! A [`Matcher`] holds a borrowed string and two byte offsets, `start` and
//! `index`. Match functions test the text at `index` and return `bool`;
//! skip functions always advance; result functions hand back
//! `text[start..index]`, the run consumed by the last operation, as a
//! `&str`, a zero-copy [`TextView`], or an overflow-checked integer.
//!
//! ## Quick Start
//!
//! ```rust
//! use text_matcher::prelude::*;
//!
//! let mut m = Matcher::new("Content-Length: 348\r\n");
//! assert!(m.match_while(|c: char| c.is_ascii_alphanumeric() || c == '-'));
//! assert_eq!(m.result(), "Content-Length");
//! assert!(m.match_char(':'));
//! m.skip_any_of(" \t");
//! assert!(m.match_dec());
//! assert_eq!(m.result_int().unwrap(), 348);
//! assert!(m.match_str("\r\n"));
//! assert!(m.is_at_end());
//! ```
//!
//! A failed match is not an error and changes nothing, so alternatives are
//! plain boolean logic:
//!
//! ```rust
//! use text_matcher::prelude::*;
//!
//! let mut m = Matcher::new("-0x1F");
//! let negative = m.match_char('-');
//! let value = if m.match_str("0x") && m.match_hex() {
//!     let magnitude = m.result_hex_long().unwrap() as i64;
//!     if negative { -magnitude } else { magnitude }
//! } else if m.match_dec() {
//!     m.result_long_signed(negative).unwrap()
//! } else {
//!     panic!("no number");
//! };
//! assert_eq!(value, -31);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matcher`] | The `Matcher` cursor: position, match, skip, result |
//! | [`number`] | Decimal and hex conversion with overflow detection |
//! | [`view`] | `TextView`, a borrowed sub-range of the text |
//! | [`predicate`] | `CharPredicate` and its `and`/`or`/`negate` combinators, `CharSet` |
//! | [`ctype`] | `CharClass` ASCII character classes |
//! | [`error`] | `MatchError`, `NumberFormatError`, `ErrorKind` |
//!
//! ## Features
//!
//! - `log` (default): emit `trace`/`debug` records through the [`log`](https://docs.rs/log)
//!   facade under the `text_matcher` target.

#[macro_use]
mod macros;

pub mod ctype;
pub mod error;
pub mod matcher;
pub mod number;
pub mod predicate;
pub mod prelude;
pub mod view;

pub use ctype::{is_digit, is_hex_digit, CharClass};
pub use error::{ErrorKind, MatchError, NumberFormatError};
pub use matcher::Matcher;
pub use number::{digit_value, hex_digit_value};
pub use predicate::{CharPredicate, CharSet};
pub use view::TextView;
