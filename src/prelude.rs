// prelude.rs - Convenient re-exports for parser code.
//
//! # Prelude
//!
//! ```
//! use text_matcher::prelude::*;
//!
//! let mut m = Matcher::new("x = 42");
//! assert!(m.match_char_if(CharClass::ALPHA));
//! m.skip_while(CharClass::BLANK);
//! assert!(m.match_char('='));
//! ```

pub use crate::ctype::{is_digit, is_hex_digit, CharClass};
pub use crate::error::{ErrorKind, MatchError, NumberFormatError};
pub use crate::matcher::Matcher;
pub use crate::predicate::{CharPredicate, CharSet};
pub use crate::view::TextView;
