//! A lossless, error-tolerant lexical scanner for a Python-flavored
//! grammar, built for editor use.
//!
//! The scanner turns a source buffer into a flat sequence of typed
//! tokens, each carrying its exact source slice (zero-copy) and an
//! inclusive line/column span. Nothing is skipped: whitespace and
//! comments are tokens too, so the token texts concatenate back to the
//! input byte-for-byte. Malformed input never aborts a scan —
//! unterminated literals run to end of input and unrecognized
//! characters become [`TokenKind::Unknown`] tokens.
//!
//! Alongside the tokens, identifiers are classified as Variable,
//! Function, or Class by the keyword that introduces them, feeding
//! semantic coloring without a parse.
//!
//! ```
//! use pyscan::{LanguageProfile, Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("def greet():", LanguageProfile::python());
//! let tokens = scanner.lex();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[2].text, "greet");
//! ```

mod classify;
mod escape;
pub mod highlight;
mod profile;
mod scanner;

pub use classify::{ClassifiedIdentifier, DuplicateNamePolicy, IdentifierKind};
pub use profile::LanguageProfile;
pub use scanner::Scanner;

pub use pyscan_core::{Cursor, Position, Token, TokenKind};
