//! Token/position model and scanning cursor for the pyscan lexer.
//!
//! This crate is standalone: external tools (highlighters, formatters,
//! navigation helpers) can consume tokens and positions without pulling
//! in the scanner itself.
//!
//! The model is zero-copy throughout: a [`Token`] borrows its `text`
//! from the input buffer, and the buffer must outlive every token
//! derived from it.

mod cursor;
mod position;
mod token;

pub use cursor::{Cursor, EOF_BYTE};
pub use position::Position;
pub use token::{Token, TokenKind};
