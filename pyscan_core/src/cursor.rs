//! Byte cursor over the input buffer with line/column tracking.
//!
//! The cursor advances byte-by-byte. `peek()` past the end returns the
//! `0x00` sentinel and never fails; `consume()` past the end is a
//! programming error and panics. Consuming a newline increments the line
//! and resets the column; every other byte increments the column.
//!
//! The position recorded just before each advance is kept as the
//! "previous position" — it is the inclusive end marker committed into
//! multi-character tokens.

use crate::Position;

/// Sentinel byte returned by [`Cursor::peek`] at end of input.
pub const EOF_BYTE: u8 = 0;

/// Stateful cursor: current byte index plus the position pair used for
/// token span construction.
///
/// The cursor is [`Copy`], enabling cheap snapshots: `begin`/`commit`
/// style scanning saves `(index, position)` and later slices the buffer
/// between the snapshot and the cursor.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    index: usize,
    position: Position,
    previous_position: Position,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at byte 0, position 0:0.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            index: 0,
            position: Position::default(),
            previous_position: Position::default(),
        }
    }

    /// Returns the byte at `index + offset`, or [`EOF_BYTE`] when out of
    /// bounds. Never advances, never fails.
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        match self.input.as_bytes().get(self.index + offset) {
            Some(&b) => b,
            None => EOF_BYTE,
        }
    }

    /// Returns the current byte, or [`EOF_BYTE`] at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Consume the current byte and return it, updating positions.
    ///
    /// # Panics
    ///
    /// Panics when called at end of input. This is a precondition
    /// violation in the caller, not a recoverable condition — every
    /// dispatch arm checks `peek()` before consuming.
    #[inline]
    pub fn consume(&mut self) -> u8 {
        assert!(
            self.index < self.input.len(),
            "cursor consumed past end of input"
        );
        let byte = self.input.as_bytes()[self.index];
        self.index += 1;
        self.previous_position = self.position;
        if byte == b'\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        byte
    }

    /// Consume everything up to (but not including) the next `\n`, or to
    /// end of input.
    ///
    /// Equivalent to consuming one byte at a time while the current byte
    /// is neither newline nor EOF, but uses a SIMD-accelerated search to
    /// find the newline. The consumed run contains no newlines, so the
    /// column advances by the run length.
    pub fn consume_line_remainder(&mut self) {
        let rest = &self.input.as_bytes()[self.index..];
        let len = match memchr::memchr(b'\n', rest) {
            Some(offset) => offset,
            None => rest.len(),
        };
        if len == 0 {
            return;
        }
        let advanced = u32::try_from(len).unwrap_or(u32::MAX);
        self.index += len;
        self.previous_position = Position {
            line: self.position.line,
            column: self.position.column + advanced - 1,
        };
        self.position.column += advanced;
    }

    /// Returns `true` when the cursor has reached end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.index >= self.input.len()
    }

    /// Current byte index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position of the byte the cursor currently points at.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Position of the most recently consumed byte — the inclusive end
    /// marker for a token whose last byte was just consumed.
    #[inline]
    pub fn previous_position(&self) -> Position {
        self.previous_position
    }

    /// Extract a source substring.
    ///
    /// `start..end` must fall on character boundaries; the scanner
    /// guarantees this because token boundaries only ever land on ASCII
    /// bytes or whole-character fallback consumption.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Extract the substring from `start` to the current index.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.index)
    }

    /// Number of bytes in the UTF-8 character whose leading byte is `byte`.
    ///
    /// ASCII, continuation, and invalid bytes all report width 1 so the
    /// cursor always makes progress.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }
}
