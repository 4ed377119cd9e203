//! Zero-based line/column positions with a total order.

use std::fmt;

/// A zero-based (line, column) position in the source buffer.
///
/// Positions are ordered lexicographically: line first, then column.
/// The cursor guarantees positions are monotonically non-decreasing as
/// it advances, so adjacent tokens always satisfy
/// `earlier.end <= later.start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based line number. Incremented after consuming a newline.
    pub line: u32,
    /// Zero-based column on the line. Reset to 0 after a newline,
    /// incremented by one for every other consumed byte.
    pub column: u32,
}

impl Position {
    /// Create a position from a line and column pair.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
