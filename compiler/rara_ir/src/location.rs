//! Line/column spans.

use std::fmt;

/// A line/column span in the source text.
///
/// Lines start at 1 and columns at 1 for the first character of a line; a
/// newline character sits at column 0 of the line it opens. The all-zero
/// location is the "start of file / unset" sentinel.
///
/// A location only has to be ordered (`start <= end`) once it is complete.
/// While a rule activation is open one of its ends is still zero.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct CodeLocation {
    pub line_start: u32,
    pub column_start: u32,
    pub line_end: u32,
    pub column_end: u32,
}

impl CodeLocation {
    /// The unset location.
    pub const START: CodeLocation = CodeLocation {
        line_start: 0,
        column_start: 0,
        line_end: 0,
        column_end: 0,
    };

    #[inline]
    pub const fn new(line_start: u32, column_start: u32, line_end: u32, column_end: u32) -> Self {
        CodeLocation {
            line_start,
            column_start,
            line_end,
            column_end,
        }
    }

    /// Location opened at `(line, column)` whose end is not known yet.
    #[inline]
    pub const fn open_start(line: u32, column: u32) -> Self {
        CodeLocation::new(line, column, 0, 0)
    }

    /// Location closed at `(line, column)` whose start is not known yet.
    #[inline]
    pub const fn open_end(line: u32, column: u32) -> Self {
        CodeLocation::new(0, 0, line, column)
    }

    /// A single-character location.
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        CodeLocation::new(line, column, line, column)
    }

    /// Check the ordering invariant: start does not come after end.
    pub const fn is_valid(&self) -> bool {
        if self.line_start > self.line_end {
            return false;
        }
        !(self.line_start == self.line_end && self.column_start > self.column_end)
    }

    /// Check if this is the all-zero sentinel.
    #[inline]
    pub const fn is_start(&self) -> bool {
        self.line_start == 0 && self.column_start == 0 && self.line_end == 0 && self.column_end == 0
    }

    /// Check if `(line, column)` falls inside this span (both ends inclusive).
    pub fn contains(&self, line: u32, column: u32) -> bool {
        let after_start =
            line > self.line_start || (line == self.line_start && column >= self.column_start);
        let before_end = line < self.line_end || (line == self.line_end && column <= self.column_end);
        after_start && before_end
    }
}

impl fmt::Debug for CodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for CodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}:{})-({}:{})",
            self.line_start, self.column_start, self.line_end, self.column_end
        )
    }
}
