//! Cursor over the program text: index, line/column and scan direction.
//!
//! The cursor moves one character at a time in the current direction and
//! keeps the line/column of the character it is on. The direction is plain
//! mutable state: whichever rule was pushed last decides it, and nothing
//! restores the previous direction when that rule closes.
//!
//! # Coordinates
//!
//! The first character is at line 1, column 1. A newline opens the next line
//! and sits at column 0 of it, so the character after it is at column 1.
//!
//! # Moving left across a newline
//!
//! Moving left over a line boundary needs the column of the line above.
//! [`ColumnMemory`] decides how that column is remembered.

use crate::rule::Direction;

/// How columns of previous lines are remembered for leftward moves.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ColumnMemory {
    /// One remembered column per crossed line. A leftward move is the exact
    /// inverse of the rightward move, so a character gets the same
    /// coordinates whichever way the cursor reaches it.
    #[default]
    Stack,
    /// A single slot holding the column of the most recently ended line.
    ///
    /// Only correct when a reversal crosses at most one line boundary, and
    /// the newline itself is reported at the end of the previous line when
    /// reached from the right. Kept for compatibility with older column
    /// numbering.
    SingleSlot,
}

#[derive(Clone, Debug)]
pub struct Position {
    index: usize,
    line: u32,
    column: u32,
    direction: Direction,
    memory: ColumnMemory,
    /// `ColumnMemory::Stack`: column of the last character of each line above.
    line_columns: Vec<u32>,
    /// `ColumnMemory::SingleSlot`: column of the last character of the previous line.
    prev_line_column: u32,
}

impl Position {
    /// Cursor before the first character, facing right.
    pub fn new(memory: ColumnMemory) -> Self {
        Position {
            index: 0,
            line: 1,
            column: 0,
            direction: Direction::Right,
            memory,
            line_columns: Vec::new(),
            prev_line_column: 0,
        }
    }

    /// Enter the first character of `text`.
    ///
    /// Returns `false` if the text is empty.
    pub fn enter(&mut self, text: &[char]) -> bool {
        match text.first() {
            Some(&c) => {
                self.index = 0;
                self.arrive_right(c);
                true
            }
            None => false,
        }
    }

    /// Move one character in the current direction.
    ///
    /// Returns `false` when the move would leave the text: past the end when
    /// moving right, before index 0 when moving left. A leftward move at index
    /// 0 does not move at all.
    pub fn advance(&mut self, text: &[char]) -> bool {
        match self.direction {
            Direction::Right => {
                self.index += 1;
                match text.get(self.index) {
                    Some(&c) => {
                        self.arrive_right(c);
                        true
                    }
                    None => false,
                }
            }
            Direction::Left => {
                if self.index == 0 {
                    return false;
                }
                let (Some(&leaving), Some(&arriving)) =
                    (text.get(self.index), text.get(self.index - 1))
                else {
                    return false;
                };
                self.index -= 1;
                self.arrive_left(leaving, arriving);
                true
            }
        }
    }

    /// Move right until the cursor is on `target`.
    ///
    /// Returns `false` if the end of the text is reached first.
    pub fn skip_to(&mut self, target: usize, text: &[char]) -> bool {
        let saved = self.direction;
        self.direction = Direction::Right;
        let mut inside = true;
        while inside && self.index < target {
            inside = self.advance(text);
        }
        self.direction = saved;
        inside
    }

    /// Move left until the cursor is on `target`, keeping the direction.
    ///
    /// Returns `false` if index 0 is reached before `target`.
    pub fn skip_back_to(&mut self, target: usize, text: &[char]) -> bool {
        let saved = self.direction;
        self.direction = Direction::Left;
        while self.index > target && self.advance(text) {}
        self.direction = saved;
        self.index == target
    }

    fn arrive_right(&mut self, c: char) {
        if c == '\n' {
            match self.memory {
                ColumnMemory::Stack => self.line_columns.push(self.column),
                ColumnMemory::SingleSlot => self.prev_line_column = self.column,
            }
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    fn arrive_left(&mut self, leaving: char, arriving: char) {
        match self.memory {
            ColumnMemory::Stack => {
                if leaving == '\n' {
                    self.line = self.line.saturating_sub(1);
                    self.column = self.line_columns.pop().unwrap_or(0);
                } else {
                    self.column = self.column.saturating_sub(1);
                }
            }
            ColumnMemory::SingleSlot => {
                if arriving == '\n' {
                    self.line = self.line.saturating_sub(1);
                    self.column = self.prev_line_column;
                } else {
                    self.column = self.column.saturating_sub(1);
                }
            }
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Check if a leftward scan has nowhere left to go.
    #[inline]
    pub fn at_left_edge(&self) -> bool {
        self.direction == Direction::Left && self.index == 0
    }
}
