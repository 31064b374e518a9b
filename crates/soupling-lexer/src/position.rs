//! Source position tracking.
//!
//! Positions are counted in characters (not bytes) so they stay aligned
//! with the lexer's character cursor. Lines and columns are 1-based.

use serde::{Deserialize, Serialize};

/// A cursor into the source text.
///
/// `Copy`, so capturing a position into a span always snapshots it;
/// the live cursor is never aliased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(index: usize, line: usize, column: usize) -> Self {
        Self {
            index,
            line,
            column,
        }
    }

    /// Advance to `target` (a character index), scanning every consumed
    /// character so line and column stay accurate. Targets are always at
    /// or ahead of the cursor by construction; past-the-end targets clamp
    /// to the end of the buffer.
    pub fn advance_to(&mut self, chars: &[char], target: usize) {
        let target = target.min(chars.len());
        while self.index < target {
            if chars[self.index] == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.index += 1;
        }
    }

    /// Advance by `count` characters.
    pub fn advance_by(&mut self, chars: &[char], count: usize) {
        self.advance_to(chars, self.index + count);
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            index: 0,
            line: 1,
            column: 1,
        }
    }
}

/// A region of source bracketed by two positions, `start` inclusive and
/// `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}
