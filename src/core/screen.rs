//! # Display Surface
//!
//! A minimal scrollback that understands the handful of control characters
//! the terminal session writes: newline, carriage return and backspace.
//! Every cell remembers the `Tint` it was written with so the TUI can colour
//! headers, prompts, echoed input and command output differently.
//!
//! ```text
//! "\u{8} \u{8}"   cursor back, blank, cursor back  (visual erase)
//! "\n"            next line, column 0
//! "\r"            column 0
//! ```
//!
//! Line wrapping is a presentation concern and is left to the renderer.

use std::collections::VecDeque;

/// Lines kept before the oldest are dropped.
pub const SCROLLBACK_LIMIT: usize = 1000;

/// Role of a piece of text, resolved to a colour by the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    /// Static header and rule
    Header,
    /// `user@portfolio:~$ `
    Prompt,
    /// Characters the user typed
    Echo,
    /// Command responses and messages
    #[default]
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tint: Tint,
}

/// Anything the terminal session can write to.
pub trait Surface {
    fn write(&mut self, text: &str, tint: Tint);
    fn clear(&mut self);
}

#[derive(Debug, Clone)]
pub struct Scrollback {
    lines: VecDeque<Vec<Cell>>,
    /// Cursor column on the last line
    col: usize,
    limit: usize,
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollback {
    pub fn new() -> Self {
        Self::with_limit(SCROLLBACK_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        let mut lines = VecDeque::new();
        lines.push_back(Vec::new());
        Self {
            lines,
            col: 0,
            limit: limit.max(1),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &[Cell]> {
        self.lines.iter().map(Vec::as_slice)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cursor as (row, column), row counted from the oldest retained line.
    pub fn cursor(&self) -> (usize, usize) {
        (self.lines.len() - 1, self.col)
    }

    /// Plain text of one line with trailing blanks removed.
    pub fn line_text(&self, row: usize) -> String {
        self.lines
            .get(row)
            .map(|cells| cells.iter().map(|c| c.ch).collect::<String>())
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default()
    }

    /// Whole surface as plain text, one `\n` per line.
    pub fn text(&self) -> String {
        (0..self.lines.len())
            .map(|row| self.line_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn put(&mut self, ch: char, tint: Tint) {
        match ch {
            '\n' => {
                self.lines.push_back(Vec::new());
                self.col = 0;
                while self.lines.len() > self.limit {
                    self.lines.pop_front();
                }
            }
            '\r' => self.col = 0,
            '\u{8}' => self.col = self.col.saturating_sub(1),
            _ => {
                let col = self.col;
                let Some(line) = self.lines.back_mut() else {
                    return;
                };
                let cell = Cell { ch, tint };
                if col < line.len() {
                    line[col] = cell;
                } else {
                    line.resize(col, Cell { ch: ' ', tint });
                    line.push(cell);
                }
                self.col += 1;
            }
        }
    }
}

impl Surface for Scrollback {
    fn write(&mut self, text: &str, tint: Tint) {
        for ch in text.chars() {
            self.put(ch, tint);
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.lines.push_back(Vec::new());
        self.col = 0;
    }
}
