//! # Line Editor
//!
//! Accumulates keystrokes into the pending input line. It only knows about
//! its buffer; echoing and dispatch belong to the terminal session.

/// Enter / Return.
pub const LINE_TERMINATOR: char = '\r';
/// DEL, what most terminals send for the Backspace key.
pub const DELETE: char = '\u{7f}';
/// BS, sent by some terminals (and Ctrl+H) instead of DEL.
pub const BACKSPACE: char = '\u{8}';

/// What a single keystroke did to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// The line was completed. Carries the trimmed text, possibly empty.
    Submitted(String),
    /// One character was appended and should be echoed.
    Appended(char),
    /// The last character was removed and should be visually erased.
    Erased,
    /// Nothing changed (backspace on an empty buffer).
    Unchanged,
}

#[derive(Debug, Default, Clone)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    pub fn feed(&mut self, ch: char) -> Edit {
        match ch {
            LINE_TERMINATOR | '\n' => {
                let line = self.buffer.trim().to_string();
                self.buffer.clear();
                Edit::Submitted(line)
            }
            DELETE | BACKSPACE => match self.buffer.pop() {
                Some(_) => Edit::Erased,
                None => Edit::Unchanged,
            },
            _ => {
                self.buffer.push(ch);
                Edit::Appended(ch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_str(editor: &mut LineEditor, text: &str) {
        for ch in text.chars() {
            editor.feed(ch);
        }
    }

    #[test]
    fn test_append_and_submit_trims() {
        let mut editor = LineEditor::new();
        feed_str(&mut editor, "  help ");
        assert_eq!(editor.buffer(), "  help ");
        assert_eq!(editor.feed('\r'), Edit::Submitted("help".to_string()));
        assert!(editor.is_empty());
    }

    #[test]
    fn test_internal_whitespace_is_kept() {
        let mut editor = LineEditor::new();
        feed_str(&mut editor, " about  me ");
        assert_eq!(editor.feed('\r'), Edit::Submitted("about  me".to_string()));
    }

    #[test]
    fn test_backspace() {
        let mut editor = LineEditor::new();
        feed_str(&mut editor, "abc");
        assert_eq!(editor.feed(DELETE), Edit::Erased);
        assert_eq!(editor.feed(BACKSPACE), Edit::Erased);
        assert_eq!(editor.buffer(), "a");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut editor = LineEditor::new();
        assert_eq!(editor.feed(DELETE), Edit::Unchanged);
        assert!(editor.is_empty());
    }

    #[test]
    fn test_backspace_removes_whole_multibyte_char() {
        let mut editor = LineEditor::new();
        feed_str(&mut editor, "né");
        editor.feed(DELETE);
        assert_eq!(editor.buffer(), "n");
    }

    #[test]
    fn test_empty_line_submits_empty() {
        let mut editor = LineEditor::new();
        assert_eq!(editor.feed('\r'), Edit::Submitted(String::new()));
    }
}
