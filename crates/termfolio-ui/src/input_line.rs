//! InputLine widget: the command line under the transcript.
//!
//! Three independent concerns share the widget: buffer editing, history
//! recall and tab completion. History is kept most-recent-first; the history
//! cursor is `None` while no entry is selected.

use termfolio_types::input::{CursorMove, InputEvent};

use crate::completion::{Completion, complete};

/// Maximum number of history entries to retain.
pub const MAX_HISTORY: usize = 100;

/// What the owner of the widget should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// State changed (or not); nothing to dispatch.
    None,
    /// Run this raw, untrimmed command line.
    Submit(String),
    /// Leave the terminal.
    Quit,
}

/// Single-line command input with history and completion.
pub struct InputLine {
    /// Current text content.
    text: String,
    /// Cursor position as character index.
    cursor_pos: usize,
    /// Submitted lines, newest first.
    history: Vec<String>,
    history_cursor: Option<usize>,
    /// Last multi-match completion candidates.
    suggestions: Vec<String>,
    suggestions_visible: bool,
    /// Words offered by tab completion.
    vocabulary: Vec<String>,
}

impl InputLine {
    /// Create an empty input line completing against `vocabulary`.
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: String::new(),
            cursor_pos: 0,
            history: Vec::new(),
            history_cursor: None,
            suggestions: Vec::new(),
            suggestions_visible: false,
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Submitted lines, newest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Selected history index, `None` when browsing is inactive.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Completion candidates, if the picker is showing.
    pub fn suggestions(&self) -> Option<&[String]> {
        if self.suggestions_visible && !self.suggestions.is_empty() {
            Some(&self.suggestions)
        } else {
            None
        }
    }

    /// Replace the buffer and park the cursor at its end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor_pos = self.text.chars().count();
    }

    fn byte_pos(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let byte_pos = self.byte_pos(self.cursor_pos);
        self.text.insert(byte_pos, ch);
        self.cursor_pos += 1;
        self.suggestions_visible = false;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        self.suggestions_visible = false;
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_pos = self.byte_pos(self.cursor_pos);
            if byte_pos < self.text.len() {
                self.text.remove(byte_pos);
            }
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        self.suggestions_visible = false;
        let byte_pos = self.byte_pos(self.cursor_pos);
        if byte_pos < self.text.len() {
            self.text.remove(byte_pos);
        }
    }

    pub fn move_cursor(&mut self, m: CursorMove) {
        self.cursor_pos = match m {
            CursorMove::Left => self.cursor_pos.saturating_sub(1),
            CursorMove::Right => (self.cursor_pos + 1).min(self.char_len()),
            CursorMove::Home => 0,
            CursorMove::End => self.char_len(),
        };
    }

    pub fn clear_line(&mut self) {
        self.text.clear();
        self.cursor_pos = 0;
        self.suggestions_visible = false;
    }

    // -- History --

    /// Step one entry further into the past, clamped at the oldest.
    pub fn history_older(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_cursor {
            Some(i) => (i + 1).min(self.history.len() - 1),
            None => 0,
        };
        self.history_cursor = Some(idx);
        let entry = self.history[idx].clone();
        self.set_text(&entry);
    }

    /// Step back toward the present. Leaving the newest entry empties the
    /// buffer and deselects history.
    pub fn history_newer(&mut self) {
        let Some(cursor) = self.history_cursor else {
            return;
        };
        if cursor == 0 {
            self.history_cursor = None;
            self.clear_line();
        } else {
            let idx = cursor - 1;
            self.history_cursor = Some(idx);
            let entry = self.history[idx].clone();
            self.set_text(&entry);
        }
    }

    // -- Completion --

    /// Complete the last token. A single match rewrites the buffer, several
    /// matches open the picker.
    pub fn complete(&mut self) {
        match complete(&self.text, &self.vocabulary) {
            Completion::NoMatch => {},
            Completion::Single(full) => {
                self.set_text(&full);
                self.suggestions_visible = false;
            },
            Completion::Multiple(candidates) => {
                log::debug!("{} completion candidates", candidates.len());
                self.suggestions = candidates;
                self.suggestions_visible = true;
            },
        }
    }

    /// Fill the buffer with a visible candidate. Returns false if the picker
    /// is closed or the index is out of range.
    pub fn pick_suggestion(&mut self, index: usize) -> bool {
        if !self.suggestions_visible {
            return false;
        }
        let Some(choice) = self.suggestions.get(index).cloned() else {
            return false;
        };
        self.set_text(&choice);
        self.suggestions_visible = false;
        true
    }

    // -- Submit --

    /// Take the buffer for execution.
    ///
    /// Non-blank lines are remembered in history. The raw buffer is returned
    /// either way, and the widget resets to an empty, unselected state.
    pub fn submit(&mut self) -> String {
        self.suggestions_visible = false;
        let line = std::mem::take(&mut self.text);
        if !line.trim().is_empty() {
            self.history.insert(0, line.clone());
            self.history.truncate(MAX_HISTORY);
        }
        self.cursor_pos = 0;
        self.history_cursor = None;
        line
    }

    /// Apply a platform-agnostic input event.
    pub fn handle(&mut self, event: InputEvent) -> InputAction {
        match event {
            InputEvent::TextInput(ch) => self.insert(ch),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Delete => self.delete(),
            InputEvent::Cursor(m) => self.move_cursor(m),
            InputEvent::ClearLine => self.clear_line(),
            InputEvent::HistoryOlder => self.history_older(),
            InputEvent::HistoryNewer => self.history_newer(),
            InputEvent::Complete => self.complete(),
            InputEvent::PickSuggestion(i) => {
                self.pick_suggestion(i);
            },
            InputEvent::Submit => return InputAction::Submit(self.submit()),
            InputEvent::Quit => return InputAction::Quit,
        }
        InputAction::None
    }
}

impl Default for InputLine {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}
