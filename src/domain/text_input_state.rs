//! Editable single-line text value with a character cursor.

use unicode_width::UnicodeWidthStr;

/// Upper bound for typed input, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputState {
    text: String,
    /// Character index, not byte.
    cursor: usize,
    max_length: usize,
}

impl Default for TextInputState {
    fn default() -> Self {
        Self::with_max_length(DEFAULT_MAX_LENGTH)
    }
}

impl TextInputState {
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            max_length,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the whole value (script-side assignment) and parks the cursor at the end.
    /// The length cap only limits typing.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
        self.cursor = self.char_count();
    }

    /// Returns false when the value is already at its maximum length.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.char_count() >= self.max_length {
            return false;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
        true
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    pub fn delete_at_cursor(&mut self) {
        if self.cursor < self.char_count() {
            self.remove_at_cursor();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Terminal columns occupied by the text left of the cursor.
    pub fn width_before_cursor(&self) -> usize {
        self.text[..self.byte_index(self.cursor)].width()
    }

    fn remove_at_cursor(&mut self) {
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.drain(start..end);
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}
