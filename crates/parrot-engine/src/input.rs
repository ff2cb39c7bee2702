//! Single-line input buffer with a character cursor.

/// An edit applied to the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character at the cursor.
    Delete,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    /// Replace the whole buffer, leaving the cursor at the end.
    Replace(String),
}

/// Input buffer owned by the conversation.
///
/// The cursor is a character index, never a byte offset, so editing
/// multi-byte text stays on character boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when the content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, clearing the buffer.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    /// Apply a single edit.
    pub fn apply(&mut self, edit: InputEdit) {
        match edit {
            InputEdit::Insert(ch) => self.insert(ch),
            InputEdit::Backspace => self.backspace(),
            InputEdit::Delete => self.delete(),
            InputEdit::MoveLeft => self.cursor = self.cursor.saturating_sub(1),
            InputEdit::MoveRight => self.cursor = (self.cursor + 1).min(self.char_len()),
            InputEdit::MoveHome => self.cursor = 0,
            InputEdit::MoveEnd => self.cursor = self.char_len(),
            InputEdit::Replace(text) => {
                self.cursor = text.chars().count();
                self.content = text;
            }
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.content.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(i, _)| i)
    }
}
