//! Compose input state: a single-line editable buffer with a cursor.
//!
//! The cursor is tracked as a char index so editing stays correct on
//! multi-byte input. The buffer never interprets Enter; the keyboard
//! handler decides when to send.

/// Editable state of the compose box.
#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    /// Current buffer contents
    buffer: String,
    /// Cursor position as a char index (0..=char count)
    cursor: usize,
}

impl ComposeState {
    /// Create an empty compose buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is empty after trimming (nothing sendable).
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Insert a character at the cursor and advance past it.
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.buffer.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let idx = self.byte_index(self.cursor - 1);
        self.buffer.remove(idx);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor (Delete).
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.buffer.remove(idx);
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move the cursor to the start of the buffer.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the buffer.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Drain the buffer and return its trimmed contents.
    pub fn take(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        text.trim().to_string()
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of the given char index.
    fn byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map_or(self.buffer.len(), |(idx, _)| idx)
    }
}
