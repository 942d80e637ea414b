use unicode_width::UnicodeWidthStr;

/// Single-line text field shared by search and add.
///
/// The cursor is a character index, not a byte offset.
#[derive(Debug, Default)]
pub struct InputState {
    pub cursor: usize,
    text: String,
}

impl InputState {
    /// Creates an empty field with the cursor at position `0`.
    pub fn new() -> Self {
        Self {
            cursor: 0,
            text: String::new(),
        }
    }

    /// Creates a field from existing text with the cursor at the end.
    pub fn with_text(text: String) -> Self {
        let cursor = text.chars().count();

        Self { cursor, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Empties the field and resets the cursor.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.text.clear();
    }

    /// Inserts one character at the cursor and advances the cursor.
    ///
    /// Line breaks are dropped since the field is single-line.
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' {
            return;
        }

        let byte_offset = self.byte_offset();
        self.text.insert(byte_offset, ch);
        self.cursor += 1;
    }

    /// Inserts pasted text at the cursor, flattening line breaks to spaces.
    pub fn insert_text(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
            .collect();
        if flattened.is_empty() {
            return;
        }

        let byte_offset = self.byte_offset();
        self.text.insert_str(byte_offset, &flattened);
        self.cursor += flattened.chars().count();
    }

    /// Deletes the character immediately before the cursor.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_offset_at(self.cursor - 1);
        let end = self.byte_offset();
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Deletes the character at the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }

        let start = self.byte_offset();
        let end = self.byte_offset_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Returns the display width of the text left of the cursor.
    pub fn cursor_display_width(&self) -> usize {
        self.text[..self.byte_offset()].width()
    }

    fn byte_offset(&self) -> usize {
        self.byte_offset_at(self.cursor)
    }

    fn byte_offset_at(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(index, _)| index)
    }
}
