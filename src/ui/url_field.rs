//! Single-line text input for the link to analyze.

/// Edit buffer with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlField {
    value: String,
    /// Cursor position in characters, `0..=len`.
    cursor: usize,
}

impl UrlField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert pasted text. Line breaks and other control characters are
    /// dropped since a URL is a single line.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Slice of the value that fits in `width` columns while keeping the
    /// cursor visible, plus the cursor column within that slice.
    pub fn viewport(&self, width: usize) -> (&str, usize) {
        if width == 0 {
            return ("", 0);
        }
        let start = self.cursor.saturating_sub(width - 1);
        let from = self.byte_offset(start);
        let to = self.byte_offset((start + width).min(self.len()));
        (&self.value[from..to], self.cursor - start)
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> UrlField {
        let mut field = UrlField::new();
        field.insert_str(text);
        field
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut f = field("htps");
        f.move_left();
        f.move_left();
        f.insert_char('t');
        assert_eq!(f.value(), "https");
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn paste_strips_newlines() {
        let f = field("https://x.test/p/1\r\n");
        assert_eq!(f.value(), "https://x.test/p/1");
    }

    #[test]
    fn backspace_and_delete() {
        let mut f = field("abc");
        f.backspace();
        assert_eq!(f.value(), "ab");
        f.home();
        f.delete();
        assert_eq!(f.value(), "b");
        f.home();
        f.backspace();
        assert_eq!(f.value(), "b");
        f.end();
        f.delete();
        assert_eq!(f.value(), "b");
    }

    #[test]
    fn multibyte_editing() {
        let mut f = field("café");
        f.backspace();
        assert_eq!(f.value(), "caf");
        f.insert_char('é');
        assert_eq!(f.value(), "café");
    }

    #[test]
    fn viewport_follows_cursor() {
        let f = field("abcdefghij");
        let (visible, col) = f.viewport(4);
        assert_eq!(visible, "hij");
        assert_eq!(col, 3);

        let mut f = f;
        f.home();
        let (visible, col) = f.viewport(4);
        assert_eq!(visible, "abcd");
        assert_eq!(col, 0);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut f = field("abc");
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.cursor(), 0);
    }
}
