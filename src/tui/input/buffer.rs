use crate::util::unicode;

/// Single-line text input with a grapheme-aware cursor.
///
/// The cursor is a byte offset that always sits on a grapheme boundary, so
/// arrow keys and backspace treat emoji and combining accents as one unit.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    /// Buffer pre-filled with `text`, cursor at the end (matching an edit
    /// field focused with the caret after the last character)
    pub fn with_text(text: &str) -> Self {
        EditBuffer {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text split at the cursor, for rendering a caret between the halves
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_text_puts_cursor_at_end() {
        let buf = EditBuffer::with_text("hello");
        assert_eq!(buf.split_at_cursor(), ("hello", ""));
    }

    #[test]
    fn insert_at_cursor() {
        let mut buf = EditBuffer::with_text("helo");
        buf.left();
        buf.insert('l');
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.split_at_cursor(), ("hell", "o"));
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut buf = EditBuffer::with_text("a🎉");
        buf.backspace();
        assert_eq!(buf.text(), "a");
        buf.backspace();
        assert!(buf.is_empty());
        buf.backspace(); // at start, no-op
        assert!(buf.is_empty());
    }

    #[test]
    fn arrows_step_graphemes() {
        let mut buf = EditBuffer::with_text("a🎉b");
        buf.left();
        buf.left();
        assert_eq!(buf.split_at_cursor(), ("a", "🎉b"));
        buf.right();
        assert_eq!(buf.split_at_cursor(), ("a🎉", "b"));
    }

    #[test]
    fn home_end_and_clear() {
        let mut buf = EditBuffer::with_text("hello");
        buf.home();
        assert_eq!(buf.split_at_cursor(), ("", "hello"));
        buf.end();
        assert_eq!(buf.split_at_cursor(), ("hello", ""));
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.split_at_cursor(), ("", ""));
    }

    #[test]
    fn split_at_cursor_for_caret_render() {
        let mut buf = EditBuffer::with_text("hello");
        buf.left();
        let (before, after) = buf.split_at_cursor();
        assert_eq!(before, "hell");
        assert_eq!(after, "o");
    }
}
