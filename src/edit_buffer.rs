use std::fmt;

/// Multi-line text being edited, as chars plus a cursor index.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    pub chars: Vec<char>,
    pub cursor: usize,
}

impl EditBuffer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn new_empty() -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start_at(self.cursor);
    }

    pub fn move_end(&mut self) {
        self.cursor = self.line_end_at(self.cursor);
    }

    /// Moves to the previous line, keeping the column where it fits.
    pub fn move_up(&mut self) {
        let start = self.line_start_at(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.cursor - start;
        let prev_start = self.line_start_at(start - 1);
        self.cursor = prev_start + column.min(start - 1 - prev_start);
    }

    /// Moves to the next line, keeping the column where it fits.
    pub fn move_down(&mut self) {
        let end = self.line_end_at(self.cursor);
        if end == self.chars.len() {
            self.cursor = end;
            return;
        }
        let column = self.cursor - self.line_start_at(self.cursor);
        let next_start = end + 1;
        let next_end = self.line_end_at(next_start);
        self.cursor = next_start + column.min(next_end - next_start);
    }

    fn line_start_at(&self, pos: usize) -> usize {
        self.chars[..pos]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |p| p + 1)
    }

    fn line_end_at(&self, pos: usize) -> usize {
        self.chars[pos..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.chars.len(), |p| pos + p)
    }

    /// Text of the line holding the cursor, without its newline.
    pub fn current_line(&self) -> String {
        let start = self.line_start_at(self.cursor);
        let end = self.line_end_at(self.cursor);
        self.chars[start..end].iter().collect()
    }

    /// Cursor column within the current line, in chars.
    pub fn line_column(&self) -> usize {
        self.cursor - self.line_start_at(self.cursor)
    }

    /// Zero-based (row, column) of the cursor.
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let row = self.chars[..self.cursor]
            .iter()
            .filter(|&&c| c == '\n')
            .count();
        (row, self.line_column())
    }

    /// Replaces the cursor's line with `text` (which may span several
    /// lines) and puts the cursor `column` chars after the line start.
    pub fn replace_current_line(&mut self, text: &str, column: usize) {
        let start = self.line_start_at(self.cursor);
        let end = self.line_end_at(self.cursor);
        let new_chars: Vec<char> = text.chars().collect();
        let new_len = new_chars.len();
        self.chars.splice(start..end, new_chars);
        self.cursor = start + column.min(new_len);
    }

    pub fn lines(&self) -> Vec<String> {
        self.to_string().split('\n').map(String::from).collect()
    }
}

impl fmt::Display for EditBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.chars.iter().collect();
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cursor_at_end() {
        let buf = EditBuffer::new("hello");
        assert_eq!(buf.to_string(), "hello");
        assert_eq!(buf.cursor, 5);
    }

    #[test]
    fn new_empty() {
        let buf = EditBuffer::new_empty();
        assert_eq!(buf.to_string(), "");
        assert_eq!(buf.cursor, 0);
    }

    #[test]
    fn insert_char() {
        let mut buf = EditBuffer::new("hllo");
        buf.cursor = 1;
        buf.insert_char('e');
        assert_eq!(buf.to_string(), "hello");
        assert_eq!(buf.cursor, 2);
    }

    #[test]
    fn delete_back_at_start() {
        let mut buf = EditBuffer::new("hello");
        buf.cursor = 0;
        buf.delete_back();
        assert_eq!(buf.to_string(), "hello");
        assert_eq!(buf.cursor, 0);
    }

    #[test]
    fn delete_forward() {
        let mut buf = EditBuffer::new("hello");
        buf.cursor = 0;
        buf.delete_forward();
        assert_eq!(buf.to_string(), "ello");
        assert_eq!(buf.cursor, 0);
    }

    #[test]
    fn home_and_end_stay_on_line() {
        let mut buf = EditBuffer::new("first\nsecond");
        buf.cursor = 9;
        buf.move_home();
        assert_eq!(buf.cursor, 6);
        buf.move_end();
        assert_eq!(buf.cursor, 12);
    }

    #[test]
    fn move_up_clamps_column() {
        let mut buf = EditBuffer::new("ab\nlonger");
        buf.move_up();
        assert_eq!(buf.cursor, 2);
    }

    #[test]
    fn move_down_keeps_column() {
        let mut buf = EditBuffer::new("abc\ndef");
        buf.cursor = 1;
        buf.move_down();
        assert_eq!(buf.cursor, 5);
    }

    #[test]
    fn current_line_and_column() {
        let mut buf = EditBuffer::new("one\nHello /world\nthree");
        buf.cursor = 4 + 7;
        assert_eq!(buf.current_line(), "Hello /world");
        assert_eq!(buf.line_column(), 7);
        assert_eq!(buf.cursor_row_col(), (1, 7));
    }

    #[test]
    fn replace_current_line_keeps_other_lines() {
        let mut buf = EditBuffer::new("one\nHello /world\nthree");
        buf.cursor = 11;
        buf.replace_current_line("Hello # world", 8);
        assert_eq!(buf.to_string(), "one\nHello # world\nthree");
        assert_eq!(buf.cursor, 12);
    }

    #[test]
    fn replace_current_line_with_multiline_text() {
        let mut buf = EditBuffer::new("/");
        buf.replace_current_line("```\n\n```", 8);
        assert_eq!(buf.to_string(), "```\n\n```");
        assert_eq!(buf.cursor, 8);
        assert_eq!(buf.lines().len(), 3);
    }
}
