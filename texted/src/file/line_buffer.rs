//! Line-oriented text storage.

use std::fmt;

/// File content split into lines.
///
/// Lines are stored without their terminating `\n`. A trailing newline at
/// the end of the input does not create an extra empty line, and
/// [`LineBuffer::to_text`] terminates every line with `\n`.
///
/// # Examples
///
/// ```
/// use texted::file::LineBuffer;
///
/// let buffer = LineBuffer::from_text("first\nsecond\n");
/// assert_eq!(buffer.len(), 2);
/// assert_eq!(buffer.get(1), Some("second"));
/// assert_eq!(buffer.to_text(), "first\nsecond\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// An empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` on `\n`.
    ///
    /// `\r` is kept as part of the line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        let body = text.strip_suffix('\n').unwrap_or(text);
        Self {
            lines: body.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Join the lines back into file content.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.byte_len());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when there are no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Size of [`LineBuffer::to_text`] in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.lines.iter().map(|line| line.len() + 1).sum()
    }

    /// The line at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterate over the lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Append a line at the end.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Insert a line before `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, line: impl Into<String>) {
        self.lines.insert(index, line.into());
    }

    /// Remove and return the line at `index`.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    /// Replace the line at `index`, returning the old text.
    pub fn replace(&mut self, index: usize, line: impl Into<String>) -> Option<String> {
        self.lines
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, line.into()))
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl<S: Into<String>> FromIterator<S> for LineBuffer {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_lines() {
        let buffer = LineBuffer::from_text("");
        assert!(buffer.is_empty());
        assert_eq!(buffer.to_text(), "");
    }

    #[test]
    fn test_single_newline_is_one_empty_line() {
        let buffer = LineBuffer::from_text("\n");
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(0), Some(""));
    }

    #[test]
    fn test_missing_final_newline() {
        let buffer = LineBuffer::from_text("a\nb");
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(buffer.to_text(), "a\nb\n");
    }

    #[test]
    fn test_blank_lines_preserved() {
        let text = "a\n\n\nb\n";
        let buffer = LineBuffer::from_text(text);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.to_text(), text);
        assert_eq!(buffer.byte_len(), text.len());
    }

    #[test]
    fn test_carriage_returns_kept() {
        let buffer = LineBuffer::from_text("a\r\nb\r\n");
        assert_eq!(buffer.get(0), Some("a\r"));
    }

    #[test]
    fn test_editing() {
        let mut buffer: LineBuffer = ["one", "three"].into_iter().collect();
        buffer.insert(1, "two");
        buffer.push("four");
        assert_eq!(buffer.replace(3, "FOUR").as_deref(), Some("four"));
        assert_eq!(buffer.remove(0).as_deref(), Some("one"));
        assert_eq!(buffer.remove(10), None);
        assert_eq!(buffer.replace(10, "x"), None);
        assert_eq!(buffer.to_string(), "two\nthree\nFOUR\n");
    }
}
