//! Source location tracking.

use smol_str::SmolStr;
use std::fmt;
use std::sync::Arc;

/// A named source text. Shared by every [`Position`] derived from one scan.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceFile {
    name: SmolStr,
    text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A cursor into a [`SourceFile`].
///
/// `offset` is a byte offset, `line` and `column` are 0-based and `column`
/// counts characters. Cloning a position copies the coordinates and shares
/// the underlying source.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    offset: usize,
    line: usize,
    column: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    file: Arc<SourceFile>,
}

impl Position {
    /// Create a position on the first character of `file`.
    pub fn new(file: Arc<SourceFile>) -> Self {
        Self {
            offset: 0,
            line: 0,
            column: 0,
            file,
        }
    }

    /// Step over `current`, the character under the cursor.
    ///
    /// `None` means the cursor is already past the end of the text; the
    /// offset still moves by one so that spans ending there stay non-empty.
    pub fn advance(&mut self, current: Option<char>) {
        self.offset += current.map_or(1, char::len_utf8);
        self.column += 1;

        if current == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn filename(&self) -> &str {
        self.file.name()
    }

    /// The full text this position points into.
    pub fn source(&self) -> &str {
        self.file.text()
    }

    pub(crate) fn file(&self) -> &Arc<SourceFile> {
        &self.file
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}:{}({})",
            self.file.name(),
            self.line + 1,
            self.column + 1,
            self.offset
        )
    }
}

/// The source range a token or error refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(end.offset >= start.offset);
        Self { start, end }
    }

    /// A zero-width span at `pos`.
    pub fn empty(pos: Position) -> Self {
        Self {
            start: pos.clone(),
            end: pos,
        }
    }

    /// Check if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(text: &str) -> Position {
        let file = Arc::new(SourceFile::new("<test>", text));
        let mut pos = Position::new(file);
        for c in text.chars() {
            pos.advance(Some(c));
        }
        pos
    }

    #[test]
    fn test_advance_counts_lines_and_columns() {
        let pos = walk("ab\ncd");
        assert_eq!(pos.offset(), 5);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 2);
    }

    #[test]
    fn test_full_walk_lands_on_text_length() {
        for text in ["", "x", "\n\n\n", "define a\nset b 1\n/say hi\n", "é\nü"] {
            let pos = walk(text);
            assert_eq!(pos.offset(), text.len());
            assert_eq!(pos.line(), text.matches('\n').count());
        }
    }

    #[test]
    fn test_clone_is_a_snapshot() {
        let file = Arc::new(SourceFile::new("main.mcfs", "abc"));
        let mut live = Position::new(file);
        let snapshot = live.clone();
        live.advance(Some('a'));

        assert_eq!(snapshot.offset(), 0);
        assert_eq!(live.offset(), 1);
        assert!(Arc::ptr_eq(snapshot.file(), live.file()));
        assert_eq!(snapshot.filename(), "main.mcfs");
    }

    #[test]
    fn test_advance_past_end() {
        let file = Arc::new(SourceFile::new("<test>", ""));
        let mut pos = Position::new(file);
        pos.advance(None);
        assert_eq!(pos.offset(), 1);
        assert_eq!(pos.column(), 1);
        assert_eq!(pos.line(), 0);
    }
}
