/// Forward-only position over the lines of a document.
///
/// Sub-parsers receive [`LineCursor::remaining`] and report how many lines
/// they consumed; the scanner then calls [`LineCursor::advance`].
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Split on line feeds only. Carriage returns stay in the line.
    pub fn new(text: &'a str) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').collect()
        };
        Self { lines, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.peek_at(0)
    }

    /// The line `offset` positions ahead of the current one.
    pub fn peek_at(&self, offset: usize) -> Option<&'a str> {
        self.lines.get(self.pos + offset).copied()
    }

    /// Move forward by `n` lines, stopping at the end.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.lines.len());
    }

    pub fn remaining(&self) -> &[&'a str] {
        &self.lines[self.pos..]
    }

    /// Zero-based index of the current line.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.lines.len()
    }
}
