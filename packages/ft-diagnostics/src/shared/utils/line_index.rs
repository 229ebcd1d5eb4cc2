//! Byte offset → LSP position conversion
//!
//! Tree-sitter reports byte offsets; LSP clients expect zero-based lines and
//! UTF-16 code unit columns.

use lsp_types::{Position, Range};

use crate::shared::models::Span;

/// Line start table for one source text
#[derive(Debug, Clone)]
pub struct LineIndex {
    source: String,
    /// Byte offset of the first character of every line
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source: source.to_string(),
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of a byte offset. Offsets past the end clamp to the end,
    /// offsets inside a multi-byte character clamp to its start.
    pub fn position(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let character: usize = self.source[line_start..offset]
            .chars()
            .map(char::len_utf16)
            .sum();
        Position::new(line as u32, character as u32)
    }

    /// Range for a raw offset and length
    pub fn to_range(&self, offset: usize, length: usize) -> Range {
        Range::new(self.position(offset), self.position(offset + length))
    }

    pub fn span_to_range(&self, span: Span) -> Range {
        self.to_range(span.offset(), span.len())
    }
}
