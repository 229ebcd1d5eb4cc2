//! Source location types
//!
//! Spans are byte ranges into the source text of one compilation unit.
//! Line/column positions are derived on demand through `LineIndex`.

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    /// Create a span from a start offset and a length
    pub fn from_offset(offset: usize, length: usize) -> Self {
        Self::new(offset, offset + length)
    }

    /// Create a zero span (0..0)
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn offset(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
