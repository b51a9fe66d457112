//! Source location tracking for sections and parameters.
//!
//! Every section and parameter remembers where it was declared so that
//! tools built on top of a [`Document`](crate::Document) can point users
//! back at the file.

/// Location of a physical line in the source text.
///
/// `line` is 1-based. `start` and `end` are byte offsets into the input,
/// inclusive-exclusive: `[start, end)`, excluding the line terminator.
///
/// # Example
///
/// ```rust
/// use cfgsect_core::span::Span;
///
/// let span = Span::new(3, 10, 18);
/// assert_eq!(span.line, 3);
/// assert_eq!(span.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// 1-based line number.
    pub line: u32,
    /// Starting byte offset (inclusive).
    pub start: u32,
    /// Ending byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span for the given line and byte range.
    #[inline]
    pub const fn new(line: u32, start: u32, end: u32) -> Self {
        Self { line, start, end }
    }

    /// A span that only knows its line number.
    ///
    /// Used for entries added through [`DocumentBuilder`](crate::DocumentBuilder)
    /// where no source text exists.
    #[inline]
    pub const fn at_line(line: u32) -> Self {
        Self {
            line,
            start: 0,
            end: 0,
        }
    }

    /// Length of the line in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if the line is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
