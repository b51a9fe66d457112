//! Physical line reader.
//!
//! Splits input into numbered lines for the classifier. Newlines are
//! located with `memchr`, which is SIMD accelerated on supported platforms.
//!
//! - Zero-copy: lines borrow directly from input
//! - `\r\n` endings are reported without the `\r`
//! - A trailing line without a newline is still yielded

use crate::span::Span;
use memchr::memchr;

/// Byte offsets past `u32::MAX` are clamped; line text is never truncated.
#[inline(always)]
fn clamp_offset(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

/// A single physical line from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without the line terminator).
    pub text: &'a str,
    /// Line number and byte range in the original input.
    pub span: Span,
}

impl<'a> Line<'a> {
    /// 1-based line number.
    #[inline(always)]
    pub fn number(&self) -> u32 {
        self.span.line
    }
}

/// Iterator over the physical lines of an input string.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    /// Current byte offset.
    offset: usize,
    /// Number of the line that will be returned next.
    line: u32,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            line: 1,
        }
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    fn read_line(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let start = self.offset;
        let end = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => start + pos,
            None => self.bytes.len(),
        };

        let text_end = if end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < self.bytes.len() { end + 1 } else { end };

        let number = self.line;
        self.line = self.line.saturating_add(1);

        Some(Line {
            // `start` and `text_end` sit next to ASCII `\n`/`\r` bytes or at
            // the ends of the input, so both are char boundaries.
            text: &self.input[start..text_end],
            span: Span::new(number, clamp_offset(start), clamp_offset(text_end)),
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    #[inline]
    fn next(&mut self) -> Option<Line<'a>> {
        self.read_line()
    }
}
