//! Line classification.
//!
//! Decides what a single physical line is, independent of what came
//! before it. Whether a parameter line is allowed at its position is the
//! builder's concern.

use memchr::memchr;

use crate::error::ParseErrorKind;

/// What a physical line declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty, whitespace-only, or a `;`/`#` comment line.
    Blank,
    /// A `[name]` header; holds the text between `[` and the first `]`.
    Section(&'a str),
    /// Anything else; holds the line with leading whitespace removed.
    Parameter(&'a str),
}

/// C-locale whitespace: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline(always)]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Classify one physical line.
///
/// Fails only for a header with no closing `]` on the same line.
pub fn classify(text: &str) -> Result<LineKind<'_>, ParseErrorKind> {
    let body = text.trim_start_matches(is_space);

    match body.as_bytes().first() {
        None | Some(b';') | Some(b'#') => Ok(LineKind::Blank),
        Some(b'[') => {
            let rest = &body[1..];
            match memchr(b']', rest.as_bytes()) {
                Some(end) => Ok(LineKind::Section(&rest[..end])),
                None => Err(ParseErrorKind::UnterminatedSection),
            }
        }
        Some(_) => Ok(LineKind::Parameter(body)),
    }
}

/// Split a parameter line into key and value.
///
/// The line is cut at the first `;` and trailing whitespace is trimmed.
/// The key loses trailing whitespace, the value loses leading whitespace.
/// `#` does not start an inline comment. Returns `None` when there is no `=`.
pub fn split_parameter(body: &str) -> Option<(&str, &str)> {
    let body = match memchr(b';', body.as_bytes()) {
        Some(pos) => &body[..pos],
        None => body,
    };
    let body = body.trim_end_matches(is_space);

    let eq = memchr(b'=', body.as_bytes())?;
    let key = body[..eq].trim_end_matches(is_space);
    let value = body[eq + 1..].trim_start_matches(is_space);
    Some((key, value))
}
