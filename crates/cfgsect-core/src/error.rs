use std::fmt;
use std::path::Path;

/// Error kinds for categorizing load failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The file could not be opened or read.
    OpenFailure,
    /// A `[` header without a closing `]` on the same line.
    UnterminatedSection,
    /// A parameter line without `=`.
    MissingSeparator,
    /// A parameter line before any section header.
    ParameterOutsideSection,
}

impl ParseErrorKind {
    /// Short description of the kind, without location.
    pub fn description(self) -> &'static str {
        match self {
            ParseErrorKind::OpenFailure => "cannot open file",
            ParseErrorKind::UnterminatedSection => "unterminated section header",
            ParseErrorKind::MissingSeparator => "missing '=' in parameter line",
            ParseErrorKind::ParameterOutsideSection => "parameter outside of any section",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A load failure with the line it was detected on.
///
/// Any error aborts the whole load; there is never a partial document
/// alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,
    /// 1-based line number, `None` for [`ParseErrorKind::OpenFailure`]
    pub line: Option<u32>,
    /// Error categorization
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create an error of the given kind at a line.
    pub fn at_line(kind: ParseErrorKind, line: u32) -> Self {
        Self {
            message: kind.description().to_string(),
            line: Some(line),
            kind,
        }
    }

    /// Create an error for a file that could not be opened or read.
    pub fn open_failure(path: &Path, source: &std::io::Error) -> Self {
        Self {
            message: format!("cannot open '{}': {}", path.display(), source),
            line: None,
            kind: ParseErrorKind::OpenFailure,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
