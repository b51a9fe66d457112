//! Line-driven loader.
//!
//! Feeds each physical line through the classifier into a
//! [`DocumentBuilder`]. The first error aborts the load and the partially
//! built document is dropped with the builder.

use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::builder::DocumentBuilder;
use crate::classify::{classify, split_parameter, LineKind};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Line};

/// Configuration file parser.
///
/// Holds no state between calls; one parser may be reused for any number
/// of inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Create a new parser.
    #[inline]
    pub fn new() -> Self {
        Parser
    }

    /// Parse the input, returning an error on first failure.
    ///
    /// The returned document borrows its text from `input`.
    pub fn parse<'a>(&self, input: &'a str) -> Result<Document<'a>, ParseError> {
        let mut builder = DocumentBuilder::new();

        for line in Lexer::new(input) {
            if let Err(kind) = self.parse_line(&mut builder, &line) {
                tracing::debug!(kind = ?kind, line = line.number(), "load aborted");
                return Err(ParseError::at_line(kind, line.number()));
            }
        }

        Ok(builder.finish())
    }

    /// Read and parse the file at `path`.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Document<'static>, ParseError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");

        let bytes = fs::read(path).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "open failed");
            ParseError::open_failure(path, &e)
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let doc = self.parse(&text)?.into_owned();
        tracing::debug!(
            path = %path.display(),
            sections = doc.len(),
            parameters = doc.parameter_count(),
            "configuration loaded"
        );
        Ok(doc)
    }

    fn parse_line<'a>(
        &self,
        builder: &mut DocumentBuilder<'a>,
        line: &Line<'a>,
    ) -> Result<(), ParseErrorKind> {
        match classify(line.text)? {
            LineKind::Blank => Ok(()),
            LineKind::Section(name) => {
                tracing::trace!(section = name, line = line.number(), "section opened");
                builder.push_section_at(name, line.span);
                Ok(())
            }
            LineKind::Parameter(body) => {
                if !builder.has_open_section() {
                    return Err(ParseErrorKind::ParameterOutsideSection);
                }
                let (key, value) =
                    split_parameter(body).ok_or(ParseErrorKind::MissingSeparator)?;
                builder.push_parameter_at(key, value, line.span)
            }
        }
    }
}

/// Parse a configuration string with a default [`Parser`].
pub fn parse(input: &str) -> Result<Document<'_>, ParseError> {
    Parser::new().parse(input)
}

/// Load a configuration file with a default [`Parser`].
pub fn load(path: impl AsRef<Path>) -> Result<Document<'static>, ParseError> {
    Parser::new().load(path)
}
