//! Incremental, append-only document construction.

use crate::ast::{CowStr, Document, Parameter, Section};
use crate::error::ParseErrorKind;
use crate::span::Span;

/// Grows a [`Document`] one section or parameter at a time.
///
/// The most recently pushed section is the open one; parameters are
/// appended to it. Dropping the builder releases whatever was built so far.
///
/// ```rust
/// use cfgsect_core::DocumentBuilder;
///
/// let mut builder = DocumentBuilder::new();
/// builder.push_section("server", 1);
/// builder.push_parameter("port", "8080", 2).unwrap();
/// let doc = builder.finish();
/// assert_eq!(doc.lookup("SERVER", "Port"), Some("8080"));
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder<'a> {
    document: Document<'a>,
}

impl<'a> DocumentBuilder<'a> {
    /// Create a builder holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section and make it the open one.
    pub fn push_section(&mut self, name: impl Into<CowStr<'a>>, line: u32) {
        self.push_section_at(name, Span::at_line(line));
    }

    /// Append a parameter to the open section.
    pub fn push_parameter(
        &mut self,
        name: impl Into<CowStr<'a>>,
        value: impl Into<CowStr<'a>>,
        line: u32,
    ) -> Result<(), ParseErrorKind> {
        self.push_parameter_at(name, value, Span::at_line(line))
    }

    /// Check if a section has been opened.
    #[inline]
    pub fn has_open_section(&self) -> bool {
        !self.document.sections.is_empty()
    }

    /// The document built so far.
    #[inline]
    pub fn document(&self) -> &Document<'a> {
        &self.document
    }

    /// Finish building and hand over the document.
    pub fn finish(self) -> Document<'a> {
        self.document
    }

    pub(crate) fn push_section_at(&mut self, name: impl Into<CowStr<'a>>, span: Span) {
        self.document.sections.push(Section::new(name, span));
    }

    pub(crate) fn push_parameter_at(
        &mut self,
        name: impl Into<CowStr<'a>>,
        value: impl Into<CowStr<'a>>,
        span: Span,
    ) -> Result<(), ParseErrorKind> {
        let section = self
            .document
            .sections
            .last_mut()
            .ok_or(ParseErrorKind::ParameterOutsideSection)?;
        section.parameters.push(Parameter::new(name, value, span));
        Ok(())
    }
}
