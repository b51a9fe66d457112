//! In-memory model of a loaded configuration file.
//!
//! A [`Document`] owns its [`Section`]s, and each section owns its
//! [`Parameter`]s. Both sequences keep file order and are never
//! reordered once loading finishes.
//!
//! - **Zero-copy**: Uses `Cow<'a, str>` to borrow from input when possible
//! - **Line-tracked**: Every section and parameter records its source line
//! - **Duplicates kept**: Repeated section or parameter names are distinct entries

use std::borrow::Cow;
use std::slice;

use crate::cursor::Cursor;
use crate::span::Span;

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = Cow<'a, str>;

/// A loaded configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document<'a> {
    pub(crate) sections: Vec<Section<'a>>,
}

/// A `[name]` header and the parameter lines that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub(crate) name: CowStr<'a>,
    pub(crate) parameters: Vec<Parameter<'a>>,
    pub(crate) span: Span,
}

/// A `name = value` line inside a section.
///
/// Both halves are opaque text; no type conversion is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub(crate) name: CowStr<'a>,
    pub(crate) value: CowStr<'a>,
    pub(crate) span: Span,
}

impl<'a> Document<'a> {
    /// Sections in file order.
    #[inline]
    pub fn sections(&self) -> &[Section<'a>] {
        &self.sections
    }

    /// Number of sections, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has no sections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate sections in file order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Section<'a>> {
        self.sections.iter()
    }

    /// Create an independent sequential cursor over this document.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, 'a> {
        Cursor::new(self)
    }

    /// Total number of parameters across all sections.
    pub fn parameter_count(&self) -> usize {
        self.sections.iter().map(|s| s.parameters.len()).sum()
    }

    /// Detach the document from the input it was parsed from.
    pub fn into_owned(self) -> Document<'static> {
        Document {
            sections: self
                .sections
                .into_iter()
                .map(Section::into_owned)
                .collect(),
        }
    }
}

impl<'d, 'a> IntoIterator for &'d Document<'a> {
    type Item = &'d Section<'a>;
    type IntoIter = slice::Iter<'d, Section<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl<'a> Section<'a> {
    pub(crate) fn new(name: impl Into<CowStr<'a>>, span: Span) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            span,
        }
    }

    /// The text between `[` and `]`, untrimmed. May be empty.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in file order.
    #[inline]
    pub fn parameters(&self) -> &[Parameter<'a>] {
        &self.parameters
    }

    /// Iterate parameters in file order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Parameter<'a>> {
        self.parameters.iter()
    }

    /// 1-based line of the `[name]` header.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Source location of the header.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    fn into_owned(self) -> Section<'static> {
        Section {
            name: Cow::Owned(self.name.into_owned()),
            parameters: self
                .parameters
                .into_iter()
                .map(Parameter::into_owned)
                .collect(),
            span: self.span,
        }
    }
}

impl<'s, 'a> IntoIterator for &'s Section<'a> {
    type Item = &'s Parameter<'a>;
    type IntoIter = slice::Iter<'s, Parameter<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

impl<'a> Parameter<'a> {
    pub(crate) fn new(
        name: impl Into<CowStr<'a>>,
        value: impl Into<CowStr<'a>>,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            span,
        }
    }

    /// Key text with trailing whitespace removed.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value text with leading whitespace removed.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// 1-based line the parameter was declared on.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Source location of the parameter line.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    fn into_owned(self) -> Parameter<'static> {
        Parameter {
            name: Cow::Owned(self.name.into_owned()),
            value: Cow::Owned(self.value.into_owned()),
            span: self.span,
        }
    }
}
