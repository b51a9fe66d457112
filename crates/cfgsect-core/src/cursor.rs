//! Sequential traversal over a loaded document.
//!
//! A [`Cursor`] borrows the document instead of living inside it, so any
//! number of traversals can run over the same document independently.
//! Its state is a plain [`CursorPosition`] value, which can be saved and
//! resumed by callers that cannot hold a borrow.

use crate::ast::{Document, Parameter, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Position {
    #[default]
    Unset,
    At(usize),
    End,
}

impl Position {
    /// Index of the entry that follows this position.
    #[inline]
    fn following(self) -> Option<usize> {
        match self {
            Position::Unset => Some(0),
            Position::At(i) => Some(i + 1),
            Position::End => None,
        }
    }
}

/// Owned, document-independent state of a [`Cursor`].
///
/// The default value is the rewound position, before the first section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    section: Position,
    parameter: Position,
}

/// Forward-only position over the sections and parameters of a document.
///
/// ```rust
/// let doc = cfgsect_core::parse("[a]\nx=1\n[b]\ny=2\n").unwrap();
/// let mut cursor = doc.cursor();
///
/// assert_eq!(cursor.next_section(), Some("a"));
/// assert_eq!(cursor.next_parameter(), Some(("x", "1")));
/// assert_eq!(cursor.next_parameter(), None);
/// assert_eq!(cursor.next_section(), Some("b"));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'d, 'a> {
    document: &'d Document<'a>,
    position: CursorPosition,
}

impl<'d, 'a> Cursor<'d, 'a> {
    /// Create a cursor positioned before the first section.
    pub fn new(document: &'d Document<'a>) -> Self {
        Self::with_position(document, CursorPosition::default())
    }

    /// Resume a cursor from a position saved with [`position`](Self::position).
    ///
    /// A position taken from a different document is safe; indices past
    /// the end simply yield `None`.
    pub fn with_position(document: &'d Document<'a>, position: CursorPosition) -> Self {
        Self { document, position }
    }

    /// The current position, detached from the document.
    #[inline]
    pub fn position(&self) -> CursorPosition {
        self.position
    }

    /// Return to the position before the first section.
    pub fn rewind(&mut self) {
        self.position = CursorPosition::default();
    }

    /// Advance to the next section and return its name.
    ///
    /// Resets the parameter position. Returns `None` once the sections are
    /// exhausted, and keeps returning `None` until [`rewind`](Self::rewind).
    pub fn next_section(&mut self) -> Option<&'d str> {
        let next = self.position.section.following()?;
        self.position.parameter = Position::Unset;

        match self.document.sections.get(next) {
            Some(section) => {
                self.position.section = Position::At(next);
                Some(section.name())
            }
            None => {
                self.position.section = Position::End;
                None
            }
        }
    }

    /// Advance to the next parameter of the current section.
    ///
    /// Returns `None` when the section has no more parameters, or when no
    /// section has been selected with [`next_section`](Self::next_section).
    pub fn next_parameter(&mut self) -> Option<(&'d str, &'d str)> {
        let section = self.current_section()?;
        let next = self.position.parameter.following()?;

        match section.parameters.get(next) {
            Some(param) => {
                self.position.parameter = Position::At(next);
                Some((param.name(), param.value()))
            }
            None => {
                self.position.parameter = Position::End;
                None
            }
        }
    }

    /// The section the cursor is on, if any.
    pub fn current_section(&self) -> Option<&'d Section<'a>> {
        match self.position.section {
            Position::At(i) => self.document.sections.get(i),
            _ => None,
        }
    }

    /// The parameter the cursor is on, if any.
    pub fn current_parameter(&self) -> Option<&'d Parameter<'a>> {
        match self.position.parameter {
            Position::At(i) => self.current_section()?.parameters.get(i),
            _ => None,
        }
    }
}
