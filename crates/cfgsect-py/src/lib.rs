//! Python bindings for the cfgsect configuration loader.

use std::sync::Arc;

use cfgsect_core::{
    Cursor as CoreCursor, CursorPosition, Document as CoreDocument, ParseError as CoreParseError,
    ParseErrorKind as CoreParseErrorKind, Parameter as CoreParameter, Section as CoreSection,
};
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;

// ============================================================================
// Errors
// ============================================================================

/// Load failure category.
#[pyclass(frozen, eq, eq_int, name = "ParseErrorKind")]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PyParseErrorKind {
    OpenFailure,
    UnterminatedSection,
    MissingSeparator,
    ParameterOutsideSection,
}

impl From<CoreParseErrorKind> for PyParseErrorKind {
    fn from(k: CoreParseErrorKind) -> Self {
        match k {
            CoreParseErrorKind::OpenFailure => PyParseErrorKind::OpenFailure,
            CoreParseErrorKind::UnterminatedSection => PyParseErrorKind::UnterminatedSection,
            CoreParseErrorKind::MissingSeparator => PyParseErrorKind::MissingSeparator,
            CoreParseErrorKind::ParameterOutsideSection => {
                PyParseErrorKind::ParameterOutsideSection
            }
        }
    }
}

/// A load failure, as returned by `check`.
#[pyclass(frozen, get_all, name = "ParseError")]
#[derive(Clone)]
pub struct PyParseError {
    pub message: String,
    pub line: Option<u32>,
    pub kind: PyParseErrorKind,
}

#[pymethods]
impl PyParseError {
    fn __repr__(&self) -> String {
        format!("ParseError({:?}, {:?}, line={:?})", self.message, self.kind, self.line)
    }

    fn __str__(&self) -> String {
        match self.line {
            Some(line) => format!("{} at line {}", self.message, line),
            None => self.message.clone(),
        }
    }
}

impl From<CoreParseError> for PyParseError {
    fn from(e: CoreParseError) -> Self {
        PyParseError {
            message: e.message,
            line: e.line,
            kind: e.kind.into(),
        }
    }
}

fn to_py_err(e: CoreParseError) -> PyErr {
    match e.kind {
        CoreParseErrorKind::OpenFailure => PyOSError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

// ============================================================================
// Model
// ============================================================================

/// A `name = value` entry.
#[pyclass(frozen, get_all, name = "Parameter")]
#[derive(Clone)]
pub struct PyParameter {
    pub name: String,
    pub value: String,
    pub line: u32,
}

#[pymethods]
impl PyParameter {
    fn __repr__(&self) -> String {
        format!("Parameter({:?}, {:?})", self.name, self.value)
    }
}

impl From<&CoreParameter<'_>> for PyParameter {
    fn from(p: &CoreParameter<'_>) -> Self {
        PyParameter {
            name: p.name().to_string(),
            value: p.value().to_string(),
            line: p.line(),
        }
    }
}

/// A `[name]` section and its parameters.
#[pyclass(frozen, name = "Section")]
pub struct PySection {
    document: Arc<CoreDocument<'static>>,
    index: usize,
}

impl PySection {
    fn inner(&self) -> &CoreSection<'static> {
        &self.document.sections()[self.index]
    }
}

#[pymethods]
impl PySection {
    #[getter]
    fn name(&self) -> &str {
        self.inner().name()
    }

    #[getter]
    fn line(&self) -> u32 {
        self.inner().line()
    }

    #[getter]
    fn parameters(&self) -> Vec<PyParameter> {
        self.inner().iter().map(PyParameter::from).collect()
    }

    /// Value of the first parameter named `name` (case-insensitive), or None.
    #[pyo3(text_signature = "(self, name)")]
    fn get(&self, name: &str) -> Option<String> {
        self.inner().get(name).map(str::to_string)
    }

    fn __len__(&self) -> usize {
        self.inner().parameters().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Section({:?}, parameters={})",
            self.inner().name(),
            self.inner().parameters().len()
        )
    }
}

/// A loaded configuration document.
#[pyclass(frozen, name = "Document")]
pub struct PyDocument {
    document: Arc<CoreDocument<'static>>,
}

impl PyDocument {
    fn section_at(&self, index: usize) -> PySection {
        PySection {
            document: Arc::clone(&self.document),
            index,
        }
    }
}

#[pymethods]
impl PyDocument {
    #[getter]
    fn sections(&self) -> Vec<PySection> {
        (0..self.document.len()).map(|i| self.section_at(i)).collect()
    }

    /// Value of `key` in the first section named `section`, or None.
    ///
    /// Both names are matched case-insensitively.
    #[pyo3(text_signature = "(self, section, key)")]
    fn lookup(&self, section: &str, key: &str) -> Option<String> {
        self.document.lookup(section, key).map(str::to_string)
    }

    /// First section named `name` (case-insensitive), or None.
    #[pyo3(text_signature = "(self, name)")]
    fn section(&self, name: &str) -> Option<PySection> {
        self.document
            .section_index(name)
            .map(|i| self.section_at(i))
    }

    /// Create an independent sequential cursor.
    fn cursor(&self) -> PyCursor {
        PyCursor {
            document: Arc::clone(&self.document),
            position: CursorPosition::default(),
        }
    }

    fn __len__(&self) -> usize {
        self.document.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Document(sections={}, parameters={})",
            self.document.len(),
            self.document.parameter_count()
        )
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Forward-only traversal over a document.
///
/// Stores the core cursor's saved position instead of a borrow so it can
/// outlive the Python call.
#[pyclass(name = "Cursor")]
pub struct PyCursor {
    document: Arc<CoreDocument<'static>>,
    position: CursorPosition,
}

impl PyCursor {
    fn step<T>(&mut self, f: impl FnOnce(&mut CoreCursor<'_, 'static>) -> T) -> T {
        let mut cursor = CoreCursor::with_position(&self.document, self.position);
        let out = f(&mut cursor);
        self.position = cursor.position();
        out
    }
}

#[pymethods]
impl PyCursor {
    /// Return to the position before the first section.
    fn rewind(&mut self) {
        self.position = CursorPosition::default();
    }

    /// Advance to the next section and return its name, or None at the end.
    fn next_section(&mut self) -> Option<String> {
        self.step(|cursor| cursor.next_section().map(str::to_string))
    }

    /// Advance to the next parameter and return `(name, value)`, or None.
    fn next_parameter(&mut self) -> Option<(String, String)> {
        self.step(|cursor| {
            cursor
                .next_parameter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
        })
    }
}

// ============================================================================
// Module functions
// ============================================================================

/// Parse configuration text.
///
/// Raises:
///     ValueError: On format error
#[pyfunction]
#[pyo3(text_signature = "(input)")]
fn parse(input: &str) -> PyResult<PyDocument> {
    let document = cfgsect_core::parse(input).map_err(to_py_err)?.into_owned();
    Ok(PyDocument {
        document: Arc::new(document),
    })
}

/// Load a configuration file.
///
/// Raises:
///     OSError: If the file cannot be read
///     ValueError: On format error
#[pyfunction]
#[pyo3(text_signature = "(path)")]
fn load(py: Python<'_>, path: std::path::PathBuf) -> PyResult<PyDocument> {
    let document = py
        .allow_threads(|| cfgsect_core::load(&path))
        .map_err(to_py_err)?;
    Ok(PyDocument {
        document: Arc::new(document),
    })
}

/// Parse configuration text and return the error, or None if it is valid.
#[pyfunction]
#[pyo3(text_signature = "(input)")]
fn check(input: &str) -> Option<PyParseError> {
    cfgsect_core::parse(input).err().map(PyParseError::from)
}

// ============================================================================
// Module
// ============================================================================

/// cfgsect - Sectioned configuration loader.
#[pymodule]
fn pycfgsect(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyParseErrorKind>()?;
    m.add_class::<PyParseError>()?;
    m.add_class::<PyParameter>()?;
    m.add_class::<PySection>()?;
    m.add_class::<PyDocument>()?;
    m.add_class::<PyCursor>()?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(load, m)?)?;
    m.add_function(wrap_pyfunction!(check, m)?)?;
    Ok(())
}
