//! # cfgsect Core
//!
//! A loader for small sectioned configuration files.
//!
//! Files are a sequence of `[section]` headers, each followed by
//! `key = value` lines. Blank lines and lines starting with `;` or `#`
//! are ignored, and `;` starts an inline comment inside a parameter line.
//!
//! ## Quick Start
//!
//! ```rust
//! use cfgsect_core::Parser;
//!
//! let input = "[Server]\nDBfile = data.db ; main store\n";
//! let doc = Parser::new().parse(input).unwrap();
//!
//! assert_eq!(doc.lookup("server", "dbfile"), Some("data.db"));
//! ```
//!
//! ## Sequential Access
//!
//! ```rust
//! let doc = cfgsect_core::parse("[A]\nx=1\n[B]\ny=2\n").unwrap();
//! let mut cursor = doc.cursor();
//!
//! while let Some(section) = cursor.next_section() {
//!     while let Some((key, value)) = cursor.next_parameter() {
//!         println!("{}.{} = {}", section, key, value);
//!     }
//! }
//! ```
//!
//! ## Errors
//!
//! The first malformed line aborts the load. The error carries its kind
//! and 1-based line number:
//!
//! ```rust
//! use cfgsect_core::ParseErrorKind;
//!
//! let err = cfgsect_core::parse("[A]\nx 1\n").unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
//! assert_eq!(err.line, Some(2));
//! ```

pub mod ast;
pub mod builder;
pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod lookup;
pub mod parser;
pub mod span;

pub use ast::{Document, Parameter, Section};
pub use builder::DocumentBuilder;
pub use cursor::{Cursor, CursorPosition};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{load, parse, Parser};
