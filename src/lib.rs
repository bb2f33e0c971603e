//! # ini_doc
//!
//! A parser and writer for a small INI dialect, with typed accessors and
//! order-preserving round-trips.
//!
//! ## Key Features
//!
//! - **Order preserving**: sections and keys are written back in the order they were
//!   read or added
//! - **Case-insensitive names**: sections are stored uppercase, keys lowercase, and all
//!   lookups normalize their arguments
//! - **Total reads**: `get_value`, `get_int_value`, `get_float_value` and
//!   `get_bool_value` never fail; missing or malformed data reads as a zero value
//! - **Atomic loads**: a failed `load` leaves the document as it was
//! - **Typed writes**: booleans are written as `yes`/`no`, added strings are quoted,
//!   and loaded values are written back as stored
//!
//! ## Quick Start
//!
//! ```rust
//! use ini_doc::{from_str, Document};
//!
//! let doc = from_str("[Server]\nhost=\"localhost\"\nport=8080 ;default\n").unwrap();
//! assert_eq!(doc.get_value("server", "host"), "localhost");
//! assert_eq!(doc.get_int_value("SERVER", "PORT"), 8080);
//!
//! let mut doc = Document::new();
//! doc.add_value("Server", "Debug", true).unwrap();
//! assert_eq!(doc.to_string(), "[SERVER]\ndebug=yes");
//! ```
//!
//! ## Working with Files
//!
//! ```rust,no_run
//! use ini_doc::Document;
//!
//! let mut doc = Document::open("settings.ini")?;
//! doc.add_value("Window", "width", 1280)?;
//! doc.save(None)?; // back to settings.ini
//! # Ok::<(), ini_doc::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: load and save at
//! `debug`, skipped input lines at `trace`. Install any logger to see them.
//!
//! ## Format
//!
//! See the [`format`] module for the exact dialect.

pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod options;
pub mod parser;
pub mod section;
pub mod value;
pub mod writer;

pub use document::Document;
pub use error::{Error, Result};
pub use options::{IniOptions, LineEnding};
pub use parser::GLOBAL_SECTION;
pub use section::Section;
pub use value::Value;

use std::io;
use std::path::Path;

/// Parses INI text into a [`Document`] that has no source path.
///
/// # Examples
///
/// ```rust
/// use ini_doc::from_str;
///
/// let doc = from_str("[A]\nkey=value;not-a-comment").unwrap();
/// assert_eq!(doc.get_value("a", "key"), "value;not-a-comment");
/// ```
///
/// # Errors
///
/// Returns [`Error::DuplicateSection`] or [`Error::DuplicateKey`] on repeated names.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    s.parse()
}

/// Parses INI text from a reader into a [`Document`] that has no source path.
///
/// # Examples
///
/// ```rust
/// use ini_doc::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[A]\r\nk=\"v\"\r\n")).unwrap();
/// assert_eq!(doc.get_value("a", "k"), "v");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not UTF-8, and a duplicate
/// error on repeated names.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Document>
where
    R: io::Read,
{
    Document::from_reader(io::BufReader::new(reader))
}

/// Loads the file at `path`. Same as [`Document::open`].
///
/// # Errors
///
/// See [`Document::load`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path(path: impl AsRef<Path>) -> Result<Document> {
    Document::open(path)
}

/// Renders a document with the default layout.
#[must_use]
pub fn to_string(doc: &Document) -> String {
    doc.to_string_with_options(&IniOptions::default())
}

/// Renders a document with custom options.
#[must_use]
pub fn to_string_with_options(doc: &Document, options: &IniOptions) -> String {
    doc.to_string_with_options(options)
}

/// Writes a document to `writer` with the default layout.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{to_writer, Document};
///
/// let mut doc = Document::new();
/// doc.add_value("a", "n", 1).unwrap();
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[A]\nn=1");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, doc, &IniOptions::default())
}

/// Writes a document to `writer` with custom options, in a single `write_all`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, doc: &Document, options: &IniOptions) -> Result<()>
where
    W: io::Write,
{
    let text = doc.to_string_with_options(options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
