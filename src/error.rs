//! Error types for INI loading, mutation and saving.
//!
//! Only the fallible half of the API returns these. Lookups such as
//! [`Document::get_value`](crate::Document::get_value) never fail and degrade to a
//! zero value instead.
//!
//! ## Error Categories
//!
//! - **File errors**: the source file is missing, or reading/writing failed
//! - **Duplicate errors**: a section or key appears twice while loading
//! - **Name errors**: a section or key name passed to `add_value` is not `[A-Za-z_]+`
//! - **Target errors**: `save` was called without a path on an in-memory document
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{from_str, Error};
//!
//! let err = from_str("[A]\nk=1\n[A]\nk=2\n").unwrap_err();
//! assert_eq!(err, Error::DuplicateSection { name: "A".to_string(), line: 3 });
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Represents all possible errors raised by loading, mutating or saving a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The file to load does not exist or cannot be opened for reading
    #[error("INI file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A section header was seen twice in the same input
    #[error("Duplicate section [{name}] at line {line}")]
    DuplicateSection { name: String, line: usize },

    /// A key was seen twice within the same section of the input
    #[error("Duplicate key '{key}' in section [{section}] at line {line}")]
    DuplicateKey {
        section: String,
        key: String,
        line: usize,
    },

    /// Section name contains characters outside `[A-Za-z_]`, or is empty
    #[error("Invalid section name: {0:?}")]
    InvalidSectionName(String),

    /// Key name contains characters outside `[A-Za-z_]`, or is empty
    #[error("Invalid key name: {0:?}")]
    InvalidKeyName(String),

    /// `save` was called without a path on a document that was never loaded from disk
    #[error("No target path: pass a path to save() or load the document from a file first")]
    NoTargetPath,
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a not-found error for the given path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::Error;
    ///
    /// let err = Error::file_not_found("missing.ini");
    /// assert!(err.to_string().contains("missing.ini"));
    /// ```
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Error::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
