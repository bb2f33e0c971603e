//! The in-memory INI document.
//!
//! A [`Document`] owns an insertion-ordered map of [`Section`]s and remembers the path
//! it was loaded from, which becomes the default target of [`Document::save`].
//!
//! Reads are total: every `get_*` accessor returns a zero value (`""`, `0`, `0.0`,
//! `false`) for a missing section or key and never fails. Loading, adding and saving
//! return [`Result`].
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::Document;
//!
//! let mut doc = Document::new();
//! doc.add_value("Server", "Port", 8080).unwrap();
//! doc.add_value("Server", "Debug", true).unwrap();
//!
//! assert_eq!(doc.get_int_value("server", "port"), 8080);
//! assert!(doc.get_bool_value("SERVER", "DEBUG"));
//! assert_eq!(doc.get_value("missing", "key"), "");
//! ```

use crate::format::{is_valid_name, normalize_section};
use crate::{parser, writer, Error, IniOptions, Result, Section, Value};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// An INI document: ordered sections plus an optional source path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    sections: IndexMap<String, Section>,
    source_path: Option<PathBuf>,
}

impl Document {
    /// Creates an empty, in-memory document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document by loading `path`.
    ///
    /// # Errors
    ///
    /// See [`Document::load`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut doc = Self::new();
        doc.load(path)?;
        Ok(doc)
    }

    /// Replaces the contents of this document with the file at `path`.
    ///
    /// The file is parsed into a fresh map first. On any error the document keeps its
    /// previous sections and source path.
    ///
    /// # Errors
    ///
    /// - [`Error::FileNotFound`] if the file cannot be opened
    /// - [`Error::Io`] if reading fails part way or the file is not UTF-8
    /// - [`Error::DuplicateSection`] / [`Error::DuplicateKey`] on repeated names
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::debug!("loading INI file {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                Error::file_not_found(path)
            }
            _ => Error::from(e),
        })?;
        if !file.metadata()?.is_file() {
            return Err(Error::file_not_found(path));
        }

        let sections = parser::parse_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} section(s) from {}",
            sections.len(),
            path.display()
        );

        self.sections = sections;
        self.source_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Parses a document from buffered input. The result has no source path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails and a duplicate error on repeated names.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Document {
            sections: parser::parse_reader(reader)?,
            source_path: None,
        })
    }

    /// The path this document was last loaded from, if any.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Returns the stored value rendered as text, or `""` if it does not exist.
    ///
    /// Strings come back without quotes and booleans as `yes`/`no`.
    #[must_use]
    pub fn get_value(&self, section: &str, key: &str) -> String {
        self.get(section, key).map(Value::render).unwrap_or_default()
    }

    /// Returns the value as a base-10 integer, or `0` if missing or not numeric.
    #[must_use]
    pub fn get_int_value(&self, section: &str, key: &str) -> i64 {
        self.get(section, key).map_or(0, Value::coerce_i64)
    }

    /// Returns the value as a float, or `0.0` if missing or not numeric.
    #[must_use]
    pub fn get_float_value(&self, section: &str, key: &str) -> f64 {
        self.get(section, key).map_or(0.0, Value::coerce_f64)
    }

    /// Returns `true` only if the value is `yes` (any case) or a stored `true`.
    #[must_use]
    pub fn get_bool_value(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some_and(Value::coerce_bool)
    }

    #[must_use]
    pub fn is_section_exist(&self, section: &str) -> bool {
        self.sections.contains_key(&normalize_section(section))
    }

    #[must_use]
    pub fn is_key_exist(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Returns the typed value, if present.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.section(section).and_then(|s| s.get(key))
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(&normalize_section(name))
    }

    /// Iterates over sections in insertion order.
    pub fn sections(&self) -> indexmap::map::Values<'_, String, Section> {
        self.sections.values()
    }

    /// Number of sections, including the global section if present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sets `key` in `section`, creating the section if needed and overwriting any
    /// existing value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSectionName`] or [`Error::InvalidKeyName`] if a name is
    /// not made only of ASCII letters and underscores. The document is not modified
    /// in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::{Document, Error};
    ///
    /// let mut doc = Document::new();
    /// doc.add_value("Foo", "Bar", "x").unwrap();
    /// assert_eq!(doc.get_value("foo", "BAR"), "x");
    ///
    /// let err = doc.add_value("123", "k", "v").unwrap_err();
    /// assert_eq!(err, Error::InvalidSectionName("123".to_string()));
    /// assert!(!doc.is_section_exist("123"));
    /// ```
    pub fn add_value(&mut self, section: &str, key: &str, value: impl Into<Value>) -> Result<()> {
        if !is_valid_name(section) {
            return Err(Error::InvalidSectionName(section.to_string()));
        }
        if !is_valid_name(key) {
            return Err(Error::InvalidKeyName(key.to_string()));
        }

        self.section_entry(section).insert(key, value.into());
        Ok(())
    }

    /// Creates `section` with no keys if it does not exist yet. An existing section is
    /// left as it is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSectionName`] if the name is not made only of ASCII
    /// letters and underscores.
    pub fn add_section(&mut self, section: &str) -> Result<()> {
        if !is_valid_name(section) {
            return Err(Error::InvalidSectionName(section.to_string()));
        }

        self.section_entry(section);
        Ok(())
    }

    fn section_entry(&mut self, section: &str) -> &mut Section {
        self.sections
            .entry(normalize_section(section))
            .or_insert_with(|| Section::new(section))
    }

    /// Writes the document with the default layout.
    ///
    /// `None` or an empty path writes back to [`Document::source_path`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTargetPath`] if no usable path is given and the document was never
    /// loaded from a file, or [`Error::Io`] if writing fails.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        self.save_with_options(path, &IniOptions::default())
    }

    /// Writes the document using custom [`IniOptions`].
    ///
    /// # Errors
    ///
    /// Same as [`Document::save`].
    pub fn save_with_options(&self, path: Option<&Path>, options: &IniOptions) -> Result<()> {
        let target = path
            .filter(|p| !p.as_os_str().is_empty())
            .or(self.source_path.as_deref())
            .ok_or(Error::NoTargetPath)?;

        let text = self.to_string_with_options(options);
        log::debug!("writing {} byte(s) to {}", text.len(), target.display());
        fs::write(target, text)?;
        Ok(())
    }

    /// Renders the document as INI text.
    #[must_use]
    pub fn to_string_with_options(&self, options: &IniOptions) -> String {
        writer::render(self.sections.values(), options)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Document {
            sections: parser::parse_str(s)?,
            source_path: None,
        })
    }
}

/// Renders with [`IniOptions::default`].
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_options(&IniOptions::default()))
    }
}

/// Serializes as a map of section name to a map of key to typed value.
impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}
