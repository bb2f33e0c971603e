//! INI parsing.
//!
//! This module turns INI text into the ordered section map held by a
//! [`Document`](crate::Document). It is a single-pass, line-oriented scan: each line
//! is classified as a section header, a key line, or something to skip.
//!
//! A [`Parser`] lives for exactly one input. It builds its own section map and only
//! hands it over from [`Parser::finish`], so a caller that hits an error never sees a
//! half-filled result.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use ini_doc::from_str;
//!
//! let doc = from_str("[Main]\nname=\"demo\" ;comment\n").unwrap();
//! assert_eq!(doc.get_value("main", "name"), "demo");
//! ```

use crate::format::{name_prefix_len, normalize_key, normalize_section};
use crate::{Error, Result, Section, Value};
use indexmap::IndexMap;
use std::io::BufRead;

/// Name of the implicit section that collects keys seen before any header.
pub const GLOBAL_SECTION: &str = "";

/// Marker that starts an inline comment inside a value.
const INLINE_COMMENT: &str = " ;";

/// One classified input line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Header(&'a str),
    Entry { key: &'a str, raw_value: &'a str },
    Comment,
    Other,
}

/// An in-progress parse of one input.
#[derive(Debug)]
pub struct Parser {
    sections: IndexMap<String, Section>,
    current: String,
    line: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Parser {
            sections: IndexMap::new(),
            current: GLOBAL_SECTION.to_string(),
            line: 0,
        }
    }

    /// Feeds the next line of input, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSection`] or [`Error::DuplicateKey`] when the line
    /// repeats a name already seen in this input.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line += 1;

        match classify(line) {
            Line::Header(name) => self.open_section(name),
            Line::Entry { key, raw_value } => self.insert_entry(key, raw_value),
            Line::Comment | Line::Other => {
                log::trace!("skipping line {}", self.line);
                Ok(())
            }
        }
    }

    /// Consumes the parser and returns the sections in the order they were opened.
    #[must_use]
    pub fn finish(self) -> IndexMap<String, Section> {
        self.sections
    }

    fn open_section(&mut self, name: &str) -> Result<()> {
        let name = normalize_section(name);
        if self.sections.contains_key(&name) {
            return Err(Error::DuplicateSection {
                name,
                line: self.line,
            });
        }

        self.sections.insert(name.clone(), Section::new(&name));
        self.current = name;
        Ok(())
    }

    fn insert_entry(&mut self, key: &str, raw_value: &str) -> Result<()> {
        let key = normalize_key(key);
        let section = self
            .sections
            .entry(self.current.clone())
            .or_insert_with(|| Section::new(GLOBAL_SECTION));

        if section.contains_key(&key) {
            return Err(Error::DuplicateKey {
                section: self.current.clone(),
                key,
                line: self.line,
            });
        }

        section.insert(&key, Value::Raw(clean_value(raw_value).to_string()));
        Ok(())
    }
}

/// Parses a whole string.
///
/// # Errors
///
/// Returns the first duplicate section or key found.
pub fn parse_str(input: &str) -> Result<IndexMap<String, Section>> {
    let mut parser = Parser::new();
    for line in input.lines() {
        parser.feed_line(line)?;
    }
    Ok(parser.finish())
}

/// Parses everything a buffered reader yields. `\n` and `\r\n` are both accepted.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not UTF-8, and the first
/// duplicate section or key otherwise.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<IndexMap<String, Section>> {
    let mut parser = Parser::new();
    for line in reader.lines() {
        parser.feed_line(&line?)?;
    }
    Ok(parser.finish())
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim_start();

    if line.starts_with(';') {
        return Line::Comment;
    }

    if let Some(rest) = line.strip_prefix('[') {
        let len = name_prefix_len(rest);
        if len > 0 && rest[len..].starts_with(']') {
            return Line::Header(&rest[..len]);
        }
        return Line::Other;
    }

    let len = name_prefix_len(line);
    if len > 0 {
        if let Some(raw_value) = line[len..].strip_prefix('=') {
            return Line::Entry {
                key: &line[..len],
                raw_value,
            };
        }
    }

    Line::Other
}

/// Applies the inline-comment strip, then removes one pair of enclosing quotes.
fn clean_value(raw: &str) -> &str {
    let value = match raw.find(INLINE_COMMENT) {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    unquote(value)
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
