//! INI Dialect Reference
//!
//! This module documents the INI dialect read and written by this crate, and holds the
//! name grammar shared by the parser and [`Document::add_value`](crate::Document::add_value).
//!
//! # Overview
//!
//! The dialect is deliberately small: flat sections, one `key=value` per line, no
//! escapes, no continuation lines.
//!
//! ```text
//! [SERVER]
//! host="localhost"
//! port=8080
//! debug=yes
//! ; full-line comments and blank lines are ignored on read, never emitted on write
//! motd=hello ;trailing comment, stripped because of the leading space
//! ```
//!
//! # Names
//!
//! | Item | Grammar | Stored as |
//! |------|---------|-----------|
//! | Section | `[A-Za-z_]+` | uppercase |
//! | Key | `[A-Za-z_]+` | lowercase |
//!
//! Lookups normalize their arguments the same way, so `[Server]`, `[SERVER]` and
//! `[server]` all name one section. Digits, hyphens, dots and non-ASCII letters are
//! not part of a name; lines using them are skipped by the parser and rejected by
//! `add_value`.
//!
//! # Lines
//!
//! Leading whitespace is ignored. After that:
//!
//! - `;` at the start makes the line a comment.
//! - `[Name]` opens a section. Anything after `]` is ignored.
//! - `key=rest` sets a key. There is no whitespace allowed between the key and `=`,
//!   and `rest` runs to the end of the line (a second `=` is part of the value).
//! - Any other line is skipped without error.
//!
//! Keys that appear before the first header belong to the global section, whose
//! name is the empty string. On write its entries come first, without a header.
//!
//! # Values
//!
//! Values are processed in this order:
//!
//! 1. Everything from the first ` ;` (space then semicolon) is removed. A `;` with no
//!    space before it is part of the value: `url=a;b` keeps `a;b`.
//! 2. If the remainder starts and ends with `"`, one pair of quotes is removed.
//!    `""x""` becomes `"x"`.
//!
//! Nothing else is trimmed. `key=a  ;c` yields `a ` with one trailing space.
//!
//! # Types
//!
//! The file only holds text. Typed accessors interpret it on read:
//!
//! | Accessor | Accepts | Fallback |
//! |----------|---------|----------|
//! | `get_int_value` | base-10 `i64`, surrounding whitespace allowed | `0` |
//! | `get_float_value` | anything `f64::from_str` accepts | `0.0` |
//! | `get_bool_value` | `yes` in any case | `false` |
//!
//! On write, strings added through `add_value` are quoted, booleans become `yes`/`no`
//! and numbers are written bare. Values read from a file are written back exactly as
//! they were stored, so `port=8080` stays `port=8080`.
//!
//! # Limitations
//!
//! A string added programmatically that contains ` ;` or a line break cannot survive
//! a save/load cycle unchanged, since the dialect has no escape mechanism. Strings that
//! already carry quotes are fine: the writer adds its own pair and the parser removes
//! exactly one.

/// Returns `true` if `name` is a non-empty run of ASCII letters and underscores.
///
/// # Examples
///
/// ```rust
/// use ini_doc::format::is_valid_name;
///
/// assert!(is_valid_name("Server_Main"));
/// assert!(!is_valid_name(""));
/// assert!(!is_valid_name("db1"));
/// assert!(!is_valid_name("my-key"));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_name_byte)
}

#[inline]
pub(crate) const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Length in bytes of the leading `[A-Za-z_]*` run of `s`.
pub(crate) fn name_prefix_len(s: &str) -> usize {
    s.bytes().take_while(|&b| is_name_byte(b)).count()
}

/// Canonical form of a section name.
#[must_use]
pub fn normalize_section(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// Canonical form of a key name.
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.to_ascii_lowercase()
}
