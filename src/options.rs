//! Configuration options for writing INI text.
//!
//! - [`IniOptions`]: main configuration struct
//! - [`LineEnding`]: `\n` or `\r\n` between lines
//!
//! The defaults produce the canonical layout: `\n` between lines, no blank lines
//! between sections and no newline after the last line.
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{to_string_with_options, Document, IniOptions, LineEnding};
//!
//! let mut doc = Document::new();
//! doc.add_value("a", "x", 1).unwrap();
//! doc.add_value("b", "y", 2).unwrap();
//!
//! let options = IniOptions::new()
//!     .with_line_ending(LineEnding::CrLf)
//!     .with_section_spacing(true)
//!     .with_trailing_newline(true);
//! let text = to_string_with_options(&doc, &options);
//! assert_eq!(text, "[A]\r\nx=1\r\n\r\n[B]\r\ny=2\r\n");
//! ```

/// Line terminator used between rendered lines.
///
/// # Examples
///
/// ```rust
/// use ini_doc::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration options for the writer.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{IniOptions, LineEnding};
///
/// let options = IniOptions::new();
/// assert_eq!(options.line_ending, LineEnding::Lf);
/// assert!(!options.trailing_newline);
/// assert!(!options.section_spacing);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniOptions {
    pub line_ending: LineEnding,
    /// Terminate the last line as well
    pub trailing_newline: bool,
    /// Put an empty line before every section header except the first line of output
    pub section_spacing: bool,
}

impl IniOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    #[must_use]
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// Separates sections with a blank line, which the parser skips on reload.
    #[must_use]
    pub fn with_section_spacing(mut self, section_spacing: bool) -> Self {
        self.section_spacing = section_spacing;
        self
    }
}
