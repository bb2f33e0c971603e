//! INI rendering.
//!
//! The [`Writer`] turns a [`Document`](crate::Document) back into text: one `[NAME]`
//! header per section followed by one `key=value` line per entry, both in insertion
//! order. The global section (empty name) is written first and without a header so
//! that its keys are read back into the same place.
//!
//! ```rust
//! use ini_doc::{to_string, Document};
//!
//! let mut doc = Document::new();
//! doc.add_value("Server", "Host", "localhost").unwrap();
//! doc.add_value("Server", "Debug", false).unwrap();
//!
//! assert_eq!(to_string(&doc), "[SERVER]\nhost=\"localhost\"\ndebug=no");
//! ```

use crate::{IniOptions, Section};

/// Accumulates rendered INI text.
pub struct Writer<'a> {
    output: String,
    options: &'a IniOptions,
    lines: usize,
}

impl<'a> Writer<'a> {
    pub fn new(options: &'a IniOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            options,
            lines: 0,
        }
    }

    pub fn into_inner(mut self) -> String {
        if self.options.trailing_newline && self.lines > 0 {
            self.output.push_str(self.options.line_ending.as_str());
        }
        self.output
    }

    /// Renders one section: header (unless global) then entries.
    pub fn write_section(&mut self, section: &Section) {
        if !section.name().is_empty() {
            if self.options.section_spacing && self.lines > 0 {
                self.push_line("");
            }
            let header = format!("[{}]", section.name());
            self.push_line(&header);
        }

        for (key, value) in section {
            let line = format!("{}={}", key, value);
            self.push_line(&line);
        }
    }

    fn push_line(&mut self, line: &str) {
        if self.lines > 0 {
            self.output.push_str(self.options.line_ending.as_str());
        }
        self.output.push_str(line);
        self.lines += 1;
    }
}

/// Renders sections in iteration order.
pub fn render<'s, I>(sections: I, options: &IniOptions) -> String
where
    I: IntoIterator<Item = &'s Section>,
{
    let mut sections: Vec<&Section> = sections.into_iter().collect();
    // Stable: keeps the relative order of everything else
    sections.sort_by_key(|s| !s.name().is_empty());

    let mut writer = Writer::new(options);
    for section in sections {
        writer.write_section(section);
    }
    writer.into_inner()
}
