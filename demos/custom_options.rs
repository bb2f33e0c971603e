//! Customizing INI output with IniOptions.
//!
//! Run with: cargo run --example custom_options

use ini_doc::{ini, to_string, to_string_with_options, IniOptions, LineEnding};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = ini! {
        "General" => { "name" => "MyApp", "version" => 3 },
        "Logging" => { "level" => "info", "color" => true },
    }?;

    // Default format: LF, no blank lines, no trailing newline
    println!("Default:\n{}\n", to_string(&doc));

    // Blank line between sections and a final newline
    let spaced = IniOptions::new()
        .with_section_spacing(true)
        .with_trailing_newline(true);
    print!("Spaced:\n{}", to_string_with_options(&doc, &spaced));

    // Windows line endings
    let crlf = IniOptions::new().with_line_ending(LineEnding::CrLf);
    let text = to_string_with_options(&doc, &crlf);
    println!("\nCRLF output is {} bytes, {} lines", text.len(), text.lines().count());

    Ok(())
}
