//! Building a document programmatically and saving it to disk.
//!
//! Run with: cargo run --example typed_values

use ini_doc::{ini, Document, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = ini! {
        "Window" => {
            "title" => "Demo",
            "width" => 1280,
            "scale" => 1.5,
            "fullscreen" => false,
        },
    }?;

    // add_value upserts: this overwrites `width` and keeps its position
    doc.add_value("window", "WIDTH", 1920)?;

    for section in doc.sections() {
        for (key, value) in section {
            let kind = match value {
                Value::String(_) => "string",
                Value::Raw(_) => "text",
                Value::Integer(_) => "integer",
                Value::Float(_) => "float",
                Value::Boolean(_) => "boolean",
            };
            println!("[{}] {} = {} ({})", section.name(), key, value, kind);
        }
    }

    let path = std::env::temp_dir().join("ini_doc_typed_values.ini");
    doc.save(Some(path.as_path()))?;
    println!("\nSaved to {}", path.display());

    let loaded = Document::open(&path)?;
    assert_eq!(loaded.get_int_value("window", "width"), 1920);
    assert!(!loaded.get_bool_value("window", "fullscreen"));
    println!("✓ Reloaded with {} section(s)", loaded.len());

    Ok(())
}
