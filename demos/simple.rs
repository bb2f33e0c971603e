//! Load INI text, read typed values, and render it back.
//!
//! Run with: cargo run --example simple

use ini_doc::{from_str, to_string};
use std::error::Error;

const CONFIG: &str = "\
; service configuration
[Server]
host=\"0.0.0.0\"
port=8080 ;overridden in production
debug=yes

[Database]
url=postgres://localhost/app;sslmode=disable
pool_size=16
";

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_str(CONFIG)?;

    println!("host      = {}", doc.get_value("server", "host"));
    println!("port      = {}", doc.get_int_value("server", "port"));
    println!("debug     = {}", doc.get_bool_value("server", "debug"));
    println!("url       = {}", doc.get_value("database", "url"));
    println!("pool_size = {}", doc.get_int_value("database", "pool_size"));
    println!("missing   = {:?}", doc.get_value("database", "password"));

    // Comments are dropped and names normalized on the way out
    println!("\nRendered:\n{}", to_string(&doc));

    let back = from_str(&to_string(&doc))?;
    assert_eq!(back.get_int_value("server", "port"), 8080);
    println!("\n✓ Round-trip successful");

    Ok(())
}
