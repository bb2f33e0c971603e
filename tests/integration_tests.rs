use ini_doc::{from_path, from_str, to_string, Document, Error, IniOptions, LineEnding};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write fixture");
    path
}

#[test]
fn test_load_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "app.ini",
        "; application settings\n\
         \n\
         [Server]\n\
         host=\"example.org\"\n\
         port=8443 ;tls\n\
         timeout=2.5\n\
         secure=YES\n\
         \n\
         [Paths]\n\
         root=/var/www;static\n",
    );

    let doc = Document::open(&path).unwrap();
    assert_eq!(doc.source_path(), Some(path.as_path()));
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get_value("server", "host"), "example.org");
    assert_eq!(doc.get_int_value("server", "port"), 8443);
    assert_eq!(doc.get_float_value("server", "timeout"), 2.5);
    assert!(doc.get_bool_value("server", "secure"));
    assert_eq!(doc.get_value("paths", "root"), "/var/www;static");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ini");

    let err = Document::open(&path).unwrap_err();
    assert_eq!(err, Error::FileNotFound { path: path.clone() });
}

#[test]
fn test_directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Document::open(dir.path()).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_duplicate_section_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "dup.ini", "[A]\nk=1\n[A]\nk=2\n");

    let err = from_path(&path).unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateSection {
            name: "A".to_string(),
            line: 3
        }
    );
}

#[test]
fn test_duplicate_key_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "dup.ini", "[A]\nk=1\nk=1=2\n");

    let err = from_path(&path).unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { ref key, line: 3, .. } if key == "k"));
}

#[test]
fn test_failed_load_keeps_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_file(&dir, "good.ini", "[Keep]\nvalue=1\n");
    let bad = write_file(&dir, "bad.ini", "[New]\nx=1\n[new]\n");

    let mut doc = Document::open(&good).unwrap();
    let before = doc.clone();

    assert!(doc.load(&bad).is_err());
    assert_eq!(doc, before);
    assert_eq!(doc.source_path(), Some(good.as_path()));
    assert!(!doc.is_section_exist("new"));

    assert!(doc.load(dir.path().join("missing.ini")).is_err());
    assert_eq!(doc, before);
}

#[test]
fn test_load_replaces_contents() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(&dir, "first.ini", "[One]\na=1\n");
    let second = write_file(&dir, "second.ini", "[Two]\nb=2\n");

    let mut doc = Document::open(&first).unwrap();
    doc.load(&second).unwrap();

    assert!(!doc.is_section_exist("one"));
    assert_eq!(doc.get_int_value("two", "b"), 2);
    assert_eq!(doc.source_path(), Some(second.as_path()));
}

#[test]
fn test_save_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ini");

    let mut doc = Document::new();
    doc.add_value("Window", "Title", "My App").unwrap();
    doc.add_value("Window", "Width", 1280).unwrap();
    doc.add_value("Window", "Scale", 1.25).unwrap();
    doc.add_value("Flags", "Fullscreen", true).unwrap();
    doc.add_value("Flags", "Vsync", false).unwrap();
    doc.save(Some(path.as_path())).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[WINDOW]\ntitle=\"My App\"\nwidth=1280\nscale=1.25\n[FLAGS]\nfullscreen=yes\nvsync=no"
    );

    let back = Document::open(&path).unwrap();
    assert_eq!(back.get_value("window", "title"), "My App");
    assert_eq!(back.get_int_value("window", "width"), 1280);
    assert_eq!(back.get_float_value("window", "scale"), 1.25);
    assert!(back.get_bool_value("flags", "fullscreen"));
    assert!(!back.get_bool_value("flags", "vsync"));
}

#[test]
fn test_save_defaults_to_source_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "cfg.ini", "[A]\nk=old\n; dropped on save\n");

    let mut doc = Document::open(&path).unwrap();
    doc.add_value("a", "k", "new").unwrap();
    doc.add_value("b", "extra", 7).unwrap();
    doc.save(None).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[A]\nk=\"new\"\n[B]\nextra=7"
    );
}

#[test]
fn test_save_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "big.ini", &"; padding\n".repeat(100));

    let mut doc = Document::new();
    doc.add_value("a", "b", 1).unwrap();
    doc.save(Some(path.as_path())).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[A]\nb=1");
}

#[test]
fn test_load_then_save_keeps_file_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "plain.ini", "top=1\n[A]\nport=8080\nname=plain");

    let doc = Document::open(&path).unwrap();
    doc.save(None).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "top=1\n[A]\nport=8080\nname=plain"
    );
}

#[test]
fn test_save_with_empty_path_uses_source_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "c.ini", "[A]\nk=1\n");

    let mut doc = Document::open(&path).unwrap();
    doc.add_value("a", "n", 2).unwrap();
    doc.save(Some(Path::new(""))).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[A]\nk=1\nn=2");
}

#[test]
fn test_save_without_target() {
    let doc = from_str("[A]\nk=1").unwrap();
    assert_eq!(doc.save(None), Err(Error::NoTargetPath));
}

#[test]
fn test_save_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.ini");

    let doc = from_str("[A]\nk=1").unwrap();
    assert!(matches!(doc.save(Some(path.as_path())), Err(Error::Io(_))));
}

#[test]
fn test_save_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.ini");

    let doc = from_str("[A]\nx=1\n[B]\ny=2").unwrap();
    let options = IniOptions::new()
        .with_line_ending(LineEnding::CrLf)
        .with_trailing_newline(true);
    doc.save_with_options(Some(path.as_path()), &options).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "[A]\r\nx=1\r\n[B]\r\ny=2\r\n");

    let back = Document::open(&path).unwrap();
    assert_eq!(back.get_int_value("a", "x"), 1);
    assert_eq!(back.get_int_value("b", "y"), 2);
}

#[test]
fn test_crlf_file_matches_lf_file() {
    let dir = tempfile::tempdir().unwrap();
    let lf = write_file(&dir, "lf.ini", "[A]\nk=\"v\" ;c\nn=3\n");
    let crlf = write_file(&dir, "crlf.ini", "[A]\r\nk=\"v\" ;c\r\nn=3\r\n");

    let lf = Document::open(&lf).unwrap();
    let crlf = Document::open(&crlf).unwrap();
    assert_eq!(to_string(&lf), to_string(&crlf));
}

#[test]
fn test_global_section_roundtrip() {
    let doc = from_str("name=top\n[A]\nk=1\n").unwrap();
    assert!(doc.is_section_exist(""));
    assert_eq!(doc.get_value("", "name"), "top");

    let text = to_string(&doc);
    assert_eq!(text, "name=top\n[A]\nk=1");

    let back = from_str(&text).unwrap();
    assert_eq!(back.get_value("", "name"), "top");
    assert_eq!(back.get_value("a", "k"), "1");
}

#[test]
fn test_serialize_document_to_json() {
    let mut doc = Document::new();
    doc.add_value("Db", "host", "localhost").unwrap();
    doc.add_value("Db", "port", 5432).unwrap();
    doc.add_value("Db", "ssl", true).unwrap();

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "DB": { "host": "localhost", "port": 5432, "ssl": true } })
    );
}

#[test]
fn test_sections_iterate_in_order() {
    let doc = from_str("[Zeta]\n[alpha]\n[Mid]\n").unwrap();
    let names: Vec<_> = doc.sections().map(|s| s.name().to_string()).collect();
    assert_eq!(names, vec!["ZETA", "ALPHA", "MID"]);
    assert!(doc.section("alpha").is_some_and(|s| s.is_empty()));
}
