use std::path::Path;

use jsonstub::error::ServerError;
use jsonstub::properties::Properties;

#[test]
fn test_shipped_properties_load_non_empty() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/server.properties");
    let props = Properties::load(&path).unwrap();

    assert!(!props.is_empty());
    assert_eq!(props.get("person"), Some("person.json"));
    assert_eq!(props.json_file_location(), Some("./JSON_Files/"));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.properties");
    std::fs::write(&path, "# routes\nperson=person.json\norders = orders.json\n").unwrap();

    let props = Properties::load(&path).unwrap();

    assert_eq!(props.len(), 2);
    assert_eq!(props.get("orders"), Some("orders.json"));
    assert_eq!(props.json_file_location(), None);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = Properties::load(dir.path().join("absent.properties"));

    assert!(matches!(result, Err(ServerError::ConfigLoad { .. })));
}

#[test]
fn test_load_without_entries_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.properties");
    std::fs::write(&path, "# nothing here\n\n! still nothing\n").unwrap();

    let result = Properties::load(&path);

    assert!(matches!(result, Err(ServerError::EmptyConfig(_))));
}

#[test]
fn test_comments_and_blank_lines_skipped() {
    let props = Properties::parse("\n   # comment = ignored\n! bang = ignored\n\nkey=value\n");

    assert_eq!(props.len(), 1);
    assert_eq!(props.get("key"), Some("value"));
}

#[test]
fn test_later_duplicates_win() {
    let props = Properties::parse("person=old.json\nperson=new.json\n");

    assert_eq!(props.get("person"), Some("new.json"));
}

#[test]
fn test_crlf_line_endings() {
    let props = Properties::parse("a=1\r\nb=2\r\n");

    assert_eq!(props.get("a"), Some("1"));
    assert_eq!(props.get("b"), Some("2"));
}

#[test]
fn test_value_keeps_inner_separators() {
    let props = Properties::parse("json.file.location=D:/test\nurl = http://host:80/a=b\n");

    assert_eq!(props.json_file_location(), Some("D:/test"));
    assert_eq!(props.get("url"), Some("http://host:80/a=b"));
}

#[test]
fn test_key_without_value() {
    let props = Properties::parse("lonely\n");

    assert_eq!(props.get("lonely"), Some(""));
}

#[test]
fn test_insert_overrides_entry() {
    let mut props = Properties::parse("json.file.location=./JSON_Files/\n");
    props.insert("json.file.location", "D:/test");

    assert_eq!(props.json_file_location(), Some("D:/test"));
    assert_eq!(props.len(), 1);
}
