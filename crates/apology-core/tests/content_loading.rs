//! Loading card content from disk

use std::io::Write;

use apology_core::{CardContent, CardError};
use tempfile::NamedTempFile;

#[test]
fn test_load_overrides_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "recipient": "Ana", "repair_date": "1 Martie" }}"#
    )
    .unwrap();

    let content = CardContent::load(file.path()).unwrap();
    assert_eq!(content.recipient, "Ana");
    assert_eq!(content.repair_date, "1 Martie");
    assert_eq!(content.sender, CardContent::default().sender);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = CardContent::load_or_default(Some(path.as_path())).unwrap_err();
    match err {
        CardError::ContentRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_invalid_file_reports_path() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[1, 2").unwrap();

    let err = CardContent::load(file.path()).unwrap_err();
    assert!(matches!(err, CardError::ContentParse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}
