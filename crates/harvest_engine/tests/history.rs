use std::fs;

use harvest_engine::{DownloadHistory, HistoryError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_history_is_fatal_without_provisioning() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("download_history.txt");

    let err = DownloadHistory::load(path.clone(), false).unwrap_err();
    assert!(matches!(err, HistoryError::Missing(missing) if missing == path));
    assert!(!path.exists());
}

#[test]
fn provisioning_starts_empty_and_creates_file_on_first_record() {
    harvest_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("download_history.txt");

    let mut history = DownloadHistory::load(path.clone(), true).unwrap();
    assert!(history.is_empty());
    assert!(!path.exists());

    assert!(history.record("https://cdn.example.com/jdbc/A.zip").unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "https://cdn.example.com/jdbc/A.zip\n"
    );
}

#[test]
fn loaded_lines_are_trimmed_and_checked_verbatim() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("download_history.txt");
    fs::write(
        &path,
        "https://cdn.example.com/jdbc/A.zip\r\n\n  https://cdn.example.com/jdbc/B.zip  \n",
    )
    .unwrap();

    let history = DownloadHistory::load(path, false).unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.contains("https://cdn.example.com/jdbc/A.zip"));
    assert!(history.contains("https://cdn.example.com/jdbc/B.zip"));
    assert!(!history.contains("https://cdn.example.com/jdbc/a.zip"));
    assert!(!history.contains("cdn.example.com/jdbc/A.zip"));
}

#[test]
fn record_appends_once() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("download_history.txt");
    fs::write(&path, "https://cdn.example.com/jdbc/A.zip\n").unwrap();

    let mut history = DownloadHistory::load(path.clone(), false).unwrap();
    assert!(!history.record("https://cdn.example.com/jdbc/A.zip").unwrap());
    assert!(history.record("https://cdn.example.com/jdbc/B.zip").unwrap());
    assert!(!history.record("https://cdn.example.com/jdbc/B.zip").unwrap());

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "https://cdn.example.com/jdbc/A.zip\nhttps://cdn.example.com/jdbc/B.zip\n"
    );
    assert_eq!(history.len(), 2);
    assert!(history.contains("https://cdn.example.com/jdbc/B.zip"));
}

#[test]
fn record_starts_a_new_line_after_unterminated_last_entry() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("download_history.txt");
    fs::write(&path, "https://cdn.example.com/jdbc/A.zip").unwrap();

    let mut history = DownloadHistory::load(path.clone(), false).unwrap();
    history.record("https://cdn.example.com/jdbc/B.zip").unwrap();
    history.record("https://cdn.example.com/jdbc/C.zip").unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "https://cdn.example.com/jdbc/A.zip\nhttps://cdn.example.com/jdbc/B.zip\nhttps://cdn.example.com/jdbc/C.zip\n"
    );
}

#[test]
fn padded_links_match_their_trimmed_history_line() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("download_history.txt");
    fs::write(&path, "https://cdn.example.com/jdbc/A.zip\n").unwrap();

    let mut history = DownloadHistory::load(path.clone(), false).unwrap();
    assert!(history.contains("  https://cdn.example.com/jdbc/A.zip\t"));
    assert!(!history.record(" https://cdn.example.com/jdbc/A.zip").unwrap());
    assert!(history.record("\thttps://cdn.example.com/jdbc/B.zip  ").unwrap());

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "https://cdn.example.com/jdbc/A.zip\nhttps://cdn.example.com/jdbc/B.zip\n"
    );
    assert!(history.contains("https://cdn.example.com/jdbc/B.zip"));
}
