use std::path::Path;

use harvest_core::{
    artifact_file_name, contains_marker, file_name_of, has_extension, normalize_link,
    HarvestSettings, DRIVER_ARTIFACT,
};
use pretty_assertions::assert_eq;

#[test]
fn file_name_is_last_path_segment() {
    assert_eq!(
        file_name_of("https://cdn.example.com/jdbc/Foo-1.2.3.zip"),
        "Foo-1.2.3.zip"
    );
    assert_eq!(file_name_of("Foo.zip"), "Foo.zip");
    assert_eq!(file_name_of("https://cdn.example.com/jdbc/"), "");
}

#[test]
fn marker_and_extension_ignore_ascii_case() {
    assert!(contains_marker("https://cdn.example.com/JDBC/x.zip", "jdbc"));
    assert!(!contains_marker("https://cdn.example.com/odbc/x.zip", "jdbc"));
    assert!(has_extension("x/Driver.ZIP", ".zip"));
    assert!(!has_extension("x/Driver.zip.asc", ".zip"));
    assert!(!has_extension("ip", ".zip"));
}

#[test]
fn root_relative_links_resolve_against_page_origin() {
    let page = "https://cloud.google.com/bigquery/docs/reference/odbc-jdbc-drivers";
    assert_eq!(
        normalize_link("/jdbc/Driver.zip", page),
        "https://cloud.google.com/jdbc/Driver.zip"
    );
    assert_eq!(
        normalize_link("//storage.example.com/jdbc/Driver.zip", page),
        "https://storage.example.com/jdbc/Driver.zip"
    );
    assert_eq!(
        normalize_link("https://storage.example.com/jdbc/Driver.zip", page),
        "https://storage.example.com/jdbc/Driver.zip"
    );
    assert_eq!(normalize_link("jdbc/Driver.zip", page), "jdbc/Driver.zip");
}

#[test]
fn artifact_name_is_prefixed_with_archive_stem() {
    assert_eq!(
        artifact_file_name(Path::new("downloads/Foo-1.2.3.zip"), DRIVER_ARTIFACT),
        "Foo-1.2.3-GoogleBigQueryJDBC42.jar"
    );
}

#[test]
fn only_the_final_extension_is_stripped() {
    assert_eq!(
        artifact_file_name(Path::new("downloads/Driver.1.0.tar.zip"), DRIVER_ARTIFACT),
        "Driver.1.0.tar-GoogleBigQueryJDBC42.jar"
    );
    assert_eq!(
        artifact_file_name(Path::new("downloads/.zip"), DRIVER_ARTIFACT),
        "-GoogleBigQueryJDBC42.jar"
    );
    assert_eq!(
        artifact_file_name(Path::new("downloads/Driver"), DRIVER_ARTIFACT),
        "Driver-GoogleBigQueryJDBC42.jar"
    );
}

#[test]
fn default_settings_do_not_provision() {
    let settings = HarvestSettings::default();
    assert_eq!(settings.downloads_dir, Path::new("downloads"));
    assert_eq!(settings.history_path, Path::new("download_history.txt"));
    assert!(!settings.provision_missing);
}
