#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::FileOptions;
use zip::ZipWriter;

pub const ARTIFACT: &str = "GoogleBigQueryJDBC42.jar";
pub const JAR_BYTES: &[u8] = b"jar bytes for tests";

pub fn zip_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn driver_zip() -> Vec<u8> {
    zip_with(&[
        ("README.txt", &b"driver readme"[..]),
        (ARTIFACT, JAR_BYTES),
        ("libs/other.jar", &b"dependency"[..]),
    ])
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
