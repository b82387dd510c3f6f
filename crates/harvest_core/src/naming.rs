use std::path::Path;

/// `{archive stem}-{artifact}`: the stem is the archive's file name with only
/// its final `.ext` removed, so artifacts from different releases never
/// collide. A name that is all extension (`.zip`) leaves an empty stem.
pub fn artifact_file_name(archive: &Path, artifact: &str) -> String {
    let name = archive
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = name.rsplit_once('.').map_or(&*name, |(stem, _)| stem);
    format!("{stem}-{artifact}")
}
