use std::fs::File;
use std::path::{Path, PathBuf};

use harvest_core::artifact_file_name;
use harvest_logging::{harvest_info, harvest_warn};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::{AtomicFileWriter, HarvestError, PersistError, Rejection, StepOutcome};

/// Whether `path` opens as a zip container with a readable central directory.
pub fn is_zip_archive(path: &Path) -> bool {
    File::open(path)
        .ok()
        .and_then(|file| ZipArchive::new(file).ok())
        .is_some()
}

/// Pull `artifact_name` out of `archive_path` into `dest_dir` as
/// `{archive stem}-{artifact_name}`.
///
/// Only that one entry is written. An archive without it is rejected and
/// leaves `dest_dir` untouched.
pub fn extract_artifact(
    archive_path: &Path,
    dest_dir: &Path,
    artifact_name: &str,
) -> Result<StepOutcome<PathBuf>, HarvestError> {
    let file = File::open(archive_path).map_err(PersistError::from)?;
    let mut archive = match ZipArchive::new(file) {
        Ok(archive) => archive,
        Err(err) => {
            harvest_warn!("Cannot open {} as zip: {}", archive_path.display(), err);
            return Ok(StepOutcome::Rejected(Rejection::NotAnArchive {
                path: archive_path.to_path_buf(),
            }));
        }
    };

    let mut entry = match archive.by_name(artifact_name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            harvest_warn!("{} not found in the zip file.", artifact_name);
            return Ok(StepOutcome::Rejected(Rejection::MissingEntry {
                archive: archive_path.to_path_buf(),
                entry: artifact_name.to_string(),
            }));
        }
        Err(source) => {
            return Err(HarvestError::Archive {
                path: archive_path.to_path_buf(),
                source,
            })
        }
    };

    let target_name = artifact_file_name(archive_path, artifact_name);
    let written =
        AtomicFileWriter::new(dest_dir.to_path_buf()).write_from(&target_name, &mut entry)?;
    harvest_info!("Extracted {} to {}", artifact_name, written.display());
    Ok(StepOutcome::Done(written))
}
