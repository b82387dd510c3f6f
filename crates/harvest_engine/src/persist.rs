use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use harvest_logging::harvest_info;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("downloads directory {0:?} does not exist")]
    MissingDir(PathBuf),
    #[error("downloads directory unusable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Check that the downloads directory is usable.
///
/// A missing directory is an error unless `provision` is set, in which case
/// it is created.
pub fn prepare_downloads_dir(dir: &Path, provision: bool) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else if provision {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        harvest_info!("Created downloads directory {}", dir.display());
    } else {
        return Err(PersistError::MissingDir(dir.to_path_buf()));
    }
    Ok(())
}

/// Write `{dir}/{filename}` through a temp file in the same directory, then
/// rename it into place.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
        let mut reader = content;
        self.write_from(filename, &mut reader)
    }

    pub fn write_from<R: Read + ?Sized>(
        &self,
        filename: &str,
        reader: &mut R,
    ) -> Result<PathBuf, PersistError> {
        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        io::copy(reader, &mut tmp)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // persist() cannot replace an existing file on every platform.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
