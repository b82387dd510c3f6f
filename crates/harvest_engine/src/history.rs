use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use harvest_logging::{harvest_debug, harvest_info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("download history {0:?} does not exist")]
    Missing(PathBuf),
    #[error("failed to read download history {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to append to download history {path:?}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Links that have already been downloaded and extracted.
///
/// The file is read once; every newly recorded link is appended to it as its
/// own line. There is no locking across processes.
#[derive(Debug)]
pub struct DownloadHistory {
    path: PathBuf,
    seen: HashSet<String>,
    create_on_append: bool,
    needs_newline: bool,
}

impl DownloadHistory {
    /// Load the history at `path`.
    ///
    /// A missing file is an error unless `provision_missing` is set; then the
    /// history starts empty and the file is created on the first append.
    pub fn load(path: impl Into<PathBuf>, provision_missing: bool) -> Result<Self, HistoryError> {
        let path = path.into();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                if !provision_missing {
                    return Err(HistoryError::Missing(path));
                }
                harvest_info!("No download history at {:?}; starting empty", path);
                String::new()
            }
            Err(source) => return Err(HistoryError::Read { path, source }),
        };

        let mut history = Self {
            path,
            seen: HashSet::new(),
            create_on_append: provision_missing,
            needs_newline: !content.is_empty() && !content.ends_with('\n'),
        };
        history.seen.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToOwned::to_owned),
        );
        harvest_debug!(
            "Loaded {} history entries from {:?}",
            history.len(),
            history.path
        );
        Ok(history)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, link: &str) -> bool {
        self.seen.contains(link.trim())
    }

    /// Append `link` unless it is already recorded. Returns whether a line
    /// was written.
    pub fn record(&mut self, link: &str) -> Result<bool, HistoryError> {
        // Stored the way load() reads it back.
        let link = link.trim();
        if self.contains(link) {
            return Ok(false);
        }

        let append_err = |source| HistoryError::Append {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .append(true)
            .create(self.create_on_append)
            .open(&self.path)
            .map_err(append_err)?;
        let line = if self.needs_newline {
            format!("\n{link}\n")
        } else {
            format!("{link}\n")
        };
        file.write_all(line.as_bytes()).map_err(append_err)?;

        self.needs_newline = false;
        self.seen.insert(link.to_string());
        Ok(true)
    }
}
