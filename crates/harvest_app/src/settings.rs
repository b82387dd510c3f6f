use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use harvest_core::{DenyList, HarvestSettings};
use harvest_engine::FetchSettings;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::logging::LogDestination;

pub(crate) const SETTINGS_FILENAME: &str = "harvester.ron";

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Optional overrides read from `harvester.ron`; absent fields keep their
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PersistedSettings {
    page_url: Option<String>,
    link_marker: Option<String>,
    archive_extension: Option<String>,
    artifact_name: Option<String>,
    downloads_dir: Option<PathBuf>,
    history_path: Option<PathBuf>,
    deny_list: Option<Vec<String>>,
    provision_missing: Option<bool>,
    request_timeout_secs: Option<u64>,
    verbose: Option<bool>,
    log_file: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct AppSettings {
    pub harvest: HarvestSettings,
    pub fetch: FetchSettings,
    pub verbose: bool,
    pub log_file: bool,
}

impl AppSettings {
    pub(crate) fn from_persisted(persisted: PersistedSettings) -> Self {
        let mut settings = Self::default();
        let harvest = &mut settings.harvest;
        if let Some(url) = persisted.page_url {
            harvest.page_url = url;
        }
        if let Some(marker) = persisted.link_marker {
            harvest.link_marker = marker;
        }
        if let Some(extension) = persisted.archive_extension {
            harvest.archive_extension = extension;
        }
        if let Some(artifact) = persisted.artifact_name {
            harvest.artifact_name = artifact;
        }
        if let Some(dir) = persisted.downloads_dir {
            harvest.downloads_dir = dir;
        }
        if let Some(path) = persisted.history_path {
            harvest.history_path = path;
        }
        if let Some(names) = persisted.deny_list {
            harvest.deny_list = DenyList::new(names);
        }
        if let Some(provision) = persisted.provision_missing {
            harvest.provision_missing = provision;
        }
        if let Some(secs) = persisted.request_timeout_secs {
            settings.fetch.request_timeout = Duration::from_secs(secs);
        }
        settings.verbose = persisted.verbose.unwrap_or(false);
        settings.log_file = persisted.log_file.unwrap_or(false);
        settings
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub(crate) fn log_destination(&self) -> LogDestination {
        if self.log_file {
            LogDestination::Both
        } else {
            LogDestination::Terminal
        }
    }
}

/// Read `harvester.ron` from `dir`. `Ok(None)` when the file does not exist.
pub(crate) fn load_settings(dir: &Path) -> Result<Option<PersistedSettings>, SettingsError> {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(ron::from_str(&content)?))
}
