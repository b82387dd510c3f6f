use std::path::PathBuf;

use crate::DenyList;

/// Vendor page listing the BigQuery ODBC/JDBC driver downloads.
pub const DRIVER_PAGE_URL: &str =
    "https://cloud.google.com/bigquery/docs/reference/odbc-jdbc-drivers";

/// The one file pulled out of every driver archive.
pub const DRIVER_ARTIFACT: &str = "GoogleBigQueryJDBC42.jar";

/// Everything a harvest run needs to know, passed explicitly to each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestSettings {
    pub page_url: String,
    /// Substring an `href` must contain to count as a driver link.
    pub link_marker: String,
    pub archive_extension: String,
    pub artifact_name: String,
    pub downloads_dir: PathBuf,
    pub history_path: PathBuf,
    pub deny_list: DenyList,
    /// Create the downloads directory and history file when they are absent.
    /// Off by default: both are expected to be provisioned by the operator.
    pub provision_missing: bool,
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            page_url: DRIVER_PAGE_URL.to_string(),
            link_marker: "jdbc".to_string(),
            archive_extension: ".zip".to_string(),
            artifact_name: DRIVER_ARTIFACT.to_string(),
            downloads_dir: PathBuf::from("downloads"),
            history_path: PathBuf::from("download_history.txt"),
            deny_list: DenyList::obsolete_drivers(),
            provision_missing: false,
        }
    }
}
