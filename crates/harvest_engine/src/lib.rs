//! Harvest engine: network, archive and history IO behind the driver pipeline.
mod archive;
mod decode;
mod download;
mod fetch;
mod harvest;
mod history;
mod links;
mod persist;
mod types;

pub use archive::{extract_artifact, is_zip_archive};
pub use decode::decode_page;
pub use download::download_archive;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use harvest::{Harvester, RunSummary};
pub use history::{DownloadHistory, HistoryError};
pub use links::DriverLinkExtractor;
pub use persist::{prepare_downloads_dir, AtomicFileWriter, PersistError};
pub use types::{
    FailureKind, FetchError, FetchMetadata, FetchOutput, HarvestError, Rejection, StepOutcome,
};
