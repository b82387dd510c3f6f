use std::path::PathBuf;
use std::sync::Arc;

use harvest_core::{select_candidates, HarvestSettings};
use harvest_logging::{harvest_debug, harvest_info};

use crate::{
    decode_page, download_archive, extract_artifact, prepare_downloads_dir, DownloadHistory,
    DriverLinkExtractor, FetchSettings, Fetcher, HarvestError, ReqwestFetcher,
};

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Marker-matching links found on the page.
    pub links_found: usize,
    /// Links left after the deny-list and extension filters.
    pub candidates: usize,
    /// Candidates skipped because the history already had them.
    pub skipped: usize,
    /// Artifacts written this run, in processing order.
    pub artifacts: Vec<PathBuf>,
}

impl RunSummary {
    pub fn downloaded(&self) -> usize {
        self.artifacts.len()
    }
}

/// Single-pass driver: page → links → filter → download/extract/record.
///
/// The first failing link stops the run; already-recorded links are skipped
/// on the next run, so it picks up at the failed item.
pub struct Harvester {
    settings: HarvestSettings,
    page_fetcher: Arc<dyn Fetcher>,
    archive_fetcher: Arc<dyn Fetcher>,
}

impl Harvester {
    /// The page is fetched with [`FetchSettings::for_page`]; archives with
    /// `fetch_settings` as given.
    pub fn new(settings: HarvestSettings, fetch_settings: FetchSettings) -> Self {
        Self {
            settings,
            page_fetcher: Arc::new(ReqwestFetcher::new(fetch_settings.for_page())),
            archive_fetcher: Arc::new(ReqwestFetcher::new(fetch_settings)),
        }
    }

    pub async fn run(&self) -> Result<RunSummary, HarvestError> {
        let settings = &self.settings;
        harvest_info!("Fetching driver page {}", settings.page_url);
        let page = self
            .page_fetcher
            .fetch(&settings.page_url)
            .await
            .map_err(|source| HarvestError::PageFetch {
                url: settings.page_url.clone(),
                source,
            })?;
        let html = decode_page(&page.bytes, page.metadata.content_type.as_deref());

        let hrefs = DriverLinkExtractor::new(settings.link_marker.as_str()).extract(&html);
        let mut summary = RunSummary {
            links_found: hrefs.len(),
            ..RunSummary::default()
        };
        let candidates = select_candidates(hrefs, settings);
        summary.candidates = candidates.len();
        harvest_info!(
            "Found {} driver links, {} candidate archives",
            summary.links_found,
            summary.candidates
        );

        let mut history =
            DownloadHistory::load(settings.history_path.clone(), settings.provision_missing)?;
        if history.is_empty() {
            harvest_info!("Download history is empty; every candidate is new");
        } else {
            harvest_debug!("{} links already in download history", history.len());
        }
        prepare_downloads_dir(&settings.downloads_dir, settings.provision_missing)?;

        for link in candidates {
            if history.contains(&link) {
                harvest_info!("{} has already been downloaded.", link);
                summary.skipped += 1;
                continue;
            }

            harvest_debug!("Downloading {}", link);
            let archive =
                download_archive(self.archive_fetcher.as_ref(), &link, &settings.downloads_dir)
                    .await?
                    .accept(&link)?;
            harvest_info!("Downloaded {}", link);

            let artifact =
                extract_artifact(&archive, &settings.downloads_dir, &settings.artifact_name)?
                    .accept(&link)?;
            history.record(&link)?;
            harvest_info!("Extracted {} from {}", settings.artifact_name, link);
            summary.artifacts.push(artifact);
        }

        Ok(summary)
    }

    /// Drive [`Harvester::run`] to completion on a current-thread runtime.
    pub fn run_blocking(&self) -> Result<RunSummary, HarvestError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(HarvestError::Runtime)?;
        runtime.block_on(self.run())
    }
}
