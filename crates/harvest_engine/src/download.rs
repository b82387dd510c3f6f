use std::path::{Path, PathBuf};

use harvest_core::file_name_of;
use harvest_logging::{harvest_debug, harvest_error};

use crate::{is_zip_archive, AtomicFileWriter, Fetcher, HarvestError, Rejection, StepOutcome};

/// Download `link` into `dir`, named after its final path segment.
///
/// Nothing is written unless the request succeeds. A body that is not a zip
/// archive is still kept on disk but the download is rejected.
pub async fn download_archive(
    fetcher: &dyn Fetcher,
    link: &str,
    dir: &Path,
) -> Result<StepOutcome<PathBuf>, HarvestError> {
    let file_name = file_name_of(link);
    if file_name.is_empty() {
        return Ok(StepOutcome::Rejected(Rejection::NoFileName));
    }

    let output = match fetcher.fetch(link).await {
        Ok(output) => output,
        Err(err) => {
            harvest_error!("Failed to download {}: {}", link, err);
            return Ok(StepOutcome::Rejected(Rejection::Fetch(err)));
        }
    };
    harvest_debug!(
        "Fetched {} bytes from {}",
        output.metadata.byte_len,
        output.metadata.final_url
    );

    let path = AtomicFileWriter::new(dir.to_path_buf()).write(file_name, &output.bytes)?;
    if !is_zip_archive(&path) {
        harvest_error!("{} is not a zip file.", path.display());
        return Ok(StepOutcome::Rejected(Rejection::NotAnArchive { path }));
    }
    Ok(StepOutcome::Done(path))
}
