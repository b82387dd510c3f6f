//! Harvest core: pure link selection, naming and settings.
mod candidates;
mod deny_list;
mod link;
mod naming;
mod settings;

pub use candidates::select_candidates;
pub use deny_list::DenyList;
pub use link::{contains_marker, file_name_of, has_extension, normalize_link};
pub use naming::artifact_file_name;
pub use settings::{HarvestSettings, DRIVER_ARTIFACT, DRIVER_PAGE_URL};
