mod logging;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use harvest_engine::Harvester;
use harvest_logging::{harvest_error, harvest_info, harvest_warn};

fn main() -> ExitCode {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let loaded = settings::load_settings(&cwd);
    let app_settings = match &loaded {
        Ok(Some(persisted)) => settings::AppSettings::from_persisted(persisted.clone()),
        _ => settings::AppSettings::default(),
    };

    logging::initialize(app_settings.log_destination(), app_settings.log_level());
    match loaded {
        Ok(Some(_)) => harvest_info!("Loaded settings from {}", settings::SETTINGS_FILENAME),
        Ok(None) => {}
        Err(err) => harvest_warn!("Ignoring {}: {}", settings::SETTINGS_FILENAME, err),
    }

    let harvester = Harvester::new(app_settings.harvest, app_settings.fetch);
    match harvester.run_blocking() {
        Ok(summary) => {
            harvest_info!(
                "Run complete: {} new artifacts, {} links already downloaded",
                summary.downloaded(),
                summary.skipped
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            harvest_error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
