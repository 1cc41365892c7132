mod errors;
mod model;
mod storage;
mod store;

pub(crate) use model::SidebarConfig;
pub(crate) use storage::save_config;
use storage::{ConfigFile, ConfigLoad};
pub(crate) use store::ConfigStore;

/// Load startup configuration, falling back to defaults on any failure.
pub(crate) fn load_initial_config() -> SidebarConfig {
    let file = ConfigFile::user();
    match file.load() {
        Ok(load) => {
            match &load {
                ConfigLoad::Loaded(_) => {
                    log::info!(
                        "sidebar config loaded from {}",
                        file.path().display()
                    );
                },
                ConfigLoad::Missing => {
                    log::info!("no sidebar config found, using defaults");
                },
                ConfigLoad::Invalid { reason } => {
                    log::warn!("sidebar config invalid: {reason}");
                },
            }
            load.into_config().normalized()
        },
        Err(err) => {
            log::warn!("sidebar config read failed: {err}");
            SidebarConfig::default()
        },
    }
}
