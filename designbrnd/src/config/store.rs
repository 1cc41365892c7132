use designbrnd_nav::Project;

use super::model::SidebarConfig;

/// In-memory config plus the bookkeeping that keeps at most one save
/// running.
#[derive(Debug)]
pub(crate) struct ConfigStore {
    config: SidebarConfig,
    dirty: bool,
    persist_in_flight: bool,
}

impl ConfigStore {
    pub(crate) fn new(config: SidebarConfig) -> Self {
        Self {
            config,
            dirty: false,
            persist_in_flight: false,
        }
    }

    pub(crate) fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn is_persist_in_flight(&self) -> bool {
        self.persist_in_flight
    }

    pub(crate) fn remember_project(&mut self, project: Project) {
        self.config.remember_project(project);
        self.dirty = true;
    }

    /// Snapshot to write now, or `None` while clean or while another save
    /// is still running.
    pub(crate) fn begin_persist(&mut self) -> Option<SidebarConfig> {
        if !self.dirty || self.persist_in_flight {
            return None;
        }
        self.dirty = false;
        self.persist_in_flight = true;
        Some(self.config.clone())
    }

    pub(crate) fn complete_persist(&mut self) {
        self.persist_in_flight = false;
    }

    /// Keep the change pending; it goes out with the next save.
    pub(crate) fn fail_persist(&mut self) {
        self.persist_in_flight = false;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use designbrnd_nav::Project;

    use super::ConfigStore;
    use crate::config::SidebarConfig;

    #[test]
    fn given_clean_store_when_beginning_persist_then_nothing_to_save() {
        let mut store = ConfigStore::new(SidebarConfig::default());

        assert_eq!(store.begin_persist(), None);
        assert!(!store.is_persist_in_flight());
    }

    #[test]
    fn given_save_in_flight_when_project_picked_then_save_waits() {
        let mut store = ConfigStore::new(SidebarConfig::default());
        store.remember_project(Project::new("p2", "Foo Project"));
        let first = store.begin_persist().expect("first save starts");
        assert_eq!(first.default_project().id, "p2");

        store.remember_project(Project::new("p3", "Bar Project"));

        assert_eq!(store.begin_persist(), None);
        assert!(store.is_dirty());
    }

    #[test]
    fn given_pending_change_when_save_completes_then_latest_config_follows() {
        let mut store = ConfigStore::new(SidebarConfig::default());
        store.remember_project(Project::new("p2", "Foo Project"));
        let _first = store.begin_persist();
        store.remember_project(Project::new("p3", "Bar Project"));

        store.complete_persist();
        let next = store.begin_persist().expect("pending change is saved");

        assert_eq!(next.default_project().id, "p3");
        assert!(!store.is_dirty());
        assert!(store.is_persist_in_flight());
    }

    #[test]
    fn given_failed_save_when_finished_then_change_stays_pending() {
        let mut store = ConfigStore::new(SidebarConfig::default());
        store.remember_project(Project::new("p2", "Foo Project"));
        let _first = store.begin_persist();

        store.fail_persist();

        assert!(store.is_dirty());
        assert!(!store.is_persist_in_flight());
    }
}
