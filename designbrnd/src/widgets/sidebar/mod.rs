mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::sync::Arc;

use designbrnd_nav::{
    MemoryRouter, NavigationCatalog, ProjectContext, SidebarController,
};
pub(crate) use event::{
    SidebarEffect, SidebarEvent, SidebarIntent, SidebarShortcut,
};
use iced::Task;
pub(crate) use model::{SIDEBAR_WIDTH, SidebarViewModel};
use state::SidebarUiState;

use crate::config::SidebarConfig;

/// Sidebar widget owning the navigation controller and view-local state.
pub(crate) struct SidebarWidget {
    controller: SidebarController<MemoryRouter>,
    state: SidebarUiState,
}

impl SidebarWidget {
    /// Build the sidebar from the catalog and persisted configuration.
    pub(crate) fn new(
        catalog: Arc<NavigationCatalog>,
        config: &SidebarConfig,
    ) -> Self {
        let project = match ProjectContext::new(config.default_project().clone())
        {
            Ok(project) => project,
            Err(err) => {
                log::warn!("configured project rejected: {err}");
                ProjectContext::default()
            },
        };
        let router = MemoryRouter::new(config.initial_route());

        Self {
            controller: SidebarController::new(catalog, router, project),
            state: SidebarUiState::new(config.projects().to_vec()),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.controller, &mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel<'_> {
        SidebarViewModel {
            snapshot: self.controller.state(),
            projects: self.state.projects(),
            is_picker_open: self.state.is_picker_open(),
            project_error: self.state.project_error(),
        }
    }

    /// Label of the active entry, if the current route has one.
    pub(crate) fn active_label(&self) -> Option<&str> {
        self.controller
            .state()
            .active_item()
            .map(|item| item.label())
    }
}
