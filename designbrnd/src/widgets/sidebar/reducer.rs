use designbrnd_nav::{Dispatch, MemoryRouter, Project, SidebarController};
use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarUiState;

/// Reduce a sidebar intent into controller calls, view state updates and
/// effect events.
pub(super) fn reduce(
    controller: &mut SidebarController<MemoryRouter>,
    state: &mut SidebarUiState,
    event: SidebarIntent,
) -> Task<SidebarEvent> {
    match event {
        SidebarIntent::Click(target) => {
            if let Dispatch::Navigated { .. } = controller.dispatch(target) {
                state.close_picker();
            }
            Task::none()
        },
        SidebarIntent::ToggleProjectPicker => {
            state.toggle_picker();
            Task::none()
        },
        SidebarIntent::PickProject(project) => {
            pick_project(controller, state, project)
        },
        SidebarIntent::HistoryBack => {
            controller.with_router(|router| router.back());
            Task::none()
        },
        SidebarIntent::HistoryForward => {
            controller.with_router(|router| router.forward());
            Task::none()
        },
        SidebarIntent::Shortcut(shortcut) => {
            log::debug!("sidebar shortcut {shortcut:?} has no action");
            Task::none()
        },
    }
}

fn pick_project(
    controller: &mut SidebarController<MemoryRouter>,
    state: &mut SidebarUiState,
    project: Project,
) -> Task<SidebarEvent> {
    if controller.current_project() == &project {
        state.close_picker();
        return Task::none();
    }

    match controller.request_project_switch(project.clone()) {
        Ok(()) => {
            state.close_picker();
            state.remember_project(project.clone());
            Task::done(SidebarEvent::Effect(SidebarEffect::PersistProject(
                project,
            )))
        },
        Err(err) => {
            state.set_project_error(err.to_string());
            Task::none()
        },
    }
}
