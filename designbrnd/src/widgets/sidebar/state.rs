use designbrnd_nav::Project;

/// View-local state of the sidebar that the navigation core does not own.
#[derive(Debug, Default)]
pub(super) struct SidebarUiState {
    projects: Vec<Project>,
    picker_open: bool,
    project_error: Option<String>,
}

impl SidebarUiState {
    pub(super) fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub(super) fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub(super) fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub(super) fn project_error(&self) -> Option<&str> {
        self.project_error.as_deref()
    }

    pub(super) fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
        if !self.picker_open {
            self.project_error = None;
        }
    }

    pub(super) fn close_picker(&mut self) {
        self.picker_open = false;
        self.project_error = None;
    }

    pub(super) fn set_project_error(&mut self, message: String) {
        self.project_error = Some(message);
    }

    /// Replace a known project by id or append it.
    pub(super) fn remember_project(&mut self, project: Project) {
        match self.projects.iter_mut().find(|known| known.id == project.id) {
            Some(known) => *known = project,
            None => self.projects.push(project),
        }
    }
}

#[cfg(test)]
mod tests {
    use designbrnd_nav::Project;

    use super::SidebarUiState;

    #[test]
    fn given_open_picker_with_error_when_toggled_then_error_is_cleared() {
        let mut state = SidebarUiState::new(vec![Project::default()]);
        state.toggle_picker();
        state.set_project_error(String::from("bad"));

        state.toggle_picker();

        assert!(!state.is_picker_open());
        assert_eq!(state.project_error(), None);
    }

    #[test]
    fn given_new_project_when_remembered_then_it_is_appended() {
        let mut state = SidebarUiState::new(vec![Project::default()]);

        state.remember_project(Project::new("p2", "Foo Project"));
        state.remember_project(Project::new("p2", "Foo Project"));

        assert_eq!(state.projects().len(), 2);
    }
}
