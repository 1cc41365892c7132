use designbrnd_nav::Project;
use serde::{Deserialize, Serialize};

/// Persisted sidebar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SidebarConfig {
    initial_route: String,
    default_project: Project,
    projects: Vec<Project>,
}

impl SidebarConfig {
    pub(crate) fn initial_route(&self) -> &str {
        &self.initial_route
    }

    pub(crate) fn default_project(&self) -> &Project {
        &self.default_project
    }

    /// Projects offered by the project picker.
    pub(crate) fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Make `project` the default and add it to the known projects.
    pub(crate) fn remember_project(&mut self, project: Project) {
        match self.projects.iter_mut().find(|known| known.id == project.id) {
            Some(known) => *known = project.clone(),
            None => self.projects.push(project.clone()),
        }
        self.default_project = project;
    }

    /// Drop blank or duplicate projects and keep the default among them.
    pub(crate) fn normalized(&self) -> Self {
        let default_project = if self.default_project.name.trim().is_empty() {
            Project::default()
        } else {
            self.default_project.clone()
        };

        let mut projects: Vec<Project> = Vec::new();
        for project in &self.projects {
            if project.name.trim().is_empty()
                || projects.iter().any(|known| known.id == project.id)
            {
                continue;
            }
            projects.push(project.clone());
        }
        if !projects.iter().any(|known| known.id == default_project.id) {
            projects.insert(0, default_project.clone());
        }

        let initial_route = if self.initial_route.is_empty() {
            String::from("/")
        } else {
            self.initial_route.clone()
        };

        Self {
            initial_route,
            default_project,
            projects,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_projects(
        initial_route: &str,
        default_project: Project,
        projects: Vec<Project>,
    ) -> Self {
        Self {
            initial_route: initial_route.to_string(),
            default_project,
            projects,
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            initial_route: String::from("/"),
            default_project: Project::default(),
            projects: vec![Project::default()],
        }
    }
}

#[cfg(test)]
mod tests {
    use designbrnd_nav::Project;

    use super::SidebarConfig;

    #[test]
    fn given_blank_and_duplicate_projects_when_normalized_then_filtered() {
        let config = SidebarConfig::with_projects(
            "",
            Project::new("p2", "Foo Project"),
            vec![
                Project::new("p1", "Alpha"),
                Project::new("blank", " "),
                Project::new("p1", "Alpha again"),
            ],
        );

        let normalized = config.normalized();

        assert_eq!(normalized.initial_route(), "/");
        assert_eq!(
            normalized.projects(),
            [Project::new("p2", "Foo Project"), Project::new("p1", "Alpha")]
        );
    }

    #[test]
    fn given_blank_default_project_when_normalized_then_falls_back() {
        let config = SidebarConfig::with_projects(
            "/kanban",
            Project::new("broken", ""),
            Vec::new(),
        );

        let normalized = config.normalized();

        assert_eq!(normalized.default_project(), &Project::default());
        assert_eq!(normalized.initial_route(), "/kanban");
    }

    #[test]
    fn given_known_project_when_remembered_then_entry_is_updated_in_place() {
        let mut config = SidebarConfig::default();

        config.remember_project(Project::new("p2", "Foo Project"));
        config.remember_project(Project::new("p2", "Foo Renamed"));

        assert_eq!(config.projects().len(), 2);
        assert_eq!(config.default_project().name, "Foo Renamed");
    }

    #[test]
    fn given_partial_json_when_deserialized_then_missing_fields_default() {
        let config: SidebarConfig =
            serde_json::from_str(r#"{ "initial_route": "/beads" }"#)
                .expect("partial config parses");

        assert_eq!(config.initial_route(), "/beads");
        assert_eq!(config.default_project(), &Project::default());
    }
}
