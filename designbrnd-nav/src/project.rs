use serde::{Deserialize, Serialize};

use crate::errors::InvalidProjectError;
use crate::observer::{Listener, Observers, SubscriptionId};

/// Work context shown in the sidebar header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    fn validate(&self) -> Result<(), InvalidProjectError> {
        if self.name.trim().is_empty() {
            return Err(InvalidProjectError::EmptyName {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new("designbrnd", "Designbrnd Project")
    }
}

/// Notification sent after a successful switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChange {
    pub previous: Project,
    pub current: Project,
}

/// Holder of the single current project.
#[derive(Debug)]
pub struct ProjectContext {
    current: Project,
    observers: Observers<ProjectChange>,
}

impl ProjectContext {
    /// Start with `initial` as the current project.
    pub fn new(initial: Project) -> Result<Self, InvalidProjectError> {
        initial.validate()?;
        Ok(Self {
            current: initial,
            observers: Observers::new(),
        })
    }

    pub fn current(&self) -> &Project {
        &self.current
    }

    /// Replace the current project.
    ///
    /// A blank name is rejected and the current project stays as it was.
    /// Switching to an identical project succeeds without notifying.
    pub fn switch_to(
        &mut self,
        project: Project,
    ) -> Result<(), InvalidProjectError> {
        if let Err(err) = project.validate() {
            log::warn!("project switch rejected: {err}");
            return Err(err);
        }

        if project == self.current {
            return Ok(());
        }

        let previous = std::mem::replace(&mut self.current, project);
        log::info!(
            "switched project '{}' -> '{}'",
            previous.name,
            self.current.name
        );
        let change = ProjectChange {
            previous,
            current: self.current.clone(),
        };
        self.observers.notify(&change);
        Ok(())
    }

    pub fn subscribe(
        &mut self,
        listener: Listener<ProjectChange>,
    ) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl Default for ProjectContext {
    fn default() -> Self {
        Self {
            current: Project::default(),
            observers: Observers::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{Project, ProjectChange, ProjectContext};
    use crate::errors::InvalidProjectError;

    #[test]
    fn given_valid_project_when_switching_then_current_is_replaced() {
        let mut context = ProjectContext::default();
        let next = Project::new("p2", "Foo Project");

        context.switch_to(next.clone()).expect("switch succeeds");

        assert_eq!(context.current(), &next);
    }

    #[test]
    fn given_empty_name_when_switching_then_error_and_current_kept() {
        let mut context = ProjectContext::default();
        let before = context.current().clone();

        let err = context
            .switch_to(Project::new("p3", ""))
            .expect_err("empty name rejected");

        assert_eq!(
            err,
            InvalidProjectError::EmptyName {
                id: String::from("p3")
            }
        );
        assert_eq!(context.current(), &before);
    }

    #[test]
    fn given_blank_name_when_switching_then_rejected() {
        let mut context = ProjectContext::default();

        assert!(context.switch_to(Project::new("p4", "   ")).is_err());
    }

    #[test]
    fn given_subscriber_when_switching_then_receives_whole_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut context = ProjectContext::default();
        let sink = Arc::clone(&seen);
        context.subscribe(Box::new(move |change: &ProjectChange| {
            sink.lock().expect("lock").push(change.clone());
        }));

        context
            .switch_to(Project::new("p2", "Foo Project"))
            .expect("switch succeeds");
        let _ = context.switch_to(Project::new("bad", ""));

        let seen = seen.lock().expect("lock");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].previous, Project::default());
        assert_eq!(seen[0].current.name, "Foo Project");
    }

    #[test]
    fn given_same_project_when_switching_then_no_notification() {
        let calls = Arc::new(Mutex::new(0));
        let mut context = ProjectContext::default();
        let counter = Arc::clone(&calls);
        context.subscribe(Box::new(move |_: &ProjectChange| {
            *counter.lock().expect("lock") += 1;
        }));

        context
            .switch_to(Project::default())
            .expect("same project accepted");

        assert_eq!(*calls.lock().expect("lock"), 0);
    }

    #[test]
    fn given_invalid_initial_project_when_creating_then_error() {
        assert!(ProjectContext::new(Project::new("x", "")).is_err());
    }
}
