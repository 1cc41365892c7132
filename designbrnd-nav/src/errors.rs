use thiserror::Error;

/// Errors raised while building a navigation catalog.
///
/// A catalog that fails to build cannot be rendered consistently, so these
/// are fatal to startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two items point at the same route.
    #[error("duplicate navigation route: {route}")]
    DuplicateRoute { route: String },
    /// Two items share the same identifier.
    #[error("duplicate navigation item id: {id}")]
    DuplicateItemId { id: String },
}

/// Errors raised when switching the current project.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidProjectError {
    /// The project name is empty or blank.
    #[error("project '{id}' has an empty name")]
    EmptyName { id: String },
}
