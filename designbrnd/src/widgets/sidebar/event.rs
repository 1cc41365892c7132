use designbrnd_nav::{ClickTarget, Project};

/// Sidebar entries that do not act on navigation or projects yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarShortcut {
    New,
    Projects,
    Wiki,
    RunningAgents,
}

/// Intent events handled by the sidebar presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    Click(ClickTarget),
    ToggleProjectPicker,
    PickProject(Project),
    HistoryBack,
    HistoryForward,
    Shortcut(SidebarShortcut),
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEffect {
    PersistProject(Project),
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
