use designbrnd_nav::{Project, SidebarState};

/// Fixed width of the sidebar column.
pub(crate) const SIDEBAR_WIDTH: f32 = 224.0;

/// Read-only data consumed by the sidebar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) snapshot: &'a SidebarState,
    pub(crate) projects: &'a [Project],
    pub(crate) is_picker_open: bool,
    pub(crate) project_error: Option<&'a str>,
}
