pub(crate) mod sidebar;

pub(crate) struct Widgets {
    pub(crate) sidebar: sidebar::SidebarWidget,
}
