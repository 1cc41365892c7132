use std::collections::HashSet;

use crate::errors::ConfigError;
use crate::icon::IconId;

/// Route of the settings page.
pub const SETTINGS_ROUTE: &str = "/settings";

/// Identifier of the footer section holding system entries.
pub const SYSTEM_SECTION_ID: &str = "system";

/// Single navigable entry of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    id: String,
    label: String,
    icon: IconId,
    route: String,
    badge_count: Option<u32>,
}

impl NavigationItem {
    /// Create an item without a badge.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: IconId,
        route: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            route: route.into(),
            badge_count: None,
        }
    }

    /// Attach a numeric badge.
    pub fn with_badge(mut self, count: u32) -> Self {
        self.badge_count = Some(count);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> IconId {
        self.icon
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// Badge to show, `None` when no badge is rendered.
    pub fn badge_count(&self) -> Option<u32> {
        self.badge_count
    }
}

/// Titled group of items, kept in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSection {
    id: String,
    title: String,
    items: Vec<NavigationItem>,
}

impl NavigationSection {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        items: Vec<NavigationItem>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }
}

/// Immutable definition of every section the sidebar can display.
///
/// Routes and item ids are unique across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCatalog {
    sections: Vec<NavigationSection>,
}

impl NavigationCatalog {
    /// Validate and build a catalog.
    pub fn new(sections: Vec<NavigationSection>) -> Result<Self, ConfigError> {
        let mut routes = HashSet::new();
        let mut ids = HashSet::new();

        for item in sections.iter().flat_map(|section| section.items()) {
            if !routes.insert(item.route()) {
                return Err(ConfigError::DuplicateRoute {
                    route: item.route().to_string(),
                });
            }
            if !ids.insert(item.id()) {
                return Err(ConfigError::DuplicateItemId {
                    id: item.id().to_string(),
                });
            }
        }

        Ok(Self { sections })
    }

    /// Built-in catalog of the application.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(vec![
            NavigationSection::new(
                "project",
                "Project",
                vec![NavigationItem::new(
                    "kanban-board",
                    "Kanban Board",
                    IconId::Layout,
                    "/kanban",
                )],
            ),
            NavigationSection::new(
                "tools",
                "Tools",
                vec![
                    NavigationItem::new(
                        "plannotator",
                        "Plannotator",
                        IconId::FolderOpen,
                        "/plannotator",
                    ),
                    NavigationItem::new(
                        "showme",
                        "ShowMe",
                        IconId::Image,
                        "/showme",
                    ),
                    NavigationItem::new(
                        "beads",
                        "Beads",
                        IconId::ListChecks,
                        "/beads",
                    ),
                    NavigationItem::new(
                        "design-os",
                        "Design OS",
                        IconId::Layers,
                        "/",
                    ),
                    NavigationItem::new(
                        "terminal",
                        "Terminal",
                        IconId::Terminal,
                        "/terminal",
                    ),
                ],
            ),
            NavigationSection::new(
                SYSTEM_SECTION_ID,
                "System",
                vec![NavigationItem::new(
                    "settings",
                    "Settings",
                    IconId::Settings,
                    SETTINGS_ROUTE,
                )],
            ),
        ])
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[NavigationSection] {
        &self.sections
    }

    /// Every item, sections flattened in display order.
    pub fn items(&self) -> impl Iterator<Item = &NavigationItem> {
        self.sections.iter().flat_map(|section| section.items())
    }

    /// Look up an item by id.
    pub fn item(&self, id: &str) -> Option<&NavigationItem> {
        self.items().find(|item| item.id() == id)
    }

    /// Look up the item registered for an exact route.
    pub fn item_for_route(&self, route: &str) -> Option<&NavigationItem> {
        self.items().find(|item| item.route() == route)
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&NavigationSection> {
        self.sections.iter().find(|section| section.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{NavigationCatalog, NavigationItem, NavigationSection};
    use crate::errors::ConfigError;
    use crate::icon::IconId;

    #[test]
    fn given_standard_catalog_when_built_then_routes_match_known_table() {
        let catalog = NavigationCatalog::standard().expect("standard catalog");

        let routes: Vec<&str> =
            catalog.items().map(|item| item.route()).collect();

        assert_eq!(
            routes,
            vec![
                "/kanban",
                "/plannotator",
                "/showme",
                "/beads",
                "/",
                "/terminal",
                "/settings"
            ]
        );
        assert!(catalog.items().all(|item| item.badge_count().is_none()));
    }

    #[test]
    fn given_duplicate_routes_when_building_then_config_error() {
        let sections = vec![
            NavigationSection::new(
                "a",
                "A",
                vec![NavigationItem::new("one", "One", IconId::Layout, "/x")],
            ),
            NavigationSection::new(
                "b",
                "B",
                vec![NavigationItem::new("two", "Two", IconId::Image, "/x")],
            ),
        ];

        let err = NavigationCatalog::new(sections).expect_err("must fail");

        assert_eq!(
            err,
            ConfigError::DuplicateRoute {
                route: String::from("/x")
            }
        );
    }

    #[test]
    fn given_duplicate_ids_when_building_then_config_error() {
        let sections = vec![NavigationSection::new(
            "a",
            "A",
            vec![
                NavigationItem::new("one", "One", IconId::Layout, "/x"),
                NavigationItem::new("one", "Again", IconId::Image, "/y"),
            ],
        )];

        let err = NavigationCatalog::new(sections).expect_err("must fail");

        assert!(matches!(err, ConfigError::DuplicateItemId { .. }));
    }

    #[test]
    fn given_routes_differing_by_case_when_building_then_accepted() {
        let sections = vec![NavigationSection::new(
            "a",
            "A",
            vec![
                NavigationItem::new("lower", "Lower", IconId::Layout, "/x"),
                NavigationItem::new("upper", "Upper", IconId::Image, "/X"),
            ],
        )];

        assert!(NavigationCatalog::new(sections).is_ok());
    }

    #[test]
    fn given_catalog_when_looking_up_then_finds_by_id_and_route() {
        let catalog = NavigationCatalog::standard().expect("standard catalog");

        assert_eq!(
            catalog.item("design-os").map(|item| item.route()),
            Some("/")
        );
        assert_eq!(
            catalog.item_for_route("/terminal").map(|item| item.id()),
            Some("terminal")
        );
        assert!(catalog.item_for_route("/terminal/").is_none());
        assert_eq!(
            catalog.section("tools").map(|section| section.items().len()),
            Some(5)
        );
    }
}
