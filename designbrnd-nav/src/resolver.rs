use crate::catalog::NavigationSection;

/// Location of the highlighted entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveItem {
    pub section_id: String,
    pub item_id: String,
}

/// Find the entry whose route equals `current_route`.
///
/// Sections and items are scanned in display order and the first exact,
/// case-sensitive match wins. Trailing slashes and wildcards get no special
/// treatment, so `/kanban/` does not match `/kanban`. Routes without an
/// entry (nested or external pages) resolve to `None`.
pub fn resolve(
    current_route: &str,
    sections: &[NavigationSection],
) -> Option<ActiveItem> {
    sections.iter().find_map(|section| {
        section
            .items()
            .iter()
            .find(|item| item.route() == current_route)
            .map(|item| ActiveItem {
                section_id: section.id().to_string(),
                item_id: item.id().to_string(),
            })
    })
}
