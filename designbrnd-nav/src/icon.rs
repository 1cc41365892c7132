use serde::{Deserialize, Serialize};

/// Closed set of glyphs the sidebar can show.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Layout,
    FolderOpen,
    Image,
    ListChecks,
    Layers,
    Terminal,
    Settings,
    Plus,
    Close,
    ChevronDown,
    MoreVertical,
}

impl IconId {
    /// Every icon, in declaration order.
    pub const ALL: [IconId; 11] = [
        IconId::Layout,
        IconId::FolderOpen,
        IconId::Image,
        IconId::ListChecks,
        IconId::Layers,
        IconId::Terminal,
        IconId::Settings,
        IconId::Plus,
        IconId::Close,
        IconId::ChevronDown,
        IconId::MoreVertical,
    ];
}

/// Capability that turns an [`IconId`] into something renderable.
///
/// Implementations hold no sidebar state; the glyph type belongs to the
/// host toolkit.
pub trait IconResolver {
    /// Renderable glyph produced by the host.
    type Glyph;

    /// Return the glyph for `icon`.
    fn resolve(&self, icon: IconId) -> Self::Glyph;
}
