use designbrnd_nav::{IconId, IconResolver};
use iced::widget::svg;

pub(crate) const LAYOUT: &[u8] = include_bytes!("../assets/svg/layout.svg");
pub(crate) const FOLDER_OPEN: &[u8] =
    include_bytes!("../assets/svg/folder-open.svg");
pub(crate) const IMAGE: &[u8] = include_bytes!("../assets/svg/image.svg");
pub(crate) const LIST_CHECKS: &[u8] =
    include_bytes!("../assets/svg/list-checks.svg");
pub(crate) const LAYERS: &[u8] = include_bytes!("../assets/svg/layers.svg");
pub(crate) const TERMINAL: &[u8] =
    include_bytes!("../assets/svg/terminal.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../assets/svg/settings.svg");
pub(crate) const PLUS: &[u8] = include_bytes!("../assets/svg/plus.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../assets/svg/close.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../assets/svg/chevron-down.svg");
pub(crate) const MORE_VERTICAL: &[u8] =
    include_bytes!("../assets/svg/more-vertical.svg");

/// Resolves sidebar icons to bundled SVG assets.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SvgIcons;

impl SvgIcons {
    fn bytes(icon: IconId) -> &'static [u8] {
        match icon {
            IconId::Layout => LAYOUT,
            IconId::FolderOpen => FOLDER_OPEN,
            IconId::Image => IMAGE,
            IconId::ListChecks => LIST_CHECKS,
            IconId::Layers => LAYERS,
            IconId::Terminal => TERMINAL,
            IconId::Settings => SETTINGS,
            IconId::Plus => PLUS,
            IconId::Close => CLOSE,
            IconId::ChevronDown => CHEVRON_DOWN,
            IconId::MoreVertical => MORE_VERTICAL,
        }
    }
}

impl IconResolver for SvgIcons {
    type Glyph = svg::Handle;

    fn resolve(&self, icon: IconId) -> svg::Handle {
        svg::Handle::from_memory(Self::bytes(icon))
    }
}

#[cfg(test)]
mod tests {
    use designbrnd_nav::IconId;

    use super::SvgIcons;

    #[test]
    fn given_every_icon_when_resolving_bytes_then_asset_is_svg() {
        for icon in IconId::ALL {
            let bytes = SvgIcons::bytes(icon);
            let source = std::str::from_utf8(bytes).expect("utf-8 asset");
            assert!(source.starts_with("<svg"), "{icon:?}");
        }
    }
}
