use iced::Color;

/// Colors of the sidebar chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) surface_hover: Color,
    pub(crate) border: Color,
    pub(crate) text: Color,
    pub(crate) text_bright: Color,
    pub(crate) text_muted: Color,
    pub(crate) text_dim: Color,
    pub(crate) accent: Color,
    pub(crate) accent_soft: Color,
    pub(crate) danger: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x0a, 0x0f, 0x1a),
            surface: Color::from_rgb8(0x29, 0x25, 0x24),
            surface_hover: Color::from_rgb8(0x44, 0x40, 0x3c),
            border: Color::from_rgb8(0x29, 0x25, 0x24),
            text: Color::from_rgb8(0xd6, 0xd3, 0xd1),
            text_bright: Color::WHITE,
            text_muted: Color::from_rgb8(0xa8, 0xa2, 0x9e),
            text_dim: Color::from_rgb8(0x78, 0x71, 0x6c),
            accent: Color::from_rgb8(0x22, 0xd3, 0xee),
            accent_soft: Color::from_rgba8(0x06, 0xb6, 0xd4, 0.2),
            danger: Color::from_rgb8(0xef, 0x44, 0x44),
        }
    }
}
