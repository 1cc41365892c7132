use iced::widget::{button, container, svg};
use iced::{Border, Element, Length, alignment};

use crate::theme::Palette;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    /// Muted glyph that brightens on hover.
    Ghost,
    /// Accent glyph used inside the active row.
    Accent,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: svg::Handle,
    pub(crate) palette: &'a Palette,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

const ICON_BUTTON_RADIUS: f32 = 4.0;

/// Render a small square icon button.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let (base_color, hover_color) =
        resolve_variant_colors(props.variant, props.palette);
    let hover_background = props.palette.surface;

    let icon = svg::Svg::new(props.icon)
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(hover_background.into())
                },
                _ => None,
            };
            button::Style {
                background,
                border: Border {
                    radius: ICON_BUTTON_RADIUS.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    palette: &Palette,
) -> (iced::Color, iced::Color) {
    match variant {
        IconButtonVariant::Ghost => (palette.text_muted, palette.text_bright),
        IconButtonVariant::Accent => (palette.accent, palette.text_bright),
    }
}

#[cfg(test)]
mod tests {
    use super::{IconButtonVariant, resolve_variant_colors};
    use crate::theme::Palette;

    #[test]
    fn given_ghost_variant_when_resolving_then_base_is_muted() {
        let palette = Palette::default();

        let (base, hover) =
            resolve_variant_colors(IconButtonVariant::Ghost, &palette);

        assert_eq!(base, palette.text_muted);
        assert_eq!(hover, palette.text_bright);
    }

    #[test]
    fn given_accent_variant_when_resolving_then_base_uses_accent() {
        let palette = Palette::default();

        let (base, _) =
            resolve_variant_colors(IconButtonVariant::Accent, &palette);

        assert_eq!(base, palette.accent);
    }
}
