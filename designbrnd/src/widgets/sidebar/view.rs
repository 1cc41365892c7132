use designbrnd_nav::{
    ClickTarget, HeaderControl, IconId, IconResolver, NavigationItem,
    NavigationSection, ProjectControl, RowControl, SYSTEM_SECTION_ID,
};
use iced::widget::{
    Column, Space, button, column, container, row, scrollable, svg, text,
};
use iced::{Background, Border, Color, Element, Length, Theme, alignment};

use super::{
    SIDEBAR_WIDTH, SidebarIntent, SidebarShortcut, SidebarViewModel,
};
use crate::components::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::icons::SvgIcons;
use crate::theme::Palette;

const BRAND_LABEL: &str = "designbrnd.";
const BRAND_MARK_SIZE: f32 = 32.0;
const BRAND_ICON_SIZE: f32 = 20.0;
const BRAND_TEXT_SIZE: f32 = 18.0;
const HEADER_PADDING: f32 = 16.0;
const BLOCK_PADDING: f32 = 12.0;
const BLOCK_SPACING: f32 = 8.0;
const SECTION_SPACING: f32 = 16.0;
const ROW_SPACING: f32 = 4.0;
const ROW_PADDING_Y: f32 = 8.0;
const ROW_PADDING_X: f32 = 12.0;
const ROW_ICON_SIZE: f32 = 16.0;
const ROW_RADIUS: f32 = 4.0;
const LABEL_SIZE: f32 = 14.0;
const SECTION_TITLE_SIZE: f32 = 11.0;
const CONTROL_SIZE: f32 = 24.0;
const CONTROL_ICON_SIZE: f32 = 14.0;
const BADGE_SIZE: f32 = 20.0;
const BADGE_TEXT_SIZE: f32 = 10.0;
const DOT_SIZE: f32 = 8.0;
const ERROR_TEXT_SIZE: f32 = 12.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

/// Section whose active row carries a dismiss control.
const PROJECT_SECTION_ID: &str = "project";

type SidebarElement<'a> = Element<'a, SidebarIntent, Theme, iced::Renderer>;

/// Props for rendering the sidebar.
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) icons: &'a SvgIcons,
    pub(crate) palette: &'a Palette,
}

/// Render the sidebar column.
pub(crate) fn view<'a>(props: SidebarProps<'a>) -> SidebarElement<'a> {
    let SidebarProps { vm, icons, palette } = props;

    let mut sections = Column::new()
        .spacing(SECTION_SPACING)
        .padding([BLOCK_PADDING, BLOCK_PADDING]);
    for section in vm
        .snapshot
        .sections()
        .iter()
        .filter(|section| section.id() != SYSTEM_SECTION_ID)
    {
        sections = sections.push(view_section(section, vm, icons, palette));
    }

    let content = column![
        view_header(icons, palette),
        separator(palette),
        view_actions(vm, icons, palette),
        view_project(vm, icons, palette),
        separator(palette),
        scrollable(sections).height(Length::Fill),
        separator(palette),
        view_footer(vm, icons, palette),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let background = palette.background;
    let border = palette.border;
    container(content)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            border: Border {
                color: border,
                width: SEPARATOR_HEIGHT,
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn view_header<'a>(
    icons: &'a SvgIcons,
    palette: &'a Palette,
) -> SidebarElement<'a> {
    let accent = palette.accent;
    let mark = container(glyph(
        icons.resolve(IconId::Layers),
        BRAND_ICON_SIZE,
        palette.text_bright,
    ))
    .width(Length::Fixed(BRAND_MARK_SIZE))
    .height(Length::Fixed(BRAND_MARK_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(accent.into()),
        border: Border {
            radius: ROW_RADIUS.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    let brand = text(BRAND_LABEL)
        .size(BRAND_TEXT_SIZE)
        .color(palette.text_bright);

    row![
        mark,
        brand,
        container(Space::new()).width(Length::Fill),
        control(
            icons,
            palette,
            IconId::Settings,
            IconButtonVariant::Ghost,
            SidebarIntent::Click(ClickTarget::Header(HeaderControl::Settings)),
        ),
        view_notifications(palette),
        control(
            icons,
            palette,
            IconId::MoreVertical,
            IconButtonVariant::Ghost,
            SidebarIntent::Click(ClickTarget::Header(HeaderControl::More)),
        ),
    ]
    .spacing(BLOCK_SPACING)
    .padding([HEADER_PADDING, HEADER_PADDING])
    .align_y(alignment::Vertical::Center)
    .into()
}

fn view_notifications<'a>(palette: &'a Palette) -> SidebarElement<'a> {
    let danger = palette.danger;
    let hover_background = palette.surface;
    let dot = container(Space::new())
        .width(Length::Fixed(DOT_SIZE))
        .height(Length::Fixed(DOT_SIZE))
        .style(move |_| container::Style {
            background: Some(danger.into()),
            border: Border {
                radius: (DOT_SIZE / 2.0).into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let content = container(dot)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(SidebarIntent::Click(ClickTarget::Header(
            HeaderControl::Notifications,
        )))
        .padding(0)
        .width(Length::Fixed(CONTROL_SIZE))
        .height(Length::Fixed(CONTROL_SIZE))
        .style(move |_, status| button::Style {
            background: hover_fill(status, hover_background),
            border: Border {
                radius: ROW_RADIUS.into(),
                ..Border::default()
            },
            ..button::Style::default()
        })
        .into()
}

fn view_actions<'a>(
    vm: SidebarViewModel<'a>,
    icons: &'a SvgIcons,
    palette: &'a Palette,
) -> SidebarElement<'a> {
    let new_button = plain_row(
        icons,
        palette,
        IconId::Plus,
        String::from("New"),
        true,
        SidebarIntent::Shortcut(SidebarShortcut::New),
    );
    let projects_button = plain_row(
        icons,
        palette,
        IconId::FolderOpen,
        vm.projects.len().to_string(),
        false,
        SidebarIntent::Shortcut(SidebarShortcut::Projects),
    );

    row![new_button, projects_button]
        .spacing(BLOCK_SPACING)
        .padding([BLOCK_PADDING, BLOCK_PADDING])
        .into()
}

fn view_project<'a>(
    vm: SidebarViewModel<'a>,
    icons: &'a SvgIcons,
    palette: &'a Palette,
) -> SidebarElement<'a> {
    let current = vm.snapshot.current_project();
    let surface = palette.surface;

    let header = row![
        glyph(icons.resolve(IconId::FolderOpen), ROW_ICON_SIZE, palette.accent),
        text(current.name.as_str())
            .size(LABEL_SIZE)
            .color(palette.text),
        container(Space::new()).width(Length::Fill),
        control(
            icons,
            palette,
            IconId::Layout,
            IconButtonVariant::Ghost,
            SidebarIntent::Click(ClickTarget::Project(ProjectControl::Select)),
        ),
        control(
            icons,
            palette,
            IconId::ChevronDown,
            IconButtonVariant::Ghost,
            SidebarIntent::ToggleProjectPicker,
        ),
        control(
            icons,
            palette,
            IconId::MoreVertical,
            IconButtonVariant::Ghost,
            SidebarIntent::Click(ClickTarget::Project(ProjectControl::More)),
        ),
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center);

    let mut block = Column::new().push(header).spacing(ROW_SPACING);

    if vm.is_picker_open {
        for project in vm.projects {
            let is_current = project.id == current.id;
            block = block.push(view_project_option(
                project.name.as_str(),
                is_current,
                SidebarIntent::PickProject(project.clone()),
                palette,
            ));
        }
    }

    if let Some(message) = vm.project_error {
        block = block.push(
            text(message)
                .size(ERROR_TEXT_SIZE)
                .color(palette.danger),
        );
    }

    container(
        container(block)
            .width(Length::Fill)
            .padding([ROW_PADDING_Y, ROW_PADDING_X])
            .style(move |_| container::Style {
                background: Some(surface.into()),
                border: Border {
                    radius: ROW_RADIUS.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }),
    )
    .padding([0.0, BLOCK_PADDING])
    .into()
}

fn view_project_option<'a>(
    name: &'a str,
    is_current: bool,
    intent: SidebarIntent,
    palette: &'a Palette,
) -> SidebarElement<'a> {
    let foreground = if is_current {
        palette.accent
    } else {
        palette.text_muted
    };
    let hover_background = palette.surface_hover;

    button(text(name).size(LABEL_SIZE))
        .on_press(intent)
        .width(Length::Fill)
        .padding([ROW_SPACING, ROW_PADDING_X])
        .style(move |_, status| button::Style {
            background: hover_fill(status, hover_background),
            text_color: foreground,
            border: Border {
                radius: ROW_RADIUS.into(),
                ..Border::default()
            },
            ..button::Style::default()
        })
        .into()
}

fn view_section<'a>(
    section: &'a NavigationSection,
    vm: SidebarViewModel<'a>,
    icons: &'a SvgIcons,
    palette: &'a Palette,
) -> SidebarElement<'a> {
    let title = text(section.title().to_uppercase())
        .size(SECTION_TITLE_SIZE)
        .color(palette.text_dim);

    let mut items = Column::new().spacing(ROW_SPACING);
    for item in section.items() {
        let is_active = vm.snapshot.is_active(item.id());
        let dismissible = is_active && section.id() == PROJECT_SECTION_ID;
        items =
            items.push(view_item(item, is_active, dismissible, icons, palette));
    }

    column![container(title).padding([0.0, ROW_PADDING_X]), items]
        .spacing(BLOCK_SPACING)
        .into()
}

fn view_item<'a>(
    item: &'a NavigationItem,
    is_active: bool,
    dismissible: bool,
    icons: &'a SvgIcons,
    palette: &'a Palette,
) -> SidebarElement<'a> {
    let (foreground, background) = if is_active {
        (palette.accent, Some(palette.accent_soft))
    } else {
        (palette.text_muted, None)
    };
    let hover_background = palette.surface;
    let hover_foreground = palette.text_bright;

    let label = row![
        glyph(icons.resolve(item.icon()), ROW_ICON_SIZE, foreground),
        text(item.label()).size(LABEL_SIZE),
    ]
    .spacing(ROW_PADDING_X)
    .align_y(alignment::Vertical::Center);

    let row_button = button(label)
        .on_press(SidebarIntent::Click(ClickTarget::Item {
            item_id: item.id().to_string(),
        }))
        .width(Length::Fill)
        .padding([ROW_PADDING_Y, ROW_PADDING_X])
        .style(move |_, status| {
            let hovered = !is_active
                && matches!(
                    status,
                    button::Status::Hovered | button::Status::Pressed
                );
            button::Style {
                background: hovered.then_some(hover_background.into()),
                text_color: if hovered {
                    hover_foreground
                } else {
                    foreground
                },
                border: Border {
                    radius: ROW_RADIUS.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        });

    let mut line = row![row_button]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);

    if dismissible {
        line = line.push(control(
            icons,
            palette,
            IconId::Close,
            IconButtonVariant::Accent,
            SidebarIntent::Click(ClickTarget::ItemControl {
                item_id: item.id().to_string(),
                control: RowControl::Dismiss,
            }),
        ));
    }

    if let Some(count) = item.badge_count() {
        line = line.push(view_badge(count, palette));
    }

    container(line)
        .width(Length::Fill)
        .padding([0.0, ROW_SPACING])
        .style(move |_| container::Style {
            background: background.map(Background::Color),
            border: Border {
                radius: ROW_RADIUS.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn view_badge<'a>(count: u32, palette: &'a Palette) -> SidebarElement<'a> {
    let fill = palette.surface_hover;

    container(
        text(count.to_string())
            .size(BADGE_TEXT_SIZE)
            .color(palette.text_muted),
    )
    .width(Length::Fixed(BADGE_SIZE))
    .height(Length::Fixed(BADGE_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(fill.into()),
        border: Border {
            radius: (BADGE_SIZE / 2.0).into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

fn view_footer<'a>(
    vm: SidebarViewModel<'a>,
    icons: &'a SvgIcons,
    palette: &'a Palette,
) -> SidebarElement<'a> {
    let mut footer = Column::new()
        .spacing(ROW_SPACING)
        .padding([BLOCK_PADDING, BLOCK_PADDING])
        .push(plain_row(
            icons,
            palette,
            IconId::FolderOpen,
            String::from("Wiki"),
            false,
            SidebarIntent::Shortcut(SidebarShortcut::Wiki),
        ))
        .push(plain_row(
            icons,
            palette,
            IconId::MoreVertical,
            String::from("Running Agents"),
            false,
            SidebarIntent::Shortcut(SidebarShortcut::RunningAgents),
        ));

    if let Some(section) = vm.snapshot.catalog().section(SYSTEM_SECTION_ID) {
        for item in section.items() {
            let is_active = vm.snapshot.is_active(item.id());
            footer =
                footer.push(view_item(item, is_active, false, icons, palette));
        }
    }

    footer.into()
}

/// Full-width row with an icon and a label, filled or ghost.
fn plain_row<'a>(
    icons: &'a SvgIcons,
    palette: &'a Palette,
    icon: IconId,
    label: String,
    filled: bool,
    intent: SidebarIntent,
) -> SidebarElement<'a> {
    let base_background = filled.then_some(palette.surface);
    let hover_background = palette.surface_hover;
    let foreground = palette.text_muted;
    let hover_foreground = palette.text_bright;

    let content = row![
        glyph(icons.resolve(icon), ROW_ICON_SIZE, foreground),
        text(label).size(LABEL_SIZE),
    ]
    .spacing(BLOCK_SPACING)
    .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(intent)
        .width(Length::Fill)
        .padding([ROW_PADDING_Y, ROW_PADDING_X])
        .style(move |_, status| {
            let hovered = matches!(
                status,
                button::Status::Hovered | button::Status::Pressed
            );
            let background = if hovered {
                Some(hover_background)
            } else {
                base_background
            };
            button::Style {
                background: background.map(Background::Color),
                text_color: if hovered {
                    hover_foreground
                } else {
                    foreground
                },
                border: Border {
                    radius: ROW_RADIUS.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

fn control<'a>(
    icons: &SvgIcons,
    palette: &'a Palette,
    icon: IconId,
    variant: IconButtonVariant,
    intent: SidebarIntent,
) -> SidebarElement<'a> {
    icon_button::view(IconButtonProps {
        icon: icons.resolve(icon),
        palette,
        size: CONTROL_SIZE,
        icon_size: CONTROL_ICON_SIZE,
        variant,
    })
    .map(move |_| intent.clone())
}

fn glyph<'a>(
    handle: svg::Handle,
    size: f32,
    color: Color,
) -> SidebarElement<'a> {
    svg::Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}

fn separator<'a>(palette: &'a Palette) -> SidebarElement<'a> {
    let color = palette.border;

    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..container::Style::default()
        })
        .into()
}

fn hover_fill(status: button::Status, color: Color) -> Option<Background> {
    match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(color.into())
        },
        _ => None,
    }
}
