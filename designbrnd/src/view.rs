use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::widgets::sidebar::SidebarEvent;
use crate::widgets::sidebar::view::{SidebarProps, view as sidebar_view};

const PAGE_PADDING: f32 = 32.0;
const PAGE_SPACING: f32 = 8.0;
const PAGE_TITLE_SIZE: f32 = 28.0;
const PAGE_ROUTE_SIZE: f32 = 14.0;
const NOT_FOUND_TITLE: &str = "Not found";

pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let vm = app.widgets.sidebar.vm();
    let sidebar = sidebar_view(SidebarProps {
        vm,
        icons: &app.icons,
        palette: &app.palette,
    })
    .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)));

    let title = app
        .widgets
        .sidebar
        .active_label()
        .unwrap_or(NOT_FOUND_TITLE);
    let route = vm.snapshot.current_route();

    let page = column![
        text(title)
            .size(PAGE_TITLE_SIZE)
            .color(app.palette.text_bright),
        text(route)
            .size(PAGE_ROUTE_SIZE)
            .color(app.palette.text_dim),
    ]
    .spacing(PAGE_SPACING);

    let background = app.palette.background;
    let content = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PAGE_PADDING)
        .align_y(alignment::Vertical::Top)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..container::Style::default()
        });

    row![sidebar, content]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
