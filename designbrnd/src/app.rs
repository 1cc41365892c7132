#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use std::sync::Arc;

use designbrnd_nav::NavigationCatalog;
use iced::{Element, Subscription, Task, Theme};

use crate::config::{self, ConfigStore};
use crate::icons::SvgIcons;
use crate::theme::Palette;
use crate::widgets::Widgets;
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

const APP_TITLE: &str = "designbrnd.";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Sidebar(SidebarEvent),
    ConfigSaved(Result<(), String>),
    Keyboard(iced::keyboard::Event),
}

pub(crate) struct App {
    config: ConfigStore,
    icons: SvgIcons,
    palette: Palette,
    widgets: Widgets,
}

impl App {
    pub(crate) fn new(catalog: Arc<NavigationCatalog>) -> (Self, Task<AppEvent>) {
        let config = ConfigStore::new(config::load_initial_config());
        let sidebar = SidebarWidget::new(catalog, config.config());

        let app = App {
            config,
            icons: SvgIcons,
            palette: Palette::default(),
            widgets: Widgets { sidebar },
        };

        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        match self.widgets.sidebar.active_label() {
            Some(label) => format!("{APP_TITLE} | {label}"),
            None => String::from(APP_TITLE),
        }
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
