use designbrnd_nav::Project;
use iced::Task;
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key};

use super::{App, AppEvent};
use crate::config::save_config;
use crate::widgets::sidebar::{SidebarEffect, SidebarEvent, SidebarIntent};

pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Sidebar(SidebarEvent::Intent(intent)) => {
            reduce_sidebar(app, intent)
        },
        AppEvent::Sidebar(SidebarEvent::Effect(effect)) => {
            handle_sidebar_effect(app, effect)
        },
        AppEvent::ConfigSaved(result) => {
            match result {
                Ok(()) => {
                    app.config.complete_persist();
                    if app.config.is_dirty() {
                        log::debug!("sidebar config saved, change pending");
                    } else {
                        log::debug!("sidebar config saved");
                    }
                },
                Err(message) => {
                    app.config.fail_persist();
                    log::warn!("sidebar config save failed: {message}");
                    return Task::none();
                },
            }
            request_persist(app)
        },
        AppEvent::Keyboard(event) => handle_keyboard(app, event),
    }
}

fn reduce_sidebar(app: &mut App, intent: SidebarIntent) -> Task<AppEvent> {
    app.widgets.sidebar.reduce(intent).map(AppEvent::Sidebar)
}

fn handle_sidebar_effect(
    app: &mut App,
    effect: SidebarEffect,
) -> Task<AppEvent> {
    match effect {
        SidebarEffect::PersistProject(project) => persist_project(app, project),
    }
}

fn persist_project(app: &mut App, project: Project) -> Task<AppEvent> {
    app.config.remember_project(project);
    if app.config.is_persist_in_flight() {
        log::debug!("sidebar config save queued behind the running one");
    }
    request_persist(app)
}

/// Start a save when the config changed and no save is running.
fn request_persist(app: &mut App) -> Task<AppEvent> {
    let Some(config) = app.config.begin_persist() else {
        return Task::none();
    };

    Task::perform(
        async move { save_config(&config).map_err(|err| err.to_string()) },
        AppEvent::ConfigSaved,
    )
}

fn handle_keyboard(app: &mut App, event: keyboard::Event) -> Task<AppEvent> {
    match history_intent(&event) {
        Some(intent) => reduce_sidebar(app, intent),
        None => Task::none(),
    }
}

/// Map Alt+Left / Alt+Right to router history moves.
fn history_intent(event: &keyboard::Event) -> Option<SidebarIntent> {
    let keyboard::Event::KeyPressed {
        key: pressed,
        modifiers,
        ..
    } = event
    else {
        return None;
    };
    if !modifiers.alt() {
        return None;
    }

    match pressed {
        Key::Named(Named::ArrowLeft) => Some(SidebarIntent::HistoryBack),
        Key::Named(Named::ArrowRight) => {
            Some(SidebarIntent::HistoryForward)
        },
        _ => None,
    }
}
