mod app;
mod components;
mod config;
mod icons;
mod theme;
mod widgets;

use std::sync::Arc;

use designbrnd_nav::NavigationCatalog;
use env_logger::Env;
use iced::{Size, window};
use thiserror::Error;

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

/// Failures that abort startup.
#[derive(Debug, Error)]
enum StartupError {
    #[error("navigation catalog is invalid: {0}")]
    Catalog(#[from] designbrnd_nav::ConfigError),
    #[error("ui runtime failed: {0}")]
    Ui(#[from] iced::Error),
}

fn main() -> Result<(), StartupError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let catalog = Arc::new(NavigationCatalog::standard()?);
    log::info!(
        "navigation catalog ready with {} items",
        catalog.items().count()
    );

    iced::application(
        move || App::new(Arc::clone(&catalog)),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .antialiasing(true)
    .window(window::Settings {
        min_size: Some(Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        }),
        ..window::Settings::default()
    })
    .subscription(App::subscription)
    .run()?;

    Ok(())
}
