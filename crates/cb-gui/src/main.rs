//! Contact Book - Desktop GUI Application
//!
//! A single-window form for keeping a list of contacts in memory.

use cb_gui::app::App;
use cb_gui::logging::{LogConfig, init_logging};
use cb_gui::state::Settings;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    let loaded = Settings::try_load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    if let Err(e) = init_logging(&LogConfig::from_settings(&settings.logging)) {
        tracing::warn!("Cannot open log file, logging to stderr: {}", e);
    }
    if let Err(e) = &loaded {
        tracing::warn!("Using default settings: {}", e);
    }

    tracing::info!("Starting Contact Book");

    let size = Size::new(
        settings.display.window_width,
        settings.display.window_height,
    );

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size,
            min_size: Some(Size::new(560.0, 480.0)),
            ..Default::default()
        })
        .run()
}
