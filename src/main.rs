#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    daemon(
        app::DeepPromptApp::build,
        app::DeepPromptApp::handle_update,
        app::DeepPromptApp::render_view,
    )
    .title(app::DeepPromptApp::render_title)
    .theme(app::DeepPromptApp::render_theme)
    .subscription(app::DeepPromptApp::handle_subscription)
    .run()
}
