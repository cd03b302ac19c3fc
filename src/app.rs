use std::sync::Arc;
use std::time::Duration;

use iced::window::Id;
use iced::{Element, Task, Theme};

use crate::adapters::{EnvironmentCredentialProvider, GeminiScriptGenerator};
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants::{CAMERA_PREVIEW_INTERVAL_MILLISECONDS, LOG_TAG_APP};
use crate::ports::{ArboardClipboard, NokhwaCameraDevice};

pub struct DeepPromptApp {
    orchestrator: AppOrchestrator,
}

impl DeepPromptApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let script_generator = Arc::new(GeminiScriptGenerator::new(
            Arc::new(EnvironmentCredentialProvider::new()),
            settings.api_base_url.clone(),
            settings.model_name.clone(),
        ));

        let orchestrator = AppOrchestrator::build(
            script_generator,
            Arc::new(NokhwaCameraDevice::initialize(settings.camera_index)),
            Arc::new(ArboardClipboard::initialize()),
            settings,
        );

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::OpenMainWindow),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn render_title(&self, window_id: Id) -> String {
        self.orchestrator.get_window_title(window_id)
    }

    pub fn render_theme(&self, window_id: Id) -> Theme {
        self.orchestrator.get_theme(window_id)
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        let window_events = iced::event::listen_with(|event, _status, id| match event {
            iced::Event::Window(window::Event::Closed) => {
                Some(OrchestratorMessage::WindowClosed(id))
            }
            iced::Event::Window(window::Event::FileDropped(path)) => {
                Some(OrchestratorMessage::FileDropped(path))
            }
            _ => None,
        });

        if !self.orchestrator.is_camera_open() {
            return window_events;
        }

        iced::Subscription::batch([
            window_events,
            iced::time::every(Duration::from_millis(CAMERA_PREVIEW_INTERVAL_MILLISECONDS))
                .map(|_| OrchestratorMessage::CameraTick),
        ])
    }
}
