use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{column, container, image, text};
use iced::window::{self, Id};
use iced::{Alignment, Element, Length, Size, Task, Theme};

use crate::core::interfaces::adapters::ScriptGenerator;
use crate::core::interfaces::ports::{CameraDevice, ClipboardWriter};
use crate::core::models::{GeneratedScript, ImagePayload, RenderBranch, UserSettings};
use crate::core::orchestrators::generation_flow::GenerationFlow;
use crate::core::services::{has_supported_image_extension, load_image_file, CameraSession};
use crate::global_constants::{
    APPLICATION_SUBTITLE, APPLICATION_TITLE, CAMERA_CAPTURE_FAILED_MESSAGE,
    CAMERA_UNAVAILABLE_MESSAGE, COPIED_BADGE_DURATION_SECONDS, IMAGE_LOAD_FAILED_MESSAGE,
    SNAPSHOT_JPEG_QUALITY,
};
use crate::ports::{pick_image_file, show_blocking_notice};
use crate::presentation::app_theme;
use crate::presentation::{
    ImageCaptureMessage, ImageCaptureView, ScriptOutputMessage, ScriptOutputView,
};

pub struct AppOrchestrator {
    script_generator: Arc<dyn ScriptGenerator>,
    camera_device: Arc<dyn CameraDevice>,
    clipboard: Arc<dyn ClipboardWriter>,
    settings: UserSettings,
    flow: GenerationFlow,
    camera_session: Option<CameraSession>,
    camera_preview: Option<image::Handle>,
    main_window_id: Option<Id>,
    show_copied_badge: bool,
    copied_badge_generation: u64,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    WindowClosed(Id),
    PickFile,
    FilePicked(Option<PathBuf>),
    FileLoaded(Result<ImagePayload, String>),
    FileDropped(PathBuf),
    OpenCamera,
    CloseCamera,
    CameraTick,
    TakeSnapshot,
    ClearImage,
    GenerateScript,
    GenerationFinished(u64, Result<GeneratedScript, String>),
    CopyScript,
    HideCopiedBadge(u64),
    Reset,
    NoticeDismissed,
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::OpenMainWindow => write!(f, "OpenMainWindow"),
            OrchestratorMessage::WindowClosed(id) => write!(f, "WindowClosed({:?})", id),
            OrchestratorMessage::PickFile => write!(f, "PickFile"),
            OrchestratorMessage::FilePicked(path) => write!(f, "FilePicked({:?})", path),
            OrchestratorMessage::FileLoaded(result) => {
                write!(f, "FileLoaded({:?})", result.is_ok())
            }
            OrchestratorMessage::FileDropped(path) => write!(f, "FileDropped({:?})", path),
            OrchestratorMessage::OpenCamera => write!(f, "OpenCamera"),
            OrchestratorMessage::CloseCamera => write!(f, "CloseCamera"),
            OrchestratorMessage::CameraTick => write!(f, "CameraTick"),
            OrchestratorMessage::TakeSnapshot => write!(f, "TakeSnapshot"),
            OrchestratorMessage::ClearImage => write!(f, "ClearImage"),
            OrchestratorMessage::GenerateScript => write!(f, "GenerateScript"),
            OrchestratorMessage::GenerationFinished(id, result) => {
                write!(f, "GenerationFinished({}, {:?})", id, result.is_ok())
            }
            OrchestratorMessage::CopyScript => write!(f, "CopyScript"),
            OrchestratorMessage::HideCopiedBadge(generation) => {
                write!(f, "HideCopiedBadge({})", generation)
            }
            OrchestratorMessage::Reset => write!(f, "Reset"),
            OrchestratorMessage::NoticeDismissed => write!(f, "NoticeDismissed"),
        }
    }
}

impl From<ImageCaptureMessage> for OrchestratorMessage {
    fn from(message: ImageCaptureMessage) -> Self {
        match message {
            ImageCaptureMessage::UploadPhoto => OrchestratorMessage::PickFile,
            ImageCaptureMessage::OpenCamera => OrchestratorMessage::OpenCamera,
            ImageCaptureMessage::CloseCamera => OrchestratorMessage::CloseCamera,
            ImageCaptureMessage::TakeSnapshot => OrchestratorMessage::TakeSnapshot,
            ImageCaptureMessage::ClearImage => OrchestratorMessage::ClearImage,
            ImageCaptureMessage::GenerateScript => OrchestratorMessage::GenerateScript,
        }
    }
}

impl From<ScriptOutputMessage> for OrchestratorMessage {
    fn from(message: ScriptOutputMessage) -> Self {
        match message {
            ScriptOutputMessage::CopyScript => OrchestratorMessage::CopyScript,
            ScriptOutputMessage::GenerateNew => OrchestratorMessage::Reset,
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        script_generator: Arc<dyn ScriptGenerator>,
        camera_device: Arc<dyn CameraDevice>,
        clipboard: Arc<dyn ClipboardWriter>,
        settings: UserSettings,
    ) -> Self {
        Self {
            script_generator,
            camera_device,
            clipboard,
            settings,
            flow: GenerationFlow::new(),
            camera_session: None,
            camera_preview: None,
            main_window_id: None,
            show_copied_badge: false,
            copied_badge_generation: 0,
        }
    }

    pub fn get_window_title(&self, _window: Id) -> String {
        APPLICATION_TITLE.to_string()
    }

    pub fn get_theme(&self, _window: Id) -> Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    pub fn is_camera_open(&self) -> bool {
        self.camera_session
            .as_ref()
            .is_some_and(CameraSession::is_active)
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        if !matches!(message, OrchestratorMessage::CameraTick) {
            log::info!("[ORCHESTRATOR] Received message: {:?}", message);
        }

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
            OrchestratorMessage::PickFile => self.handle_pick_file(),
            OrchestratorMessage::FilePicked(path) => self.handle_file_picked(path),
            OrchestratorMessage::FileLoaded(result) => self.handle_file_loaded(result),
            OrchestratorMessage::FileDropped(path) => self.handle_file_dropped(path),
            OrchestratorMessage::OpenCamera => self.handle_open_camera(),
            OrchestratorMessage::CloseCamera => {
                self.release_camera();
                Task::none()
            }
            OrchestratorMessage::CameraTick => self.handle_camera_tick(),
            OrchestratorMessage::TakeSnapshot => self.handle_take_snapshot(),
            OrchestratorMessage::ClearImage => {
                self.flow.clear_image();
                Task::none()
            }
            OrchestratorMessage::GenerateScript => self.handle_generate_script(),
            OrchestratorMessage::GenerationFinished(ticket_id, result) => {
                self.flow.complete_generation(ticket_id, result);
                Task::none()
            }
            OrchestratorMessage::CopyScript => self.handle_copy_script(),
            OrchestratorMessage::HideCopiedBadge(generation) => {
                self.handle_hide_copied_badge(generation);
                Task::none()
            }
            OrchestratorMessage::Reset => {
                self.show_copied_badge = false;
                self.flow.reset();
                Task::none()
            }
            OrchestratorMessage::NoticeDismissed => Task::none(),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        if self.main_window_id == Some(window_id) {
            self.render_main_window()
        } else {
            container(text("")).into()
        }
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("[ORCHESTRATOR] Main window already exists and is open");
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(760.0, 860.0),
            min_size: Some(Size::new(560.0, 640.0)),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        log::info!("[ORCHESTRATOR] Main window created with ID: {:?}", id);
        task.discard()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        if self.main_window_id != Some(id) {
            return Task::none();
        }

        log::info!("[ORCHESTRATOR] Main window closed, shutting down");
        self.main_window_id = None;
        self.release_camera();
        iced::exit()
    }

    fn accepts_new_image(&self) -> bool {
        !matches!(
            self.flow.state().render_branch(),
            RenderBranch::Loading | RenderBranch::ResultView
        )
    }

    fn handle_pick_file(&mut self) -> Task<OrchestratorMessage> {
        if !self.accepts_new_image() {
            return Task::none();
        }

        Task::future(async { OrchestratorMessage::FilePicked(pick_image_file().await) })
    }

    fn handle_file_picked(&mut self, path: Option<PathBuf>) -> Task<OrchestratorMessage> {
        match path {
            Some(path) => Self::load_image_task(path),
            None => Task::none(),
        }
    }

    fn handle_file_dropped(&mut self, path: PathBuf) -> Task<OrchestratorMessage> {
        if !self.accepts_new_image() {
            log::debug!("[ORCHESTRATOR] Ignoring dropped file while busy: {:?}", path);
            return Task::none();
        }

        if !has_supported_image_extension(&path) {
            log::warn!("[ORCHESTRATOR] Ignoring dropped non-image file: {:?}", path);
            return Task::none();
        }

        Self::load_image_task(path)
    }

    fn load_image_task(path: PathBuf) -> Task<OrchestratorMessage> {
        Task::future(async move {
            let result = load_image_file(path)
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::FileLoaded(result)
        })
    }

    fn handle_file_loaded(
        &mut self,
        result: Result<ImagePayload, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(payload) => {
                self.release_camera();
                self.flow.attach_image(payload);
                Task::none()
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Failed to load image: {}", e);
                Self::notice_task(IMAGE_LOAD_FAILED_MESSAGE)
            }
        }
    }

    fn handle_open_camera(&mut self) -> Task<OrchestratorMessage> {
        if self.camera_session.is_some() || !self.accepts_new_image() {
            return Task::none();
        }

        match CameraSession::acquire(self.camera_device.as_ref()) {
            Ok(session) => {
                self.camera_session = Some(session);
                self.camera_preview = None;
                Task::done(OrchestratorMessage::CameraTick)
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Camera unavailable: {:#}", e);
                Self::notice_task(CAMERA_UNAVAILABLE_MESSAGE)
            }
        }
    }

    fn handle_camera_tick(&mut self) -> Task<OrchestratorMessage> {
        let Some(session) = self.camera_session.as_mut() else {
            return Task::none();
        };

        match session.preview_frame() {
            Ok(frame) => {
                self.camera_preview = Some(frame.to_preview_handle());
                Task::none()
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Camera preview failed: {:#}", e);
                self.release_camera();
                Self::notice_task(CAMERA_CAPTURE_FAILED_MESSAGE)
            }
        }
    }

    fn handle_take_snapshot(&mut self) -> Task<OrchestratorMessage> {
        let Some(session) = self.camera_session.take() else {
            return Task::none();
        };
        self.camera_preview = None;

        match session.take_snapshot(SNAPSHOT_JPEG_QUALITY) {
            Ok(payload) => {
                self.flow.attach_image(payload);
                Task::none()
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Snapshot failed: {:#}", e);
                Self::notice_task(CAMERA_CAPTURE_FAILED_MESSAGE)
            }
        }
    }

    fn handle_generate_script(&mut self) -> Task<OrchestratorMessage> {
        let Some(ticket) = self.flow.begin_generation() else {
            return Task::none();
        };

        self.show_copied_badge = false;
        let script_generator = Arc::clone(&self.script_generator);

        Task::future(async move {
            let result = script_generator
                .generate_script(&ticket.image_data_url)
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::GenerationFinished(ticket.id, result)
        })
    }

    fn handle_copy_script(&mut self) -> Task<OrchestratorMessage> {
        let Some(script) = self.flow.script() else {
            return Task::none();
        };

        if let Err(e) = self.clipboard.write_text(script.as_str()) {
            log::error!("[ORCHESTRATOR] Failed to copy script: {:#}", e);
            return Task::none();
        }

        self.show_copied_badge = true;
        self.copied_badge_generation += 1;
        let generation = self.copied_badge_generation;

        Task::future(async move {
            tokio::time::sleep(std::time::Duration::from_secs(COPIED_BADGE_DURATION_SECONDS))
                .await;
            OrchestratorMessage::HideCopiedBadge(generation)
        })
    }

    fn handle_hide_copied_badge(&mut self, generation: u64) {
        if generation != self.copied_badge_generation {
            log::debug!(
                "[ORCHESTRATOR] Ignoring stale badge hide {} (current {})",
                generation,
                self.copied_badge_generation
            );
            return;
        }
        self.show_copied_badge = false;
    }

    fn release_camera(&mut self) {
        if let Some(session) = self.camera_session.take() {
            session.close();
        }
        self.camera_preview = None;
    }

    fn notice_task(description: &str) -> Task<OrchestratorMessage> {
        let description = description.to_string();
        Task::future(async move {
            show_blocking_notice(description).await;
            OrchestratorMessage::NoticeDismissed
        })
    }

    fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        let header = column![
            text(APPLICATION_TITLE).size(32),
            text(APPLICATION_SUBTITLE)
                .size(15)
                .style(app_theme::muted_text_style),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let body = match self.flow.state().render_branch() {
            RenderBranch::CapturePrompt => self.render_capture_input(),
            RenderBranch::Loading => self.render_loading(),
            RenderBranch::ErrorMessage => self.render_error_with_capture_input(),
            RenderBranch::ResultView => self.render_result(),
        };

        container(
            column![header, body]
                .spacing(28)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn render_capture_input(&self) -> Element<'_, OrchestratorMessage> {
        ImageCaptureView::new(
            self.flow.image(),
            self.camera_preview.as_ref(),
            self.camera_session.is_some(),
            self.flow.can_generate(),
        )
        .render_ui()
        .map(OrchestratorMessage::from)
    }

    fn render_error_with_capture_input(&self) -> Element<'_, OrchestratorMessage> {
        let message = self.flow.error_message().unwrap_or_default();

        column![
            container(text(message).size(15))
                .padding(16)
                .width(Length::Fill)
                .style(app_theme::error_banner_style),
            self.render_capture_input(),
        ]
        .spacing(16)
        .into()
    }

    fn render_loading(&self) -> Element<'_, OrchestratorMessage> {
        container(
            column![
                text("Analyzing visual details...").size(20),
                text("This usually takes a few seconds")
                    .size(14)
                    .style(app_theme::muted_text_style),
            ]
            .spacing(10)
            .align_x(Alignment::Center),
        )
        .padding(48)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(app_theme::panel_style)
        .into()
    }

    fn render_result(&self) -> Element<'_, OrchestratorMessage> {
        let Some(script) = self.flow.script() else {
            return self.render_capture_input();
        };

        ScriptOutputView::new(script, &self.settings.model_name, self.show_copied_badge)
            .render_ui()
            .map(OrchestratorMessage::from)
    }
}

impl Drop for AppOrchestrator {
    fn drop(&mut self) {
        self.release_camera();
    }
}
