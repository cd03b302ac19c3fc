use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use super::app_theme;
use crate::core::models::ImagePayload;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageCaptureMessage {
    UploadPhoto,
    OpenCamera,
    CloseCamera,
    TakeSnapshot,
    ClearImage,
    GenerateScript,
}

/// Which of the three capture layouts is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureLayout {
    SourcePrompt,
    LiveCamera,
    SelectedImage,
}

pub struct ImageCaptureView<'a> {
    selected_image: Option<&'a ImagePayload>,
    camera_preview: Option<&'a image::Handle>,
    camera_open: bool,
    can_generate: bool,
}

impl<'a> ImageCaptureView<'a> {
    pub fn new(
        selected_image: Option<&'a ImagePayload>,
        camera_preview: Option<&'a image::Handle>,
        camera_open: bool,
        can_generate: bool,
    ) -> Self {
        Self {
            selected_image,
            camera_preview,
            camera_open,
            can_generate,
        }
    }

    pub fn layout(&self) -> CaptureLayout {
        if self.camera_open {
            CaptureLayout::LiveCamera
        } else if self.selected_image.is_some() {
            CaptureLayout::SelectedImage
        } else {
            CaptureLayout::SourcePrompt
        }
    }

    pub fn render_ui(&self) -> Element<'a, ImageCaptureMessage> {
        match self.layout() {
            CaptureLayout::LiveCamera => self.render_live_camera(),
            CaptureLayout::SelectedImage => self.render_selected_image(),
            CaptureLayout::SourcePrompt => self.render_source_prompt(),
        }
    }

    fn render_source_prompt(&self) -> Element<'a, ImageCaptureMessage> {
        let upload_button = button(
            column![
                text("Upload Photo").size(18),
                text("Select from files or drop one here")
                    .size(13)
                    .style(app_theme::muted_text_style),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        )
        .on_press(ImageCaptureMessage::UploadPhoto)
        .padding(24)
        .width(Length::Fill)
        .style(app_theme::secondary_button_style);

        let camera_button = button(
            column![
                text("Take Photo").size(18),
                text("Use your camera")
                    .size(13)
                    .style(app_theme::muted_text_style),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        )
        .on_press(ImageCaptureMessage::OpenCamera)
        .padding(24)
        .width(Length::Fill)
        .style(app_theme::secondary_button_style);

        row![upload_button, camera_button]
            .spacing(16)
            .width(Length::Fill)
            .into()
    }

    fn render_live_camera(&self) -> Element<'a, ImageCaptureMessage> {
        let preview: Element<'a, ImageCaptureMessage> = match self.camera_preview {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(360.0))
                .into(),
            None => container(text("Starting camera...").style(app_theme::muted_text_style))
                .width(Length::Fill)
                .height(Length::Fixed(360.0))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(360.0))
                .into(),
        };

        let controls = row![
            button(text("Cancel"))
                .on_press(ImageCaptureMessage::CloseCamera)
                .padding([10, 20])
                .style(app_theme::danger_button_style),
            button(text("Capture"))
                .on_press(ImageCaptureMessage::TakeSnapshot)
                .padding([10, 28])
                .style(app_theme::primary_button_style),
        ]
        .spacing(16);

        column![
            container(preview)
                .padding(8)
                .width(Length::Fill)
                .style(app_theme::panel_style),
            container(controls).width(Length::Fill).center_x(Length::Fill),
        ]
        .spacing(16)
        .into()
    }

    fn render_selected_image(&self) -> Element<'a, ImageCaptureMessage> {
        let Some(payload) = self.selected_image else {
            return self.render_source_prompt();
        };

        let caption = match payload.source_path() {
            Some(path) => path.display().to_string(),
            None => "Camera snapshot".to_string(),
        };

        let header = row![
            text(caption)
                .size(13)
                .width(Length::Fill)
                .style(app_theme::muted_text_style),
            button(text("Remove").size(13))
                .on_press(ImageCaptureMessage::ClearImage)
                .padding([6, 12])
                .style(app_theme::danger_button_style),
        ]
        .align_y(Alignment::Center);

        let mut content = column![
            header,
            container(
                image(payload.image_handle().clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(360.0))
            )
            .padding(8)
            .width(Length::Fill)
            .style(app_theme::panel_style),
        ]
        .spacing(12);

        if self.can_generate {
            content = content.push(
                button(
                    container(text("Generate Deep Script").size(18)).center_x(Length::Fill),
                )
                .on_press(ImageCaptureMessage::GenerateScript)
                .padding(16)
                .width(Length::Fill)
                .style(app_theme::primary_button_style),
            );
        }

        content.into()
    }
}
