use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Font, Length};

use super::app_theme;
use crate::core::models::GeneratedScript;

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOutputMessage {
    CopyScript,
    GenerateNew,
}

pub struct ScriptOutputView<'a> {
    script: &'a GeneratedScript,
    model_name: &'a str,
    show_copied_badge: bool,
}

impl<'a> ScriptOutputView<'a> {
    pub fn new(script: &'a GeneratedScript, model_name: &'a str, show_copied_badge: bool) -> Self {
        Self {
            script,
            model_name,
            show_copied_badge,
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.show_copied_badge {
            "Copied"
        } else {
            "Copy Script"
        }
    }

    pub fn footer_label(&self) -> String {
        format!("Generated by {}", self.model_name)
    }

    pub fn render_ui(&self) -> Element<'a, ScriptOutputMessage> {
        let copy_button = if self.show_copied_badge {
            button(text(self.copy_label()).size(14))
                .on_press(ScriptOutputMessage::CopyScript)
                .padding([8, 16])
                .style(app_theme::success_badge_style)
        } else {
            button(text(self.copy_label()).size(14))
                .on_press(ScriptOutputMessage::CopyScript)
                .padding([8, 16])
                .style(app_theme::secondary_button_style)
        };

        let header = row![
            text("Generated Script").size(20).width(Length::Fill),
            copy_button,
        ]
        .align_y(Alignment::Center);

        let script_body = container(
            scrollable(
                container(text(self.script.as_str()).font(Font::MONOSPACE).size(14))
                    .padding(16)
                    .width(Length::Fill),
            )
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(app_theme::panel_style);

        let generate_new_button = button(
            container(text("Generate New").size(16)).center_x(Length::Fill),
        )
        .on_press(ScriptOutputMessage::GenerateNew)
        .padding(14)
        .width(Length::Fill)
        .style(app_theme::primary_button_style);

        let footer = container(
            text(self.footer_label())
                .size(12)
                .style(app_theme::muted_text_style),
        )
        .center_x(Length::Fill);

        column![header, script_body, generate_new_button, footer]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
