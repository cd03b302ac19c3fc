use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub const MUTED_TEXT_COLOR: Color = Color::from_rgb(0.58, 0.64, 0.72);
pub const SUCCESS_ACCENT_COLOR: Color = Color::from_rgb(0.063, 0.725, 0.506);
pub const DANGER_TEXT_COLOR: Color = Color::from_rgb(0.973, 0.443, 0.443);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.059, 0.090, 0.165),
                text: Color::from_rgb(0.945, 0.961, 0.976),
                primary: Color::from_rgb(0.231, 0.510, 0.965),
                success: SUCCESS_ACCENT_COLOR,
                danger: Color::from_rgb(0.937, 0.267, 0.267),
                warning: Color::from_rgb(0.961, 0.620, 0.043),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.96, 0.98),
                text: Color::from_rgb(0.1, 0.1, 0.12),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn solid_button(background: Color, text_color: Color, border_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

fn disabled_button() -> button::Style {
    solid_button(
        Color::from_rgb(0.3, 0.3, 0.3),
        Color::from_rgb(0.5, 0.5, 0.5),
        Color::from_rgb(0.4, 0.4, 0.4),
        false,
    )
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button(
            Color::from_rgb(0.145, 0.388, 0.922),
            Color::WHITE,
            Color::from_rgb(0.310, 0.275, 0.898),
            false,
        ),
        button::Status::Hovered => solid_button(
            Color::from_rgb(0.231, 0.510, 0.965),
            Color::WHITE,
            Color::from_rgb(0.388, 0.400, 0.945),
            false,
        ),
        button::Status::Pressed => solid_button(
            Color::from_rgb(0.114, 0.306, 0.847),
            Color::WHITE,
            Color::from_rgb(0.263, 0.220, 0.792),
            true,
        ),
        button::Status::Disabled => disabled_button(),
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button(
            Color::from_rgb(0.118, 0.161, 0.231),
            Color::from_rgb(0.796, 0.835, 0.882),
            Color::from_rgb(0.278, 0.333, 0.412),
            false,
        ),
        button::Status::Hovered => solid_button(
            Color::from_rgb(0.200, 0.255, 0.333),
            Color::WHITE,
            Color::from_rgb(0.376, 0.647, 0.980),
            false,
        ),
        button::Status::Pressed => solid_button(
            Color::from_rgb(0.090, 0.122, 0.180),
            Color::from_rgb(0.8, 0.8, 0.8),
            Color::from_rgb(0.278, 0.333, 0.412),
            true,
        ),
        button::Status::Disabled => disabled_button(),
    }
}

pub fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button(
            Color::from_rgba(0.937, 0.267, 0.267, 0.8),
            Color::WHITE,
            Color::from_rgb(0.937, 0.267, 0.267),
            false,
        ),
        button::Status::Hovered | button::Status::Pressed => solid_button(
            Color::from_rgb(0.863, 0.149, 0.149),
            Color::WHITE,
            Color::from_rgb(0.863, 0.149, 0.149),
            matches!(status, button::Status::Pressed),
        ),
        button::Status::Disabled => disabled_button(),
    }
}

pub fn success_badge_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::from_rgba(0.063, 0.725, 0.506, 0.2))),
        text_color: SUCCESS_ACCENT_COLOR,
        border: Border {
            color: Color::from_rgba(0.063, 0.725, 0.506, 0.3),
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.118, 0.161, 0.231))),
        border: Border {
            color: Color::from_rgb(0.200, 0.255, 0.333),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.937, 0.267, 0.267, 0.1))),
        text_color: Some(DANGER_TEXT_COLOR),
        border: Border {
            color: Color::from_rgba(0.937, 0.267, 0.267, 0.2),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn muted_text_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(MUTED_TEXT_COLOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.059, 0.090, 0.165));
        assert_eq!(palette.text, Color::from_rgb(0.945, 0.961, 0.976));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.95, 0.96, 0.98));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.12));
    }

    #[test]
    fn test_primary_button_style_active_has_blue_background() {
        let style = primary_button_style(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.145, 0.388, 0.922));
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_pressed_buttons_snap() {
        assert!(primary_button_style(&Theme::Dark, button::Status::Pressed).snap);
        assert!(danger_button_style(&Theme::Dark, button::Status::Pressed).snap);
        assert!(!danger_button_style(&Theme::Dark, button::Status::Hovered).snap);
    }

    #[test]
    fn test_disabled_buttons_share_grey_style() {
        let primary = primary_button_style(&Theme::Dark, button::Status::Disabled);
        let secondary = secondary_button_style(&Theme::Dark, button::Status::Disabled);

        assert_eq!(primary.text_color, secondary.text_color);
        assert_eq!(primary.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }
}
