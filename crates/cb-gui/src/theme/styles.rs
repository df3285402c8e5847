//! Widget style functions.
//!
//! All colors come from the active theme's extended palette, so the same
//! functions serve light and dark mode.

use iced::widget::{button, container, text};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::spacing::{BORDER_RADIUS_LG, BORDER_RADIUS_SM, BORDER_WIDTH_THIN};

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions (Add, Update, Search).
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    filled(
        status,
        palette.primary.base.color,
        palette.primary.strong.color,
        palette.primary.base.text,
    )
}

/// Danger button style - destructive actions (Delete).
pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    filled(
        status,
        palette.danger.base.color,
        palette.danger.strong.color,
        palette.danger.base.text,
    )
}

/// Secondary button style - neutral actions (Clear, Cancel).
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Ghost button style - borderless icon buttons.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn filled(status: button::Status, base: Color, hover: Color, text_color: Color) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => hover,
        button::Status::Disabled => Color { a: 0.5, ..base },
        _ => base,
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

// =============================================================================
// LIST STYLES
// =============================================================================

/// Style for a contact list row; selected rows use the weak primary tint.
pub fn list_row(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();
        let (background, text_color) = if selected {
            (Some(palette.primary.weak.color.into()), palette.primary.weak.text)
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => (
                    Some(palette.background.weak.color.into()),
                    palette.background.base.text,
                ),
                _ => (None, palette.background.base.text),
            }
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Column header strip above the contact list.
pub fn container_list_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bordered card used for the form and the list.
pub fn container_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT STYLES
// =============================================================================

/// Secondary text (labels, hints, footer).
pub fn text_muted(theme: &Theme) -> text::Style {
    let base = theme.extended_palette().background.base.text;
    text::Style {
        color: Some(Color { a: 0.7, ..base }),
    }
}
