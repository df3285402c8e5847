//! Modal dialog overlay component.
//!
//! Provides modal dialogs with backdrop, title, content, and action buttons.
//! The backdrop is opaque to input, so nothing behind the dialog reacts
//! until it is closed.

use iced::widget::{Text, button, center, column, container, opaque, row, space, stack, text};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_LG, BORDER_WIDTH_THIN, MODAL_WIDTH_MD, SPACING_LG, SPACING_MD, SPACING_SM,
    button_danger, button_ghost, button_primary, button_secondary,
};

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// # Arguments
///
/// * `base` - The background content (entire app view)
/// * `title` - Modal title text
/// * `content` - Modal body content
/// * `on_close` - Message to send when close button is clicked
/// * `actions` - List of action buttons for the footer
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.45).into()),
            ..Default::default()
        });

    let header = row![
        text(title).size(18),
        space::horizontal(),
        button(lucide::x().size(18))
            .on_press(on_close)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let action_row = actions
        .into_iter()
        .fold(row![space::horizontal()].spacing(SPACING_SM), |r, action| {
            r.push(action)
        });

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_SM, 0.0]),
            action_row
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.base.color.into()),
            text_color: Some(palette.background.base.text),
            border: Border {
                radius: BORDER_RADIUS_LG.into(),
                width: BORDER_WIDTH_THIN,
                color: palette.background.strong.color,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 24.0,
            },
            ..Default::default()
        }
    });

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Creates a yes/no confirmation modal.
///
/// Closing the dialog counts as cancelling.
pub fn confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: String,
    confirm_label: &'a str,
    on_confirm: M,
    on_cancel: M,
) -> Element<'a, M> {
    let cancel_btn: Element<'a, M> = button(text("Cancel"))
        .on_press(on_cancel.clone())
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();

    let confirm_btn: Element<'a, M> = button(text(confirm_label))
        .on_press(on_confirm)
        .padding([10.0, 20.0])
        .style(button_danger)
        .into();

    modal(
        base,
        title,
        text(message).into(),
        on_cancel,
        vec![cancel_btn, confirm_btn],
    )
}

/// Creates an info/alert modal with a single OK button.
pub fn alert_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    icon: Text<'a>,
    title: &'a str,
    message: &'a str,
    on_close: M,
) -> Element<'a, M> {
    let content = row![icon.size(28), text(message).size(14)]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center)
        .into();

    let ok_btn: Element<'a, M> = button(text("OK"))
        .on_press(on_close.clone())
        .padding([10.0, 24.0])
        .style(button_primary)
        .into();

    modal(base, title, content, on_close, vec![ok_btn])
}
