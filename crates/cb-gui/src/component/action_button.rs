//! Icon + label button.

use iced::widget::{Button, Text, button, row, text};
use iced::{Alignment, Theme};

use crate::theme::{SPACING_SM, SPACING_XS};

/// A button with a leading icon, styled by `style`.
///
/// ```rust,ignore
/// action_button(lucide::plus(), "Add", button_primary)
///     .on_press(Message::Contact(ContactMessage::AddClicked))
/// ```
pub fn action_button<'a, M: 'a>(
    icon: Text<'a>,
    label: &'a str,
    style: impl Fn(&Theme, button::Status) -> button::Style + 'a,
) -> Button<'a, M> {
    button(
        row![icon.size(14), text(label).size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_SM + SPACING_XS])
    .style(style)
}
