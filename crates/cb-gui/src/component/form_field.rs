//! Form field component.

use iced::widget::{container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::theme::{FORM_LABEL_WIDTH, SPACING_SM, text_muted};

/// Creates a labelled single-line input.
///
/// Required fields get a `*` after the label.
///
/// # Arguments
///
/// * `label` - Field label text
/// * `value` - Current field value
/// * `placeholder` - Placeholder text
/// * `required` - Whether to mark the field as required
/// * `on_change` - Message factory for value changes
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    required: bool,
    on_change: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let label_text = if required {
        format!("{label} *")
    } else {
        label.to_string()
    };

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(SPACING_SM)
        .width(Length::Fill);

    row![
        container(text(label_text).size(13).style(text_muted)).width(FORM_LABEL_WIDTH),
        input,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}
