//! Main window layout.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Contact Book                   Dark [ ]  │
//! ├──────────────────────────────────────────┤
//! │ Name *    [                           ]  │
//! │ Phone *   [                           ]  │
//! │ Email     [                           ]  │
//! │ Address   [                           ]  │
//! │ [Add] [Update] [Delete] [Search] [Clear] │
//! ├──────────────────────────────────────────┤
//! │ Name              │ Phone                │
//! │ ...               │ ...                  │
//! └──────────────────────────────────────────┘
//! ```

use iced::widget::{button, column, container, row, rule, scrollable, space, text, toggler};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::component::{action_button, form_field};
use crate::message::{ContactMessage, Message};
use crate::state::{AppState, ContactRow, FormField};
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, ThemeMode, button_danger, button_primary,
    button_secondary, container_card, container_list_header, list_row, text_muted,
};

/// Render the main window without overlays.
pub fn view_main_window(state: &AppState) -> Element<'_, Message> {
    column![
        view_header(state),
        view_form(state),
        view_actions(),
        view_list(state),
        view_footer(state),
    ]
    .spacing(SPACING_MD)
    .padding(SPACING_LG)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

// =============================================================================
// HEADER
// =============================================================================

fn view_header(state: &AppState) -> Element<'_, Message> {
    let is_dark = state.settings.display.theme.is_dark();

    row![
        text("Contact Book").size(22),
        space::horizontal(),
        text("Dark mode").size(13).style(text_muted),
        toggler(is_dark).on_toggle(|v| Message::ThemeChanged(ThemeMode::from_dark(v))),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

// =============================================================================
// FORM
// =============================================================================

fn view_form(state: &AppState) -> Element<'_, Message> {
    let fields = FormField::ALL.into_iter().fold(
        column![].spacing(SPACING_SM),
        |col, field| {
            col.push(form_field(
                field.label(),
                state.form.value(field),
                field.placeholder(),
                field.is_required(),
                move |value| Message::Contact(ContactMessage::FieldChanged(field, value)),
            ))
        },
    );

    container(fields)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(container_card)
        .into()
}

fn view_actions<'a>() -> Element<'a, Message> {
    row![
        action_button(lucide::plus(), "Add", button_primary)
            .on_press(Message::Contact(ContactMessage::AddClicked)),
        action_button(lucide::pencil(), "Update", button_primary)
            .on_press(Message::Contact(ContactMessage::UpdateClicked)),
        action_button(lucide::trash(), "Delete", button_danger)
            .on_press(Message::Contact(ContactMessage::DeleteClicked)),
        action_button(lucide::search(), "Search", button_primary)
            .on_press(Message::Contact(ContactMessage::SearchClicked)),
        action_button(lucide::x(), "Clear", button_secondary)
            .on_press(Message::Contact(ContactMessage::ClearClicked)),
    ]
    .spacing(SPACING_SM)
    .into()
}

// =============================================================================
// CONTACT LIST
// =============================================================================

fn view_list(state: &AppState) -> Element<'_, Message> {
    let header = container(
        row![
            text("Name").size(13).width(Length::FillPortion(3)),
            text("Phone").size(13).width(Length::FillPortion(2)),
        ]
        .spacing(SPACING_SM),
    )
    .padding([SPACING_XS, SPACING_SM])
    .width(Length::Fill)
    .style(container_list_header);

    let body: Element<'_, Message> = if state.rows.is_empty() {
        view_empty_list()
    } else {
        let rows = state
            .rows
            .iter()
            .fold(column![].spacing(2.0), |col, r| col.push(view_row(state, r)));
        scrollable(rows).height(Length::Fill).into()
    };

    container(column![header, rule::horizontal(1), body].spacing(SPACING_XS))
        .padding(SPACING_SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_card)
        .into()
}

fn view_row<'a>(state: &AppState, r: &'a ContactRow) -> Element<'a, Message> {
    button(
        row![
            text(&r.name).size(14).width(Length::FillPortion(3)),
            text(&r.phone).size(14).width(Length::FillPortion(2)),
        ]
        .spacing(SPACING_SM),
    )
    .on_press(Message::Contact(ContactMessage::RowSelected(r.index)))
    .padding([SPACING_XS, SPACING_SM])
    .width(Length::Fill)
    .style(list_row(state.is_selected(r.id)))
    .into()
}

fn view_empty_list<'a>() -> Element<'a, Message> {
    container(
        column![
            lucide::user().size(32).style(text_muted),
            text("No contacts yet").size(14).style(text_muted),
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .into()
}

fn view_footer(state: &AppState) -> Element<'_, Message> {
    let count = state.store.len();
    let label = if count == 1 {
        "1 contact".to_string()
    } else {
        format!("{count} contacts")
    };
    text(label).size(12).style(text_muted).into()
}
