//! Prompt and notice overlays.
//!
//! A pending notice is drawn above everything else; otherwise the pending
//! prompt, if any, is drawn over the main window.

use iced::widget::{Id, Text, button, column, text, text_input};
use iced::{Element, Theme};
use iced_fonts::lucide;

use crate::component::{alert_modal, confirm_modal, modal};
use crate::message::{Message, PromptMessage};
use crate::state::{AppState, Notice, NoticeKind, Prompt};
use crate::theme::{SPACING_SM, button_primary, button_secondary, text_muted};

/// Widget id of the search prompt's input; focused when the prompt opens.
pub const SEARCH_INPUT_ID: &str = "search-query";

/// Wrap `base` with whatever dialog the state has pending.
pub fn view_overlay<'a>(state: &'a AppState, base: Element<'a, Message>) -> Element<'a, Message> {
    if let Some(notice) = &state.notice {
        return view_notice(base, notice);
    }

    match &state.prompt {
        Some(Prompt::Search { query }) => view_search_prompt(base, query),
        Some(Prompt::ConfirmDelete { name, .. }) => view_delete_prompt(base, name),
        None => base,
    }
}

fn view_notice<'a>(base: Element<'a, Message>, notice: &'a Notice) -> Element<'a, Message> {
    alert_modal(
        base,
        notice_icon(notice.kind),
        &notice.title,
        &notice.message,
        Message::Prompt(PromptMessage::NoticeDismissed),
    )
}

fn notice_icon<'a>(kind: NoticeKind) -> Text<'a> {
    let icon = match kind {
        NoticeKind::Info => lucide::info(),
        NoticeKind::Success => lucide::circle_check(),
        NoticeKind::Warning => lucide::triangle_alert(),
        NoticeKind::Error => lucide::circle_x(),
    };
    icon.style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let color = match kind {
            NoticeKind::Info => palette.primary.base.color,
            NoticeKind::Success => palette.success.base.color,
            NoticeKind::Warning => palette.warning.base.color,
            NoticeKind::Error => palette.danger.base.color,
        };
        text::Style { color: Some(color) }
    })
}

fn view_search_prompt<'a>(base: Element<'a, Message>, query: &'a str) -> Element<'a, Message> {
    let content = column![
        text("Enter a name or phone number:").size(13).style(text_muted),
        text_input("Name or phone", query)
            .id(Id::new(SEARCH_INPUT_ID))
            .on_input(|value| Message::Prompt(PromptMessage::SearchQueryChanged(value)))
            .on_submit(Message::Prompt(PromptMessage::SearchSubmitted))
            .padding(SPACING_SM),
    ]
    .spacing(SPACING_SM)
    .into();

    let cancel_btn: Element<'a, Message> = button(text("Cancel"))
        .on_press(Message::Prompt(PromptMessage::SearchCancelled))
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();

    let search_btn: Element<'a, Message> = button(text("Search"))
        .on_press(Message::Prompt(PromptMessage::SearchSubmitted))
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    modal(
        base,
        "Search",
        content,
        Message::Prompt(PromptMessage::SearchCancelled),
        vec![cancel_btn, search_btn],
    )
}

fn view_delete_prompt<'a>(base: Element<'a, Message>, name: &'a str) -> Element<'a, Message> {
    confirm_modal(
        base,
        "Confirm Delete",
        format!("Are you sure you want to delete {name}?"),
        "Delete",
        Message::Prompt(PromptMessage::DeleteConfirmed),
        Message::Prompt(PromptMessage::DeleteCancelled),
    )
}
