//! Theme module for Contact Book.
//!
//! - Light/dark mode selection (`ThemeMode`)
//! - Spacing constants (`spacing`)
//! - Widget style functions (`styles`)

pub mod spacing;
pub mod styles;

pub use spacing::{
    BORDER_RADIUS_LG, BORDER_RADIUS_SM, BORDER_WIDTH_THIN, FORM_LABEL_WIDTH, MODAL_WIDTH_MD,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};
pub use styles::{
    button_danger, button_ghost, button_primary, button_secondary, container_card,
    container_list_header, list_row, text_muted,
};

use iced::Theme;
use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Iced theme for this mode.
    pub fn theme(&self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}
