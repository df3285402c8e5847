//! Contact Book - GUI Library
//!
//! Core application types for the Contact Book desktop application, built
//! with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
