//! Contact values stay out of the logs unless explicitly allowed.

mod common;

use cb_gui::logging::{LogConfig, REDACTED_VALUE, init_logging_with_writer};
use cb_gui::state::AppState;
use tracing::Level;

use common::{ADDRESS, EMAIL, LogBuffer, NAME, PHONE, QUERY, add_search_delete};

#[test]
fn test_handler_logs_carry_no_contact_values() {
    let buffer = LogBuffer::default();
    let config = LogConfig {
        level: Level::TRACE,
        with_ansi: false,
        ..Default::default()
    };
    init_logging_with_writer(&config, buffer.clone());

    let mut state = AppState::default();
    add_search_delete(&mut state);
    assert!(state.store.is_empty());

    let logs = buffer.contents();
    assert!(logs.contains("Contact added"), "logs: {logs}");
    assert!(logs.contains("Contact deleted"), "logs: {logs}");
    assert!(logs.contains(REDACTED_VALUE), "logs: {logs}");
    for value in [NAME, PHONE, EMAIL, ADDRESS, QUERY] {
        assert!(!logs.contains(value), "{value:?} leaked into logs: {logs}");
    }
}
