//! With `log_contact_data` on, contact values are written as-is.

mod common;

use cb_gui::logging::{LogConfig, contact_data_enabled, init_logging_with_writer, redact_value};
use cb_gui::state::AppState;
use tracing::Level;

use common::{LogBuffer, NAME, QUERY, add_search_delete};

#[test]
fn test_enabled_contact_logging_shows_values() {
    let buffer = LogBuffer::default();
    let config = LogConfig {
        level: Level::TRACE,
        with_ansi: false,
        log_contact_data: true,
        ..Default::default()
    };
    init_logging_with_writer(&config, buffer.clone());

    assert!(contact_data_enabled());
    assert_eq!(redact_value(NAME), NAME);

    let mut state = AppState::default();
    add_search_delete(&mut state);

    let logs = buffer.contents();
    assert!(logs.contains(NAME), "logs: {logs}");
    assert!(logs.contains(QUERY), "logs: {logs}");
}
