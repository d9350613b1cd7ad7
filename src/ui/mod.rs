//! UI layer: the terminal web view emulator hosting the settings page.

mod event_source;
mod form_input;
mod host_surface;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
