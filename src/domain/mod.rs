//! Domain layer: page entities, payloads and validation rules.

pub mod dialog;
pub mod email;
pub mod events;
pub mod form_state;
pub mod host_user;
pub mod payload;
pub mod text_input_state;
pub mod user_info;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
