//! Infrastructure layer: config, logging, launch parameters and the outbox.

pub mod config;
pub mod contracts;
pub mod error;
pub mod init_data;
pub mod logging;
pub mod outbox;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
