//! Use case layer: the page controller and the workflows around it.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod dispatch;
pub mod form_controller;
pub mod page;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
