//! Entry point for every page event.
//!
//! Faults that escape an operation are shown to the user through the host
//! alert and otherwise swallowed, so the event loop keeps running.

use crate::domain::events::UiAction;

use super::{
    contracts::WebView,
    form_controller::{ActionOutcome, ControllerError, FormController},
};

pub fn dispatch<W: WebView>(
    controller: &mut FormController<W>,
    action: UiAction,
) -> Option<ActionOutcome> {
    let result = match action {
        UiAction::PageLoaded => {
            controller.page_loaded();
            Ok(ActionOutcome::Completed)
        }
        UiAction::SaveSettings => controller.save_settings(),
        UiAction::SendMessage => controller.send_message(),
        UiAction::CloseApp => controller.close_app(),
    };

    match result {
        Ok(outcome) => {
            tracing::debug!(?action, ?outcome, "ui action handled");
            Some(outcome)
        }
        Err(error) => {
            report_fault(controller, action, &error);
            None
        }
    }
}

pub fn fault_alert_text(error: &ControllerError) -> String {
    format!("Ошибка: {error}")
}

fn report_fault<W: WebView>(
    controller: &mut FormController<W>,
    action: UiAction,
    error: &ControllerError,
) {
    tracing::error!(?action, error = %error, "ui action failed");

    if let Err(alert_error) = controller
        .webview_mut()
        .show_alert(&fault_alert_text(error))
    {
        tracing::error!(
            ?action,
            error = ?alert_error,
            "fault alert could not be shown"
        );
    }
}
