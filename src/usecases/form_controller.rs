//! Settings form controller.
//!
//! Every operation is a stateless procedure over the current page fields and
//! the user snapshot taken at construction. The host bridge is injected; the
//! controller never reaches for ambient state.

use thiserror::Error;

use crate::domain::{
    events::UiAction,
    form_state::ValidationError,
    host_user::HostUser,
    payload::Payload,
    user_info::render_user_info,
};

use super::contracts::WebView;

pub const MAIN_BUTTON_TEXT: &str = "Готово";
pub const SETTINGS_SAVED_TEXT: &str = "Настройки сохранены!";
pub const MESSAGE_PROMPT_TEXT: &str = "Введите сообщение для отправки в бота:";
pub const MESSAGE_SENT_TEXT: &str = "Сообщение отправлено!";
pub const CLOSE_CONFIRM_TEXT: &str = "Закрыть приложение?";

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("failed to encode {action} payload: {source}")]
    Encode {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}

/// Which path an operation took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// Input failed validation; the user was alerted and nothing was sent.
    Rejected(ValidationError),
    /// The user cancelled a prompt or declined a confirmation.
    Declined,
}

pub struct FormController<W: WebView> {
    webview: W,
    user: Option<HostUser>,
}

impl<W: WebView> FormController<W> {
    pub fn new(webview: W, user: Option<HostUser>) -> Self {
        Self { webview, user }
    }

    pub fn webview(&self) -> &W {
        &self.webview
    }

    pub fn webview_mut(&mut self) -> &mut W {
        &mut self.webview
    }

    #[cfg(test)]
    pub fn into_webview(self) -> W {
        self.webview
    }

    /// Script start: expand the view and bind the main button to the save action.
    pub fn init(&mut self) {
        self.webview.expand();
        self.webview
            .set_main_button(MAIN_BUTTON_TEXT, UiAction::SaveSettings);
        tracing::debug!(user_present = self.user.is_some(), "page script initialised");
    }

    /// Runs once the page content is ready.
    pub fn page_loaded(&mut self) {
        self.display_user_info();
        self.load_saved_settings();

        let theme = self.webview.theme_params().resolve();
        tracing::debug!(
            background = %theme.background,
            text = %theme.text,
            "theme applied"
        );
        self.webview.apply_theme(theme);
    }

    pub fn display_user_info(&mut self) {
        let view = render_user_info(self.user.as_ref());
        self.webview.render_user_info(view);
    }

    /// Pre-fills the name field from the host user. There is no settings store behind this.
    pub fn load_saved_settings(&mut self) {
        if let Some(user) = &self.user {
            self.webview.set_name_value(&user.first_name);
        }
    }

    pub fn save_settings(&mut self) -> Result<ActionOutcome, ControllerError> {
        let settings = match self.webview.form_values().validate() {
            Ok(settings) => settings,
            Err(reason) => {
                tracing::info!(reason = %reason, "settings rejected");
                self.webview.show_alert(reason.user_message())?;
                return Ok(ActionOutcome::Rejected(reason));
            }
        };

        self.send_payload(&Payload::SaveSettings { settings })?;
        self.webview.show_alert(SETTINGS_SAVED_TEXT)?;

        Ok(ActionOutcome::Completed)
    }

    pub fn send_message(&mut self) -> Result<ActionOutcome, ControllerError> {
        let message = match self.webview.prompt(MESSAGE_PROMPT_TEXT)? {
            Some(message) if !message.is_empty() => message,
            _ => return Ok(ActionOutcome::Declined),
        };

        self.send_payload(&Payload::SendMessage { message })?;
        self.webview.show_alert(MESSAGE_SENT_TEXT)?;

        Ok(ActionOutcome::Completed)
    }

    pub fn close_app(&mut self) -> Result<ActionOutcome, ControllerError> {
        if !self.webview.confirm(CLOSE_CONFIRM_TEXT)? {
            return Ok(ActionOutcome::Declined);
        }

        self.webview.close()?;
        Ok(ActionOutcome::Completed)
    }

    fn send_payload(&mut self, payload: &Payload) -> Result<(), ControllerError> {
        let action = payload.action();
        let data = payload
            .to_json()
            .map_err(|source| ControllerError::Encode { action, source })?;

        self.webview.send_data(&data)?;
        tracing::info!(action, bytes = data.len(), "payload handed to host");

        Ok(())
    }
}
