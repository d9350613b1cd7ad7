use anyhow::Result;

use crate::domain::{
    events::{AppEvent, UiAction},
    form_state::FormValues,
    host_user::{AppliedTheme, ThemeParams},
    user_info::UserInfoView,
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

/// Host SDK surface used by the page script.
pub trait HostBridge {
    /// Requests full-height presentation. Fire-and-forget.
    fn expand(&mut self);
    fn theme_params(&self) -> ThemeParams;
    /// Blocks until the user dismisses the alert.
    fn show_alert(&mut self, text: &str) -> Result<()>;
    fn send_data(&mut self, data: &str) -> Result<()>;
    fn close(&mut self) -> Result<()>;
    /// Sets the main button label and its click handler. The last registration wins.
    fn set_main_button(&mut self, text: &str, on_click: UiAction);
}

/// Blocking window dialogs.
pub trait Dialogs {
    /// `None` when the user cancels.
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// The page elements the script reads and writes.
pub trait Page {
    fn form_values(&self) -> FormValues;
    fn set_name_value(&mut self, value: &str);
    fn render_user_info(&mut self, view: UserInfoView);
    fn apply_theme(&mut self, theme: AppliedTheme);
}

/// Everything the embedded page can reach.
pub trait WebView: HostBridge + Dialogs + Page {}

impl<T: HostBridge + Dialogs + Page + ?Sized> WebView for T {}
