use std::collections::VecDeque;

use anyhow::{anyhow, Result};

use crate::{
    domain::{
        events::UiAction,
        form_state::{FormState, FormValues},
        host_user::{AppliedTheme, ThemeParams},
        user_info::UserInfoView,
    },
    usecases::contracts::{Dialogs, HostBridge, Page},
};

/// Every observable call a page script made against the fake view, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewCall {
    Expand,
    Alert(String),
    SendData(String),
    Close,
    MainButton(String, UiAction),
    Prompt(String),
    Confirm(String),
}

/// In-memory web view with scripted dialog answers.
#[derive(Debug, Default)]
pub struct RecordingWebView {
    pub form: FormState,
    pub theme_params: ThemeParams,
    pub calls: Vec<WebViewCall>,
    pub prompt_answers: VecDeque<Option<String>>,
    pub confirm_answers: VecDeque<bool>,
    pub fail_send: bool,
    pub fail_alert: bool,
}

impl RecordingWebView {
    pub fn with_form(form: FormState) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                WebViewCall::Alert(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn sent(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                WebViewCall::SendData(data) => Some(data.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn closed(&self) -> bool {
        self.calls.contains(&WebViewCall::Close)
    }
}

impl HostBridge for RecordingWebView {
    fn expand(&mut self) {
        self.calls.push(WebViewCall::Expand);
    }

    fn theme_params(&self) -> ThemeParams {
        self.theme_params.clone()
    }

    fn show_alert(&mut self, text: &str) -> Result<()> {
        if self.fail_alert {
            return Err(anyhow!("alert surface unavailable"));
        }
        self.calls.push(WebViewCall::Alert(text.to_owned()));
        Ok(())
    }

    fn send_data(&mut self, data: &str) -> Result<()> {
        if self.fail_send {
            return Err(anyhow!("WebAppDataInvalid"));
        }
        self.calls.push(WebViewCall::SendData(data.to_owned()));
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.calls.push(WebViewCall::Close);
        Ok(())
    }

    fn set_main_button(&mut self, text: &str, on_click: UiAction) {
        self.calls
            .push(WebViewCall::MainButton(text.to_owned(), on_click));
    }
}

impl Dialogs for RecordingWebView {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.calls.push(WebViewCall::Prompt(message.to_owned()));
        Ok(self.prompt_answers.pop_front().flatten())
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        self.calls.push(WebViewCall::Confirm(message.to_owned()));
        Ok(self.confirm_answers.pop_front().unwrap_or(false))
    }
}

impl Page for RecordingWebView {
    fn form_values(&self) -> FormValues {
        self.form.values()
    }

    fn set_name_value(&mut self, value: &str) {
        self.form.set_name(value);
    }

    fn render_user_info(&mut self, view: UserInfoView) {
        self.form.set_user_info(view);
    }

    fn apply_theme(&mut self, theme: AppliedTheme) {
        self.form.set_theme(theme);
    }
}
