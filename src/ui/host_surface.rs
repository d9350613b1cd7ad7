//! Host-side state of the emulated web view: the page, the main button and
//! the data channel back to the host application.

use anyhow::{bail, Result};

use crate::{
    domain::{events::UiAction, form_state::FormState, host_user::ThemeParams},
    infra::contracts::DataSink,
};

/// Largest payload the host accepts through `sendData`, in bytes.
pub const MAX_WEB_APP_DATA_BYTES: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainButton {
    pub text: String,
    pub on_click: UiAction,
}

pub struct HostSurface {
    form: FormState,
    theme_params: ThemeParams,
    main_button: Option<MainButton>,
    expanded: bool,
    open: bool,
    sink: Box<dyn DataSink>,
    delivered: usize,
}

impl HostSurface {
    pub fn new(theme_params: ThemeParams, sink: Box<dyn DataSink>) -> Self {
        Self {
            form: FormState::default(),
            theme_params,
            main_button: None,
            expanded: false,
            open: true,
            sink,
            delivered: 0,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn theme_params(&self) -> &ThemeParams {
        &self.theme_params
    }

    pub fn main_button(&self) -> Option<&MainButton> {
        self.main_button.as_ref()
    }

    pub fn main_button_action(&self) -> Option<UiAction> {
        self.main_button.as_ref().map(|button| button.on_click)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of payloads accepted so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn set_main_button(&mut self, text: &str, on_click: UiAction) {
        self.main_button = Some(MainButton {
            text: text.to_owned(),
            on_click,
        });
    }

    pub fn send_data(&mut self, data: &str) -> Result<()> {
        check_web_app_data(data)?;
        self.sink.deliver(data)?;
        self.delivered += 1;

        tracing::info!(
            bytes = data.len(),
            delivered = self.delivered,
            "web app data accepted by host"
        );
        Ok(())
    }

    pub fn close(&mut self) {
        tracing::info!("web view closed by page");
        self.open = false;
    }
}

/// Host acceptance rule for `sendData`.
pub fn check_web_app_data(data: &str) -> Result<()> {
    if data.is_empty() || data.len() > MAX_WEB_APP_DATA_BYTES {
        tracing::warn!(bytes = data.len(), "web app data rejected by host");
        bail!("WebAppDataInvalid");
    }
    Ok(())
}
