//! Messages handed to the host through `sendData`.

use serde::Serialize;

/// Settings record carried by a `save_settings` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsRecord {
    pub name: String,
    pub email: String,
    pub notifications: bool,
}

/// Payload sent to the host application.
///
/// Serializes with the `action` tag first, followed by the variant fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Payload {
    SaveSettings { settings: SettingsRecord },
    SendMessage { message: String },
}

impl Payload {
    pub fn action(&self) -> &'static str {
        match self {
            Self::SaveSettings { .. } => "save_settings",
            Self::SendMessage { .. } => "send_message",
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
