use serde::{Deserialize, Serialize};

/// Page background used when the host does not supply one.
pub const DEFAULT_BG_COLOR: &str = "#f5f5f5";

/// Page text colour used when the host does not supply one.
pub const DEFAULT_TEXT_COLOR: &str = "#222222";

/// Identity of the current user as exposed by the host at startup.
///
/// The snapshot is taken once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl HostUser {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(id: i64, first_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: None,
            username: None,
            language_code: None,
        }
    }
}

/// Colour scheme published by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeParams {
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

impl ThemeParams {
    /// Resolves host colours, falling back to the page defaults.
    pub fn resolve(&self) -> AppliedTheme {
        AppliedTheme {
            background: non_empty_or(self.bg_color.as_deref(), DEFAULT_BG_COLOR),
            text: non_empty_or(self.text_color.as_deref(), DEFAULT_TEXT_COLOR),
        }
    }
}

/// Colours actually applied to the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTheme {
    pub background: String,
    pub text: String,
}

impl Default for AppliedTheme {
    fn default() -> Self {
        ThemeParams::default().resolve()
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => fallback.to_owned(),
    }
}
