//! Declarative rendering of the host user summary.

use super::host_user::HostUser;

pub const USER_INFO_HEADING: &str = "👤 Информация о пользователе";
pub const USER_INFO_UNAVAILABLE: &str = "Информация о пользователе недоступна";
pub const USERNAME_NOT_SPECIFIED: &str = "не указан";
pub const DEFAULT_LANGUAGE_CODE: &str = "ru";

/// One labelled line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

impl InfoRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// View-model for the `userInfo` container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserInfoView {
    /// Nothing rendered yet.
    #[default]
    Blank,
    Unavailable,
    Known {
        heading: &'static str,
        rows: Vec<InfoRow>,
    },
}

impl UserInfoView {
    /// Flattens the view into display lines.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Blank => Vec::new(),
            Self::Unavailable => vec![USER_INFO_UNAVAILABLE.to_owned()],
            Self::Known { heading, rows } => std::iter::once((*heading).to_owned())
                .chain(rows.iter().map(|row| format!("{}: {}", row.label, row.value)))
                .collect(),
        }
    }
}

pub fn render_user_info(user: Option<&HostUser>) -> UserInfoView {
    let Some(user) = user else {
        return UserInfoView::Unavailable;
    };

    let full_name = match user.last_name.as_deref() {
        Some(last_name) if !last_name.is_empty() => format!("{} {}", user.first_name, last_name),
        _ => user.first_name.clone(),
    };

    let username = match user.username.as_deref() {
        Some(username) if !username.is_empty() => format!("@{username}"),
        _ => USERNAME_NOT_SPECIFIED.to_owned(),
    };

    let language = match user.language_code.as_deref() {
        Some(code) if !code.is_empty() => code.to_owned(),
        _ => DEFAULT_LANGUAGE_CODE.to_owned(),
    };

    UserInfoView::Known {
        heading: USER_INFO_HEADING,
        rows: vec![
            InfoRow::new("ID", user.id.to_string()),
            InfoRow::new("Имя", full_name),
            InfoRow::new("Username", username),
            InfoRow::new("Язык", language),
        ],
    }
}
