//! The settings page: input fields, output container and focus.

use thiserror::Error;

use super::{
    email::validate_email,
    host_user::AppliedTheme,
    payload::SettingsRecord,
    text_input_state::TextInputState,
    user_info::UserInfoView,
};

/// Typing limit of the emulated inputs. Values assigned by the page script are not cut.
const FIELD_MAX_LENGTH: usize = 256;

/// Snapshot of the current field values, read at the moment of an action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub notifications: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name and email are required")]
    MissingFields,
    #[error("email address is malformed")]
    InvalidEmail,
}

impl ValidationError {
    pub fn user_message(self) -> &'static str {
        match self {
            Self::MissingFields => "Пожалуйста, заполните все поля!",
            Self::InvalidEmail => "Пожалуйста, введите корректный email!",
        }
    }
}

impl FormValues {
    /// Checks required fields, then the email pattern. Values are kept verbatim.
    pub fn validate(self) -> Result<SettingsRecord, ValidationError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        if !validate_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(SettingsRecord {
            name: self.name,
            email: self.email,
            notifications: self.notifications,
        })
    }
}

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Email,
    Notifications,
    SendMessageButton,
    CloseButton,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Name,
        FormFocus::Email,
        FormFocus::Notifications,
        FormFocus::SendMessageButton,
        FormFocus::CloseButton,
    ];

    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let idx = self.position();
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    name: TextInputState,
    email: TextInputState,
    notifications: bool,
    user_info: UserInfoView,
    theme: AppliedTheme,
    focus: FormFocus,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: TextInputState::with_max_length(FIELD_MAX_LENGTH),
            email: TextInputState::with_max_length(FIELD_MAX_LENGTH),
            notifications: false,
            user_info: UserInfoView::default(),
            theme: AppliedTheme::default(),
            focus: FormFocus::default(),
        }
    }
}

impl FormState {
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.text().to_owned(),
            email: self.email.text().to_owned(),
            notifications: self.notifications,
        }
    }

    pub fn name(&self) -> &TextInputState {
        &self.name
    }

    pub fn email(&self) -> &TextInputState {
        &self.email
    }

    pub fn notifications(&self) -> bool {
        self.notifications
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
    }

    pub fn user_info(&self) -> &UserInfoView {
        &self.user_info
    }

    pub fn set_user_info(&mut self, view: UserInfoView) {
        self.user_info = view;
    }

    pub fn theme(&self) -> &AppliedTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: AppliedTheme) {
        self.theme = theme;
    }

    pub fn set_name(&mut self, value: &str) {
        self.name.set_text(value);
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// The text input under focus, if the focus is on one.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        match self.focus {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn with_values(name: &str, email: &str, notifications: bool) -> Self {
        let mut state = Self::default();
        state.name.set_text(name);
        state.email.set_text(email);
        state.notifications = notifications;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, email: &str) -> FormValues {
        FormValues {
            name: name.to_owned(),
            email: email.to_owned(),
            notifications: false,
        }
    }

    #[test]
    fn empty_name_is_missing_even_with_bad_email() {
        assert_eq!(
            values("", "bad-email").validate(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn empty_email_is_missing() {
        assert_eq!(
            values("Ann", "").validate(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn malformed_email_is_rejected_after_presence_check() {
        assert_eq!(
            values("Ann", "bad-email").validate(),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn whitespace_around_name_is_preserved() {
        let record = values("  Ann ", "ann@example.com")
            .validate()
            .expect("values should validate");

        assert_eq!(record.name, "  Ann ");
    }

    #[test]
    fn focus_cycles_in_both_directions() {
        let mut state = FormState::default();
        assert_eq!(state.focus(), FormFocus::Name);

        state.focus_previous();
        assert_eq!(state.focus(), FormFocus::CloseButton);

        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus(), FormFocus::Email);
    }

    #[test]
    fn only_text_fields_accept_typing() {
        let mut state = FormState::default();
        assert!(state.focused_input_mut().is_some());

        state.focus_next();
        state.focus_next();
        assert!(state.focused_input_mut().is_none());
    }

    #[test]
    fn values_reflect_current_fields() {
        let mut state = FormState::with_values("Ann", "ann@example.com", false);
        state.toggle_notifications();

        assert_eq!(
            state.values(),
            FormValues {
                name: "Ann".to_owned(),
                email: "ann@example.com".to_owned(),
                notifications: true,
            }
        );
    }

    #[test]
    fn prefilled_name_is_not_truncated() {
        let long_name = "Анна".repeat(100);
        let mut state = FormState::default();
        state.set_name(&long_name);

        assert_eq!(state.values().name, long_name);
        assert!(state
            .focused_input_mut()
            .is_some_and(|input| !input.insert_char('x')));
    }
}
