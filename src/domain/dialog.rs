//! Blocking modal dialogs: host alert, window prompt and window confirm.

use super::{events::KeyInput, text_input_state::TextInputState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Alert,
    Confirm,
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAnswer {
    Dismissed,
    Confirmed,
    Declined,
    Submitted(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogState {
    kind: DialogKind,
    message: String,
    input: TextInputState,
}

impl DialogState {
    pub fn alert(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Alert, message)
    }

    pub fn confirm(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Confirm, message)
    }

    pub fn prompt(message: impl Into<String>) -> Self {
        Self::new(DialogKind::Prompt, message)
    }

    fn new(kind: DialogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            input: TextInputState::default(),
        }
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    /// Answer given when the dialog is torn down without a key press.
    pub fn abandoned(&self) -> DialogAnswer {
        match self.kind {
            DialogKind::Alert => DialogAnswer::Dismissed,
            DialogKind::Confirm => DialogAnswer::Declined,
            DialogKind::Prompt => DialogAnswer::Cancelled,
        }
    }

    /// Pasted text goes into the prompt input; other dialogs ignore it.
    pub fn paste(&mut self, text: &str) {
        if self.kind == DialogKind::Prompt {
            for ch in text.chars().filter(|ch| !ch.is_control()) {
                self.input.insert_char(ch);
            }
        }
    }

    /// Feeds one key press; returns the answer once the dialog is closed.
    pub fn handle_key(&mut self, key: &KeyInput) -> Option<DialogAnswer> {
        if key.key == "esc" {
            return Some(self.abandoned());
        }

        match self.kind {
            DialogKind::Alert => match key.key.as_str() {
                "enter" | " " => Some(DialogAnswer::Dismissed),
                _ => None,
            },
            DialogKind::Confirm => match key.key.as_str() {
                "enter" | "y" | "Y" => Some(DialogAnswer::Confirmed),
                "n" | "N" => Some(DialogAnswer::Declined),
                _ => None,
            },
            DialogKind::Prompt => self.edit_prompt(key),
        }
    }

    fn edit_prompt(&mut self, key: &KeyInput) -> Option<DialogAnswer> {
        match key.key.as_str() {
            "enter" => return Some(DialogAnswer::Submitted(self.input.text().to_owned())),
            "backspace" => self.input.delete_before_cursor(),
            "delete" => self.input.delete_at_cursor(),
            "left" => self.input.move_left(),
            "right" => self.input.move_right(),
            "home" => self.input.move_home(),
            "end" => self.input.move_end(),
            _ => {
                if let Some(ch) = key.as_char() {
                    self.input.insert_char(ch);
                }
            }
        }

        None
    }
}
