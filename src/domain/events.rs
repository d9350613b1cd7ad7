#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    Paste(String),
}

/// Page-level actions the controller responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    PageLoaded,
    SaveSettings,
    SendMessage,
    CloseApp,
}

/// A key press, normalised to a name (`"enter"`, `"tab"`, `"a"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Printable character carried by the key, if any.
    pub fn as_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}
