use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            Event::Paste(text) => Ok(Some(AppEvent::Paste(text))),
            Event::Resize(_, _) => Ok(Some(AppEvent::Tick)),
            _ => Ok(None),
        }
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(AppEvent::QuitRequested);
    }

    let name = match key.code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Tab => "tab".to_owned(),
        KeyCode::BackTab => "backtab".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<AppEvent> {
        map_key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_requests_quit() {
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(AppEvent::QuitRequested)
        );
    }

    #[test]
    fn named_keys_are_normalised() {
        assert_eq!(
            press(KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(AppEvent::InputKey(KeyInput::new("backtab", false)))
        );
        assert_eq!(
            press(KeyCode::F(2), KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::new("f2", false)))
        );
    }

    #[test]
    fn characters_keep_ctrl_flag() {
        assert_eq!(
            press(KeyCode::Char('s'), KeyModifiers::CONTROL),
            Some(AppEvent::InputKey(KeyInput::new("s", true)))
        );
        assert_eq!(
            press(KeyCode::Char('Я'), KeyModifiers::SHIFT),
            Some(AppEvent::InputKey(KeyInput::new("Я", false)))
        );
    }

    #[test]
    fn unsupported_keys_are_dropped() {
        assert_eq!(press(KeyCode::Insert, KeyModifiers::NONE), None);
    }

    #[test]
    fn mock_source_drains_in_order() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);

        assert_eq!(source.next_event().expect("event"), Some(AppEvent::Tick));
        assert_eq!(source.next_event().expect("event"), Some(AppEvent::QuitRequested));
        assert_eq!(source.next_event().expect("event"), None);
    }
}
