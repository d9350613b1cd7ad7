//! Key map of the settings page.

use crate::domain::{
    events::{KeyInput, UiAction},
    form_state::{FormFocus, FormState},
};

/// Applies a key press to the page and returns the action it triggers, if any.
///
/// `main_button` is the handler currently registered on the host main button.
pub fn handle_key(
    form: &mut FormState,
    main_button: Option<UiAction>,
    key: &KeyInput,
) -> Option<UiAction> {
    if (key.ctrl && key.key == "s") || key.key == "f2" {
        return main_button;
    }

    match key.key.as_str() {
        "tab" | "down" => form.focus_next(),
        "backtab" | "up" => form.focus_previous(),
        "esc" => return Some(UiAction::CloseApp),
        "enter" => return activate(form),
        " " if form.focused_input_mut().is_none() => return activate(form),
        _ => edit_focused_input(form, key),
    }

    None
}

pub fn paste(form: &mut FormState, text: &str) {
    if let Some(input) = form.focused_input_mut() {
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            input.insert_char(ch);
        }
    }
}

fn activate(form: &mut FormState) -> Option<UiAction> {
    match form.focus() {
        FormFocus::Name | FormFocus::Email => {
            form.focus_next();
            None
        }
        FormFocus::Notifications => {
            form.toggle_notifications();
            None
        }
        FormFocus::SendMessageButton => Some(UiAction::SendMessage),
        FormFocus::CloseButton => Some(UiAction::CloseApp),
    }
}

fn edit_focused_input(form: &mut FormState, key: &KeyInput) {
    let Some(input) = form.focused_input_mut() else {
        return;
    };

    match key.key.as_str() {
        "backspace" => input.delete_before_cursor(),
        "delete" => input.delete_at_cursor(),
        "left" => input.move_left(),
        "right" => input.move_right(),
        "home" => input.move_home(),
        "end" => input.move_end(),
        _ => {
            if let Some(ch) = key.as_char() {
                input.insert_char(ch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> KeyInput {
        KeyInput::new(name, false)
    }

    fn type_text(form: &mut FormState, text: &str) {
        for ch in text.chars() {
            handle_key(form, None, &key(&ch.to_string()));
        }
    }

    #[test]
    fn typing_fills_focused_fields() {
        let mut form = FormState::default();

        type_text(&mut form, "Ann");
        handle_key(&mut form, None, &key("tab"));
        type_text(&mut form, "ann@example.com");

        let values = form.values();
        assert_eq!(values.name, "Ann");
        assert_eq!(values.email, "ann@example.com");
    }

    #[test]
    fn space_in_text_field_is_text_and_toggles_checkbox() {
        let mut form = FormState::default();
        type_text(&mut form, "A B");
        assert_eq!(form.values().name, "A B");

        handle_key(&mut form, None, &key("tab"));
        handle_key(&mut form, None, &key("tab"));
        assert_eq!(form.focus(), FormFocus::Notifications);

        handle_key(&mut form, None, &key(" "));
        assert!(form.values().notifications);
        handle_key(&mut form, None, &key("enter"));
        assert!(!form.values().notifications);
    }

    #[test]
    fn buttons_trigger_their_actions() {
        let mut form = FormState::default();
        handle_key(&mut form, None, &key("backtab"));
        assert_eq!(form.focus(), FormFocus::CloseButton);
        assert_eq!(
            handle_key(&mut form, None, &key("enter")),
            Some(UiAction::CloseApp)
        );

        handle_key(&mut form, None, &key("up"));
        assert_eq!(
            handle_key(&mut form, None, &key(" ")),
            Some(UiAction::SendMessage)
        );
    }

    #[test]
    fn main_button_fires_registered_handler() {
        let mut form = FormState::default();

        assert_eq!(
            handle_key(
                &mut form,
                Some(UiAction::SaveSettings),
                &KeyInput::new("s", true)
            ),
            Some(UiAction::SaveSettings)
        );
        assert_eq!(handle_key(&mut form, None, &key("f2")), None);
        assert_eq!(form.values().name, "");
    }

    #[test]
    fn escape_requests_close() {
        let mut form = FormState::default();

        assert_eq!(
            handle_key(&mut form, None, &key("esc")),
            Some(UiAction::CloseApp)
        );
    }

    #[test]
    fn enter_in_text_field_moves_to_next_field() {
        let mut form = FormState::default();
        assert_eq!(handle_key(&mut form, None, &key("enter")), None);

        assert_eq!(form.focus(), FormFocus::Email);
    }

    #[test]
    fn paste_inserts_into_focused_field_only() {
        let mut form = FormState::default();
        paste(&mut form, "ann@example.com\n");
        assert_eq!(form.values().name, "ann@example.com");

        handle_key(&mut form, None, &key("tab"));
        handle_key(&mut form, None, &key("tab"));
        paste(&mut form, "ignored");
        assert_eq!(form.values().email, "");
    }

    #[test]
    fn editing_keys_move_and_delete() {
        let mut form = FormState::default();
        type_text(&mut form, "Anx");
        handle_key(&mut form, None, &key("backspace"));
        handle_key(&mut form, None, &key("home"));
        handle_key(&mut form, None, &key("delete"));

        assert_eq!(form.values().name, "n");
    }
}
