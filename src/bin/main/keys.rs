use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use walletsim_core::input::InputEvent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyAction {
    Device(InputEvent),
    Quit,
    Ignore,
}

/// Keyboard bindings for the two device buttons and the host controls.
pub fn map_key(key: KeyEvent) -> KeyAction {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c' | 'C')) => KeyAction::Quit,
        (_, KeyCode::Char('q' | 'Q')) => KeyAction::Quit,
        (_, KeyCode::Left | KeyCode::Char('h')) => KeyAction::Device(InputEvent::Left),
        (_, KeyCode::Right | KeyCode::Char('l')) => KeyAction::Device(InputEvent::Right),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => KeyAction::Device(InputEvent::Confirm),
        (_, KeyCode::Backspace | KeyCode::Esc) => KeyAction::Device(InputEvent::Back),
        (_, KeyCode::Char('p' | 'P')) => KeyAction::Device(InputEvent::TogglePower),
        (_, KeyCode::Char('s' | 'S')) => KeyAction::Device(InputEvent::OpenSettings),
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn arrows_and_enter_drive_the_device() {
        assert_eq!(press(KeyCode::Left), KeyAction::Device(InputEvent::Left));
        assert_eq!(press(KeyCode::Char('l')), KeyAction::Device(InputEvent::Right));
        assert_eq!(press(KeyCode::Enter), KeyAction::Device(InputEvent::Confirm));
        assert_eq!(press(KeyCode::Esc), KeyAction::Device(InputEvent::Back));
        assert_eq!(press(KeyCode::Char('p')), KeyAction::Device(InputEvent::TogglePower));
    }

    #[test]
    fn ctrl_c_quits_and_unknown_keys_are_ignored() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(press(KeyCode::Char('x')), KeyAction::Ignore);
    }
}
