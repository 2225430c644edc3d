//! Terminal key to input action mapping

use crate::core::Letter;
use crate::game::InputAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press on the game screen to an action
///
/// Enter submits, Backspace and Delete erase, alphabet letters are typed.
/// Everything else, including letters held with Ctrl or Alt, is ignored.
#[must_use]
pub fn action_for_key(key: &KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Enter => Some(InputAction::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(InputAction::Delete),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Letter::new(c).map(InputAction::LetterInput)
        }
        _ => None,
    }
}

/// Ctrl-C, which quits from any screen
#[must_use]
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_become_input() {
        let a = Letter::new('a').unwrap();
        assert_eq!(
            action_for_key(&key(KeyCode::Char('a'))),
            Some(InputAction::LetterInput(a))
        );
        assert_eq!(
            action_for_key(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(InputAction::LetterInput(a))
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Char('ñ'))),
            Some(InputAction::LetterInput(Letter::new('Ñ').unwrap()))
        );
    }

    #[test]
    fn editing_keys() {
        assert_eq!(action_for_key(&key(KeyCode::Enter)), Some(InputAction::Submit));
        assert_eq!(
            action_for_key(&key(KeyCode::Backspace)),
            Some(InputAction::Delete)
        );
        assert_eq!(action_for_key(&key(KeyCode::Delete)), Some(InputAction::Delete));
    }

    #[test]
    fn other_keys_ignored() {
        assert_eq!(action_for_key(&key(KeyCode::Char('1'))), None);
        assert_eq!(action_for_key(&key(KeyCode::Tab)), None);
        assert_eq!(action_for_key(&key(KeyCode::Esc)), None);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&ctrl_c), None);
        assert!(is_interrupt(&ctrl_c));
        assert!(!is_interrupt(&key(KeyCode::Char('c'))));
    }
}
