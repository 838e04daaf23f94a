//! Keyboard handling for the board view
//!
//! Maps key events to board actions. The mapping is pure so the bindings
//! can be tested without a terminal.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::BoardAction;

/// Translate a key press into a board action.
///
/// Returns `None` for keys with no binding, which the event loop ignores.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<BoardAction> {
    match code {
        KeyCode::Char('q') => Some(BoardAction::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(BoardAction::Quit)
        }

        KeyCode::Char('g') => Some(BoardAction::NextGroupKey),
        KeyCode::Char('G') => Some(BoardAction::PrevGroupKey),
        KeyCode::Char('s') => Some(BoardAction::NextSortKey),
        KeyCode::Char('S') => Some(BoardAction::PrevSortKey),

        KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::MoveRight),
        KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::MoveUp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_bindings() {
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(BoardAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(BoardAction::Quit)
        );
        // Plain 'c' is unbound
        assert_eq!(key_to_action(KeyCode::Char('c'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_preference_bindings() {
        assert_eq!(
            key_to_action(KeyCode::Char('g'), KeyModifiers::NONE),
            Some(BoardAction::NextGroupKey)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(BoardAction::PrevGroupKey)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::NONE),
            Some(BoardAction::NextSortKey)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('S'), KeyModifiers::SHIFT),
            Some(BoardAction::PrevSortKey)
        );
    }

    #[test]
    fn test_navigation_bindings() {
        assert_eq!(
            key_to_action(KeyCode::Char('h'), KeyModifiers::NONE),
            Some(BoardAction::MoveLeft)
        );
        assert_eq!(
            key_to_action(KeyCode::Left, KeyModifiers::NONE),
            Some(BoardAction::MoveLeft)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(BoardAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Up, KeyModifiers::NONE),
            Some(BoardAction::MoveUp)
        );
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert_eq!(key_to_action(KeyCode::Enter, KeyModifiers::NONE), None);
        assert_eq!(key_to_action(KeyCode::Char('x'), KeyModifiers::NONE), None);
    }
}
