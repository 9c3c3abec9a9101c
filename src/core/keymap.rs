/// Fixed key-to-action table
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::game::Action;

/// Letter controls, each action reachable in both cases
const LETTERS: [(char, Action); 12] = [
    ('W', Action::Up),
    ('A', Action::Left),
    ('S', Action::Down),
    ('D', Action::Right),
    ('R', Action::Restart),
    ('Q', Action::Exit),
    ('w', Action::Up),
    ('a', Action::Left),
    ('s', Action::Down),
    ('d', Action::Right),
    ('r', Action::Restart),
    ('q', Action::Exit),
];

/// Decode a terminal key event, `None` for anything outside the table
pub fn decode(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        // raw mode swallows SIGINT
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Exit),
        // letters only bare or shifted, so Ctrl+Q and friends do nothing
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => LETTERS
            .iter()
            .find(|(letter, _)| *letter == c)
            .map(|&(_, action)| action),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Esc => Some(Action::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_decode_in_both_cases() {
        for (upper, lower, action) in [
            ('W', 'w', Action::Up),
            ('A', 'a', Action::Left),
            ('S', 's', Action::Down),
            ('D', 'd', Action::Right),
            ('R', 'r', Action::Restart),
            ('Q', 'q', Action::Exit),
        ] {
            assert_eq!(decode(&press(KeyCode::Char(upper))), Some(action));
            assert_eq!(decode(&press(KeyCode::Char(lower))), Some(action));
        }
    }

    #[test]
    fn arrows_and_escape() {
        assert_eq!(decode(&press(KeyCode::Up)), Some(Action::Up));
        assert_eq!(decode(&press(KeyCode::Right)), Some(Action::Right));
        assert_eq!(decode(&press(KeyCode::Esc)), Some(Action::Exit));
    }

    #[test]
    fn ctrl_c_exits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode(&key), Some(Action::Exit));
    }

    #[test]
    fn letters_with_other_modifiers_are_discarded() {
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT, KeyModifiers::SUPER] {
            assert_eq!(decode(&KeyEvent::new(KeyCode::Char('r'), modifiers)), None);
            assert_eq!(decode(&KeyEvent::new(KeyCode::Char('q'), modifiers)), None);
        }
        let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
        assert_eq!(decode(&KeyEvent::new(KeyCode::Char('W'), ctrl_shift)), None);

        let shifted = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(decode(&shifted), Some(Action::Up));
    }

    #[test]
    fn unknown_keys_are_discarded() {
        assert_eq!(decode(&press(KeyCode::Char('x'))), None);
        assert_eq!(decode(&press(KeyCode::Char('c'))), None);
        assert_eq!(decode(&press(KeyCode::Enter)), None);
        assert_eq!(decode(&press(KeyCode::Tab)), None);
    }

    #[test]
    fn releases_are_discarded() {
        let mut key = press(KeyCode::Char('w'));
        key.kind = KeyEventKind::Release;
        assert_eq!(decode(&key), None);
    }
}
