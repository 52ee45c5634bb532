//! crossterm key events to platform-agnostic input events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termfolio_types::input::{CursorMove, InputEvent};

/// Map a key press. `line_empty` decides whether Esc and Ctrl+D quit or edit.
pub fn map_key(key: &KeyEvent, line_empty: bool) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Quit),
            KeyCode::Char('d') if line_empty => Some(InputEvent::Quit),
            KeyCode::Char('d') => Some(InputEvent::Delete),
            KeyCode::Char('u') => Some(InputEvent::ClearLine),
            KeyCode::Char('a') => Some(InputEvent::Cursor(CursorMove::Home)),
            KeyCode::Char('e') => Some(InputEvent::Cursor(CursorMove::End)),
            KeyCode::Char('p') => Some(InputEvent::HistoryOlder),
            KeyCode::Char('n') => Some(InputEvent::HistoryNewer),
            _ => None,
        };
    }
    if alt {
        return match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                Some(InputEvent::PickSuggestion(c as usize - '1' as usize))
            },
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(InputEvent::TextInput(c)),
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Tab => Some(InputEvent::Complete),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Delete => Some(InputEvent::Delete),
        KeyCode::Left => Some(InputEvent::Cursor(CursorMove::Left)),
        KeyCode::Right => Some(InputEvent::Cursor(CursorMove::Right)),
        KeyCode::Home => Some(InputEvent::Cursor(CursorMove::Home)),
        KeyCode::End => Some(InputEvent::Cursor(CursorMove::End)),
        KeyCode::Up => Some(InputEvent::HistoryOlder),
        KeyCode::Down => Some(InputEvent::HistoryNewer),
        KeyCode::Esc if line_empty => Some(InputEvent::Quit),
        KeyCode::Esc => Some(InputEvent::ClearLine),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_chars_type() {
        assert_eq!(map_key(&key(KeyCode::Char('x')), true), Some(InputEvent::TextInput('x')));
        assert_eq!(
            map_key(&with(KeyCode::Char('X'), KeyModifiers::SHIFT), true),
            Some(InputEvent::TextInput('X'))
        );
    }

    #[test]
    fn arrows_walk_history() {
        assert_eq!(map_key(&key(KeyCode::Up), false), Some(InputEvent::HistoryOlder));
        assert_eq!(map_key(&key(KeyCode::Down), false), Some(InputEvent::HistoryNewer));
    }

    #[test]
    fn tab_and_enter() {
        assert_eq!(map_key(&key(KeyCode::Tab), false), Some(InputEvent::Complete));
        assert_eq!(map_key(&key(KeyCode::Enter), false), Some(InputEvent::Submit));
    }

    #[test]
    fn alt_digit_picks_suggestion() {
        assert_eq!(
            map_key(&with(KeyCode::Char('1'), KeyModifiers::ALT), false),
            Some(InputEvent::PickSuggestion(0))
        );
        assert_eq!(
            map_key(&with(KeyCode::Char('9'), KeyModifiers::ALT), false),
            Some(InputEvent::PickSuggestion(8))
        );
        assert_eq!(map_key(&with(KeyCode::Char('0'), KeyModifiers::ALT), false), None);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ev = with(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ev, false), Some(InputEvent::Quit));
        assert_eq!(map_key(&ev, true), Some(InputEvent::Quit));
    }

    #[test]
    fn esc_and_ctrl_d_depend_on_buffer() {
        assert_eq!(map_key(&key(KeyCode::Esc), true), Some(InputEvent::Quit));
        assert_eq!(map_key(&key(KeyCode::Esc), false), Some(InputEvent::ClearLine));
        let ctrl_d = with(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_d, true), Some(InputEvent::Quit));
        assert_eq!(map_key(&ctrl_d, false), Some(InputEvent::Delete));
    }

    #[test]
    fn release_ignored() {
        let mut ev = key(KeyCode::Char('a'));
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_key(&ev, false), None);
    }

    #[test]
    fn unmapped_keys() {
        assert_eq!(map_key(&key(KeyCode::F(1)), false), None);
        assert_eq!(map_key(&with(KeyCode::Char('z'), KeyModifiers::CONTROL), false), None);
    }
}
