//! Key bindings for the review and file-selector screens.

use catv_core::model::RevisitChoice;
use catv_core::review::ReviewEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::file_selector::SelectorAction;

/// `q` or ctrl+c.
#[must_use]
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map a key press on the review screen to a session event.
///
/// Keys with no meaning on that screen map to `None`.
#[must_use]
pub fn review_event(key: &KeyEvent) -> Option<ReviewEvent> {
    if is_quit(key) {
        return Some(ReviewEvent::Quit);
    }
    match key.code {
        KeyCode::Enter => Some(ReviewEvent::Confirm),
        KeyCode::Char('c') => Some(ReviewEvent::JudgeCorrect),
        KeyCode::Char('i') => Some(ReviewEvent::JudgeIncorrect),
        KeyCode::Char(digit @ ('1' | '3' | '7' | '9')) => digit
            .to_digit(10)
            .and_then(|days| RevisitChoice::from_days(days).ok())
            .map(ReviewEvent::ChooseInterval),
        _ => None,
    }
}

/// Map a key press on the file selector.
#[must_use]
pub fn selector_action(key: &KeyEvent) -> Option<SelectorAction> {
    if is_quit(key) {
        return Some(SelectorAction::Cancel);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(SelectorAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectorAction::Down),
        KeyCode::Char(' ') => Some(SelectorAction::Toggle),
        KeyCode::Enter => Some(SelectorAction::Confirm),
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
    fn ctrl_c_quits_instead_of_judging() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(review_event(&ctrl_c), Some(ReviewEvent::Quit));
        assert_eq!(
            review_event(&press(KeyCode::Char('c'))),
            Some(ReviewEvent::JudgeCorrect)
        );
    }

    #[test]
    fn review_keys_map_to_events() {
        let table = [
            (KeyCode::Enter, Some(ReviewEvent::Confirm)),
            (KeyCode::Char('q'), Some(ReviewEvent::Quit)),
            (KeyCode::Char('i'), Some(ReviewEvent::JudgeIncorrect)),
            (
                KeyCode::Char('1'),
                Some(ReviewEvent::ChooseInterval(RevisitChoice::One)),
            ),
            (
                KeyCode::Char('9'),
                Some(ReviewEvent::ChooseInterval(RevisitChoice::Nine)),
            ),
            (KeyCode::Char('2'), None),
            (KeyCode::Char('x'), None),
            (KeyCode::Esc, None),
        ];
        for (code, expected) in table {
            assert_eq!(review_event(&press(code)), expected, "{code:?}");
        }
    }

    #[test]
    fn selector_keys_map_to_actions() {
        assert_eq!(
            selector_action(&press(KeyCode::Char('j'))),
            Some(SelectorAction::Down)
        );
        assert_eq!(selector_action(&press(KeyCode::Up)), Some(SelectorAction::Up));
        assert_eq!(
            selector_action(&press(KeyCode::Char(' '))),
            Some(SelectorAction::Toggle)
        );
        assert_eq!(
            selector_action(&press(KeyCode::Char('q'))),
            Some(SelectorAction::Cancel)
        );
        assert_eq!(selector_action(&press(KeyCode::Char('c'))), None);
    }
}
