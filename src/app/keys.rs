//! Keyboard mapping.
//!
//! The shim converts Zellij key events into [`Key`] and asks
//! [`event_for_key`] what they mean. While the search box has focus printable
//! characters are text; everywhere else letters act as shortcuts.

use super::focus::Input;
use super::handler::Event;

/// The keys the plugin reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Esc,
    Backspace,
    Char(char),
}

/// Maps a key press to an event. `typing` is `true` while the search region
/// has focus. Returns `None` for keys with no meaning in that mode.
///
/// # Key Map
///
/// | Key           | Typing            | Not typing        |
/// |---------------|-------------------|-------------------|
/// | arrows        | navigate          | navigate          |
/// | `Enter`       | `Enter`           | `Enter`           |
/// | `Esc`         | `Back`            | `Back`            |
/// | `Backspace`   | `Backspace`       | `Backspace`       |
/// | `h` `j` `k` `l` | appended to query | navigate        |
/// | `/`           | appended to query | focus search      |
/// | `q`           | appended to query | close pane        |
/// | other chars   | appended to query | ignored           |
///
/// # Example
///
/// ```rust
/// use recipe_explorer::app::{event_for_key, Event, Input, Key};
///
/// assert_eq!(event_for_key(Key::Char('j'), false), Some(Event::Navigate(Input::Down)));
/// assert_eq!(event_for_key(Key::Char('j'), true), Some(Event::Char('j')));
/// ```
#[must_use]
pub fn event_for_key(key: Key, typing: bool) -> Option<Event> {
    let event = match key {
        Key::Left => Event::Navigate(Input::Left),
        Key::Right => Event::Navigate(Input::Right),
        Key::Up => Event::Navigate(Input::Up),
        Key::Down => Event::Navigate(Input::Down),
        Key::Enter => Event::Navigate(Input::Enter),
        Key::Esc => Event::Navigate(Input::Back),
        Key::Backspace => Event::Backspace,

        Key::Char(c) if typing => {
            if c.is_control() {
                return None;
            }
            Event::Char(c)
        }
        Key::Char('h') => Event::Navigate(Input::Left),
        Key::Char('j') => Event::Navigate(Input::Down),
        Key::Char('k') => Event::Navigate(Input::Up),
        Key::Char('l') => Event::Navigate(Input::Right),
        Key::Char('/') => Event::FocusSearch,
        Key::Char('q') => Event::CloseFocus,
        Key::Char(_) => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate_in_every_mode() {
        for typing in [false, true] {
            assert_eq!(event_for_key(Key::Up, typing), Some(Event::Navigate(Input::Up)));
            assert_eq!(event_for_key(Key::Enter, typing), Some(Event::Navigate(Input::Enter)));
            assert_eq!(event_for_key(Key::Esc, typing), Some(Event::Navigate(Input::Back)));
            assert_eq!(event_for_key(Key::Backspace, typing), Some(Event::Backspace));
        }
    }

    #[test]
    fn letters_are_shortcuts_outside_search() {
        assert_eq!(event_for_key(Key::Char('j'), false), Some(Event::Navigate(Input::Down)));
        assert_eq!(event_for_key(Key::Char('l'), false), Some(Event::Navigate(Input::Right)));
        assert_eq!(event_for_key(Key::Char('/'), false), Some(Event::FocusSearch));
        assert_eq!(event_for_key(Key::Char('q'), false), Some(Event::CloseFocus));
        assert_eq!(event_for_key(Key::Char('x'), false), None);
    }

    #[test]
    fn letters_are_text_while_typing() {
        assert_eq!(event_for_key(Key::Char('j'), true), Some(Event::Char('j')));
        assert_eq!(event_for_key(Key::Char('q'), true), Some(Event::Char('q')));
        assert_eq!(event_for_key(Key::Char('/'), true), Some(Event::Char('/')));
        assert_eq!(event_for_key(Key::Char('\u{7}'), true), None);
    }
}
