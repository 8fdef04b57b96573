//! Terminal input feed.
//!
//! Translates crossterm events into [`GameEvent`]s and drains everything the
//! terminal has queued since the last frame.

use crate::game::GameEvent;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Map a single key press to a game event.
pub fn map_key(key: KeyEvent) -> Option<GameEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameEvent::PrimaryAction),
        KeyCode::Esc => Some(GameEvent::SecondaryAction),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameEvent::Close),
        _ => None,
    }
}

/// Map any terminal event. Only key presses matter; resizes are picked up by
/// the next draw.
pub fn map_event(event: Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Wait up to `timeout` for the first event, then drain the rest of the queue
/// without blocking. Events are returned in arrival order.
pub fn drain_events(timeout: Duration) -> io::Result<Vec<GameEvent>> {
    let mut events = Vec::new();
    if !event::poll(timeout)? {
        return Ok(events);
    }

    loop {
        if let Some(game_event) = map_event(event::read()?) {
            events.push(game_event);
        }
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_primary_action_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(map_key(press(code)), Some(GameEvent::PrimaryAction));
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameEvent::SecondaryAction));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(GameEvent::Close));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameEvent::Quit)
        );
    }

    #[test]
    fn test_plain_c_is_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
        assert_eq!(map_key(press(KeyCode::Down)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        assert_eq!(map_event(Event::Resize(80, 24)), None);
        assert_eq!(map_event(Event::FocusLost), None);
        assert_eq!(
            map_event(Event::Key(press(KeyCode::Enter))),
            Some(GameEvent::PrimaryAction)
        );
    }
}
