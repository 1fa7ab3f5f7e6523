//! Terminal input to mixer events

use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::mixer::Event;

/// Translate a terminal event; `None` for anything the mixer ignores
pub fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => key_event(key),
        _ => None,
    }
}

pub fn key_event(key: KeyEvent) -> Option<Event> {
    let event = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Event::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Event::Quit,
        KeyCode::Up | KeyCode::Char('k') => Event::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Event::MoveDown,
        KeyCode::Right | KeyCode::Char('l') => Event::IncreaseVolume,
        KeyCode::Left | KeyCode::Char('h') => Event::DecreaseVolume,
        KeyCode::Char('r') => Event::Refresh,
        _ => return None,
    };
    Some(event)
}
