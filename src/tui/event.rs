use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Resize,

    // Link selection on the visible screen
    CursorUp,
    CursorDown,
    Open,

    // Navigation gestures (translated into controller calls)
    /// Platform-style back swipe covering this many screens
    Back(usize),
    Escape,
    PopToRoot,
    PopToHome,
    ShowSettings,
    DeepLink,
    NextTab,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release/repeat events arrive when keyboard enhancement is on
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::trace!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter) | (_, KeyCode::Right) => Some(TuiEvent::Open),
        (_, KeyCode::Backspace) | (_, KeyCode::Left) => Some(TuiEvent::Back(1)),
        (_, KeyCode::Char('B')) => Some(TuiEvent::Back(2)),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Char('r')) => Some(TuiEvent::PopToRoot),
        (_, KeyCode::Char('h')) => Some(TuiEvent::PopToHome),
        (_, KeyCode::Char('m')) => Some(TuiEvent::ShowSettings),
        (_, KeyCode::Char('d')) => Some(TuiEvent::DeepLink),
        (_, KeyCode::Tab) => Some(TuiEvent::NextTab),
        _ => None,
    }
}
