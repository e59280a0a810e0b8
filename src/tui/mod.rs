//! # TUI Adapter
//!
//! The ratatui-specific rendering layer. It reads navigation state from the
//! core, resolves routes to screens through an injected `RouteResolver`,
//! and translates key presses into controller calls.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! never calls back into it.
//!
//! ## Redraw Strategy
//!
//! Every tab's controller has a subscription that flips a shared dirty flag.
//! The loop only draws when that flag is set or when a purely local change
//! (link selection, resize, status text) happened. Link selection is reset
//! whenever the active controller's `version()` moves, so it always belongs
//! to the screen that is actually on top.
//!
//! ## Back Gestures
//!
//! Backspace/Left stand in for a platform back swipe of one screen, `B` for
//! a swipe of two. With a modal up, a back gesture closes the modal first.
//! Otherwise it becomes a single `pop_count(n)`, so observers see one
//! change no matter how many screens went away.

mod component;
pub mod components;
pub mod event;
pub mod resolver;
pub mod route;
mod ui;

use std::cell::Cell;
use std::io::{self, stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{debug, info, warn};

use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::controller::Subscription;
use crate::core::persist;
use crate::core::tabs::Tabs;
use crate::tui::component::EventHandler;
use crate::tui::components::{ScreenEvent, ScreenViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::resolver::{DemoResolver, RouteResolver};
use crate::tui::route::{DemoRoute, sample_deep_link};

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// TUI-specific presentation state (not part of navigation state)
pub struct TuiState {
    pub screen: ScreenViewState,
    pub status_message: String,
    /// (tab index, controller version) the link selection belongs to
    seen: Option<(usize, u64)>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            screen: ScreenViewState::default(),
            status_message: String::from("Welcome to Waypoint!"),
            seen: None,
        }
    }

    /// Resets the link selection if the visible screen changed since the
    /// last call. Returns true when it did.
    pub fn sync(
        &mut self,
        tabs: &Tabs<String, DemoRoute>,
        resolver: &impl RouteResolver<DemoRoute>,
    ) -> bool {
        let key = (tabs.selected_index(), tabs.active().version());
        if self.seen == Some(key) {
            return false;
        }
        self.seen = Some(key);
        let links = resolver.resolve(tabs.active().top()).links;
        self.screen.reset(links);
        true
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Kitty keyboard protocol gives us Press/Release kinds; terminals
        // without it ignore the request
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// Applies one event to the active tab. Selection and status text live in
/// `tui`; everything navigational goes through the controller.
pub fn handle_event(
    event: &TuiEvent,
    tabs: &mut Tabs<String, DemoRoute>,
    tui: &mut TuiState,
) -> Control {
    let modal_open = tabs.active().presented_modal().is_some();

    let (action, label) = match event {
        TuiEvent::Quit => return Control::Quit,
        TuiEvent::Resize => return Control::Continue,
        TuiEvent::NextTab => {
            tabs.select_next();
            tui.status_message = format!("Tab: {}", tabs.selected_key());
            return Control::Continue;
        }
        // A modal swallows selection; closing it is the only way through
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Open if modal_open => {
            return Control::Continue;
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Open => {
            match tui.screen.handle_event(event) {
                Some(ScreenEvent::Open(route)) => {
                    let label = format!("Opened {route}");
                    (Action::Push(route), label)
                }
                None => return Control::Continue,
            }
        }
        TuiEvent::Back(_) | TuiEvent::Escape if modal_open => {
            (Action::DismissModal, "Closed modal".to_string())
        }
        TuiEvent::Back(count) => (Action::PopCount(*count), format!("Back {count}")),
        TuiEvent::Escape => (Action::Pop, "Back".to_string()),
        TuiEvent::PopToRoot => (Action::PopToRoot, "Back to root".to_string()),
        TuiEvent::PopToHome => (Action::PopTo(DemoRoute::Home), "Back to Home".to_string()),
        TuiEvent::ShowSettings => (
            Action::PresentModal(DemoRoute::Settings),
            "Settings".to_string(),
        ),
        TuiEvent::DeepLink => (Action::SetPath(sample_deep_link()), "Deep link".to_string()),
    };

    let effect = tabs.active_mut().dispatch(action);
    tui.status_message = match effect {
        Effect::Changed => label,
        Effect::Unchanged => format!("{label}: nothing to do"),
    };
    Control::Continue
}

/// Builds the tabs from config and restores saved state when enabled.
pub fn build_tabs(config: &ResolvedConfig) -> io::Result<Tabs<String, DemoRoute>> {
    let mut tabs = Tabs::new(config.tabs.iter().cloned()).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "at least one tab is required")
    })?;

    if config.restore_on_start
        && let Some(path) = &config.state_file
    {
        match persist::load::<String, DemoRoute>(path) {
            Ok(Some(saved)) => tabs.restore(saved.into_snapshot()),
            Ok(None) => {}
            Err(e) => warn!("Ignoring saved state at {}: {}", path.display(), e),
        }
    }
    Ok(tabs)
}

fn save_tabs(config: &ResolvedConfig, tabs: &Tabs<String, DemoRoute>) {
    let Some(path) = &config.state_file else {
        debug!("No state file configured, not saving");
        return;
    };
    if let Err(e) = persist::save(path, &tabs.snapshot()) {
        warn!("Failed to save navigation state: {}", e);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut tabs = build_tabs(&config)?;
    let resolver = DemoResolver;
    let mut tui = TuiState::new();

    // One subscription per tab; any effective change anywhere means redraw
    let dirty = Rc::new(Cell::new(true));
    let _subscriptions: Vec<Subscription> = tabs
        .controllers_mut()
        .map(|nav| {
            let dirty = Rc::clone(&dirty);
            nav.subscribe(move |_| dirty.set(true))
        })
        .collect();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        needs_redraw |= dirty.replace(false);
        needs_redraw |= tui.sync(&tabs, &resolver);

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &tabs, &resolver, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if handle_event(&event, &mut tabs, &mut tui) == Control::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    save_tabs(&config, &tabs);

    ratatui::restore();
    info!("Waypoint shut down");
    Ok(())
}
