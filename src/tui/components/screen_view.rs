//! # Screen View Component
//!
//! Draws the resolved top-of-stack screen: its body text and the list of
//! routes that can be opened from it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ScreenViewState` lives in `TuiState` (link selection)
//! - `ScreenView` is created each frame with the resolved `Screen` as props

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::resolver::Screen;
use crate::tui::route::DemoRoute;

/// Persistent link selection for the visible screen.
#[derive(Debug, Default)]
pub struct ScreenViewState {
    pub links: Vec<DemoRoute>,
    pub list_state: ListState,
}

impl ScreenViewState {
    /// Swaps in the links of a newly visible screen and selects the first.
    pub fn reset(&mut self, links: Vec<DemoRoute>) {
        self.list_state.select(if links.is_empty() { None } else { Some(0) });
        self.links = links;
    }

    pub fn selected_link(&self) -> Option<&DemoRoute> {
        self.list_state.selected().and_then(|i| self.links.get(i))
    }
}

/// Events emitted by the screen view.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    Open(DemoRoute),
}

impl EventHandler for ScreenViewState {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        if self.links.is_empty() {
            return None;
        }
        let last = self.links.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        match event {
            TuiEvent::CursorUp => {
                self.list_state.select(Some(current.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                self.list_state.select(Some((current + 1).min(last)));
                None
            }
            TuiEvent::Open => self.selected_link().cloned().map(ScreenEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the visible screen.
pub struct ScreenView<'a> {
    pub screen: &'a Screen<DemoRoute>,
    pub state: &'a mut ScreenViewState,
    /// Dimmed while a modal covers it.
    pub covered: bool,
}

impl Component for ScreenView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = if self.covered {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(Color::DarkGray))
            .title(format!(" {} ", self.screen.title))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, links_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

        let body = Paragraph::new(self.screen.body.as_str())
            .style(base)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, body_area);

        if self.screen.links.is_empty() {
            return;
        }

        let items: Vec<ListItem> = self
            .screen
            .links
            .iter()
            .map(|route| ListItem::new(Line::from(Span::styled(format!("→ {route}"), base))))
            .collect();
        let highlight = if self.covered {
            base
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        };
        let list = List::new(items).highlight_style(highlight);
        frame.render_stateful_widget(list, links_area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ScreenViewState {
        let mut state = ScreenViewState::default();
        state.reset(vec![DemoRoute::Home, DemoRoute::Profile]);
        state
    }

    #[test]
    fn test_reset_selects_first_link() {
        let state = state();
        assert_eq!(state.selected_link(), Some(&DemoRoute::Home));
    }

    #[test]
    fn test_reset_with_no_links_clears_selection() {
        let mut state = state();
        state.reset(Vec::new());
        assert_eq!(state.selected_link(), None);
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let mut state = state();
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected_link(), Some(&DemoRoute::Home));
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected_link(), Some(&DemoRoute::Profile));
    }

    #[test]
    fn test_open_emits_selected_route() {
        let mut state = state();
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Open),
            Some(ScreenEvent::Open(DemoRoute::Profile))
        );
    }
}
