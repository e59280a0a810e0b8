use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::core::tabs::Tabs;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ModalOverlay, ScreenView, TitleBar};
use crate::tui::resolver::RouteResolver;
use crate::tui::route::DemoRoute;

const HELP: &str =
    " ↑↓ select  Enter open  ⌫ back  B back×2  r root  h home  m settings  d deep link  Tab tab  q quit";

pub fn draw_ui(
    frame: &mut Frame,
    tabs: &Tabs<String, DemoRoute>,
    resolver: &impl RouteResolver<DemoRoute>,
    tui: &mut TuiState,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, main_area, status_area, help_area] = layout.areas(frame.area());

    let nav = tabs.active();
    let path = nav.current_path();

    // Breadcrumb: root screen, then every pushed route
    let crumbs: Vec<String> = std::iter::once(resolver.resolve(None).title)
        .chain(path.iter().map(|r| resolver.resolve(Some(r)).title))
        .collect();
    let mut title_bar = TitleBar {
        tabs: tabs.keys().cloned().collect(),
        selected_tab: tabs.selected_index(),
        crumbs,
        modal_open: nav.presented_modal().is_some(),
    };
    title_bar.render(frame, title_area);

    let screen = resolver.resolve(path.last());
    ScreenView {
        screen: &screen,
        state: &mut tui.screen,
        covered: nav.presented_modal().is_some(),
    }
    .render(frame, main_area);

    if let Some(modal) = nav.presented_modal() {
        let modal_screen = resolver.resolve(Some(modal));
        ModalOverlay {
            screen: &modal_screen,
        }
        .render(frame, main_area);
    }

    frame.render_widget(
        Span::styled(
            format!(" {} ", tui.status_message),
            Style::default().fg(Color::Green),
        ),
        status_area,
    );
    frame.render_widget(
        Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::resolver::DemoResolver;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn tabs() -> Tabs<String, DemoRoute> {
        Tabs::new(["browse".to_string(), "account".to_string()]).unwrap()
    }

    #[test]
    fn test_draw_root_screen() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let tabs = tabs();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, &tabs, &DemoResolver, &mut tui))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Root screen."));
        assert!(text.contains("→ Home"));
    }

    #[test]
    fn test_draw_modal_over_stack() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut tabs = tabs();
        tabs.active_mut().set_path([DemoRoute::Home, DemoRoute::detail("3")]);
        tabs.active_mut().present_modal(DemoRoute::Settings);
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, &tabs, &DemoResolver, &mut tui))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Waypoint › Home › Detail 3"));
        assert!(text.contains("Esc Close"));
    }
}
