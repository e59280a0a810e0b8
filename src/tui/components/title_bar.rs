//! # TitleBar Component
//!
//! Top line showing the tabs and a breadcrumb of the active tab's path.
//!
//! ```text
//!  [browse] account │ Waypoint › Home › Detail 1 › Profile
//! ```
//!
//! Stateless: the breadcrumb is derived from the controller's route list
//! each frame. When it doesn't fit, the oldest crumbs are dropped first and
//! replaced by `…` so the visible top always stays readable.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const SEPARATOR: &str = " › ";
const ELLIPSIS: &str = "…";

pub struct TitleBar {
    pub tabs: Vec<String>,
    pub selected_tab: usize,
    /// Root title first, visible top last.
    pub crumbs: Vec<String>,
    pub modal_open: bool,
}

impl TitleBar {
    fn tab_spans(&self) -> (Vec<Span<'static>>, usize) {
        let mut spans = Vec::new();
        let mut width = 0;
        for (i, name) in self.tabs.iter().enumerate() {
            let (text, style) = if i == self.selected_tab {
                (
                    format!("[{name}] "),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                (format!(" {name}  "), Style::default().fg(Color::DarkGray))
            };
            width += text.width();
            spans.push(Span::styled(text, style));
        }
        (spans, width)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (mut spans, used) = self.tab_spans();
        spans.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));

        let suffix = if self.modal_open { " ◆" } else { "" };
        let available = (area.width as usize)
            .saturating_sub(used + 2)
            .saturating_sub(suffix.width());
        spans.push(Span::raw(fit_breadcrumb(&self.crumbs, available)));
        if !suffix.is_empty() {
            spans.push(Span::styled(suffix, Style::default().fg(Color::Yellow)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

/// Joins crumbs with `›`, dropping the oldest ones until the result fits
/// in `max_width` columns. The last crumb is always kept, truncated if
/// it alone is too wide.
pub fn fit_breadcrumb(crumbs: &[String], max_width: usize) -> String {
    if crumbs.is_empty() || max_width == 0 {
        return String::new();
    }
    let full = crumbs.join(SEPARATOR);
    if full.width() <= max_width {
        return full;
    }
    for skip in 1..crumbs.len() {
        let candidate = format!("{ELLIPSIS}{SEPARATOR}{}", crumbs[skip..].join(SEPARATOR));
        if candidate.width() <= max_width {
            return candidate;
        }
    }
    truncate_to_width(&crumbs[crumbs.len() - 1], max_width)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    let budget = max_width.saturating_sub(ELLIPSIS.width());
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str(ELLIPSIS);
    out
}
