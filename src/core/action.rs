//! # Actions
//!
//! Every navigation transition is an `Action`. User taps a link? That's
//! `Action::Push(route)`. Platform reports a two-screen back swipe? That's
//! `Action::PopCount(2)`. A deep link arrives? `Action::SetPath(routes)`.
//!
//! The `update()` function applies an action to the state and reports
//! whether anything visible changed. No side effects here: no observers,
//! no logging sinks, no I/O. The controller does the notifying.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! `update()` is total. Actions whose precondition doesn't hold (popping
//! an empty stack, popping to a route that isn't there, dismissing an
//! absent modal) come back as `Effect::Unchanged`, never as an error.

use crate::core::route::Route;
use crate::core::state::NavigationState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action<R> {
    Push(R),
    Pop,
    /// Pop up to `n` screens at once, e.g. from a multi-screen back gesture.
    PopCount(usize),
    PopToRoot,
    /// Truncate after the first occurrence of the route.
    PopTo(R),
    /// Replace the route list wholesale (deep link).
    SetPath(Vec<R>),
    PresentModal(R),
    DismissModal,
    /// Replace both axes at once.
    Restore(NavigationState<R>),
}

impl<R> Action<R> {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Push(_) => "push",
            Action::Pop => "pop",
            Action::PopCount(_) => "pop_count",
            Action::PopToRoot => "pop_to_root",
            Action::PopTo(_) => "pop_to",
            Action::SetPath(_) => "set_path",
            Action::PresentModal(_) => "present_modal",
            Action::DismissModal => "dismiss_modal",
            Action::Restore(_) => "restore",
        }
    }
}

/// What the caller should do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Visible state differs; observers need to hear about it.
    Changed,
    /// Accepted, nothing to report.
    Unchanged,
}

impl Effect {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Effect::Changed
        } else {
            Effect::Unchanged
        }
    }

    pub fn is_changed(self) -> bool {
        self == Effect::Changed
    }
}

pub fn update<R: Route>(state: &mut NavigationState<R>, action: Action<R>) -> Effect {
    let changed = match action {
        Action::Push(route) => state.routes.push(route),
        Action::Pop => state.routes.pop(),
        Action::PopCount(count) => state.routes.pop_count(count),
        Action::PopToRoot => state.routes.clear(),
        Action::PopTo(route) => state.routes.pop_to(&route),
        Action::SetPath(routes) => state.routes.replace(routes),
        Action::PresentModal(route) => state.modal.present(route),
        Action::DismissModal => state.modal.dismiss(),
        Action::Restore(next) => {
            if *state == next {
                false
            } else {
                *state = next;
                true
            }
        }
    };
    Effect::from_changed(changed)
}
