//! # Navigation State
//!
//! The full visible state of one navigation scope. Domain data only, no
//! observers and no rendering concerns.
//!
//! ```text
//! NavigationState
//! ├── routes: RouteStack<R>    // pushed screens, last = visible top
//! └── modal: ModalSlot<R>      // at most one overlay
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The two axes never affect each other.

use serde::{Deserialize, Serialize};

use crate::core::modal::ModalSlot;
use crate::core::route::Route;
use crate::core::stack::RouteStack;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub struct NavigationState<R> {
    #[serde(default)]
    pub(crate) routes: RouteStack<R>,
    #[serde(default, rename = "presented_modal")]
    pub(crate) modal: ModalSlot<R>,
}

impl<R> Default for NavigationState<R> {
    fn default() -> Self {
        Self {
            routes: RouteStack::default(),
            modal: ModalSlot::default(),
        }
    }
}

impl<R: Route> NavigationState<R> {
    /// Empty route list, no modal: the root screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state directly, e.g. when restoring from storage.
    pub fn with(routes: Vec<R>, presented_modal: Option<R>) -> Self {
        let mut modal = ModalSlot::default();
        modal.set(presented_modal);
        Self {
            routes: RouteStack::from_routes(routes),
            modal,
        }
    }

    pub fn routes(&self) -> &[R] {
        self.routes.as_slice()
    }

    pub fn presented_modal(&self) -> Option<&R> {
        self.modal.get()
    }

    pub fn top(&self) -> Option<&R> {
        self.routes.top()
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestRoute;

    #[test]
    fn test_new_state_is_root_without_modal() {
        let state: NavigationState<TestRoute> = NavigationState::new();
        assert!(state.is_at_root());
        assert_eq!(state.depth(), 0);
        assert_eq!(state.top(), None);
        assert_eq!(state.presented_modal(), None);
    }

    #[test]
    fn test_with_builds_both_axes() {
        let state = NavigationState::with(
            vec![TestRoute::Home, TestRoute::Profile],
            Some(TestRoute::Settings),
        );
        assert_eq!(state.routes(), &[TestRoute::Home, TestRoute::Profile]);
        assert_eq!(state.top(), Some(&TestRoute::Profile));
        assert_eq!(state.presented_modal(), Some(&TestRoute::Settings));
    }

    #[test]
    fn test_json_shape() {
        let state = NavigationState::with(
            vec![TestRoute::Home, TestRoute::Detail("1".to_string())],
            None,
        );
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "routes": ["Home", {"Detail": "1"}],
                "presented_modal": null,
            })
        );
        let back: NavigationState<TestRoute> = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let state: NavigationState<TestRoute> = serde_json::from_str("{}").unwrap();
        assert_eq!(state, NavigationState::new());
    }
}
