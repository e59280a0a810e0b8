//! # Navigation Controller
//!
//! The single source of truth for one navigation scope. Owns a
//! `NavigationState`, applies actions through `update()`, and tells
//! observers when the visible state changed.
//!
//! ```text
//! caller ──push/pop/...──→ dispatch(Action) ──→ update() ──→ Effect
//!                                                              │
//!                                      Changed: version += 1, notify observers
//!                                      Unchanged: nothing
//! ```
//!
//! ## Observers
//!
//! `subscribe()` returns a [`Subscription`]. The controller only keeps a
//! weak reference to the callback; dropping the subscription is how you
//! unsubscribe. Dead entries are pruned lazily during the next
//! notification. Observers run in registration order.
//!
//! Callbacks get `&NavigationState` and cannot reach back into the
//! controller while it is notifying. A rendering layer that wants to answer
//! a change with another mutation records it and dispatches afterward.
//!
//! ## Threading
//!
//! Observers are held in `Rc`, so the controller is `!Send`: it lives on
//! whatever thread drives the UI, and calls from elsewhere have to be
//! marshalled there first.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::core::action::{Action, Effect, update};
use crate::core::route::Route;
use crate::core::state::NavigationState;

type Callback<R> = RefCell<Box<dyn FnMut(&NavigationState<R>)>>;

/// Keeps an observer registered. Drop it (or call `unsubscribe`) to stop
/// receiving notifications.
#[must_use = "dropping a Subscription immediately unsubscribes the observer"]
pub struct Subscription {
    _callback: Rc<dyn Any>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

pub struct NavigationController<R> {
    state: NavigationState<R>,
    version: u64,
    observers: Vec<Weak<Callback<R>>>,
}

impl<R> Default for NavigationController<R> {
    fn default() -> Self {
        Self {
            state: NavigationState::default(),
            version: 0,
            observers: Vec::new(),
        }
    }
}

impl<R: Route> fmt::Debug for NavigationController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state)
            .field("version", &self.version)
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl<R: Route> NavigationController<R> {
    /// Empty route list, no modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing state (e.g. one restored from disk) without
    /// notifying anyone.
    pub fn with_state(state: NavigationState<R>) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------------
    // Mutation API
    // ------------------------------------------------------------------------

    /// Applies `action`. Observers are notified once if the visible state
    /// changed and not at all otherwise.
    pub fn dispatch(&mut self, action: Action<R>) -> Effect {
        let name = action.name();
        let effect = update(&mut self.state, action);
        debug!(
            "nav {}: {:?} (depth={}, modal={})",
            name,
            effect,
            self.state.depth(),
            self.state.presented_modal().is_some()
        );
        if effect.is_changed() {
            self.version += 1;
            self.notify();
        }
        effect
    }

    pub fn push(&mut self, route: R) {
        self.dispatch(Action::Push(route));
    }

    /// Removes the top route. Does nothing at the root.
    pub fn pop(&mut self) {
        self.dispatch(Action::Pop);
    }

    /// Same result as calling `pop()` `count` times, with a single
    /// notification. Used to reconcile multi-screen back gestures.
    pub fn pop_count(&mut self, count: usize) {
        self.dispatch(Action::PopCount(count));
    }

    pub fn pop_to_root(&mut self) {
        self.dispatch(Action::PopToRoot);
    }

    /// Truncates after the first occurrence of `route`. Does nothing if the
    /// route isn't on the stack.
    pub fn pop_to(&mut self, route: &R) {
        self.dispatch(Action::PopTo(route.clone()));
    }

    /// Adopts `routes` as the whole stack; the last one becomes the visible
    /// top. The modal is left alone.
    pub fn set_path(&mut self, routes: impl IntoIterator<Item = R>) {
        self.dispatch(Action::SetPath(routes.into_iter().collect()));
    }

    pub fn present_modal(&mut self, route: R) {
        self.dispatch(Action::PresentModal(route));
    }

    pub fn dismiss_modal(&mut self) {
        self.dispatch(Action::DismissModal);
    }

    /// Replaces both the route list and the modal in one step.
    pub fn restore(&mut self, state: NavigationState<R>) {
        self.dispatch(Action::Restore(state));
    }

    // ------------------------------------------------------------------------
    // Read API
    // ------------------------------------------------------------------------

    /// Owned copy of the route list. Later mutations don't show up in it.
    pub fn current_path(&self) -> Vec<R> {
        self.state.routes().to_vec()
    }

    pub fn presented_modal(&self) -> Option<&R> {
        self.state.presented_modal()
    }

    pub fn snapshot(&self) -> NavigationState<R> {
        self.state.clone()
    }

    pub fn state(&self) -> &NavigationState<R> {
        &self.state
    }

    pub fn top(&self) -> Option<&R> {
        self.state.top()
    }

    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    pub fn is_at_root(&self) -> bool {
        self.state.is_at_root()
    }

    /// Bumped once per effective mutation. Poll this instead of subscribing
    /// if that suits the caller better.
    pub fn version(&self) -> u64 {
        self.version
    }

    // ------------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------------

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&NavigationState<R>) + 'static,
        R: 'static,
    {
        let boxed: Box<dyn FnMut(&NavigationState<R>)> = Box::new(callback);
        let callback: Rc<Callback<R>> = Rc::new(RefCell::new(boxed));
        self.observers.push(Rc::downgrade(&callback));
        trace!("nav observer registered ({} total)", self.observers.len());
        Subscription {
            _callback: callback,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    fn notify(&mut self) {
        let state = &self.state;
        self.observers.retain(|weak| match weak.upgrade() {
            Some(callback) => {
                if let Ok(mut callback) = callback.try_borrow_mut() {
                    (&mut *callback)(state);
                }
                true
            }
            None => false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestRoute::*, recorder};
    use std::cell::Cell;

    #[test]
    fn test_new_controller_is_empty() {
        let nav: NavigationController<crate::test_support::TestRoute> =
            NavigationController::new();
        assert!(nav.is_at_root());
        assert_eq!(nav.presented_modal(), None);
        assert_eq!(nav.version(), 0);
        assert_eq!(nav.observer_count(), 0);
    }

    #[test]
    fn test_effective_mutation_notifies_once() {
        let mut nav = NavigationController::new();
        let (seen, _sub) = recorder(&mut nav);

        nav.push(Home);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].routes(), &[Home]);
        assert_eq!(nav.version(), 1);
    }

    #[test]
    fn test_noops_do_not_notify() {
        let mut nav = NavigationController::new();
        let (seen, _sub) = recorder(&mut nav);

        nav.pop();
        nav.pop_to_root();
        nav.pop_to(&Profile);
        nav.dismiss_modal();
        nav.set_path(Vec::new());
        nav.pop_count(4);

        assert!(seen.borrow().is_empty());
        assert_eq!(nav.version(), 0);
    }

    #[test]
    fn test_pop_count_notifies_once() {
        let mut nav = NavigationController::new();
        nav.set_path([Home, Profile, Settings]);
        let (seen, _sub) = recorder(&mut nav);

        nav.pop_count(2);
        assert_eq!(nav.current_path(), vec![Home]);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let mut nav = NavigationController::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let order = Rc::clone(&order);
            nav.subscribe(move |_| order.borrow_mut().push("first"))
        };
        let second = {
            let order = Rc::clone(&order);
            nav.subscribe(move |_| order.borrow_mut().push("second"))
        };

        nav.push(Home);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
        drop((first, second));
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let mut nav = NavigationController::new();
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let hits = Rc::clone(&hits);
            nav.subscribe(move |_| hits.set(hits.get() + 1))
        };

        nav.push(Home);
        sub.unsubscribe();
        nav.push(Profile);

        assert_eq!(hits.get(), 1);
        assert_eq!(nav.observer_count(), 0);
    }

    #[test]
    fn test_with_state_does_not_bump_version() {
        let nav = NavigationController::with_state(NavigationState::with(
            vec![Home, Profile],
            Some(Settings),
        ));
        assert_eq!(nav.version(), 0);
        assert_eq!(nav.top(), Some(&Profile));
        assert_eq!(nav.presented_modal(), Some(&Settings));
    }

    #[test]
    fn test_restore_notifies_only_on_difference() {
        let mut nav = NavigationController::new();
        nav.push(Home);
        let saved = nav.snapshot();
        let (seen, _sub) = recorder(&mut nav);

        nav.restore(saved.clone());
        assert!(seen.borrow().is_empty());

        nav.push(Profile);
        nav.present_modal(Settings);
        nav.restore(saved.clone());
        assert_eq!(nav.snapshot(), saved);
        assert_eq!(seen.borrow().len(), 3);
    }
}
