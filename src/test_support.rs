//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::controller::{NavigationController, Subscription};
use crate::core::state::NavigationState;

/// A small route type with one parameterised variant, enough to tell
/// equal-looking routes apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestRoute {
    Home,
    Detail(String),
    Profile,
    Settings,
}

/// Subscribes a recorder that keeps a copy of every notified state.
pub fn recorder(
    nav: &mut NavigationController<TestRoute>,
) -> (Rc<RefCell<Vec<NavigationState<TestRoute>>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let sub = nav.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    (seen, sub)
}
