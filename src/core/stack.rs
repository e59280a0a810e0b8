//! # Route Stack
//!
//! The ordered list of pushed routes. Index 0 sits directly above the root
//! screen, the last element is the visible top. An empty stack means the
//! root screen is showing.
//!
//! Every operation returns `true` when the stack actually changed, so the
//! reducer can decide whether observers need to hear about it. Nothing here
//! ever fails: popping an empty stack or popping to a route that isn't
//! there are both accepted and do nothing.

use serde::{Deserialize, Serialize};

use crate::core::route::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteStack<R> {
    routes: Vec<R>,
}

impl<R> Default for RouteStack<R> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<R: Route> RouteStack<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_routes(routes: Vec<R>) -> Self {
        Self { routes }
    }

    pub fn as_slice(&self) -> &[R] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn top(&self) -> Option<&R> {
        self.routes.last()
    }

    /// Position of the first (lowest-index) route equal to `route`.
    pub fn position(&self, route: &R) -> Option<usize> {
        self.routes.iter().position(|r| r == route)
    }

    pub fn push(&mut self, route: R) -> bool {
        self.routes.push(route);
        true
    }

    pub fn pop(&mut self) -> bool {
        self.routes.pop().is_some()
    }

    /// Pops up to `count` routes. Stops at the root instead of failing.
    pub fn pop_count(&mut self, count: usize) -> bool {
        let keep = self.routes.len().saturating_sub(count);
        self.truncate(keep)
    }

    pub fn clear(&mut self) -> bool {
        self.truncate(0)
    }

    /// Truncates after the first occurrence of `route`, keeping it as the
    /// new top. A route that isn't on the stack leaves it untouched.
    pub fn pop_to(&mut self, route: &R) -> bool {
        match self.position(route) {
            Some(index) => self.truncate(index + 1),
            None => false,
        }
    }

    /// Replaces the whole stack. Returns false when `routes` equals the
    /// current content.
    pub fn replace(&mut self, routes: Vec<R>) -> bool {
        if self.routes == routes {
            return false;
        }
        self.routes = routes;
        true
    }

    fn truncate(&mut self, len: usize) -> bool {
        if len >= self.routes.len() {
            return false;
        }
        self.routes.truncate(len);
        true
    }
}
