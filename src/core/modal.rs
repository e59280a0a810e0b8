//! # Modal Slot
//!
//! Holds at most one presented modal route. Independent of the route stack:
//! nothing in here looks at, or is looked at by, stack operations.

use serde::{Deserialize, Serialize};

use crate::core::route::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalSlot<R> {
    presented: Option<R>,
}

impl<R> Default for ModalSlot<R> {
    fn default() -> Self {
        Self { presented: None }
    }
}

impl<R: Route> ModalSlot<R> {
    pub fn get(&self) -> Option<&R> {
        self.presented.as_ref()
    }

    pub fn is_presented(&self) -> bool {
        self.presented.is_some()
    }

    /// Presents `route`, replacing whatever was shown. Returns false only
    /// when the same route was already presented.
    pub fn present(&mut self, route: R) -> bool {
        if self.presented.as_ref() == Some(&route) {
            return false;
        }
        self.presented = Some(route);
        true
    }

    pub fn dismiss(&mut self) -> bool {
        self.presented.take().is_some()
    }

    pub(crate) fn set(&mut self, presented: Option<R>) {
        self.presented = presented;
    }
}
