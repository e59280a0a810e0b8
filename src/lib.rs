//! Waypoint library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{Action, Effect, NavigationController, NavigationState, Route, Subscription};
