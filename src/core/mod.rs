//! # Core Navigation Logic
//!
//! This module contains Waypoint's navigation state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (routes+modal) │
//!                    │  • Action (transitions) │
//!                    │  • update() (reducer)   │
//!                    │  • Controller (notify)  │
//!                    │                         │
//!                    │  No I/O in the reducer. │
//!                    └───────────┬─────────────┘
//!                                │ subscribe / current_path
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ Deep links │      │  Restore   │
//!     │  Adapter   │      │ (set_path) │      │ (persist)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: The `Route` marker trait
//! - [`stack`] / [`modal`]: The two independent axes of navigation state
//! - [`state`]: `NavigationState`, both axes together
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`controller`]: `NavigationController`, the observable owner of a state
//! - [`tabs`]: One controller per tab
//! - [`persist`]: Snapshot save/load
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod controller;
pub mod modal;
pub mod persist;
pub mod route;
pub mod stack;
pub mod state;
pub mod tabs;

pub use action::{Action, Effect, update};
pub use controller::{NavigationController, Subscription};
pub use route::Route;
pub use state::NavigationState;
pub use tabs::{Tabs, TabsSnapshot};
