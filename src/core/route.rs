//! # Routes
//!
//! A route is whatever the application uses to name a screen. The core
//! only ever compares routes for equality and clones them into snapshots,
//! so any `Clone + PartialEq + Debug` type qualifies automatically.
//!
//! ```rust,ignore
//! #[derive(Clone, Debug, PartialEq)]
//! enum AppRoute {
//!     Home,
//!     Detail(String),
//! }
//!
//! let mut nav: NavigationController<AppRoute> = NavigationController::new();
//! nav.push(AppRoute::Detail("42".into()));
//! ```

use std::fmt::Debug;

/// Marker trait for route values.
///
/// Routes should be:
/// - Comparable (PartialEq, used by `pop_to` and change detection)
/// - Cheap to clone (snapshots are value copies)
/// - Debug-printable (every dispatched action is logged)
pub trait Route: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> Route for T {}
