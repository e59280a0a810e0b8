//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: tabs plus a breadcrumb of the active path
//! - `ModalOverlay`: the presented modal, drawn over everything
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ScreenView`: the visible screen with a selectable list of links
//!
//! Components receive data as props, never by reaching into the
//! controller. The shell derives those props from `current_path()` and
//! `presented_modal()` through the injected resolver.

pub mod modal_overlay;
pub mod screen_view;
pub mod title_bar;

pub use modal_overlay::ModalOverlay;
pub use screen_view::{ScreenEvent, ScreenView, ScreenViewState};
pub use title_bar::TitleBar;
