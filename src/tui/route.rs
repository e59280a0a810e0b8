//! # Demo Routes
//!
//! The route type the terminal shell navigates with. The core never looks
//! inside it; it only compares and clones.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemoRoute {
    Home,
    Detail(String),
    Profile,
    Settings,
}

impl DemoRoute {
    pub fn detail(id: impl Into<String>) -> Self {
        DemoRoute::Detail(id.into())
    }
}

impl fmt::Display for DemoRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoRoute::Home => write!(f, "Home"),
            DemoRoute::Detail(id) => write!(f, "Detail {id}"),
            DemoRoute::Profile => write!(f, "Profile"),
            DemoRoute::Settings => write!(f, "Settings"),
        }
    }
}

/// The fixed path the `d` key adopts, standing in for a resolved deep link.
pub fn sample_deep_link() -> Vec<DemoRoute> {
    vec![DemoRoute::Home, DemoRoute::detail("42"), DemoRoute::Profile]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(DemoRoute::Home.to_string(), "Home");
        assert_eq!(DemoRoute::detail("7").to_string(), "Detail 7");
    }

    #[test]
    fn test_sample_deep_link_ends_on_profile() {
        assert_eq!(sample_deep_link().last(), Some(&DemoRoute::Profile));
    }
}
