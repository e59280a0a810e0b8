//! # Route Resolver
//!
//! Maps a route value to something drawable. The resolver is injected into
//! the rendering layer; the navigation controller never calls it.
//!
//! `None` stands for the root screen, which sits under every pushed route
//! and shows when the stack is empty.

use crate::core::route::Route;
use crate::tui::route::DemoRoute;

/// Everything the shell needs to draw one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen<R> {
    pub title: String,
    pub body: String,
    /// Outgoing routes the user can open from here.
    pub links: Vec<R>,
}

pub trait RouteResolver<R: Route> {
    fn resolve(&self, route: Option<&R>) -> Screen<R>;
}

/// Resolver for the demo routes.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoResolver;

impl RouteResolver<DemoRoute> for DemoResolver {
    fn resolve(&self, route: Option<&DemoRoute>) -> Screen<DemoRoute> {
        match route {
            None => Screen {
                title: "Waypoint".to_string(),
                body: "Root screen. Nothing has been pushed in this tab yet.".to_string(),
                links: vec![DemoRoute::Home, DemoRoute::Profile],
            },
            Some(DemoRoute::Home) => Screen {
                title: "Home".to_string(),
                body: "Pick an item to open its detail screen.".to_string(),
                links: vec![
                    DemoRoute::detail("1"),
                    DemoRoute::detail("2"),
                    DemoRoute::Profile,
                ],
            },
            Some(DemoRoute::Detail(id)) => Screen {
                title: format!("Detail {id}"),
                body: format!("Item {id}. Related items can be opened on top."),
                links: vec![
                    DemoRoute::detail(next_id(id)),
                    DemoRoute::Home,
                    DemoRoute::Profile,
                ],
            },
            Some(DemoRoute::Profile) => Screen {
                title: "Profile".to_string(),
                body: "Signed in as guest.".to_string(),
                links: vec![DemoRoute::Settings, DemoRoute::Home],
            },
            Some(DemoRoute::Settings) => Screen {
                title: "Settings".to_string(),
                body: "Nothing to configure here. Esc closes.".to_string(),
                links: Vec::new(),
            },
        }
    }
}

/// Numeric ids count up; anything else gets a suffix.
fn next_id(id: &str) -> String {
    match id.parse::<u64>() {
        Ok(n) => n.saturating_add(1).to_string(),
        Err(_) => format!("{id}+"),
    }
}
