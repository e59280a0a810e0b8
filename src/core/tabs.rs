//! # Tabs
//!
//! One independent navigation scope per tab. Every tab owns its own
//! `NavigationController`, so pushing in one tab never shows up in another.
//! `Tabs` only adds "which tab is selected" on top.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::controller::NavigationController;
use crate::core::route::Route;
use crate::core::state::NavigationState;

/// Serializable picture of every tab plus the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize, R: Serialize",
    deserialize = "K: Deserialize<'de>, R: Deserialize<'de>"
))]
pub struct TabsSnapshot<K, R> {
    pub selected: K,
    pub tabs: Vec<(K, NavigationState<R>)>,
}

pub struct Tabs<K, R> {
    tabs: Vec<(K, NavigationController<R>)>,
    selected: usize,
}

impl<K: Clone + PartialEq, R: Route> Tabs<K, R> {
    /// Creates one empty scope per key. Duplicate keys are dropped, keeping
    /// the first. Returns `None` if no keys are given.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Option<Self> {
        let mut tabs: Vec<(K, NavigationController<R>)> = Vec::new();
        for key in keys {
            if tabs.iter().all(|(k, _)| *k != key) {
                tabs.push((key, NavigationController::new()));
            }
        }
        if tabs.is_empty() {
            return None;
        }
        Some(Self { tabs, selected: 0 })
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.tabs.iter().map(|(k, _)| k)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_key(&self) -> &K {
        &self.tabs[self.selected].0
    }

    pub fn active(&self) -> &NavigationController<R> {
        &self.tabs[self.selected].1
    }

    pub fn active_mut(&mut self) -> &mut NavigationController<R> {
        &mut self.tabs[self.selected].1
    }

    pub fn controllers_mut(&mut self) -> impl Iterator<Item = &mut NavigationController<R>> {
        self.tabs.iter_mut().map(|(_, nav)| nav)
    }

    pub fn get(&self, key: &K) -> Option<&NavigationController<R>> {
        self.tabs.iter().find(|(k, _)| k == key).map(|(_, nav)| nav)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut NavigationController<R>> {
        self.tabs
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, nav)| nav)
    }

    /// Selects the tab with `key`. Unknown keys leave the selection alone.
    pub fn select(&mut self, key: &K) -> bool {
        match self.tabs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Moves to the next tab, wrapping around.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.tabs.len();
        debug!("tab selected: {}", self.selected);
    }

    pub fn snapshot(&self) -> TabsSnapshot<K, R> {
        TabsSnapshot {
            selected: self.selected_key().clone(),
            tabs: self
                .tabs
                .iter()
                .map(|(k, nav)| (k.clone(), nav.snapshot()))
                .collect(),
        }
    }

    /// Restores every tab whose key still exists. Saved tabs that no longer
    /// exist are skipped, and so is a saved selection that no longer exists.
    pub fn restore(&mut self, snapshot: TabsSnapshot<K, R>) {
        let mut restored = 0usize;
        for (key, state) in snapshot.tabs {
            if let Some(nav) = self.get_mut(&key) {
                nav.restore(state);
                restored += 1;
            }
        }
        self.select(&snapshot.selected);
        info!("Restored {} of {} tabs", restored, self.tabs.len());
    }
}
