//! The canonical tab collection.
//!
//! `TabRegistry` owns the ordered tab list and the single active pointer,
//! and exposes the primitive mutations the policy layer composes. No
//! primitive can break the two structural invariants: exactly one home tab
//! exists and is never removed, and the active pointer always references a
//! present tab.

use super::{NavigationSource, Tab, TabId};
use opsdesk_pages::TabDescriptor;
use std::time::Instant;

/// Ordered tab collection plus the active pointer.
pub struct TabRegistry {
    /// All tabs, in strip order
    tabs: Vec<Tab>,
    /// Currently active tab ID; always present in `tabs`
    active_tab_id: TabId,
    /// Counter for generating unique tab IDs
    next_tab_id: TabId,
    /// Counter for access stamps (total order over activations)
    next_access_stamp: u64,
}

impl TabRegistry {
    /// Create a registry holding the permanent home tab, active.
    pub fn new() -> Self {
        let mut registry = Self {
            tabs: Vec::new(),
            active_tab_id: 0,
            next_tab_id: 1,
            next_access_stamp: 1,
        };

        let id = registry.issue_id();
        let stamp = registry.issue_stamp();
        let mut home = Tab::from_descriptor(
            id,
            TabDescriptor::dashboard(),
            NavigationSource::Sidebar,
            false,
            stamp,
        );
        home.is_home = true;
        registry.tabs.push(home);
        registry.active_tab_id = id;
        registry
    }

    pub(crate) fn issue_id(&mut self) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        id
    }

    pub(crate) fn issue_stamp(&mut self) -> u64 {
        let stamp = self.next_access_stamp;
        self.next_access_stamp += 1;
        stamp
    }

    /// Insert a tab and make it active.
    ///
    /// Rejected as a no-op if a tab with the same id is already present or
    /// the tab claims to be a second home entry.
    pub fn insert(&mut self, tab: Tab) -> bool {
        if tab.is_home && self.tabs.iter().any(|t| t.is_home) {
            log::warn!("Rejected insert of a second home tab");
            return false;
        }
        if self.tabs.iter().any(|t| t.id == tab.id) {
            log::warn!("Rejected insert of duplicate tab id {}", tab.id);
            return false;
        }

        let id = tab.id;
        self.tabs.push(tab);
        self.set_active(id);
        log::info!("Inserted tab {} (total: {})", id, self.tabs.len());
        true
    }

    /// Mutate a tab's fields in place, identity preserved.
    ///
    /// The id and home flag are restored after the closure runs so no
    /// caller can forge a second home tab or re-identify an entry through
    /// this primitive. Returns `false` for unknown ids.
    pub fn replace(&mut self, id: TabId, mutate: impl FnOnce(&mut Tab)) -> bool {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        let keep_home = tab.is_home;
        mutate(tab);
        tab.id = id;
        tab.is_home = keep_home;
        true
    }

    /// Remove a tab by id.
    ///
    /// The home tab is never removed (no-op, returns `false`). If the
    /// removed tab was active, activation re-targets the most recently
    /// accessed survivor, defaulting to the home tab.
    pub fn remove(&mut self, id: TabId) -> bool {
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            return false;
        };
        if self.tabs[index].is_home {
            log::warn!("Rejected removal of the home tab");
            return false;
        }

        self.tabs.remove(index);
        log::info!("Removed tab {} (total: {})", id, self.tabs.len());

        if self.active_tab_id == id {
            let fallback = self
                .tabs
                .iter()
                .max_by_key(|t| t.access_stamp)
                .map(|t| t.id)
                .or_else(|| self.home_tab_id());
            if let Some(next) = fallback {
                self.set_active(next);
            }
        }
        true
    }

    /// Make a tab active, stamping its access time.
    ///
    /// Returns `false` for unknown ids (active pointer unchanged).
    pub fn set_active(&mut self, id: TabId) -> bool {
        let stamp = self.issue_stamp();
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        tab.last_accessed_at = Instant::now();
        tab.access_stamp = stamp;
        self.active_tab_id = id;
        log::debug!("Activated tab {}", id);
        true
    }

    /// Get a tab by ID
    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// All tabs, in strip order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// The active tab ID
    pub fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    /// The active tab
    pub fn active_tab(&self) -> Option<&Tab> {
        self.get(self.active_tab_id)
    }

    /// Total number of tabs
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Number of temporary tabs
    pub fn temporary_tabs_count(&self) -> usize {
        self.tabs.iter().filter(|t| t.is_temporary).count()
    }

    /// The permanent home tab's id
    pub fn home_tab_id(&self) -> Option<TabId> {
        self.tabs.iter().find(|t| t.is_home).map(|t| t.id)
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}
