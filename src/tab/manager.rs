//! The policy layer over the tab registry.
//!
//! `TabManager` owns the registry and applies the open policy on every
//! navigation request: depending on who asked (sidebar link, in-content
//! click, automated action) and on the active tab's protection state, the
//! request either reuses the active tab's slot or inserts a new tab. It
//! also hosts the pin operation, the direct field mutations, and the
//! change-notification hook the UI chrome re-renders from.
//!
//! The eviction sweep and the close guard live in sibling files as further
//! `impl TabManager` blocks.

use super::{NavigationSource, OpenDisposition, Tab, TabId, TabRegistry};
use opsdesk_pages::TabDescriptor;

/// A completed state change, delivered to subscribers after the fact.
///
/// One event per mutation, in mutation order; activation changes implied by
/// another event (a newly opened tab is always active) are not repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// A new tab was inserted and activated
    Opened(TabId),
    /// The tab navigated in place: same identity, new screen
    Navigated(TabId),
    /// The active pointer moved to this tab
    Activated(TabId),
    /// The tab was explicitly closed
    Closed(TabId),
    /// The tab was removed by the eviction sweep
    Evicted(TabId),
    /// The tab was pinned
    Pinned(TabId),
    /// A field mutation (title, dirty flag) changed the tab
    Updated(TabId),
}

type Subscriber = Box<dyn FnMut(&TabEvent)>;

/// Coordinates the workspace's tabs.
///
/// Single-threaded and synchronous: operations run to completion in
/// invocation order, and subscribers observe every intermediate state.
pub struct TabManager {
    pub(crate) registry: TabRegistry,
    subscribers: Vec<Subscriber>,
}

impl TabManager {
    /// Create a manager whose registry holds the active home tab.
    pub fn new() -> Self {
        Self {
            registry: TabRegistry::new(),
            subscribers: Vec::new(),
        }
    }

    /// Register a callback invoked after each completed mutation.
    ///
    /// The manager is passed explicitly to anything that mutates it, so
    /// re-render wiring goes through this hook rather than an ambient
    /// singleton.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&TabEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub(crate) fn notify(&mut self, event: TabEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    /// Open a screen, reusing or inserting a tab per the open policy.
    ///
    /// The second parameter accepts either `OpenOptions` or the legacy bare
    /// boolean ("pin immediately"); both normalize before any rule runs.
    /// Returns the id of the tab now showing the descriptor.
    ///
    /// Policy, evaluated against the current active tab:
    /// - sidebar or user navigation reuses the active tab's slot when that
    ///   tab is temporary and clean; otherwise a new temporary tab is
    ///   inserted so pinned position and unsaved work survive
    /// - the explicit open-in-new-tab gesture (`force_new`) always inserts
    /// - automated (`Llm`) navigation always inserts: automation must never
    ///   overwrite a human's in-progress context by reusing a slot
    pub fn open_tab(
        &mut self,
        descriptor: TabDescriptor,
        disposition: impl Into<OpenDisposition>,
    ) -> TabId {
        let resolved = disposition.into().normalize();

        let reuse_active = !resolved.force_new
            && resolved.source != NavigationSource::Llm
            && self
                .registry
                .active_tab()
                .is_some_and(|tab| tab.is_replaceable());

        let id = if reuse_active {
            let id = self.registry.active_tab_id();
            self.registry.replace(id, |tab| {
                tab.apply_descriptor(&descriptor, resolved.source);
                tab.is_temporary = resolved.temporary;
            });
            // Re-stamp access time; the tab is already active
            self.registry.set_active(id);
            log::info!("Tab {} navigated in place to {}", id, self.path_of(id));
            self.notify(TabEvent::Navigated(id));
            id
        } else {
            let id = self.registry.issue_id();
            let stamp = self.registry.issue_stamp();
            let tab =
                Tab::from_descriptor(id, descriptor, resolved.source, resolved.temporary, stamp);
            let path = tab.path.clone();
            self.registry.insert(tab);
            log::info!(
                "Opened tab {} at {} (total: {})",
                id,
                path,
                self.registry.tab_count()
            );
            self.notify(TabEvent::Opened(id));
            id
        };

        self.cleanup_temporary_tabs();
        id
    }

    /// Pin a tab so replacement and eviction leave it alone.
    ///
    /// Idempotent: pinning an already-pinned or unknown tab is a no-op
    /// returning `false`. Never inserts or removes tabs.
    pub fn pin_tab(&mut self, id: TabId) -> bool {
        match self.registry.get(id) {
            Some(tab) if tab.is_temporary => {}
            Some(_) => return false,
            None => {
                log::debug!("pin_tab: unknown tab {}", id);
                return false;
            }
        }
        self.registry.replace(id, |tab| tab.is_temporary = false);
        log::info!("Pinned tab {}", id);
        self.notify(TabEvent::Pinned(id));
        true
    }

    /// Alias for `pin_tab`, kept for callers of the older name.
    pub fn make_tab_permanent(&mut self, id: TabId) -> bool {
        self.pin_tab(id)
    }

    /// Flag or clear unsaved input on a tab.
    pub fn set_tab_dirty(&mut self, id: TabId, dirty: bool) -> bool {
        if !self.registry.replace(id, |tab| tab.is_dirty = dirty) {
            return false;
        }
        self.notify(TabEvent::Updated(id));
        true
    }

    /// Update a tab's display title (e.g. once the entity's name loads).
    pub fn update_tab_title(&mut self, id: TabId, title: &str) -> bool {
        if !self.registry.replace(id, |tab| tab.title = title.to_string()) {
            return false;
        }
        self.notify(TabEvent::Updated(id));
        true
    }

    /// Switch to a tab, stamping its access time.
    pub fn set_active_tab(&mut self, id: TabId) -> bool {
        if !self.registry.set_active(id) {
            return false;
        }
        self.notify(TabEvent::Activated(id));
        true
    }

    /// Number of temporary tabs currently open.
    pub fn temporary_tabs_count(&self) -> usize {
        self.registry.temporary_tabs_count()
    }

    /// Read access to the underlying registry, for UI chrome rendering.
    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// All tabs, in strip order.
    pub fn tabs(&self) -> &[Tab] {
        self.registry.tabs()
    }

    /// Get a tab by ID.
    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.registry.get(id)
    }

    /// The active tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.registry.active_tab()
    }

    /// The active tab ID.
    pub fn active_tab_id(&self) -> TabId {
        self.registry.active_tab_id()
    }

    /// Total number of tabs.
    pub fn tab_count(&self) -> usize {
        self.registry.tab_count()
    }

    fn path_of(&self, id: TabId) -> String {
        self.registry
            .get(id)
            .map(|tab| tab.path.clone())
            .unwrap_or_default()
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}
