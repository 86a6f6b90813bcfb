//! Tab lifecycle management for the multi-document workspace.
//!
//! This module provides the core tab infrastructure:
//! - `Tab`: a single navigation entry with its protection state
//! - `TabRegistry`: the canonical ordered collection plus the active pointer
//! - `TabManager`: the policy layer (open, pin, evict, close) over the registry
//! - `TabId`: unique identifier for each tab
//!
//! The manager is single-threaded and synchronous: every public operation
//! runs to completion in response to one UI event or one automated call,
//! and every intermediate state is observable by subscribers.

mod close_guard;
mod eviction;
mod manager;
mod registry;

pub use manager::{TabEvent, TabManager};
pub use registry::TabRegistry;

use opsdesk_pages::{PageKind, TabDescriptor};
use std::time::Instant;

// Re-export TabId from opsdesk-pages for shared access across crates
pub use opsdesk_pages::TabId;

/// Maximum number of temporary, non-dirty tabs kept at once.
///
/// Exceeding it triggers the eviction sweep after the insertion that
/// crossed the bound.
pub const TEMPORARY_TAB_CAP: usize = 5;

/// Who triggered a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSource {
    /// A fixed sidebar link
    Sidebar,
    /// An in-content interaction (row click, link, button)
    User,
    /// An automated or assistant-driven action
    Llm,
}

/// Options for `TabManager::open_tab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOptions {
    /// Who triggered the navigation
    pub source: NavigationSource,
    /// Explicit "open in new tab" gesture: always insert, never reuse the
    /// active tab
    pub force_new: bool,
}

impl OpenOptions {
    /// Navigation from the given source, reusing the active tab when policy
    /// allows.
    pub fn source(source: NavigationSource) -> Self {
        Self {
            source,
            force_new: false,
        }
    }

    /// Explicit open-in-new-tab gesture from the given source.
    pub fn force_new(source: NavigationSource) -> Self {
        Self {
            source,
            force_new: true,
        }
    }
}

/// The second parameter of `open_tab`: either the current options record or
/// the legacy bare boolean.
///
/// The legacy form means "pin this tab immediately" (`is_temporary =
/// !value`), not force-new. Both forms normalize to one canonical record at
/// this boundary so the dual shape never leaks into the decision logic.
#[derive(Debug, Clone, Copy)]
pub enum OpenDisposition {
    /// Current calling convention
    Options(OpenOptions),
    /// Legacy calling convention: `true` pins the resulting tab
    PinImmediately(bool),
}

impl From<OpenOptions> for OpenDisposition {
    fn from(options: OpenOptions) -> Self {
        OpenDisposition::Options(options)
    }
}

impl From<bool> for OpenDisposition {
    fn from(pin: bool) -> Self {
        OpenDisposition::PinImmediately(pin)
    }
}

/// Canonical form of an open request, produced from either calling
/// convention before any rule evaluation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedOpen {
    pub(crate) source: NavigationSource,
    pub(crate) force_new: bool,
    /// Initial pinned state of the resulting tab
    pub(crate) temporary: bool,
}

impl OpenDisposition {
    pub(crate) fn normalize(self) -> ResolvedOpen {
        match self {
            OpenDisposition::Options(options) => ResolvedOpen {
                source: options.source,
                force_new: options.force_new,
                temporary: true,
            },
            // Legacy callers predate navigation sources; they were all
            // in-content interactions.
            OpenDisposition::PinImmediately(pin) => ResolvedOpen {
                source: NavigationSource::User,
                force_new: false,
                temporary: !pin,
            },
        }
    }
}

/// A single navigation entry in the workspace.
#[derive(Debug, Clone)]
pub struct Tab {
    /// Unique identifier, stable for the tab's lifetime
    pub id: TabId,
    /// Screen category, drives icon/label lookup
    pub kind: PageKind,
    /// Logical address mirroring the external URL
    pub path: String,
    /// Display title; updated once the entity's real name loads
    pub title: String,
    /// Back-reference to the domain record, absent for list/creation tabs
    pub entity_id: Option<String>,
    /// Ephemeral tabs are subject to in-place replacement and eviction;
    /// pinned tabs persist until explicitly closed
    pub is_temporary: bool,
    /// Unsaved user input; never silently closed, replaced or evicted
    pub is_dirty: bool,
    /// The single permanent home entry; never removable, even explicitly
    pub is_home: bool,
    /// Navigation source that created or last navigated this tab
    pub opened_by: NavigationSource,
    /// Last time the tab became active
    pub last_accessed_at: Instant,
    /// Registry-issued monotonic stamp; the deterministic order behind
    /// eviction and close-fallback (wall clocks collide within one
    /// event-loop turn)
    pub(crate) access_stamp: u64,
}

impl Tab {
    pub(crate) fn from_descriptor(
        id: TabId,
        descriptor: TabDescriptor,
        opened_by: NavigationSource,
        temporary: bool,
        access_stamp: u64,
    ) -> Self {
        Self {
            id,
            kind: descriptor.kind,
            path: descriptor.path,
            title: descriptor.title,
            entity_id: descriptor.entity_id,
            is_temporary: temporary,
            is_dirty: false,
            is_home: false,
            opened_by,
            last_accessed_at: Instant::now(),
            access_stamp,
        }
    }

    /// Navigate this tab in place: same identity, new screen.
    pub(crate) fn apply_descriptor(
        &mut self,
        descriptor: &TabDescriptor,
        source: NavigationSource,
    ) {
        self.kind = descriptor.kind;
        self.path = descriptor.path.clone();
        self.title = descriptor.title.clone();
        self.entity_id = descriptor.entity_id.clone();
        self.opened_by = source;
    }

    /// Whether sidebar/user navigation may reuse this tab's slot (the
    /// in-place branch): temporary, not the home tab, and holding no
    /// unsaved input.
    pub(crate) fn is_replaceable(&self) -> bool {
        self.is_temporary && !self.is_home && !self.is_dirty
    }

    /// Whether the close guard refuses to remove this tab.
    pub fn is_close_protected(&self) -> bool {
        self.is_home || !self.is_temporary || self.is_dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdesk_pages::EntityFamily;

    #[test]
    fn options_form_normalizes_to_temporary() {
        let resolved =
            OpenDisposition::from(OpenOptions::source(NavigationSource::Sidebar)).normalize();
        assert_eq!(resolved.source, NavigationSource::Sidebar);
        assert!(!resolved.force_new);
        assert!(resolved.temporary);
    }

    #[test]
    fn force_new_survives_normalization() {
        let resolved =
            OpenDisposition::from(OpenOptions::force_new(NavigationSource::User)).normalize();
        assert!(resolved.force_new);
        assert!(resolved.temporary);
    }

    #[test]
    fn legacy_bool_pins_instead_of_forcing_new() {
        let pinned = OpenDisposition::from(true).normalize();
        assert_eq!(pinned.source, NavigationSource::User);
        assert!(!pinned.force_new);
        assert!(!pinned.temporary);

        let temporary = OpenDisposition::from(false).normalize();
        assert!(temporary.temporary);
    }

    #[test]
    fn replaceable_excludes_dirty_and_pinned() {
        let mut tab = Tab::from_descriptor(
            1,
            TabDescriptor::list(EntityFamily::Client),
            NavigationSource::User,
            true,
            1,
        );
        assert!(tab.is_replaceable());

        tab.is_dirty = true;
        assert!(!tab.is_replaceable());

        tab.is_dirty = false;
        tab.is_temporary = false;
        assert!(!tab.is_replaceable());
    }

    #[test]
    fn close_protection_covers_home_pinned_dirty() {
        let mut tab = Tab::from_descriptor(
            1,
            TabDescriptor::list(EntityFamily::Deal),
            NavigationSource::User,
            true,
            1,
        );
        assert!(!tab.is_close_protected());

        tab.is_dirty = true;
        assert!(tab.is_close_protected());
        tab.is_dirty = false;

        tab.is_temporary = false;
        assert!(tab.is_close_protected());
        tab.is_temporary = true;

        tab.is_home = true;
        assert!(tab.is_close_protected());
    }
}
