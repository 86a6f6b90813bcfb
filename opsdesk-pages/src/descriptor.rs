//! Tab descriptors: what the router hands to the tab manager.

use crate::kind::{EntityFamily, PageKind};
use crate::routes;
use serde::{Deserialize, Serialize};

/// Unique identifier for a tab, issued by the registry and stable for the
/// tab's lifetime.
pub type TabId = u64;

/// Description of a screen to open in a tab.
///
/// Produced by `descriptor_from_path` from a browser navigation, or built
/// directly by collaborator code (sidebar links, command palette, assistant
/// actions) via the typed constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Screen category, drives icon/label lookup
    pub kind: PageKind,
    /// Logical address mirroring the external URL
    pub path: String,
    /// Initial display title; the manager may update it once the entity's
    /// real name loads
    pub title: String,
    /// Back-reference to the domain record, absent for list/creation screens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

impl TabDescriptor {
    /// The home dashboard descriptor.
    pub fn dashboard() -> Self {
        Self {
            kind: PageKind::Dashboard,
            path: "/".to_string(),
            title: PageKind::Dashboard.label(),
            entity_id: None,
        }
    }

    /// A family's list screen.
    pub fn list(family: EntityFamily) -> Self {
        let kind = PageKind::list_of(family);
        Self {
            kind,
            path: routes::list_path(family),
            title: kind.label(),
            entity_id: None,
        }
    }

    /// A family's creation screen.
    pub fn new_record(family: EntityFamily) -> Self {
        let kind = PageKind::new_of(family);
        Self {
            kind,
            path: routes::new_path(family),
            title: kind.label(),
            entity_id: None,
        }
    }

    /// A detail screen for a specific record.
    pub fn detail(family: EntityFamily, entity_id: impl Into<String>) -> Self {
        let entity_id = entity_id.into();
        let kind = PageKind::detail_of(family);
        Self {
            kind,
            path: routes::detail_path(family, &entity_id),
            title: kind.label(),
            entity_id: Some(entity_id),
        }
    }

    /// An edit screen for a specific record.
    pub fn edit(family: EntityFamily, entity_id: impl Into<String>) -> Self {
        let entity_id = entity_id.into();
        let kind = PageKind::edit_of(family);
        Self {
            kind,
            path: routes::edit_path(family, &entity_id),
            title: kind.label(),
            entity_id: Some(entity_id),
        }
    }
}
