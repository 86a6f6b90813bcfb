//! Shared snapshot types for workspace persistence.
//!
//! The session module in the root crate captures these when saving a
//! workspace, and replays them through the tab manager's public operations
//! on restore. Only durable navigation state is recorded: dirty flags are
//! deliberately absent (unsaved form input does not survive the session)
//! and tab ids are re-issued by the registry on restore.

use crate::descriptor::TabDescriptor;
use crate::kind::PageKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a single tab's durable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabSnapshot {
    /// Screen category
    pub kind: PageKind,

    /// Logical address
    pub path: String,

    /// Display title at capture time
    #[serde(default)]
    pub title: String,

    /// Domain record back-reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    /// Pinned state; `false` means the tab was pinned
    #[serde(default = "default_true")]
    pub is_temporary: bool,
}

fn default_true() -> bool {
    true
}

impl TabSnapshot {
    /// Rebuild the descriptor this tab was opened with.
    pub fn to_descriptor(&self) -> TabDescriptor {
        TabDescriptor {
            kind: self.kind,
            path: self.path.clone(),
            title: self.title.clone(),
            entity_id: self.entity_id.clone(),
        }
    }
}

/// Snapshot of the whole workspace: the tab list plus the active pointer.
///
/// The home tab is not recorded; every registry starts with one and it can
/// never be closed, so persisting it would only invite duplicate-home
/// states on restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    /// When the snapshot was captured
    pub saved_at: DateTime<Utc>,

    /// Non-home tabs, in strip order
    #[serde(default)]
    pub tabs: Vec<TabSnapshot>,

    /// Index into `tabs` of the active tab; `None` when the home tab was
    /// active at capture time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_index: Option<usize>,
}
