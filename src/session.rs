//! Workspace persistence: capture the tab strip to a YAML file and replay
//! it into a fresh manager.
//!
//! Restore goes through the manager's public operations rather than poking
//! registry state, so a stale or hand-edited file still lands in a valid
//! workspace: ids are re-issued, the open policy runs, and the eviction
//! sweep trims an over-cap tab list.

use crate::tab::{NavigationSource, OpenOptions, TabManager};
use anyhow::{Context, Result};
use opsdesk_pages::{TabSnapshot, WorkspaceSnapshot};
use std::fs;
use std::path::Path;

/// Errors from reading or writing a workspace snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is not valid YAML: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Capture the manager's current strip as a snapshot.
///
/// The home tab is skipped; `active_index` points into the captured list,
/// or is `None` when the home tab was active.
pub fn capture(manager: &TabManager) -> WorkspaceSnapshot {
    let active = manager.active_tab_id();
    let mut tabs = Vec::new();
    let mut active_index = None;

    for tab in manager.tabs() {
        if tab.is_home {
            continue;
        }
        if tab.id == active {
            active_index = Some(tabs.len());
        }
        tabs.push(TabSnapshot {
            kind: tab.kind,
            path: tab.path.clone(),
            title: tab.title.clone(),
            entity_id: tab.entity_id.clone(),
            is_temporary: tab.is_temporary,
        });
    }

    WorkspaceSnapshot {
        saved_at: chrono::Utc::now(),
        tabs,
        active_index,
    }
}

/// Rebuild a manager from a snapshot.
///
/// Tabs are replayed in strip order with fresh ids; pinned entries are
/// re-pinned, and activation returns to the recorded tab or the home tab.
pub fn restore(snapshot: &WorkspaceSnapshot) -> TabManager {
    let mut manager = TabManager::new();
    let mut ids = Vec::with_capacity(snapshot.tabs.len());

    for snap in &snapshot.tabs {
        let id = manager.open_tab(
            snap.to_descriptor(),
            OpenOptions::force_new(NavigationSource::User),
        );
        if !snap.is_temporary {
            manager.pin_tab(id);
        }
        ids.push(id);
    }

    match snapshot.active_index.and_then(|index| ids.get(index)) {
        Some(&id) => {
            manager.set_active_tab(id);
        }
        None => {
            if let Some(home) = manager.registry().home_tab_id() {
                manager.set_active_tab(home);
            }
        }
    }

    log::info!(
        "Restored workspace: {} tabs from snapshot saved {}",
        manager.tab_count(),
        snapshot.saved_at
    );
    manager
}

/// Write a snapshot to `path` as YAML.
pub fn save(snapshot: &WorkspaceSnapshot, path: &Path) -> Result<()> {
    let yaml = serde_yaml_ng::to_string(snapshot).map_err(SessionError::Parse)?;
    fs::write(path, yaml)
        .map_err(SessionError::Io)
        .with_context(|| format!("writing session file {}", path.display()))?;
    log::info!("Saved workspace session to {}", path.display());
    Ok(())
}

/// Read a snapshot back from `path`.
pub fn load(path: &Path) -> Result<WorkspaceSnapshot> {
    let yaml = fs::read_to_string(path)
        .map_err(SessionError::Io)
        .with_context(|| format!("reading session file {}", path.display()))?;
    let snapshot = serde_yaml_ng::from_str(&yaml).map_err(SessionError::Parse)?;
    log::info!("Loaded workspace session from {}", path.display());
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdesk_pages::{EntityFamily, TabDescriptor};

    fn user() -> OpenOptions {
        OpenOptions::force_new(NavigationSource::User)
    }

    #[test]
    fn capture_skips_the_home_tab() {
        let mut mgr = TabManager::new();
        mgr.open_tab(TabDescriptor::list(EntityFamily::Client), user());
        mgr.open_tab(TabDescriptor::detail(EntityFamily::Deal, "d-7"), user());

        let snapshot = capture(&mgr);
        assert_eq!(snapshot.tabs.len(), 2);
        assert_eq!(snapshot.active_index, Some(1));
        assert_eq!(snapshot.tabs[1].entity_id.as_deref(), Some("d-7"));
    }

    #[test]
    fn capture_with_home_active_records_no_index() {
        let mut mgr = TabManager::new();
        mgr.open_tab(TabDescriptor::list(EntityFamily::Client), user());
        let home = mgr.registry().home_tab_id().unwrap();
        mgr.set_active_tab(home);

        let snapshot = capture(&mgr);
        assert_eq!(snapshot.active_index, None);
    }

    #[test]
    fn restore_rebuilds_pins_and_activation() {
        let mut mgr = TabManager::new();
        let pinned = mgr.open_tab(TabDescriptor::list(EntityFamily::Invoice), user());
        mgr.pin_tab(pinned);
        let detail = mgr.open_tab(TabDescriptor::detail(EntityFamily::Client, "c-2"), user());
        mgr.set_active_tab(detail);

        let restored = restore(&capture(&mgr));
        assert_eq!(restored.tab_count(), 3);

        let tabs = restored.tabs();
        assert!(tabs[0].is_home);
        assert!(!tabs[1].is_temporary);
        assert!(tabs[2].is_temporary);
        assert_eq!(restored.active_tab().unwrap().entity_id.as_deref(), Some("c-2"));
    }

    #[test]
    fn restore_with_no_index_activates_home() {
        let snapshot = WorkspaceSnapshot {
            saved_at: chrono::Utc::now(),
            tabs: vec![TabSnapshot {
                kind: opsdesk_pages::PageKind::ClientList,
                path: "/clients".to_string(),
                title: "Clients".to_string(),
                entity_id: None,
                is_temporary: true,
            }],
            active_index: None,
        };

        let restored = restore(&snapshot);
        assert!(restored.active_tab().unwrap().is_home);
    }

    #[test]
    fn restore_trims_an_over_cap_snapshot() {
        let mut mgr = TabManager::new();
        for i in 0..8 {
            let descriptor = TabDescriptor::detail(EntityFamily::Mission, format!("m-{i}"));
            mgr.open_tab(descriptor, user());
        }
        // The live manager already enforces the cap; force an over-cap file
        let mut snapshot = capture(&mgr);
        let extra = TabSnapshot {
            kind: opsdesk_pages::PageKind::ExpenseList,
            path: "/expenses".to_string(),
            title: "Expenses".to_string(),
            entity_id: None,
            is_temporary: true,
        };
        for _ in 0..3 {
            snapshot.tabs.insert(0, extra.clone());
        }
        snapshot.active_index = None;

        let restored = restore(&snapshot);
        assert_eq!(restored.temporary_tabs_count(), crate::tab::TEMPORARY_TAB_CAP);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut mgr = TabManager::new();
        let id = mgr.open_tab(TabDescriptor::detail(EntityFamily::Supplier, "s-1"), user());
        mgr.update_tab_title(id, "Peak Tools GmbH");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");

        save(&capture(&mgr), &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.tabs.len(), 1);
        assert_eq!(loaded.tabs[0].title, "Peak Tools GmbH");
        assert_eq!(loaded.tabs[0].entity_id.as_deref(), Some("s-1"));
    }

    #[test]
    fn load_rejects_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, ": not : valid : yaml : [").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let path = Path::new("/nonexistent/opsdesk-session.yaml");
        assert!(load(path).is_err());
    }
}
