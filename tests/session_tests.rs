//! Save/restore of the workspace through the session module, against real
//! files on disk.

use opsdesk::pages::{EntityFamily, PageKind, TabDescriptor};
use opsdesk::session;
use opsdesk::tab::{NavigationSource, OpenOptions, TabManager};

fn user() -> OpenOptions {
    OpenOptions::force_new(NavigationSource::User)
}

#[test]
fn workspace_round_trips_through_a_session_file() {
    let mut mgr = TabManager::new();
    let pinned = mgr.open_tab(TabDescriptor::detail(EntityFamily::Client, "c-7"), user());
    mgr.pin_tab(pinned);
    mgr.update_tab_title(pinned, "Nordwind AG");
    let active = mgr.open_tab(TabDescriptor::list(EntityFamily::Invoice), user());
    mgr.set_active_tab(active);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workspace.yaml");
    session::save(&session::capture(&mgr), &path).unwrap();

    let restored = session::restore(&session::load(&path).unwrap());

    assert_eq!(restored.tab_count(), 3);
    let tabs = restored.tabs();
    assert!(tabs[0].is_home);
    assert_eq!(tabs[1].title, "Nordwind AG");
    assert!(!tabs[1].is_temporary);
    assert_eq!(restored.active_tab().unwrap().kind, PageKind::InvoiceList);
}

#[test]
fn dirty_state_does_not_survive_the_session() {
    let mut mgr = TabManager::new();
    let form = mgr.open_tab(TabDescriptor::new_record(EntityFamily::Deal), user());
    mgr.set_tab_dirty(form, true);

    let restored = session::restore(&session::capture(&mgr));
    let replayed = restored
        .tabs()
        .iter()
        .find(|tab| tab.kind == PageKind::DealNew)
        .expect("form tab replayed");
    assert!(!replayed.is_dirty);
}

#[test]
fn session_file_is_human_readable_yaml() {
    let mut mgr = TabManager::new();
    mgr.open_tab(TabDescriptor::detail(EntityFamily::Mission, "m-12"), user());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workspace.yaml");
    session::save(&session::capture(&mgr), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("mission_detail"));
    assert!(text.contains("/missions/m-12"));
    assert!(text.contains("saved_at"));
}

#[test]
fn restoring_yesterdays_file_still_yields_a_valid_strip() {
    // A file written by hand or by an older build: unknown extra fields
    // absent, optional ones defaulted.
    let yaml = "\
saved_at: 2026-08-25T09:30:00Z
tabs:
  - kind: client_list
    path: /clients
  - kind: proposal_detail
    path: /proposals/p-3
    entity_id: p-3
    is_temporary: false
active_index: 0
";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workspace.yaml");
    std::fs::write(&path, yaml).unwrap();

    let restored = session::restore(&session::load(&path).unwrap());
    assert_eq!(restored.tab_count(), 3);
    assert_eq!(restored.active_tab().unwrap().kind, PageKind::ClientList);
    let proposal = restored
        .tabs()
        .iter()
        .find(|tab| tab.kind == PageKind::ProposalDetail)
        .unwrap();
    assert!(!proposal.is_temporary);
}
