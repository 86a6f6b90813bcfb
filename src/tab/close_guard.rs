//! Close operations and the protection rules that guard them.

use super::{TabEvent, TabId, TabManager};

impl TabManager {
    /// Close a tab, unless protection applies.
    ///
    /// Protected tabs are the home tab, pinned tabs, and dirty tabs; closing
    /// one is a refused no-op returning `false`, same as an unknown id.
    /// Pinned or dirty tabs must be unpinned or saved first, which keeps the
    /// decision to discard work explicit.
    ///
    /// If the closed tab was active, activation falls back to the most
    /// recently accessed survivor, or the home tab.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        match self.registry.get(id) {
            Some(tab) if tab.is_close_protected() => {
                log::warn!(
                    "Refusing to close tab {} (home: {}, pinned: {}, dirty: {})",
                    id,
                    tab.is_home,
                    !tab.is_temporary,
                    tab.is_dirty
                );
                return false;
            }
            Some(_) => {}
            None => return false,
        }

        let was_active = self.registry.active_tab_id() == id;
        self.registry.remove(id);
        log::info!("Closed tab {} (remaining: {})", id, self.registry.tab_count());
        self.notify(TabEvent::Closed(id));
        if was_active {
            let fallback = self.registry.active_tab_id();
            self.notify(TabEvent::Activated(fallback));
        }
        true
    }

    /// Close every clean temporary tab at once. Returns how many closed.
    ///
    /// The home tab, pinned tabs, and dirty tabs all stay, so this is safe
    /// to offer as a one-click "clear the strip" action.
    pub fn close_all_temporary_tabs(&mut self) -> usize {
        let victims: Vec<TabId> = self
            .registry
            .tabs()
            .iter()
            .filter(|tab| tab.is_temporary && !tab.is_dirty)
            .map(|tab| tab.id)
            .collect();

        let prior_active = self.registry.active_tab_id();
        for &id in &victims {
            self.registry.remove(id);
            self.notify(TabEvent::Closed(id));
        }
        if !victims.is_empty() {
            log::info!("Closed {} temporary tabs", victims.len());
        }
        let active = self.registry.active_tab_id();
        if active != prior_active {
            self.notify(TabEvent::Activated(active));
        }
        victims.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::{NavigationSource, OpenOptions};
    use opsdesk_pages::{EntityFamily, TabDescriptor};

    fn user() -> OpenOptions {
        OpenOptions::force_new(NavigationSource::User)
    }

    #[test]
    fn closing_a_temporary_tab_succeeds() {
        let mut mgr = TabManager::new();
        let id = mgr.open_tab(TabDescriptor::list(EntityFamily::Client), user());
        assert!(mgr.close_tab(id));
        assert!(mgr.get_tab(id).is_none());
        assert_eq!(mgr.tab_count(), 1);
    }

    #[test]
    fn home_tab_cannot_be_closed() {
        let mut mgr = TabManager::new();
        let home = mgr.active_tab_id();
        assert!(!mgr.close_tab(home));
        assert_eq!(mgr.tab_count(), 1);
        assert_eq!(mgr.active_tab_id(), home);
    }

    #[test]
    fn pinned_and_dirty_tabs_refuse_to_close() {
        let mut mgr = TabManager::new();
        let pinned = mgr.open_tab(TabDescriptor::list(EntityFamily::Invoice), user());
        mgr.pin_tab(pinned);
        let dirty = mgr.open_tab(TabDescriptor::new_record(EntityFamily::Deal), user());
        mgr.set_tab_dirty(dirty, true);

        assert!(!mgr.close_tab(pinned));
        assert!(!mgr.close_tab(dirty));
        assert_eq!(mgr.tab_count(), 3);

        // Unpinning and saving lift the protection
        mgr.registry.replace(pinned, |tab| tab.is_temporary = true);
        mgr.set_tab_dirty(dirty, false);
        assert!(mgr.close_tab(pinned));
        assert!(mgr.close_tab(dirty));
    }

    #[test]
    fn closing_unknown_tab_returns_false() {
        let mut mgr = TabManager::new();
        assert!(!mgr.close_tab(404));
    }

    #[test]
    fn closing_the_active_tab_falls_back_to_most_recent() {
        let mut mgr = TabManager::new();
        let a = mgr.open_tab(TabDescriptor::list(EntityFamily::Client), user());
        let b = mgr.open_tab(TabDescriptor::list(EntityFamily::Deal), user());
        mgr.set_active_tab(a);
        mgr.set_active_tab(b);

        assert!(mgr.close_tab(b));
        assert_eq!(mgr.active_tab_id(), a);
    }

    #[test]
    fn closing_the_last_non_home_tab_falls_back_to_home() {
        let mut mgr = TabManager::new();
        let home = mgr.active_tab_id();
        let only = mgr.open_tab(TabDescriptor::list(EntityFamily::Expense), user());
        assert!(mgr.close_tab(only));
        assert_eq!(mgr.active_tab_id(), home);
    }

    #[test]
    fn close_all_leaves_home_pinned_and_dirty_tabs() {
        let mut mgr = TabManager::new();
        let home = mgr.active_tab_id();
        let pinned = mgr.open_tab(TabDescriptor::list(EntityFamily::Invoice), user());
        mgr.pin_tab(pinned);
        let dirty = mgr.open_tab(TabDescriptor::new_record(EntityFamily::Deal), user());
        mgr.set_tab_dirty(dirty, true);
        mgr.open_tab(TabDescriptor::list(EntityFamily::Client), user());
        mgr.open_tab(TabDescriptor::list(EntityFamily::Mission), user());

        assert_eq!(mgr.close_all_temporary_tabs(), 2);
        assert_eq!(mgr.tab_count(), 3);
        assert!(mgr.get_tab(home).is_some());
        assert!(mgr.get_tab(pinned).is_some());
        assert!(mgr.get_tab(dirty).is_some());
    }

    #[test]
    fn close_all_on_a_quiet_strip_returns_zero() {
        let mut mgr = TabManager::new();
        assert_eq!(mgr.close_all_temporary_tabs(), 0);
        assert_eq!(mgr.tab_count(), 1);
    }
}
