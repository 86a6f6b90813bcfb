//! Least-recently-used eviction of surplus temporary tabs.

use super::{TEMPORARY_TAB_CAP, TabEvent, TabId, TabManager};

impl TabManager {
    /// Evict least-recently-used temporary tabs until at most
    /// [`TEMPORARY_TAB_CAP`] clean ones remain. Returns the number evicted.
    ///
    /// Runs automatically after every open; callers only need it directly
    /// after bulk mutations such as session restore.
    ///
    /// Exempt from eviction: pinned tabs, dirty tabs, the home tab, and the
    /// active tab. Dirty temporaries also do not count against the cap, so
    /// a pile of half-finished forms can push the strip past it.
    pub fn cleanup_temporary_tabs(&mut self) -> usize {
        let mut evicted = 0;
        while self.evictable_pressure() > TEMPORARY_TAB_CAP {
            let Some(victim) = self.eviction_candidate() else {
                break;
            };
            if let Some(tab) = self.registry.get(victim) {
                log::info!("Evicting tab {} at {} (least recently used)", victim, tab.path);
            }
            self.registry.remove(victim);
            self.notify(TabEvent::Evicted(victim));
            evicted += 1;
        }
        evicted
    }

    /// Clean temporary tabs counted against the cap.
    fn evictable_pressure(&self) -> usize {
        self.tabs()
            .iter()
            .filter(|tab| tab.is_temporary && !tab.is_dirty)
            .count()
    }

    /// The clean temporary tab with the oldest access stamp, skipping the
    /// home and active tabs.
    fn eviction_candidate(&self) -> Option<TabId> {
        let active = self.active_tab_id();
        self.tabs()
            .iter()
            .filter(|tab| {
                tab.is_temporary && !tab.is_dirty && !tab.is_home && tab.id != active
            })
            .min_by_key(|tab| tab.access_stamp)
            .map(|tab| tab.id)
    }
}
