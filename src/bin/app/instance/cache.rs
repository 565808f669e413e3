use std::collections::HashMap;
use iced::widget::image::Handle;

// Where a row's thumbnail is in its lifecycle.
// A failed load is kept distinct from "not tried yet" so it doesn't quietly retry forever.
#[derive(Debug, Clone)]
pub (crate) enum ThumbnailState {
    Unloaded,
    Loading,
    Loaded(Handle),
    Failed(String)
}

// Stores extracted frames so that they won't need to be decoded again.
// Each slot moves Unloaded -> Loading -> Loaded/Failed; only try_begin starts a load,
// so a row re-rendered while its fetch is in flight can't start a second one.
pub (crate) struct ThumbnailCache {
    // Maps a row index to the state of its thumbnail.
    slots: HashMap<usize, ThumbnailState>
}

impl ThumbnailCache {
    pub (crate) fn new() -> Self {
        Self {
            slots: HashMap::new()
        }
    }

    pub (crate) fn state(&self, index: usize) -> ThumbnailState {
        self.slots.get(&index).cloned().unwrap_or(ThumbnailState::Unloaded)
    }

    pub (crate) fn handle(&self, index: usize) -> Option<Handle> {
        match self.slots.get(&index) {
            Some(ThumbnailState::Loaded(handle)) => Some(handle.clone()),
            _ => None
        }
    }

    // Check-and-mark: claims the slot for a new load and reports whether it was won.
    // Loading, Loaded and Failed slots all refuse, which makes a load at-most-once
    // until the slot is explicitly cancelled or cleared.
    pub (crate) fn try_begin(&mut self, index: usize) -> bool {
        match self.slots.get(&index) {
            None | Some(ThumbnailState::Unloaded) => {
                self.slots.insert(index, ThumbnailState::Loading);
                true
            },
            _ => false
        }
    }

    pub (crate) fn complete(&mut self, index: usize, handle: Handle) {
        // Ignore late completions for slots that were cancelled in the meantime.
        if let Some(slot @ ThumbnailState::Loading) = self.slots.get_mut(&index) {
            *slot = ThumbnailState::Loaded(handle);
        }
    }

    pub (crate) fn fail(&mut self, index: usize, reason: String) {
        if let Some(slot @ ThumbnailState::Loading) = self.slots.get_mut(&index) {
            *slot = ThumbnailState::Failed(reason);
        }
    }

    // Returns an in-flight slot to Unloaded, used when its task is aborted.
    pub (crate) fn cancel(&mut self, index: usize) {
        if let Some(slot @ ThumbnailState::Loading) = self.slots.get_mut(&index) {
            *slot = ThumbnailState::Unloaded;
        }
    }

    // Drops every loaded frame. Used when the capture offset changes: frames
    // grabbed at the old offset no longer match what the list claims to show.
    pub (crate) fn invalidate_loaded(&mut self) {
        for slot in self.slots.values_mut() {
            if matches!(slot, ThumbnailState::Loaded(_)) {
                *slot = ThumbnailState::Unloaded;
            }
        }
    }

    pub (crate) fn has_failures(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, ThumbnailState::Failed(_)))
    }

    // Resets every failed slot so the next load pass can pick them up again.
    pub (crate) fn clear_failures(&mut self) {
        for slot in self.slots.values_mut() {
            if matches!(slot, ThumbnailState::Failed(_)) {
                *slot = ThumbnailState::Unloaded;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_handle() -> Handle {
        Handle::from_bytes(vec![0u8; 16])
    }

    #[test]
    fn load_starts_at_most_once() {
        let mut cache = ThumbnailCache::new();

        assert!(cache.try_begin(0));

        // A re-render before the first load finishes must not start a second one.
        assert!(!cache.try_begin(0));

        cache.complete(0, dummy_handle());
        assert!(!cache.try_begin(0));
    }

    #[test]
    fn completion_stores_the_handle() {
        let mut cache = ThumbnailCache::new();

        assert!(cache.handle(3).is_none());

        cache.try_begin(3);
        assert!(cache.handle(3).is_none());

        cache.complete(3, dummy_handle());
        assert!(cache.handle(3).is_some());
        assert!(matches!(cache.state(3), ThumbnailState::Loaded(_)));
    }

    #[test]
    fn failure_is_sticky_until_cleared() {
        let mut cache = ThumbnailCache::new();

        cache.try_begin(1);
        cache.fail(1, String::from("no such host"));

        assert!(matches!(cache.state(1), ThumbnailState::Failed(_)));
        assert!(cache.has_failures());

        // Failed is not Unloaded: no silent retry.
        assert!(!cache.try_begin(1));

        cache.clear_failures();
        assert!(!cache.has_failures());
        assert!(matches!(cache.state(1), ThumbnailState::Unloaded));
        assert!(cache.try_begin(1));
    }

    #[test]
    fn cancel_releases_the_slot() {
        let mut cache = ThumbnailCache::new();

        cache.try_begin(2);
        cache.cancel(2);

        assert!(matches!(cache.state(2), ThumbnailState::Unloaded));
        assert!(cache.try_begin(2));
    }

    #[test]
    fn offset_change_drops_loaded_frames() {
        let mut cache = ThumbnailCache::new();

        cache.try_begin(0);
        cache.complete(0, dummy_handle());
        cache.try_begin(1);

        // The capture offset changed; the stored frame no longer matches it.
        cache.invalidate_loaded();

        assert!(cache.handle(0).is_none());
        assert!(matches!(cache.state(0), ThumbnailState::Unloaded));
        assert!(cache.try_begin(0));

        // In-flight slots are left alone.
        assert!(matches!(cache.state(1), ThumbnailState::Loading));
    }

    #[test]
    fn late_writes_are_ignored() {
        let mut cache = ThumbnailCache::new();

        cache.try_begin(4);
        cache.cancel(4);

        // The task finished after its row was torn down.
        cache.complete(4, dummy_handle());
        assert!(matches!(cache.state(4), ThumbnailState::Unloaded));

        cache.fail(4, String::from("too late"));
        assert!(matches!(cache.state(4), ThumbnailState::Unloaded));
    }
}
