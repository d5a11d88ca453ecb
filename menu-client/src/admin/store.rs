//! Menu state shared by the admin view

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use shared::FoodItem;

/// Owns the menu list snapshot, the busy flag and the last error.
///
/// The list is replaced wholesale on every refresh; readers hold on to the
/// `Arc` they got and never see a half-updated list.
#[derive(Debug, Default)]
pub struct MenuStore {
    items: RwLock<Arc<Vec<FoodItem>>>,
    busy: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn items(&self) -> Arc<Vec<FoodItem>> {
        self.items.read().clone()
    }

    pub fn replace(&self, items: Vec<FoodItem>) {
        *self.items.write() = Arc::new(items);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Mark the store busy until the guard is dropped; `None` if already busy
    pub fn try_begin(self: &Arc<Self>) -> Option<BusyGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard {
                store: Arc::clone(self),
            })
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        *self.last_error.write() = Some(message.into());
    }

    pub fn clear_error(&self) {
        *self.last_error.write() = None;
    }
}

/// Clears the busy flag on drop
#[derive(Debug)]
pub struct BusyGuard {
    store: Arc<MenuStore>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.store.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_guard_is_exclusive() {
        let store = Arc::new(MenuStore::new());
        let guard = store.try_begin().unwrap();
        assert!(store.is_busy());
        assert!(store.try_begin().is_none());

        drop(guard);
        assert!(!store.is_busy());
        assert!(store.try_begin().is_some());
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = MenuStore::new();
        let before = store.items();
        store.replace(vec![FoodItem {
            id: 1,
            name: "Tea".to_string(),
            description: "Hot".to_string(),
            category: "Drinks".to_string(),
            price: 20.0,
            image: "tea.png".to_string(),
            rating: 3.5,
            discount: 0.0,
        }]);
        assert!(before.is_empty());
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_error_message() {
        let store = MenuStore::new();
        assert_eq!(store.last_error(), None);
        store.set_error("boom");
        assert_eq!(store.last_error().as_deref(), Some("boom"));
        store.clear_error();
        assert_eq!(store.last_error(), None);
    }
}
