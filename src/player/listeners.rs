//! Ordered multicast dispatch to registered listeners.
//!
//! Listeners are visited from the most recently added to the oldest. Walking
//! backwards lets a listener remove itself, or one that was already visited,
//! while a dispatch is in progress: removals at or after the current position
//! only shift entries that have already been seen.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by [`ListenerRegistry::add`], used to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registry of listeners of type `L`.
///
/// Mutation goes through `&self` so that callbacks can add or remove
/// listeners during [`notify_all`](Self::notify_all). Single-threaded only.
pub struct ListenerRegistry<L: ?Sized> {
    entries: RefCell<Vec<(ListenerId, Rc<L>)>>,
    next_id: Cell<u64>,
}

impl<L: ?Sized> ListenerRegistry<L> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn add(&self, listener: Rc<L>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        match entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(pos) => {
                entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Invoke `action` on every listener, newest first.
    ///
    /// Listeners added during the dispatch are not visited by it. A listener
    /// may remove itself or any listener already visited. Removing one that
    /// has not been visited yet shifts the remaining entries down, so the
    /// current listener is visited again and the removed one is skipped.
    pub fn notify_all(&self, mut action: impl FnMut(&L)) {
        let mut idx = self.len();
        while idx > 0 {
            idx -= 1;
            // The list may have shrunk by more than one during the last callback
            let listener = {
                let entries = self.entries.borrow();
                idx = idx.min(entries.len());
                if idx == entries.len() {
                    continue;
                }
                Rc::clone(&entries[idx].1)
            };
            action(&*listener);
        }
    }
}

impl<L: ?Sized> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> std::fmt::Debug for ListenerRegistry<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.len())
            .finish()
    }
}
