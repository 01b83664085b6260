//! Keyboard listeners with scoped lifetimes.
//!
//! A component attaches a key listener to one of its elements with
//! [`ListenerRegistry::subscribe`] and keeps the returned [`Subscription`].
//! The listener stays attached exactly as long as the subscription lives:
//! dropping it (or calling [`Subscription::unsubscribe`]) detaches it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::event::{Key, Modifiers};

pub type KeyListener = Rc<dyn Fn(Key, Modifiers)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Entry {
    id: ListenerId,
    target: String,
    listener: KeyListener,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<Entry>,
}

impl ListenerTable {
    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}

/// Key listeners keyed by the element they are attached to.
///
/// Cheap to clone; clones share the same table.
#[derive(Default, Clone)]
pub struct ListenerRegistry {
    table: Rc<RefCell<ListenerTable>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `listener` to key events targeted at `target`.
    pub fn subscribe(&self, target: &str, listener: impl Fn(Key, Modifiers) + 'static) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.entries.push(Entry {
            id,
            target: target.to_string(),
            listener: Rc::new(listener),
        });
        log::debug!("key listener {:?} attached to {}", id, target);

        Subscription {
            id,
            target: target.to_string(),
            table: Rc::downgrade(&self.table),
        }
    }

    /// Deliver a key press to every listener attached to `target`.
    ///
    /// Returns the number of listeners that ran.
    pub fn dispatch_key(&self, target: &str, key: Key, modifiers: Modifiers) -> usize {
        // Collect first so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<KeyListener> = self
            .table
            .borrow()
            .entries
            .iter()
            .filter(|e| e.target == target)
            .map(|e| Rc::clone(&e.listener))
            .collect();

        for listener in &listeners {
            listener(key, modifiers);
        }
        listeners.len()
    }

    /// Number of listeners attached to `target`.
    pub fn count(&self, target: &str) -> usize {
        self.table
            .borrow()
            .entries
            .iter()
            .filter(|e| e.target == target)
            .count()
    }

    pub fn len(&self) -> usize {
        self.table.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listener_count", &self.len())
            .finish()
    }
}

/// Guard for an attached key listener. Detaches it on drop.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    target: String,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether the listener is still attached.
    pub fn is_active(&self) -> bool {
        let Some(table) = self.table.upgrade() else {
            return false;
        };
        let attached = table.borrow().entries.iter().any(|e| e.id == self.id);
        attached
    }

    /// Detach the listener. Calling this more than once is a no-op.
    pub fn unsubscribe(&mut self) {
        let Some(table) = self.table.upgrade() else {
            return;
        };
        if table.borrow_mut().remove(self.id) {
            log::debug!("key listener {:?} detached from {}", self.id, self.target);
        }
        self.table = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_dispatch_only_reaches_target() {
        let registry = ListenerRegistry::new();
        let hits = Rc::new(Cell::new(0));

        let h = Rc::clone(&hits);
        let _sub = registry.subscribe("a", move |_, _| h.set(h.get() + 1));

        assert_eq!(registry.dispatch_key("a", Key::Enter, Modifiers::NONE), 1);
        assert_eq!(registry.dispatch_key("b", Key::Enter, Modifiers::NONE), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_drop_detaches() {
        let registry = ListenerRegistry::new();
        let sub = registry.subscribe("a", |_, _| {});
        assert_eq!(registry.count("a"), 1);
        assert!(sub.is_active());

        drop(sub);
        assert_eq!(registry.count("a"), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let registry = ListenerRegistry::new();
        let mut first = registry.subscribe("a", |_, _| {});
        let _second = registry.subscribe("a", |_, _| {});

        first.unsubscribe();
        first.unsubscribe();
        assert!(!first.is_active());
        assert_eq!(registry.count("a"), 1);
    }

    #[test]
    fn test_subscription_outliving_registry() {
        let registry = ListenerRegistry::new();
        let mut sub = registry.subscribe("a", |_, _| {});
        drop(registry);

        assert!(!sub.is_active());
        sub.unsubscribe();
    }

    #[test]
    fn test_listener_may_unsubscribe_while_running() {
        let registry = ListenerRegistry::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let s = Rc::clone(&slot);
        let sub = registry.subscribe("a", move |_, _| {
            s.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        assert_eq!(registry.dispatch_key("a", Key::Escape, Modifiers::NONE), 1);
        assert!(registry.is_empty());
    }
}
