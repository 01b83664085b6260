//! Element event handlers and their dispatch.
//!
//! Handlers are registered per `(element_id, EventKind)` while building the
//! element tree, and are meant to be cleared and re-registered on every
//! build so they always capture the current props.
//!
//! Clicks bubble from the target up to the root until a handler returns
//! [`Propagation::Stop`]. Mouse-enter and blur are delivered to their
//! target only.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::element::{path_to, Element};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    Blur,
}

impl EventKind {
    pub fn bubbles(self) -> bool {
        matches!(self, EventKind::Click)
    }
}

/// Whether an event keeps bubbling after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    Stop,
}

/// What a handler is told about the event it is handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    pub kind: EventKind,
    /// The element the event was aimed at.
    pub target: String,
    /// The element whose handler is running.
    pub current: String,
}

pub type Handler = Rc<dyn Fn(&EventContext) -> Propagation>;

/// Registry for element event handlers.
///
/// Cheap to clone; clones share the same table.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Rc<RefCell<HashMap<(String, EventKind), Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one for the same element and kind.
    pub fn register(&self, element_id: &str, kind: EventKind, handler: Handler) {
        self.handlers
            .borrow_mut()
            .insert((element_id.to_string(), kind), handler);
    }

    /// Convenience wrapper around [`register`](Self::register) for closures.
    pub fn on(&self, element_id: &str, kind: EventKind, handler: impl Fn(&EventContext) -> Propagation + 'static) {
        self.register(element_id, kind, Rc::new(handler));
    }

    pub fn get(&self, element_id: &str, kind: EventKind) -> Option<Handler> {
        self.handlers
            .borrow()
            .get(&(element_id.to_string(), kind))
            .cloned()
    }

    /// Remove all handlers. Call before rebuilding the element tree.
    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Deliver an event aimed at `target`.
    ///
    /// Returns the number of handlers that ran.
    pub fn dispatch(&self, root: &Element, kind: EventKind, target: &str) -> usize {
        let route: Vec<String> = if kind.bubbles() {
            path_to(root, target).into_iter().rev().collect()
        } else {
            vec![target.to_string()]
        };

        let mut ran = 0;
        for current in route {
            // Clone out of the table so handlers may touch the registry.
            let Some(handler) = self.get(&current, kind) else {
                continue;
            };
            ran += 1;
            let cx = EventContext {
                kind,
                target: target.to_string(),
                current,
            };
            log::trace!("dispatch {:?} target={} current={}", kind, cx.target, cx.current);
            if handler(&cx) == Propagation::Stop {
                break;
            }
        }
        ran
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}
