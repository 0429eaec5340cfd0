//! Event listeners and the events they receive.
//!
//! Listeners are owned by the element they are attached to. The renderer
//! is the only writer: it clears and re-registers the whole set when it
//! re-applies properties, so no registration bookkeeping leaks outside
//! the tree.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::NodeId;
use crate::document::Document;

/// Callback attached to an element for a named event.
///
/// Handlers receive the owning document mutably so they can read and
/// rewrite the tree they live in. Dispatch snapshots the handler chain
/// before invoking, so a handler may freely add or remove listeners.
pub type EventHandler = Rc<dyn Fn(&mut Document, &Event)>;

/// A dispatched event, visible to every handler on the bubble path.
#[derive(Debug)]
pub struct Event {
    name: String,
    target: NodeId,
    stopped: Cell<bool>,
}

impl Event {
    pub fn new(name: &str, target: NodeId) -> Self {
        Self {
            name: name.to_string(),
            target,
            stopped: Cell::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node the event was dispatched against.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Stops the event from bubbling past the current element.
    pub fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

struct ListenerEntry {
    event: String,
    handler: EventHandler,
}

/// Listeners registered on one element, in registration order.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<ListenerEntry>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, event: &str, handler: EventHandler) {
        self.entries.push(ListenerEntry {
            event: event.to_string(),
            handler,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Cloned handlers for `event`, in registration order.
    pub fn handlers_for(&self, event: &str) -> Vec<EventHandler> {
        self.entries
            .iter()
            .filter(|entry| entry.event == event)
            .map(|entry| entry.handler.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn count_for(&self, event: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.event == event)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events: Vec<&str> = self.entries.iter().map(|e| e.event.as_str()).collect();
        f.debug_struct("ListenerSet").field("events", &events).finish()
    }
}
