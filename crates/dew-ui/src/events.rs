//! Typed events between widgets.
//!
//! An [`EventEmitter`] decouples the widget that observes a DOM event
//! from the widgets that react to it. Listeners receive the document
//! mutably, so reactions can read and rewrite the page. Subscriptions
//! are the unit of cleanup: disposing one removes exactly its listener.

use std::cell::RefCell;
use std::rc::Rc;

use dew_dom::Document;

/// Anything that releases resources when a composite tears down.
pub trait Disposable {
    /// Safe to call more than once; later calls do nothing.
    fn dispose(&mut self);
}

type Listener<T> = Rc<dyn Fn(&mut Document, &T)>;

struct EmitterInner<T> {
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

/// A single-threaded event channel carrying payloads of type `T`.
pub struct EventEmitter<T> {
    inner: Rc<RefCell<EmitterInner<T>>>,
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(EmitterInner {
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Registers `listener` and returns its subscription handle.
    pub fn on(&self, listener: impl Fn(&mut Document, &T) + 'static) -> Subscription<T> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            inner: Rc::clone(&self.inner),
            id: Some(id),
        }
    }

    /// Invokes every current listener with `payload`.
    ///
    /// The listener list is snapshotted first, so listeners may
    /// subscribe or dispose during the fire without affecting this
    /// delivery.
    pub fn fire(&self, doc: &mut Document, payload: &T) {
        let snapshot: Vec<Listener<T>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(doc, payload);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Drops every listener at once. Outstanding subscriptions become
    /// no-ops.
    pub fn dispose(&self) {
        self.inner.borrow_mut().listeners.clear();
    }
}

impl<T> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one registered listener.
pub struct Subscription<T> {
    inner: Rc<RefCell<EmitterInner<T>>>,
    id: Option<u64>,
}

impl<T> Disposable for Subscription<T> {
    fn dispose(&mut self) {
        if let Some(id) = self.id.take() {
            self.inner
                .borrow_mut()
                .listeners
                .retain(|(listener_id, _)| *listener_id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fire_reaches_every_listener() {
        let emitter: EventEmitter<u32> = EventEmitter::new();
        let total = Rc::new(Cell::new(0));
        let first = Rc::clone(&total);
        let _a = emitter.on(move |_, payload| first.set(first.get() + payload));
        let second = Rc::clone(&total);
        let _b = emitter.on(move |_, payload| second.set(second.get() + payload));

        let mut doc = Document::new();
        emitter.fire(&mut doc, &5);
        assert_eq!(total.get(), 10);
    }

    #[test]
    fn listeners_can_touch_the_document() {
        let emitter: EventEmitter<()> = EventEmitter::new();
        let _sub = emitter.on(|doc, _| {
            let id = doc.tree_mut().create_element("div");
            let root = doc.root();
            let _ = doc.tree_mut().append_child(root, id);
        });
        let mut doc = Document::new();
        emitter.fire(&mut doc, &());
        assert_eq!(doc.tree().child_count(doc.root()), 1);
    }

    #[test]
    fn disposing_a_subscription_removes_only_its_listener() {
        let emitter: EventEmitter<()> = EventEmitter::new();
        let hits = Rc::new(Cell::new(0));
        let kept = Rc::clone(&hits);
        let _kept_sub = emitter.on(move |_, _| kept.set(kept.get() + 1));
        let dropped = Rc::clone(&hits);
        let mut dropped_sub = emitter.on(move |_, _| dropped.set(dropped.get() + 10));

        dropped_sub.dispose();
        dropped_sub.dispose();
        assert_eq!(emitter.listener_count(), 1);

        let mut doc = Document::new();
        emitter.fire(&mut doc, &());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn emitter_dispose_clears_all_listeners() {
        let emitter: EventEmitter<()> = EventEmitter::new();
        let _a = emitter.on(|_, _| {});
        let _b = emitter.on(|_, _| {});
        emitter.dispose();
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn listeners_added_during_fire_run_next_time() {
        let emitter: EventEmitter<()> = EventEmitter::new();
        let late_hits = Rc::new(Cell::new(0));
        let chained = emitter.clone();
        let late = Rc::clone(&late_hits);
        let _sub = emitter.on(move |_, _| {
            let inner_late = Rc::clone(&late);
            // leak the inner subscription on purpose; the emitter keeps
            // the listener alive
            std::mem::forget(chained.on(move |_, _| inner_late.set(inner_late.get() + 1)));
        });

        let mut doc = Document::new();
        emitter.fire(&mut doc, &());
        assert_eq!(late_hits.get(), 0);
        emitter.fire(&mut doc, &());
        assert_eq!(late_hits.get(), 1);
    }
}
