//! One-way "graph changed" notification channel.
//!
//! # Architecture
//!
//! A [`Subscription`] owns its callback (`Rc`); the [`Publisher`] keeps only a
//! `Weak` to it. Dropping the subscription therefore unsubscribes, and dead
//! entries are pruned lazily on the next publish. Explicit
//! [`Publisher::unsubscribe`] prunes eagerly.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. A dropped or unsubscribed handler is never called again.
//! 3. One call to [`Publisher::publish`] calls each live handler exactly once.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = RefCell<Box<dyn FnMut(&T)>>;

/// Identifier of a registered handler, unique per publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw id value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// RAII guard for a registered handler. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes the handler"]
pub struct Subscription<T: ?Sized> {
    id: SubscriptionId,
    _callback: Rc<Callback<T>>,
}

impl<T: ?Sized> Subscription<T> {
    /// Id assigned at subscribe time.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl<T: ?Sized> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Synchronous fan-out of `&T` to registered handlers.
pub struct Publisher<T: ?Sized> {
    subscribers: Vec<(SubscriptionId, Weak<Callback<T>>)>,
    next_id: u64,
}

impl<T: ?Sized> Publisher<T> {
    /// Publisher with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register `handler`; it stays registered while the returned guard lives.
    pub fn subscribe(&mut self, handler: impl FnMut(&T) + 'static) -> Subscription<T> {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let boxed: Box<dyn FnMut(&T)> = Box::new(handler);
        let callback: Rc<Callback<T>> = Rc::new(RefCell::new(boxed));
        self.subscribers.push((id, Rc::downgrade(&callback)));
        tracing::trace!(subscription = id.get(), "subscribed");

        Subscription {
            id,
            _callback: callback,
        }
    }

    /// Remove a handler now. Returns `false` if it belonged to another publisher.
    pub fn unsubscribe(&mut self, subscription: Subscription<T>) -> bool {
        let before = self.subscribers.len();
        let target = Rc::as_ptr(&subscription._callback);
        self.subscribers
            .retain(|(id, weak)| !(*id == subscription.id && std::ptr::eq(weak.as_ptr(), target)));
        let removed = self.subscribers.len() != before;
        tracing::trace!(subscription = subscription.id.get(), removed, "unsubscribed");
        removed
    }

    /// Call every live handler once with `value`. Returns how many ran.
    ///
    /// Each handler is upgraded just before it runs, so a subscription
    /// dropped by an earlier handler in the same publish is skipped.
    pub fn publish(&mut self, value: &T) -> usize {
        self.subscribers.retain(|(_, weak)| weak.strong_count() > 0);

        let pending: Vec<Weak<Callback<T>>> = self
            .subscribers
            .iter()
            .map(|(_, weak)| Weak::clone(weak))
            .collect();

        let mut called = 0;
        for weak in &pending {
            let Some(callback) = weak.upgrade() else {
                continue;
            };
            let mut handler = callback.borrow_mut();
            (&mut *handler)(value);
            called += 1;
        }
        called
    }

    /// Number of handlers whose guard is still alive.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }
}

impl<T: ?Sized> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
