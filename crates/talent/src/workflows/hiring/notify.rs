//! Instance-scoped, synchronous observer lists.
//!
//! Every publisher (headhunter, company, employee) owns its own [`Notifier`]; there is no global
//! bus. `publish` runs each handler inline, in subscription order, before returning. The handler
//! list is snapshotted at the start of a publish, so handlers may subscribe or unsubscribe
//! reentrantly and the change applies from the next publish onwards.
//!
//! Handlers are not isolated: a panicking handler unwinds through `publish` and into whatever
//! operation triggered the notification.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

/// Token returned by [`Notifier::subscribe`]; hand it back to `unsubscribe` to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SubscriptionId(u64);

type Handler<E> = Rc<dyn Fn(&E)>;

struct Subscriber<E> {
    id: SubscriptionId,
    handler: Handler<E>,
}

pub struct Notifier<E> {
    subscribers: RefCell<Vec<Subscriber<E>>>,
    next_id: Cell<u64>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            handler: Rc::new(handler),
        });
        id
    }

    /// Detach a subscriber. Returns `false` when the token is unknown or already detached.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|subscriber| subscriber.id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Deliver `event` to every current subscriber. Returns how many handlers ran.
    pub fn publish(&self, event: &E) -> usize {
        let handlers: Vec<Handler<E>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|subscriber| Rc::clone(&subscriber.handler))
            .collect();

        for handler in &handlers {
            handler(event);
        }

        handlers.len()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
