use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Identifies one registered callback inside a `Subject` or `Store`.
pub type SubscriberId = u64;

/// Anything a `Subscription` can detach itself from.
pub trait Unsubscribe {
    fn unsubscribe(&self, id: SubscriberId);
}

/// Handle returned for every registered callback. Dropping it keeps the
/// callback alive for the lifetime of the publisher, `unsubscribe` removes it.
#[must_use = "dropping a subscription keeps the callback registered forever"]
pub struct Subscription {
    id: SubscriberId,
    source: Weak<dyn Unsubscribe>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriberId, source: Weak<dyn Unsubscribe>) -> Self {
        Self { id, source }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Stop delivery to this subscriber. Other subscribers are unaffected.
    pub fn unsubscribe(self) {
        if let Some(source) = self.source.upgrade() {
            source.unsubscribe(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

type Callback<T> = Rc<dyn Fn(&T)>;

pub(crate) struct Registry<T> {
    next_id: Cell<SubscriberId>,
    callbacks: RefCell<Vec<(SubscriberId, Callback<T>)>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            callbacks: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Registry<T> {
    pub(crate) fn register(&self, callback: Callback<T>) -> SubscriberId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.callbacks.borrow_mut().push((id, callback));
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    /// Calls every callback registered at the time of the call. The list is
    /// snapshotted first so callbacks may subscribe or unsubscribe.
    pub(crate) fn notify(&self, value: &T) {
        let snapshot: Vec<(SubscriberId, Callback<T>)> = self.callbacks.borrow().clone();
        for (id, callback) in snapshot {
            // skip subscribers removed by an earlier callback of this round
            if self.contains(id) {
                callback(value);
            }
        }
    }

    fn contains(&self, id: SubscriberId) -> bool {
        self.callbacks.borrow().iter().any(|(other, _)| *other == id)
    }
}

impl<T> Unsubscribe for Registry<T> {
    fn unsubscribe(&self, id: SubscriberId) {
        self.callbacks.borrow_mut().retain(|(other, _)| *other != id);
    }
}

/// A value that replays itself to new subscribers and only publishes
/// changes. Comparison is `PartialEq`, so structurally equal values
/// in a new allocation are not re-emitted.
pub struct Subject<T> {
    value: RefCell<T>,
    registry: Rc<Registry<T>>,
}

impl<T: Clone + PartialEq + 'static> Subject<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            registry: Rc::new(Registry::default()),
        }
    }

    /// The last published value
    pub fn value(&self) -> T {
        self.value.borrow().clone()
    }

    /// Publish `value` if it differs from the last one. Returns whether
    /// subscribers were notified.
    pub fn next(&self, value: T) -> bool {
        if *self.value.borrow() == value {
            return false;
        }
        *self.value.borrow_mut() = value.clone();
        self.registry.notify(&value);
        true
    }

    /// Register `callback`. It is invoked right away with the current
    /// value and afterwards on every change.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(callback);
        let id = self.registry.register(callback.clone());
        let current = self.value();
        callback(&current);
        let registry: Rc<dyn Unsubscribe> = self.registry.clone();
        Subscription::new(id, Rc::downgrade(&registry))
    }

    /// Channel backed subscription. The receiver holds the current value
    /// right away. Once the receiver is dropped the subscriber is removed
    /// on the next emission.
    pub fn receiver(&self) -> flume::Receiver<T> {
        let (sender, receiver) = flume::unbounded();
        let registry = Rc::downgrade(&self.registry);
        let own_id: Rc<Cell<Option<SubscriberId>>> = Rc::new(Cell::new(None));
        let inner_id = own_id.clone();
        let subscription = self.subscribe(move |value: &T| {
            if sender.send(value.clone()).is_ok() {
                return;
            }
            if let (Some(registry), Some(id)) = (registry.upgrade(), inner_id.get()) {
                log::debug!("receiver {id} dropped, removing subscriber");
                registry.unsubscribe(id);
            }
        });
        own_id.set(Some(subscription.id()));
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("value", &self.value.borrow())
            .field("subscribers", &self.registry.len())
            .finish()
    }
}
