mod middleware;
mod publisher;
mod reducer;

pub use middleware::{LogMiddleware, Middleware, RecordingMiddleware};
pub use publisher::{Subject, SubscriberId, Subscription, Unsubscribe};
pub use reducer::Reducer;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use publisher::Registry;

type BoxedMiddleware<R> =
    Box<dyn Middleware<<R as Reducer>::Action, <R as Reducer>::State>>;

/// Central holder of the application state.
///
/// The store is single threaded and meant to be created once by the
/// application root and handed around as `Rc<Store<_>>`. A dispatch runs
/// the middleware chain, the reducer and all listeners before it returns.
/// Actions dispatched from inside a listener are queued and processed
/// before the outer `dispatch` returns.
pub struct Store<R: Reducer> {
    state: RefCell<R::State>,
    listeners: Rc<Registry<R::State>>,
    middleware: RefCell<Vec<BoxedMiddleware<R>>>,
    pending: RefCell<VecDeque<R::Action>>,
    dispatching: Cell<bool>,
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: 'static,
{
    pub fn new(initial: R::State) -> Self {
        let store = Self {
            state: RefCell::new(initial),
            listeners: Rc::new(Registry::default()),
            middleware: RefCell::new(Vec::new()),
            pending: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
        };
        if let Some(action) = R::initial_action() {
            store.dispatch(action);
        }
        store
    }

    /// A copy of the current state snapshot
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    pub fn with<T>(&self, action: impl FnOnce(&R::State) -> T) -> T {
        action(&self.state.borrow())
    }

    pub fn add_middleware(&self, middleware: Box<dyn Middleware<R::Action, R::State>>) {
        self.middleware.borrow_mut().push(middleware);
    }

    pub fn dispatch(&self, action: impl Into<R::Action>) {
        self.pending.borrow_mut().push_back(action.into());
        if self.dispatching.get() {
            log::trace!("dispatch queued while another dispatch is running");
            return;
        }
        let _guard = DispatchGuard::enter(&self.dispatching);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            self.process(action);
        }
    }

    fn process(&self, action: R::Action) {
        log::trace!("{action:?}");
        let should_reduce = {
            let state = self.state.borrow();
            let mut chain = self.middleware.borrow_mut();
            chain.iter_mut().all(|m| m.handle(&action, &state))
        };
        if !should_reduce {
            log::debug!("action consumed by middleware: {action:?}");
            return;
        }

        let next = R::reduce(&self.state.borrow(), &action);
        let Some(next) = next else {
            return;
        };
        *self.state.borrow_mut() = next.clone();
        self.listeners.notify(&next);
    }

    /// Register a raw listener, called with the new state after every
    /// state replacement. Unlike streams it does not replay the current
    /// state and does not deduplicate. The listener is removed when the
    /// returned handle is dropped.
    pub fn listen(&self, callback: impl Fn(&R::State) + 'static) -> Listener {
        let id = self.listeners.register(Rc::new(callback));
        let registry: Rc<dyn Unsubscribe> = self.listeners.clone();
        Listener {
            subscription: Some(Subscription::new(id, Rc::downgrade(&registry))),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Project one slice of the state into a replaying, deduplicating
    /// stream. The stream stays attached to the store for as long as the
    /// returned `Selection` lives.
    pub fn select<T>(&self, projection: impl Fn(&R::State) -> T + 'static) -> Selection<T>
    where
        T: Clone + PartialEq + 'static,
    {
        let subject = Rc::new(Subject::new(self.with(&projection)));
        let target = subject.clone();
        let listener = self.listen(move |state| {
            target.next(projection(state));
        });
        Selection {
            stream: Stream { subject },
            _listener: listener,
        }
    }
}

/// Clears the dispatching flag even when a reducer, middleware or
/// listener panics, so later dispatches are not stuck in the queue.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Store listener registration. Dropping it removes the listener.
#[must_use = "dropping a listener removes it from the store"]
pub struct Listener {
    subscription: Option<Subscription>,
}

impl Listener {
    pub fn id(&self) -> Option<SubscriberId> {
        self.subscription.as_ref().map(Subscription::id)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").field("id", &self.id()).finish()
    }
}

impl<R: Reducer> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state.borrow())
            .field("listeners", &self.listeners.len())
            .field("middleware", &self.middleware.borrow().len())
            .finish()
    }
}

/// Read-only view on a `Subject`: subscribers get the current value on
/// subscription and every distinct change afterwards. A stream never
/// errors and never completes on its own.
pub struct Stream<T> {
    subject: Rc<Subject<T>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Stream<T> {
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.subject.subscribe(callback)
    }

    pub fn receiver(&self) -> flume::Receiver<T> {
        self.subject.receiver()
    }

    pub fn value(&self) -> T {
        self.subject.value()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Stream").field(&self.subject).finish()
    }
}

/// A `Stream` bound to a store listener. Dropping it detaches the listener.
pub struct Selection<T> {
    stream: Stream<T>,
    _listener: Listener,
}

impl<T> Selection<T> {
    pub fn stream(&self) -> &Stream<T> {
        &self.stream
    }
}
