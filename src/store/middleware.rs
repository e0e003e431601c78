use std::cell::RefCell;
use std::rc::Rc;

/// Sees every dispatched action before the reducer does.
pub trait Middleware<A, S> {
    /// Return `false` to consume the action so it never reaches the reducer.
    fn handle(&mut self, action: &A, state: &S) -> bool;
}

/// Logs every action together with the state it is applied to.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMiddleware;

impl<A: std::fmt::Debug, S: std::fmt::Debug> Middleware<A, S> for LogMiddleware {
    fn handle(&mut self, action: &A, state: &S) -> bool {
        log::trace!("dispatch {action:?} on {state:?}");
        true
    }
}

/// Keeps a copy of every action passing through. The recorded list is
/// shared, so a clone kept outside the store sees what the store saw.
#[derive(Debug, Clone)]
pub struct RecordingMiddleware<A> {
    actions: Rc<RefCell<Vec<A>>>,
}

impl<A> Default for RecordingMiddleware<A> {
    fn default() -> Self {
        Self {
            actions: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<A: Clone> RecordingMiddleware<A> {
    pub fn actions(&self) -> Vec<A> {
        self.actions.borrow().clone()
    }

    pub fn clear(&self) {
        self.actions.borrow_mut().clear();
    }
}

impl<A: Clone, S> Middleware<A, S> for RecordingMiddleware<A> {
    fn handle(&mut self, action: &A, _state: &S) -> bool {
        self.actions.borrow_mut().push(action.clone());
        true
    }
}
