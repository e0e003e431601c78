/// A pure state transition.
///
/// `reduce` returns `None` when the action is not handled by this reducer.
/// The store then keeps the previous state value as-is and does not notify
/// anybody, which is what lets unrelated actions pass without emissions.
pub trait Reducer {
    type State: Clone + std::fmt::Debug;

    type Action: Clone + std::fmt::Debug;

    fn reduce(state: &Self::State, action: &Self::Action) -> Option<Self::State>;

    /// Dispatched by the store right after construction, if any
    fn initial_action() -> Option<Self::Action> {
        None
    }
}
