mod action;
mod reducer;
mod service;
mod state;

pub use action::ChartAction;
pub use reducer::reduce;
pub use service::ChartStateService;
pub use state::{ChartData, ChartState, DEFAULT_RANGE};

pub struct ChartReducer;
use crate::store::Reducer;

impl Reducer for ChartReducer {
    type State = state::ChartState;

    type Action = action::ChartAction;

    fn reduce(state: &Self::State, action: &Self::Action) -> Option<Self::State> {
        reducer::reduce(state, action)
    }
}
