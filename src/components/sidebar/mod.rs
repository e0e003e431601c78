mod reducer;
mod service;
mod state;

pub use reducer::{reduce, SidebarAction};
pub use service::SidebarStateService;
pub use state::{SidebarState, SidebarType};

pub struct SidebarReducer;
use crate::store::Reducer;

impl Reducer for SidebarReducer {
    type State = state::SidebarState;

    type Action = reducer::SidebarAction;

    fn reduce(state: &Self::State, action: &Self::Action) -> Option<Self::State> {
        reducer::reduce(state, action)
    }
}
