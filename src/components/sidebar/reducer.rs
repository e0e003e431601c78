use super::state::{SidebarState, SidebarType};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SidebarAction {
    ChangeType(SidebarType),
}

pub fn reduce(state: &SidebarState, action: &SidebarAction) -> Option<SidebarState> {
    log::trace!("{action:?}");
    match action {
        SidebarAction::ChangeType(kind) => Some(state.with_type(*kind)),
    }
}
