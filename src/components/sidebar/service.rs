use std::rc::Rc;

use super::reducer::SidebarAction;
use super::state::SidebarType;
use crate::app::{AppState, AppStore};
use crate::store::{Selection, Stream};

pub struct SidebarStateService {
    store: Rc<AppStore>,
    kind: Selection<SidebarType>,
}

impl SidebarStateService {
    pub fn new(store: Rc<AppStore>) -> Self {
        Self {
            kind: store.select(|s: &AppState| s.sidebar.kind()),
            store,
        }
    }

    pub fn kind(&self) -> &Stream<SidebarType> {
        self.kind.stream()
    }

    pub fn change_type(&self, kind: SidebarType) {
        self.store.dispatch(SidebarAction::ChangeType(kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::chart::ChartAction;

    #[test]
    fn streams_sidebar_type() {
        let store = Rc::new(AppStore::new(AppState::default()));
        let service = SidebarStateService::new(store.clone());
        let receiver = service.kind().receiver();

        service.change_type(SidebarType::Edit);
        service.change_type(SidebarType::Edit);
        store.dispatch(ChartAction::fetch_loader(true));
        service.change_type(SidebarType::List);

        let values: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            values,
            vec![SidebarType::List, SidebarType::Edit, SidebarType::List]
        );
    }
}
