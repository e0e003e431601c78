use std::rc::Rc;

use im::Vector;

use super::action::ChartAction;
use super::state::ChartData;
use crate::app::{AppState, AppStore};
use crate::store::{Selection, Stream};

/// Per-field streams over the chart slice plus one dispatch method per
/// chart action. Dropping the service detaches all of its streams from
/// the store.
pub struct ChartStateService {
    store: Rc<AppStore>,
    data: Selection<Vector<ChartData>>,
    loader: Selection<bool>,
    error: Selection<Option<String>>,
    point: Selection<ChartData>,
    range: Selection<String>,
}

impl ChartStateService {
    pub fn new(store: Rc<AppStore>) -> Self {
        log::debug!("attaching chart streams");
        Self {
            data: store.select(|s: &AppState| s.chart.data.clone()),
            loader: store.select(|s: &AppState| s.chart.loader),
            error: store.select(|s: &AppState| s.chart.error.clone()),
            point: store.select(|s: &AppState| s.chart.point.clone()),
            range: store.select(|s: &AppState| s.chart.range.clone()),
            store,
        }
    }

    pub fn data(&self) -> &Stream<Vector<ChartData>> {
        self.data.stream()
    }

    pub fn loader(&self) -> &Stream<bool> {
        self.loader.stream()
    }

    pub fn error(&self) -> &Stream<Option<String>> {
        self.error.stream()
    }

    pub fn point(&self) -> &Stream<ChartData> {
        self.point.stream()
    }

    pub fn range(&self) -> &Stream<String> {
        self.range.stream()
    }

    pub fn fetch_fulfilled(&self, data: impl IntoIterator<Item = ChartData>) {
        self.store.dispatch(ChartAction::fetch_fulfilled(data));
    }

    pub fn fetch_loader(&self, loader: bool) {
        self.store.dispatch(ChartAction::fetch_loader(loader));
    }

    pub fn fetch_error(&self, error: Option<String>) {
        self.store.dispatch(ChartAction::fetch_error(error));
    }

    pub fn change_point(&self, point: ChartData) {
        self.store.dispatch(ChartAction::change_point(point));
    }

    pub fn change_range(&self, range: impl Into<String>) {
        self.store.dispatch(ChartAction::change_range(range));
    }
}

impl std::fmt::Debug for ChartStateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartStateService")
            .field("data", &self.data().value().len())
            .field("loader", &self.loader().value())
            .field("error", &self.error().value())
            .field("range", &self.range().value())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppAction;
    use crate::components::sidebar::{SidebarAction, SidebarType};
    use crate::store::RecordingMiddleware;
    use std::cell::{Cell, RefCell};
    use std::fmt::Debug;

    fn setup() -> (Rc<AppStore>, ChartStateService) {
        let store = Rc::new(AppStore::new(AppState::default()));
        let service = ChartStateService::new(store.clone());
        (store, service)
    }

    fn check_stream<T>(
        select: impl Fn(&ChartStateService) -> &Stream<T>,
        action: impl Fn(T) -> ChartAction,
        initial: T,
        state1: T,
        state2: T,
    ) where
        T: Clone + PartialEq + Debug + 'static,
    {
        let (store, service) = setup();
        let count = Rc::new(Cell::new(0));
        let state: Rc<RefCell<Option<T>>> = Rc::new(RefCell::new(None));

        let (inner_count, inner_state) = (count.clone(), state.clone());
        let _subscription = select(&service).subscribe(move |value: &T| {
            inner_count.set(inner_count.get() + 1);
            *inner_state.borrow_mut() = Some(value.clone());
        });

        // replays the initial value
        assert_eq!(count.get(), 1);
        assert_eq!(*state.borrow(), Some(initial));

        store.dispatch(action(state1.clone()));
        assert_eq!(count.get(), 2);
        assert_eq!(*state.borrow(), Some(state1.clone()));

        // same value again
        store.dispatch(action(state1));
        assert_eq!(count.get(), 2);

        store.dispatch(action(state2.clone()));
        assert_eq!(count.get(), 3);
        assert_eq!(*state.borrow(), Some(state2));

        // unrelated actions
        store.dispatch(AppAction::Init);
        store.dispatch(SidebarAction::ChangeType(SidebarType::Edit));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn streams_data() {
        check_stream(
            ChartStateService::data,
            |data| ChartAction::fetch_fulfilled(data),
            Vector::new(),
            Vector::unit(ChartData::from_close(10.0)),
            Vector::unit(ChartData::from_close(20.0)),
        );
    }

    #[test]
    fn streams_loader() {
        check_stream(
            ChartStateService::loader,
            ChartAction::fetch_loader,
            false,
            true,
            false,
        );
    }

    #[test]
    fn streams_error() {
        check_stream(
            ChartStateService::error,
            ChartAction::fetch_error,
            None,
            Some("a".to_string()),
            Some("b".to_string()),
        );
    }

    #[test]
    fn streams_point() {
        check_stream(
            ChartStateService::point,
            ChartAction::change_point,
            ChartData::default(),
            ChartData::from_close(10.0),
            ChartData::from_close(20.0),
        );
    }

    #[test]
    fn streams_range() {
        check_stream(
            ChartStateService::range,
            |range| ChartAction::change_range(range),
            "3mo".to_string(),
            "a".to_string(),
            "b".to_string(),
        );
    }

    #[test]
    fn equal_data_in_a_new_vector_does_not_emit() {
        let (_store, service) = setup();
        let receiver = service.data().receiver();

        service.fetch_fulfilled(Vec::new());
        service.fetch_fulfilled(vec![ChartData::from_close(10.0)]);
        service.fetch_fulfilled(vec![ChartData::from_close(10.0)]);

        let values: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            values,
            vec![Vector::new(), Vector::unit(ChartData::from_close(10.0))]
        );
    }

    #[test]
    fn nan_point_does_not_emit_on_unrelated_updates() {
        let (_store, service) = setup();
        service.change_point(ChartData::from_close(f64::NAN));
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        let _subscription = service.point().subscribe(move |_| inner.set(inner.get() + 1));

        service.fetch_loader(true);
        service.change_range("1y");
        service.change_point(ChartData::from_close(f64::NAN));

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsubscribed_stream_stops_receiving() {
        let (_store, service) = setup();
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        let subscription = service.loader().subscribe(move |_| inner.set(inner.get() + 1));
        service.fetch_loader(true);
        subscription.unsubscribe();
        service.fetch_loader(false);
        assert_eq!(count.get(), 2);
        assert!(!service.loader().value());
    }

    #[test]
    fn dropping_the_service_detaches_from_the_store() {
        let (store, service) = setup();
        assert_eq!(store.listener_count(), 5);
        drop(service);
        assert_eq!(store.listener_count(), 0);
    }

    fn recorded(store: &AppStore) -> RecordingMiddleware<AppAction> {
        let recorder = RecordingMiddleware::default();
        store.add_middleware(Box::new(recorder.clone()));
        recorder
    }

    #[test]
    fn fetch_fulfilled_dispatches_once() {
        let (store, service) = setup();
        let recorder = recorded(&store);
        let data = vec![ChartData::from_close(10.0)];
        service.fetch_fulfilled(data.clone());
        assert_eq!(
            recorder.actions(),
            vec![AppAction::Chart(ChartAction::fetch_fulfilled(data))]
        );
    }

    #[test]
    fn fetch_loader_dispatches_once() {
        let (store, service) = setup();
        let recorder = recorded(&store);
        service.fetch_loader(true);
        assert_eq!(
            recorder.actions(),
            vec![AppAction::Chart(ChartAction::fetch_loader(true))]
        );
    }

    #[test]
    fn fetch_error_dispatches_once() {
        let (store, service) = setup();
        let recorder = recorded(&store);
        service.fetch_error(Some("a".to_string()));
        assert_eq!(
            recorder.actions(),
            vec![AppAction::Chart(ChartAction::fetch_error(Some(
                "a".to_string()
            )))]
        );
    }

    #[test]
    fn change_point_dispatches_once() {
        let (store, service) = setup();
        let recorder = recorded(&store);
        service.change_point(ChartData::from_close(10.0));
        assert_eq!(
            recorder.actions(),
            vec![AppAction::Chart(ChartAction::change_point(
                ChartData::from_close(10.0)
            ))]
        );
    }

    #[test]
    fn change_range_dispatches_once() {
        let (store, service) = setup();
        let recorder = recorded(&store);
        service.change_range("a");
        assert_eq!(
            recorder.actions(),
            vec![AppAction::Chart(ChartAction::change_range("a"))]
        );
    }
}
