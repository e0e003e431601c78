pub mod app;
pub mod components;
pub mod environment;
pub mod store;

pub use app::{init_logging, App, AppAction, AppReducer, AppState, AppStore};
pub use components::chart::{ChartAction, ChartData, ChartState, ChartStateService};
pub use components::sidebar::{SidebarAction, SidebarState, SidebarStateService, SidebarType};
pub use environment::{Environment, Repository};
pub use store::{Listener, Reducer, Store, Stream, Subscription};
