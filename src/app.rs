use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::components::chart::{ChartAction, ChartReducer, ChartState, ChartStateService};
use crate::components::sidebar::{
    SidebarAction, SidebarReducer, SidebarState, SidebarStateService,
};
use crate::environment::types::Settings;
use crate::environment::Environment;
use crate::store::{LogMiddleware, Reducer, Store};

pub type AppStore = Store<AppReducer>;

/// Root state, one field per registered slice
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub chart: ChartState,
    pub sidebar: SidebarState,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            chart: ChartState::with_range(settings.default_range.clone()),
            sidebar: SidebarState::new(settings.sidebar),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    /// Dispatched once when the store is created. No slice reacts to it.
    Init,
    Chart(ChartAction),
    Sidebar(SidebarAction),
}

impl From<ChartAction> for AppAction {
    fn from(value: ChartAction) -> Self {
        AppAction::Chart(value)
    }
}

impl From<SidebarAction> for AppAction {
    fn from(value: SidebarAction) -> Self {
        AppAction::Sidebar(value)
    }
}

/// Routes every action to the slice it belongs to. Slices that are not
/// addressed keep their previous value.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;

    type Action = AppAction;

    fn reduce(state: &AppState, action: &AppAction) -> Option<AppState> {
        match action {
            AppAction::Init => None,
            AppAction::Chart(action) => {
                ChartReducer::reduce(&state.chart, action).map(|chart| AppState {
                    chart,
                    ..state.clone()
                })
            }
            AppAction::Sidebar(action) => {
                SidebarReducer::reduce(&state.sidebar, action).map(|sidebar| AppState {
                    sidebar,
                    ..state.clone()
                })
            }
        }
    }

    fn initial_action() -> Option<AppAction> {
        Some(AppAction::Init)
    }
}

/// Application root. Owns the store and hands it to the services.
pub struct App {
    environment: Environment,
    store: Rc<AppStore>,
    pub chart: ChartStateService,
    pub sidebar: SidebarStateService,
}

impl App {
    pub fn new(environment: Environment) -> Self {
        let settings = environment.repository.settings().unwrap_or_else(|e| {
            log::error!("Could not read settings: {e}");
            Settings::default()
        });
        let store = Rc::new(AppStore::new(AppState::from_settings(&settings)));
        store.add_middleware(Box::new(LogMiddleware));
        Self {
            chart: ChartStateService::new(store.clone()),
            sidebar: SidebarStateService::new(store.clone()),
            store,
            environment,
        }
    }

    pub fn store(&self) -> &Rc<AppStore> {
        &self.store
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Remember the current range and sidebar for the next start
    pub fn persist(&self) -> Result<(), String> {
        let state = self.store.state();
        self.environment.repository.map_settings(|settings| {
            settings.default_range = state.chart.range.clone();
            settings.sidebar = state.sidebar.kind();
        })
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("environment", &self.environment)
            .field("store", &self.store)
            .finish()
    }
}

pub fn init_logging() -> Result<(), String> {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .try_init()
        .map_err(|e| format!("Could not install logger: {e:?}"))
}
