use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::AppConfig, database::DbManager, model::Registry, Result};

// ###################################
// ->  Structs
// ###################################

/// Which adapter maps HTTP onto the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    /// Method routed server, also serves the health check and static files.
    Server,
    /// A single handler dispatching on the request method.
    Function,
}

pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
    pub static_dir: Option<PathBuf>,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, static_dir: Option<PathBuf>) -> Self {
        self.static_dir = static_dir;
        self
    }

    /// Binds the listener, wires the Postgres backed registry and starts the
    /// connectivity check and schema creation in the background.
    /// The listener is bound before the database is touched, an unreachable or slow
    /// database only gets logged and never delays the start up.
    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let dm = DbManager::init(&config);
        let registry = Registry::new(dm);
        tokio::spawn({
            let registry = registry.clone();
            async move {
                registry.probe().await;
                registry.ensure_schema().await;
            }
        });

        let app_state = AppState::new(registry);
        let app = App::new(app_state, listener).with_static_dir(config.net_config.static_dir);
        Ok(app)
    }
}

pub struct InternalState {
    pub registry: Registry,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(registry: Registry) -> Self {
        AppState(Arc::new(InternalState { registry }))
    }
}
