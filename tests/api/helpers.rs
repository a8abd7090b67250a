use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex, OnceLock,
    },
};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use leadcap::{
    init_dbg_tracing,
    model::{NewRegistration, Registration, RegistrationStore, Registry, StoreError, StoreResult},
    App, AppState, Transport,
};
use reqwest::Response;
use serde_json::Value;
use tokio::net::TcpListener;

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

/// Set `TEST_LOG` to see the application logs while running the tests.
fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_dbg_tracing();
        }
    });
}

// ###################################
// ->   IN MEMORY STORE
// ###################################

/// A `RegistrationStore` that keeps rows in memory, counts every call that reaches it
/// and can be switched into a failing state.
#[derive(Clone, Default)]
pub struct MemoryStore(Arc<MemoryStoreInner>);

#[derive(Default)]
pub struct MemoryStoreInner {
    rows: Mutex<Vec<Registration>>,
    hits: AtomicUsize,
    down: AtomicBool,
}

impl MemoryStore {
    pub fn hits(&self) -> usize {
        self.0.hits.load(Ordering::SeqCst)
    }

    pub fn row_count(&self) -> usize {
        self.0.rows.lock().expect("poisoned").len()
    }

    pub fn set_down(&self, down: bool) {
        self.0.down.store(down, Ordering::SeqCst);
    }

    fn enter(&self) -> sqlx::Result<()> {
        self.0.hits.fetch_add(1, Ordering::SeqCst);
        if self.0.down.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn ping(&self) -> sqlx::Result<()> {
        self.enter()
    }

    async fn create_schema(&self) -> sqlx::Result<()> {
        self.enter()
    }

    async fn insert(&self, registration: &NewRegistration) -> StoreResult<Registration> {
        self.enter()?;
        let mut rows = self.0.rows.lock().expect("poisoned");
        if rows.iter().any(|row| row.email == registration.email()) {
            return Err(StoreError::UniqueViolation);
        }

        let row = Registration {
            id: rows.len() as i32 + 1,
            email: registration.email().to_string(),
            contact: registration.contact().map(str::to_string),
            created_at: Utc::now().naive_utc(),
        };
        rows.push(row.clone());

        Ok(row)
    }

    async fn fetch_all(&self) -> sqlx::Result<Vec<Registration>> {
        self.enter()?;
        let mut rows = self.0.rows.lock().expect("poisoned").clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(rows)
    }
}

// ###################################
// ->   TEST APP
// ###################################
pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: reqwest::Client,
    pub store: MemoryStore,
}

impl TestApp {
    /// Spawns the method routed server.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(Transport::Server, None).await
    }

    /// A helper function that serves the app on a separate task backed by a fresh `MemoryStore`.
    pub async fn spawn_with(transport: Transport, static_dir: Option<PathBuf>) -> Result<Self> {
        init_test_subscriber();

        let store = MemoryStore::default();
        let registry = Registry::new(store.clone());
        registry.ensure_schema().await;

        let listener = TcpListener::bind(TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;
        let app = App::new(AppState::new(registry), listener).with_static_dir(static_dir);

        tokio::spawn(leadcap::serve(app, transport));

        Ok(TestApp {
            addr,
            http_client: reqwest::Client::new(),
            store,
        })
    }

    pub fn interested_url(&self) -> String {
        format!("http://{}/api/interested", self.addr)
    }

    pub async fn post_interested(&self, body: &Value) -> reqwest::Result<Response> {
        self.http_client
            .post(self.interested_url())
            .json(body)
            .send()
            .await
    }

    pub async fn get_interested(&self) -> reqwest::Result<Response> {
        self.http_client.get(self.interested_url()).send().await
    }
}
