//! In-memory store used to drive the router without MySQL

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use empdb_server::{build_router, AppState, DbError, EmployeeStore, ListFormat, NewEmployee};
use tower::ServiceExt;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredEmployee {
    pub name: String,
    pub position: String,
    pub salary: f64,
}

/// How the fake database behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Up,
    Unreachable,
    Failing,
}

pub struct MemoryStore {
    rows: Mutex<Vec<StoredEmployee>>,
    backend: Backend,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new(backend: Backend) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            backend,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn with_names(names: &[&str]) -> Arc<Self> {
        let store = Self::new(Backend::Up);
        {
            let mut rows = store.rows.lock().unwrap();
            for name in names {
                rows.push(StoredEmployee {
                    name: name.to_string(),
                    position: "Staff".into(),
                    salary: 1000.0,
                });
            }
        }
        store
    }

    pub fn rows(&self) -> Vec<StoredEmployee> {
        self.rows.lock().unwrap().clone()
    }

    /// Number of store operations attempted, successful or not
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.backend {
            Backend::Up => Ok(()),
            Backend::Unreachable => Err(DbError::NotConfigured("MYSQL_DATABASE_HOST")),
            Backend::Failing => Err(DbError::Query(sqlx::Error::Protocol(
                "Table 'company.employees' doesn't exist".into(),
            ))),
        }
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn list_names(&self) -> Result<Vec<String>, DbError> {
        self.check()?;
        Ok(self.rows().into_iter().map(|e| e.name).collect())
    }

    async fn add(&self, employee: &NewEmployee) -> Result<(), DbError> {
        self.check()?;
        self.rows.lock().unwrap().push(StoredEmployee {
            name: employee.name.as_str().to_owned(),
            position: employee.position.as_str().to_owned(),
            salary: employee.salary.amount(),
        });
        Ok(())
    }
}

pub fn app(store: Arc<MemoryStore>, format: ListFormat) -> Router {
    build_router(AppState::new(store, format))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, request).await
}
