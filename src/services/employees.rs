//! Employee Directory Service
//!
//! Access to the remote employee collection: a plain REST resource keyed
//! by identifier. The trait is the seam the controller is generic over;
//! `RestDirectory` is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::employee::Employee;
use crate::error::{Error, Result};

/// Abstraction over the remote employee collection.
///
/// Pagination is entirely client-side, so fetches always return the full
/// (optionally name-filtered) collection.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Fetch all employees, optionally filtered by name
    async fn fetch_all(&self, name_match: Option<&str>) -> Result<Vec<Employee>>;

    /// Insert a new employee; the store assigns the id
    async fn create(&self, employee: &Employee) -> Result<Employee>;

    /// Replace an existing employee record wholesale
    async fn update(&self, employee: &Employee) -> Result<Employee>;

    /// Delete an employee by id
    async fn delete(&self, id: i64) -> Result<()>;
}

/// REST-backed employee directory
#[derive(Debug, Clone)]
pub struct RestDirectory {
    client: Client,
    base_url: String,
}

impl RestDirectory {
    /// Create a directory client for the given resource base URL
    /// (e.g. `http://localhost:3000/posts`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl EmployeeDirectory for RestDirectory {
    async fn fetch_all(&self, name_match: Option<&str>) -> Result<Vec<Employee>> {
        let mut request = self.client.get(&self.base_url);
        if let Some(name) = name_match {
            request = request.query(&[("name", name)]);
        }

        debug!(filter = ?name_match, "fetching employee collection");
        let employees = request
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Employee>>()
            .await?;
        Ok(employees)
    }

    async fn create(&self, employee: &Employee) -> Result<Employee> {
        let created = self
            .client
            .post(&self.base_url)
            .json(employee)
            .send()
            .await?
            .error_for_status()?
            .json::<Employee>()
            .await?;
        Ok(created)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee> {
        let id = employee.id.ok_or_else(|| Error::Invalid {
            message: "cannot update an employee without an id".to_string(),
        })?;

        let updated = self
            .client
            .put(self.record_url(id))
            .json(employee)
            .send()
            .await?
            .error_for_status()?
            .json::<Employee>()
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(self.record_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query, State};
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    type Store = Arc<Mutex<Vec<Employee>>>;

    async fn list(
        State(store): State<Store>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<Vec<Employee>> {
        let store = store.lock().expect("store lock");
        let employees = match params.get("name") {
            Some(name) => store
                .iter()
                .filter(|e| e.name.contains(name.as_str()))
                .cloned()
                .collect(),
            None => store.clone(),
        };
        Json(employees)
    }

    async fn create(
        State(store): State<Store>,
        Json(mut employee): Json<Employee>,
    ) -> Json<Employee> {
        let mut store = store.lock().expect("store lock");
        let next_id = store.iter().filter_map(|e| e.id).max().unwrap_or(0) + 1;
        employee.id = Some(next_id);
        store.push(employee.clone());
        Json(employee)
    }

    async fn replace(
        State(store): State<Store>,
        Path(id): Path<i64>,
        Json(employee): Json<Employee>,
    ) -> Json<Employee> {
        let mut store = store.lock().expect("store lock");
        if let Some(slot) = store.iter_mut().find(|e| e.id == Some(id)) {
            *slot = employee.clone();
        }
        Json(employee)
    }

    async fn remove(State(store): State<Store>, Path(id): Path<i64>) -> Json<serde_json::Value> {
        let mut store = store.lock().expect("store lock");
        store.retain(|e| e.id != Some(id));
        Json(serde_json::json!({}))
    }

    async fn spawn_server(seed: Vec<Employee>) -> (SocketAddr, Store) {
        let store: Store = Arc::new(Mutex::new(seed));
        let app = Router::new()
            .route("/posts", get(list).post(create))
            .route("/posts/:id", put(replace).delete(remove))
            .with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        (addr, store)
    }

    fn seed() -> Vec<Employee> {
        vec![
            Employee {
                id: Some(1),
                name: "Maria Gonzalez".to_string(),
                ..Employee::default()
            },
            Employee {
                id: Some(2),
                name: "Jun Park".to_string(),
                ..Employee::default()
            },
        ]
    }

    fn directory(addr: SocketAddr) -> RestDirectory {
        RestDirectory::new(
            format!("http://{addr}/posts"),
            Duration::from_secs(5),
        )
        .expect("build directory")
    }

    #[tokio::test]
    async fn test_fetch_all_without_filter() {
        let (addr, _store) = spawn_server(seed()).await;
        let directory = directory(addr);

        let employees = directory.fetch_all(None).await.expect("fetch");
        assert_eq!(employees.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_with_name_filter() {
        let (addr, _store) = spawn_server(seed()).await;
        let directory = directory(addr);

        let employees = directory.fetch_all(Some("Maria")).await.expect("fetch");
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, Some(1));
    }

    #[tokio::test]
    async fn test_create_returns_server_assigned_id() {
        let (addr, store) = spawn_server(seed()).await;
        let directory = directory(addr);

        let draft = Employee {
            name: "New Hire".to_string(),
            ..Employee::default()
        };
        let created = directory.create(&draft).await.expect("create");

        assert_eq!(created.id, Some(3));
        assert_eq!(store.lock().expect("store lock").len(), 3);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let (addr, store) = spawn_server(seed()).await;
        let directory = directory(addr);

        let changed = Employee {
            id: Some(2),
            name: "Jun Park".to_string(),
            salary: 4200.0,
            ..Employee::default()
        };
        directory.update(&changed).await.expect("update");

        let store = store.lock().expect("store lock");
        let record = store.iter().find(|e| e.id == Some(2)).expect("record");
        assert_eq!(record.salary, 4200.0);
    }

    #[tokio::test]
    async fn test_update_without_id_is_invalid() {
        let (addr, _store) = spawn_server(seed()).await;
        let directory = directory(addr);

        let err = directory
            .update(&Employee::default())
            .await
            .expect_err("must fail");
        assert!(matches!(err, Error::Invalid { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let (addr, store) = spawn_server(seed()).await;
        let directory = directory(addr);

        directory.delete(1).await.expect("delete");
        assert_eq!(store.lock().expect("store lock").len(), 1);
    }

    #[tokio::test]
    async fn test_http_error_status_maps_to_error() {
        let (addr, _store) = spawn_server(seed()).await;
        let directory = RestDirectory::new(
            format!("http://{addr}/not-here"),
            Duration::from_secs(5),
        )
        .expect("build directory");

        let err = directory.fetch_all(None).await.expect_err("must fail");
        assert!(matches!(err, Error::Http { .. }));
    }
}
