//! HTTP-backed task store
//!
//! Talks to the persistence endpoint. Every transport or status failure is
//! collapsed into the matching read/write error so the caller can fall back
//! to the local cache without inspecting the cause.

use async_trait::async_trait;

use super::model::Task;
use super::store::TaskStore;
use crate::{Error, Result};

/// Task store backed by the persistence endpoint
pub struct RemoteTaskStore {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteTaskStore {
    /// Create a store talking to the server at `base_url`,
    /// e.g. `http://127.0.0.1:8081`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }
}

#[async_trait]
impl TaskStore for RemoteTaskStore {
    async fn retrieve(&self) -> Result<Vec<Task>> {
        let resp = self
            .client
            .get(self.todos_url())
            .send()
            .await
            .map_err(Error::read)?;

        if !resp.status().is_success() {
            return Err(Error::Read(format!("HTTP {}", resp.status())));
        }

        resp.json().await.map_err(Error::read)
    }

    async fn replace(&self, tasks: &[Task]) -> Result<()> {
        let resp = self
            .client
            .post(self.todos_url())
            .json(&tasks)
            .send()
            .await
            .map_err(Error::write)?;

        if !resp.status().is_success() {
            return Err(Error::Write(format!("HTTP {}", resp.status())));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, routing::get, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    type Shared = Arc<Mutex<Value>>;

    async fn get_todos(State(state): State<Shared>) -> Json<Value> {
        Json(state.lock().unwrap().clone())
    }

    async fn post_todos(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
        *state.lock().unwrap() = body;
        Json(json!({"success": true}))
    }

    /// Spin up a minimal in-process endpoint on an ephemeral port
    async fn spawn_endpoint() -> (SocketAddr, Shared) {
        let state: Shared = Arc::new(Mutex::new(json!([])));
        let app = Router::new()
            .route("/api/todos", get(get_todos).post(post_todos))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (addr, state)
    }

    #[tokio::test]
    async fn test_replace_then_retrieve_round_trips() {
        let (addr, _state) = spawn_endpoint().await;
        let store = RemoteTaskStore::new(format!("http://{}", addr));

        let mut done = Task::new("Walk dog");
        done.completed = true;
        let tasks = vec![Task::new("Buy milk"), done];

        store.replace(&tasks).await.unwrap();
        let loaded = store.retrieve().await.unwrap();

        assert_eq!(loaded, tasks);
    }

    #[tokio::test]
    async fn test_retrieve_empty_endpoint_returns_empty_list() {
        let (addr, _state) = spawn_endpoint().await;
        let store = RemoteTaskStore::new(format!("http://{}", addr));

        assert!(store.retrieve().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_read_error_on_retrieve() {
        // Bind and immediately drop a listener to get a port nothing serves.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = RemoteTaskStore::new(format!("http://{}", addr));
        assert!(matches!(store.retrieve().await, Err(Error::Read(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_write_error_on_replace() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = RemoteTaskStore::new(format!("http://{}", addr));
        let result = store.replace(&[Task::new("Buy milk")]).await;
        assert!(matches!(result, Err(Error::Write(_))));
    }
}
