//! Async data-access service for todos.

use std::sync::Arc;

use todolist_core::{ApiError, HttpRequest, HttpResponse, Todo, TodoClient};
use tracing::debug;

use crate::transport::Transport;

/// Wraps a `TodoClient` and a transport into async one-shot reads.
///
/// Every call performs exactly one HTTP request. Errors are handed back
/// untouched: no retry, no timeout, no mapping.
pub struct TodoService<T> {
    client: TodoClient,
    transport: Arc<T>,
}

impl<T> Clone for TodoService<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport + 'static> TodoService<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport: Arc::new(transport),
        }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    /// Fetch the full list, envelope already unwrapped.
    pub async fn get_todo_list(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.round_trip(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    pub async fn get_todo(&self, id: i64) -> Result<Todo, ApiError> {
        let response = self.round_trip(self.client.build_get_todo(id)).await?;
        self.client.parse_get_todo(response)
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.path, "sending request");
        let transport = Arc::clone(&self.transport);
        let response = tokio::task::spawn_blocking(move || transport.execute(request))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))??;
        debug!(status = response.status, bytes = response.body.len(), "response received");
        Ok(response)
    }
}
