//! Stateless HTTP request builder and response parser for the todolist API.
//!
//! `TodoClient` holds only the endpoint URL and carries no mutable state
//! between calls. Each read is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorResponse, Todo, TodoCatalogue};

/// Endpoint the list view talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1/todos";

/// Stateless client for the todolist API.
///
/// `base_url` is the collection endpoint itself (`.../api/v1/todos`), not the
/// server root.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        get(self.base_url.clone())
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        get(format!("{}/{id}", self.base_url))
    }

    /// Unwrap the `{ "todos": [...] }` envelope. Order is preserved.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        let catalogue: TodoCatalogue = decode(&response.body)?;
        Ok(catalogue.todos)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: vec![("accept".to_string(), "application/json".to_string())],
        body: None,
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    let details = serde_json::from_str::<ErrorResponse>(&response.body)
        .ok()
        .filter(|d| d.status.is_some() || d.error.is_some() || !d.messages.is_empty());
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
        details,
    })
}
