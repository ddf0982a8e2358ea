//! Domain DTOs for the todolist API.
//!
//! These types mirror what the backend emits but are defined independently
//! of the mock-server crate. Integration tests catch any schema drift.

use serde::{Deserialize, Deserializer, Serialize};

/// A todo item as returned by the API. Only the server assigns `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    /// Optional on the wire; a missing or `null` value reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Kept in the order the server sent them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

/// A sub-item of a todo.
///
/// The task schema belongs to the server, so the raw JSON is kept as-is and
/// serialized back unchanged. The accessors read the fields the backend is
/// known to send without requiring them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Task(serde_json::Value);

impl Task {
    pub fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(serde_json::Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(serde_json::Value::as_str)
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Envelope returned by the list endpoint: `{ "todos": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoCatalogue {
    pub todos: Vec<Todo>,
}

/// Structured error body the backend attaches to 4xx/5xx responses.
///
/// Every field is optional so a partial payload still decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorResponse {
    pub status: Option<u16>,
    pub error: Option<String>,
    pub messages: Vec<String>,
    pub path: Option<String>,
    pub timestamp: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
