use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const TODOS_PATH: &str = "/api/v1/todos";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub tasks: Vec<Task>,
}

/// List envelope: `{ "todos": [...] }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Catalogue {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub messages: Vec<String>,
    pub path: String,
    pub timestamp: String,
}

/// Read-only store; seed order is the order the list endpoint returns.
pub type Db = Arc<Vec<Todo>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(todos);
    Router::new()
        .route(TODOS_PATH, get(list_todos))
        .route(&format!("{TODOS_PATH}/{{id}}"), get(get_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener, todos: Vec<Todo>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(todos)).await
}

/// A handful of todos so a standalone server has something to show.
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            name: "Make lunch".to_string(),
            description: "Pasta with cevapcici".to_string(),
            tasks: vec![
                Task {
                    name: "Make salad".to_string(),
                    description: Some("Rucola and tomatoes".to_string()),
                },
                Task {
                    name: "Boil pasta".to_string(),
                    description: None,
                },
            ],
        },
        Todo {
            id: 2,
            name: "Buy milk".to_string(),
            description: "2%".to_string(),
            tasks: Vec::new(),
        },
    ]
}

async fn list_todos(State(db): State<Db>) -> Json<Catalogue> {
    Json(Catalogue {
        todos: db.as_ref().clone(),
    })
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Todo>, (StatusCode, Json<ErrorResponse>)> {
    db.iter()
        .find(|todo| todo.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            let status = StatusCode::NOT_FOUND;
            (
                status,
                Json(ErrorResponse {
                    status: status.as_u16(),
                    error: "Not Found".to_string(),
                    messages: vec![format!("Todo with id {id} not found")],
                    path: uri.path().to_string(),
                    timestamp: chrono::Utc::now().to_rfc3339(),
                }),
            )
        })
}
