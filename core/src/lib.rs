//! Request builder and response parser for the todolist API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round trip, which
//! keeps this crate deterministic and testable without a server.
//!
//! # Design
//! - `TodoClient` holds only the endpoint URL.
//! - Each read is split into `build_*` (produces a request) and `parse_*`
//!   (consumes a response), so the I/O boundary is explicit.
//! - The list endpoint wraps its payload in a `{ "todos": [...] }` envelope;
//!   `parse_list_todos` unwraps it so callers only ever see `Vec<Todo>`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ErrorResponse, Task, Todo, TodoCatalogue};
