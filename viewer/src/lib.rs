//! Fetch-and-render client for the todolist API.
//!
//! # Overview
//! `TodoService` performs the single "get all todos" round trip through a
//! pluggable [`Transport`]; `TodoListView` activates once, stores what the
//! service returns and renders it as a text table.
//!
//! # Design
//! - Request building and response parsing stay in `todolist-core`; this
//!   crate only adds I/O.
//! - The blocking ureq call runs on tokio's blocking pool so the async caller
//!   never blocks its worker.
//! - Failures reach the view as `ApiError`; the view logs them and keeps its
//!   previous contents.

pub mod config;
pub mod service;
pub mod transport;
pub mod view;

pub use config::ViewerConfig;
pub use service::TodoService;
pub use transport::{Transport, UreqTransport};
pub use view::TodoListView;
