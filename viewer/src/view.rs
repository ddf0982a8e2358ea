//! The todo list view: fetch once on activation, then render.

use std::fmt;

use todolist_core::Todo;
use tracing::{info, warn};

use crate::service::TodoService;
use crate::transport::Transport;

const HEADERS: [&str; 4] = ["ID", "NAME", "DESCRIPTION", "TASKS"];

/// View-local list of todos, empty until a fetch succeeds.
#[derive(Debug, Default)]
pub struct TodoListView {
    todos: Vec<Todo>,
}

impl TodoListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Run the one fetch this view performs.
    ///
    /// On success the list is replaced wholesale. On failure the list is left
    /// exactly as it was and the error is only logged; nothing is returned to
    /// the caller.
    pub async fn activate<T: Transport + 'static>(&mut self, service: &TodoService<T>) {
        match service.get_todo_list().await {
            Ok(todos) => {
                info!(count = todos.len(), "todo list loaded");
                self.todos = todos;
            }
            Err(e) => {
                warn!(error = %e, url = service.client().base_url(), "failed to load todo list");
            }
        }
    }

    fn rows(&self) -> Vec<[String; 4]> {
        self.todos
            .iter()
            .map(|todo| {
                let tasks = todo
                    .tasks
                    .iter()
                    .map(|task| task.name().unwrap_or("?"))
                    .collect::<Vec<_>>()
                    .join(", ");
                [
                    todo.id.to_string(),
                    todo.name.clone(),
                    todo.description.clone(),
                    tasks,
                ]
            })
            .collect()
    }
}

impl fmt::Display for TodoListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.todos.is_empty() {
            return writeln!(f, "No todos.");
        }

        let rows = self.rows();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(f, &HEADERS, &widths)?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cells: &[S], widths: &[usize]) -> fmt::Result {
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            // no trailing padding
            writeln!(f, "{}", cell.as_ref())?;
        } else {
            write!(f, "{:<width$}  ", cell.as_ref(), width = *width)?;
        }
    }
    Ok(())
}
