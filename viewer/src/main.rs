use todolist_core::TodoClient;
use todolist_viewer::{TodoListView, TodoService, UreqTransport, ViewerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ViewerConfig::from_env()?;
    let service = TodoService::new(TodoClient::new(&config.api_url), UreqTransport::new());

    let mut view = TodoListView::new();
    view.activate(&service).await;
    print!("{view}");
    Ok(())
}
