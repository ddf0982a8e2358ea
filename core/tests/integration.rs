//! Read path against the live mock server.
//!
//! Starts the mock server on a random port, then exercises every core client
//! operation over real HTTP using ureq, so request building and response
//! parsing are checked end to end against the server's actual schema.

use todolist_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, TodoClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses come
/// back as data and the core client does the status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = match req.method {
        HttpMethod::Get => agent.get(&req.path),
    };
    for (key, value) in &req.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    let mut response = builder.call().expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

/// Start the mock server on a random port seeded with `todos`; returns the
/// collection endpoint URL.
fn start_server(todos: Vec<mock_server::Todo>) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, todos).await
        })
        .unwrap();
    });

    format!("http://{addr}{}", mock_server::TODOS_PATH)
}

#[test]
fn read_path_against_seeded_server() {
    let client = TodoClient::new(&start_server(mock_server::sample_todos()));

    // List: both seeded todos, in seed order, tasks intact.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[0].name, "Make lunch");
    assert_eq!(todos[0].tasks.len(), 2);
    assert_eq!(todos[0].tasks[0].name(), Some("Make salad"));
    assert_eq!(todos[0].tasks[0].description(), Some("Rucola and tomatoes"));
    assert_eq!(todos[0].tasks[1].description(), None);
    assert_eq!(todos[1].name, "Buy milk");

    // Get: matches the list entry.
    let fetched = client.parse_get_todo(execute(client.build_get_todo(2))).unwrap();
    assert_eq!(fetched, todos[1]);

    // Get unknown id: NotFound.
    let err = client.parse_get_todo(execute(client.build_get_todo(99))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn empty_server_lists_nothing() {
    let client = TodoClient::new(&start_server(Vec::new()));

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");
}
