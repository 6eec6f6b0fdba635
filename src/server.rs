// ABOUTME: HTTP server module for the ds-slides application
// ABOUTME: Serves the presentation page, the read-only content API and navigation control

use crate::content::ContentStore;
use crate::deck::SlideDeck;
use crate::errors::{Result, SlidesError};
use crate::input;
use crate::navigator::SlideNavigator;
use crate::page::{self, PageOptions};
use crate::sync::SnapshotBroadcaster;
use crate::watch;
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use serde_json::{json, Value};
use std::io::{Cursor, Read};
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Listener addresses for the presentation server.
pub struct ServeOptions {
    /// Host address both listeners bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// WebSocket port for navigation sync
    pub ws_port: u16,
}

/// Shared state handed to the request loop.
#[derive(Clone)]
pub struct ServerState {
    pub navigator: Arc<SlideNavigator>,
    pub content: Arc<ContentStore>,
    pub page: Arc<RwLock<String>>,
}

/// Run the full presentation server: HTTP surface, navigation sync and
/// optional theme watching. Blocks until the process is interrupted.
pub fn run_presentation_server(
    deck: SlideDeck,
    content: ContentStore,
    options: &ServeOptions,
    mut page_options: PageOptions,
    watch_theme: bool,
    debounce_ms: u64,
) -> Result<()> {
    let navigator = Arc::new(SlideNavigator::new(deck));
    let content = Arc::new(content);
    let broadcaster = Arc::new(SnapshotBroadcaster::new());

    // The navigator only holds a weak registration; the strong reference
    // lives in this scope for the lifetime of the server.
    navigator.observe(broadcaster.clone());

    // The page script substitutes the viewer's own hostname at load time
    page_options.ws_url = Some(format!("ws://{{host}}:{}", options.ws_port));
    let html = page::render_page(navigator.deck(), &page_options)?;
    let page = Arc::new(RwLock::new(html));

    let state = ServerState {
        navigator: navigator.clone(),
        content,
        page: page.clone(),
    };
    let (http_handle, _) = start_http_server(state, &options.host, options.port)?;
    let (_sync_handle, _) = crate::sync::start_sync_listener(
        navigator.clone(),
        broadcaster.clone(),
        &options.host,
        options.ws_port,
    )?;

    let watchable = page_options
        .css
        .iter()
        .chain(page_options.js.iter())
        .any(|asset| !asset.is_remote);

    if watch_theme && watchable {
        // Blocks processing file system events
        watch::watch_theme_assets(
            navigator.deck(),
            page,
            &page_options,
            broadcaster,
            debounce_ms,
        )
    } else {
        if watch_theme {
            warn!("Theme watching requested but no local theme assets are configured");
        }
        http_handle
            .join()
            .map_err(|_| SlidesError::ServerError("HTTP server thread panicked".to_string()))
    }
}

/// Start the HTTP request loop on its own thread.
/// Returns the join handle and the actual bound port (useful when
/// binding port 0).
pub fn start_http_server(
    state: ServerState,
    host: &str,
    port: u16,
) -> Result<(thread::JoinHandle<()>, u16)> {
    let server = Server::http(format!("{}:{}", host, port))
        .map_err(|e| SlidesError::ServerError(format!("Failed to start HTTP server: {}", e)))?;

    let bound_port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .unwrap_or(port);

    info!("HTTP server listening on http://{}:{}", host, bound_port);

    let handle = thread::spawn(move || {
        for request in server.incoming_requests() {
            handle_request(&state, request);
        }
    });

    Ok((handle, bound_port))
}

fn handle_request(state: &ServerState, mut request: Request) {
    let method = request.method().clone();
    let url = request.url().to_string();

    debug!("{} {}", method, url);

    let mut body = String::new();
    if method == Method::Post {
        if let Err(e) = request.as_reader().read_to_string(&mut body) {
            error!("Failed to read request body: {}", e);
            respond(
                request,
                json_response(&json!({"error": "Failed to read request body"}), 400),
            );
            return;
        }
    }

    let response = route(state, &method, &url, &body);
    respond(request, response);
}

fn route(
    state: &ServerState,
    method: &Method,
    url: &str,
    body: &str,
) -> Response<Cursor<Vec<u8>>> {
    match (method, url) {
        (Method::Get, "/") => html_response(&state.page.read()),
        (Method::Get, "/api/deck") => {
            let slides: Vec<_> = state.navigator.deck().slides().to_vec();
            json_response(
                &json!({
                    "slides": slides,
                    "navigation": state.navigator.snapshot(),
                }),
                200,
            )
        }
        (Method::Get, "/api/navigation") => {
            json_response(&json!(state.navigator.snapshot()), 200)
        }
        (Method::Post, "/api/navigation") => post_navigation(state, body),
        (Method::Post, "/api/navigation/key") => post_navigation_key(state, body),
        (Method::Get, "/api/algorithms/complexity") => {
            json_response(&state.content.complexity(), 200)
        }
        (Method::Get, "/api/algorithms/descriptions") => {
            json_response(&state.content.descriptions(), 200)
        }
        (Method::Get, "/api/algorithms/code-examples") => {
            json_response(&state.content.code_examples(), 200)
        }
        (Method::Get, "/api/algorithms/applications") => {
            json_response(&state.content.applications(), 200)
        }
        (Method::Get, path) if path.starts_with("/api/algorithms/") => {
            let name = &path["/api/algorithms/".len()..];
            match state.content.structure_detail(name) {
                Some(detail) => json_response(&detail, 200),
                None => json_response(&json!({"error": "Data structure not found"}), 404),
            }
        }
        _ => Response::from_string("404 Not Found").with_status_code(StatusCode(404)),
    }
}

/// Apply a control action from the navigation bar or the control API.
/// Rejected and unbound requests are no-ops, not errors; the response is
/// always the post-request snapshot.
fn post_navigation(state: &ServerState, body: &str) -> Response<Cursor<Vec<u8>>> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            return json_response(&json!({"error": format!("Invalid JSON body: {}", e)}), 400);
        }
    };

    let action = value
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let index = value
        .get("index")
        .and_then(Value::as_u64)
        .map(|index| index as usize);

    if let Some(transition) = input::transition_for_action(action, index) {
        state.navigator.request(transition);
    }

    json_response(&json!(state.navigator.snapshot()), 200)
}

/// Apply a forwarded keyboard event. Unbound keys are no-ops.
fn post_navigation_key(state: &ServerState, body: &str) -> Response<Cursor<Vec<u8>>> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            return json_response(&json!({"error": format!("Invalid JSON body: {}", e)}), 400);
        }
    };

    if let Some(key) = value.get("key").and_then(Value::as_str) {
        if let Some(transition) = input::transition_for_key(key) {
            state.navigator.request(transition);
        }
    }

    json_response(&json!(state.navigator.snapshot()), 200)
}

fn json_response(value: &Value, status: u16) -> Response<Cursor<Vec<u8>>> {
    let header = Header::from_bytes("Content-Type", "application/json")
        .expect("Failed to create content-type header");
    Response::from_string(value.to_string())
        .with_header(header)
        .with_status_code(StatusCode(status))
}

fn html_response(html: &str) -> Response<Cursor<Vec<u8>>> {
    let header = Header::from_bytes("Content-Type", "text/html; charset=utf-8")
        .expect("Failed to create content-type header");
    Response::from_string(html).with_header(header)
}

fn respond(request: Request, response: Response<Cursor<Vec<u8>>>) {
    if let Err(e) = request.respond(response) {
        error!("Failed to send response: {}", e);
    }
}
