// ABOUTME: Navigation sync module for the ds-slides application
// ABOUTME: Pushes navigator snapshots to connected viewers over WebSocket

use crate::errors::{Result, SlidesError};
use crate::input;
use crate::navigator::{NavigatorObserver, NavigatorSnapshot, SlideNavigator};
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use serde_json::Value;
use std::io::ErrorKind;
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tungstenite::{accept, Error as WsError, Message};

/// How often a connection thread wakes up to drain outbound frames
/// while no viewer input arrives.
const READ_POLL: Duration = Duration::from_millis(100);

/// Fan-out point for snapshot and reload frames to connected viewers.
///
/// Registered with the navigator as an observer; every accepted
/// transition becomes one JSON text frame per live connection.
pub struct SnapshotBroadcaster {
    clients: RwLock<Vec<Sender<String>>>,
}

impl SnapshotBroadcaster {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(Vec::new()),
        }
    }

    /// Register a new connection; returns the receiving end the
    /// connection thread drains.
    fn register(&self) -> Receiver<String> {
        let (tx, rx) = mpsc::channel();
        self.clients.write().push(tx);
        rx
    }

    /// Send a frame to every live connection, dropping dead ones.
    pub fn broadcast(&self, frame: &str) {
        let mut clients = self.clients.write();
        clients.retain(|client| client.send(frame.to_string()).is_ok());
    }

    /// Ask every viewer to reload the page (theme change).
    pub fn broadcast_reload(&self) {
        self.broadcast(r#"{"type":"reload"}"#);
    }

    pub fn client_count(&self) -> usize {
        self.clients.read().len()
    }
}

impl Default for SnapshotBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigatorObserver for SnapshotBroadcaster {
    fn on_slide_change(&self, snapshot: &NavigatorSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(frame) => self.broadcast(&frame),
            Err(e) => error!("Failed to serialize snapshot: {}", e),
        }
    }
}

/// Start the WebSocket listener for navigation sync.
/// Returns the join handle and the actual bound port (useful when
/// binding port 0).
pub fn start_sync_listener(
    navigator: Arc<SlideNavigator>,
    broadcaster: Arc<SnapshotBroadcaster>,
    host: &str,
    port: u16,
) -> Result<(thread::JoinHandle<()>, u16)> {
    let listener = TcpListener::bind((host, port)).map_err(|e| {
        SlidesError::SyncError(format!("Failed to bind navigation sync listener: {}", e))
    })?;

    let bound_port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(port);

    info!("Navigation sync listening on ws://{}:{}", host, bound_port);

    let handle = thread::spawn(move || {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let navigator = navigator.clone();
                    let frames = broadcaster.register();
                    thread::spawn(move || {
                        if let Err(e) = run_connection(stream, navigator, frames) {
                            debug!("Viewer connection ended: {}", e);
                        }
                    });
                }
                Err(e) => error!("Failed to accept viewer connection: {}", e),
            }
        }
    });

    Ok((handle, bound_port))
}

/// Serve one viewer connection: send the current snapshot, then
/// interleave outbound frames with inbound viewer input until the
/// connection closes.
fn run_connection(
    stream: TcpStream,
    navigator: Arc<SlideNavigator>,
    frames: Receiver<String>,
) -> Result<()> {
    let mut socket = accept(stream)
        .map_err(|e| SlidesError::SyncError(format!("WebSocket handshake failed: {}", e)))?;

    // A finite read timeout turns the blocking read into a poll so
    // queued broadcast frames drain promptly.
    socket
        .get_ref()
        .set_read_timeout(Some(READ_POLL))
        .map_err(|e| SlidesError::SyncError(format!("Failed to set read timeout: {}", e)))?;

    // Every viewer starts from the current state
    let snapshot = serde_json::to_string(&navigator.snapshot())?;
    socket
        .send(Message::Text(snapshot))
        .map_err(|e| SlidesError::SyncError(format!("Failed to send initial snapshot: {}", e)))?;

    loop {
        while let Ok(frame) = frames.try_recv() {
            socket
                .send(Message::Text(frame))
                .map_err(|e| SlidesError::SyncError(format!("Failed to push frame: {}", e)))?;
        }

        match socket.read() {
            Ok(Message::Text(text)) => handle_viewer_frame(&navigator, &text),
            Ok(Message::Close(_)) => return Ok(()),
            Ok(_) => {}
            Err(WsError::Io(e))
                if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {}
            Err(WsError::ConnectionClosed) | Err(WsError::AlreadyClosed) => return Ok(()),
            Err(e) => {
                return Err(SlidesError::SyncError(format!(
                    "WebSocket read failed: {}",
                    e
                )));
            }
        }
    }
}

/// Viewer input frames carry either a forwarded keyboard key name or a
/// control action. Malformed or unbound frames are ignored; the
/// navigator absorbs out-of-range requests as no-ops.
fn handle_viewer_frame(navigator: &SlideNavigator, text: &str) {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring malformed viewer frame: {}", e);
            return;
        }
    };

    let transition = if let Some(key) = value.get("key").and_then(Value::as_str) {
        input::transition_for_key(key)
    } else if let Some(action) = value.get("action").and_then(Value::as_str) {
        let index = value
            .get("index")
            .and_then(Value::as_u64)
            .map(|index| index as usize);
        input::transition_for_action(action, index)
    } else {
        None
    };

    if let Some(transition) = transition {
        navigator.request(transition);
    }
}
