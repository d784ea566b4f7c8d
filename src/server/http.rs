//! `tiny_http` front end for [`TaskBoard`]
//!
//! Handles routing, body parsing, and response conversion. Routes are
//! accepted with or without an `/api` prefix.

use std::fmt;
use std::io::{Cursor, Read as _};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use anyhow::anyhow;
use log::{debug, info, warn};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::models::{CompletionPatch, CreateTask, Task};

use super::{ErrorBody, ServerError, TaskBoard};

type HttpResponse = Response<Cursor<Vec<u8>>>;

/// Reference task service bound to a socket
pub struct TaskServer {
    server: Arc<Server>,
    board: Arc<Mutex<TaskBoard>>,
    addr: SocketAddr,
}

impl fmt::Debug for TaskServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskServer").field("addr", &self.addr).finish_non_exhaustive()
    }
}

impl TaskServer {
    /// Bind to `addr` (use port 0 for an ephemeral port)
    pub fn bind(addr: &str, board: TaskBoard) -> anyhow::Result<Self> {
        let server = Server::http(addr).map_err(|e| anyhow!("Failed to start server: {e}"))?;
        let addr = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| anyhow!("server is not listening on an IP address"))?;

        Ok(Self {
            server: Arc::new(server),
            board: Arc::new(Mutex::new(board)),
            addr,
        })
    }

    /// Bound socket address
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL a client should be pointed at
    #[must_use]
    pub fn base_url(&self) -> String {
        base_url(self.addr)
    }

    /// Serve requests on the current thread until the process exits
    pub fn run(&self) {
        info!("serving tasks on {}", self.base_url());
        serve(&self.server, &self.board);
    }

    /// Serve requests on a background thread
    #[must_use]
    pub fn spawn(self) -> ServerHandle {
        let server = Arc::clone(&self.server);
        let board = Arc::clone(&self.board);
        let thread = thread::spawn(move || serve(&server, &board));

        ServerHandle {
            server: self.server,
            board: self.board,
            addr: self.addr,
            thread: Some(thread),
        }
    }
}

/// Running background server; stops when dropped
pub struct ServerHandle {
    server: Arc<Server>,
    board: Arc<Mutex<TaskBoard>>,
    addr: SocketAddr,
    thread: Option<JoinHandle<()>>,
}

impl fmt::Debug for ServerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerHandle").field("addr", &self.addr).finish_non_exhaustive()
    }
}

impl ServerHandle {
    /// Base URL a client should be pointed at
    #[must_use]
    pub fn base_url(&self) -> String {
        base_url(self.addr)
    }

    /// Tasks currently stored by the server
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        lock(&self.board).list()
    }

    /// Stop serving and wait for the thread to finish
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.server.unblock();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            warn!("server thread panicked");
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn base_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://127.0.0.1:{}/api", addr.port())
    } else {
        format!("http://{addr}/api")
    }
}

fn lock(board: &Mutex<TaskBoard>) -> MutexGuard<'_, TaskBoard> {
    board.lock().unwrap_or_else(PoisonError::into_inner)
}

fn serve(server: &Server, board: &Mutex<TaskBoard>) {
    for mut request in server.incoming_requests() {
        let response = handle_request(board, &mut request);
        if let Err(e) = request.respond(response) {
            warn!("failed to send response: {e}");
        }
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle one request against `board`
pub fn handle_request(board: &Mutex<TaskBoard>, request: &mut Request) -> HttpResponse {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or_default();
    let api_path = path.strip_prefix("/api").unwrap_or(path);
    let method = request.method().clone();
    debug!("{method} {path}");

    match route(board, &method, api_path, request) {
        Ok(response) => response,
        Err(e) => {
            debug!("{method} {path} -> {e}");
            error_response(&e)
        },
    }
}

fn route(
    board: &Mutex<TaskBoard>,
    method: &Method,
    path: &str,
    request: &mut Request,
) -> Result<HttpResponse, ServerError> {
    match (method, path) {
        (Method::Get, "/tasks") => Ok(json_response(&lock(board).list(), 200)),

        (Method::Post, "/tasks") => {
            let req: CreateTask = read_json_body(request)?;
            let task = lock(board).create(&req.title)?;
            Ok(json_response(&task, 201))
        },

        (Method::Patch, _) if item_id(path).is_some() => {
            let id = item_id(path).unwrap_or_default();
            let req: CompletionPatch = read_json_body(request)?;
            let task = lock(board).set_completion(id, req.completed)?;
            Ok(json_response(&task, 200))
        },

        (Method::Delete, _) if item_id(path).is_some() => {
            lock(board).remove(item_id(path).unwrap_or_default())?;
            Ok(Response::from_data(Vec::new()).with_status_code(StatusCode(204)))
        },

        _ => Err(ServerError::NoRoute {
            method: method.to_string(),
            path: path.to_string(),
        }),
    }
}

/// `/tasks/{id}` with a single, non-empty segment
fn item_id(path: &str) -> Option<&str> {
    path.strip_prefix("/tasks/").filter(|id| !id.is_empty() && !id.contains('/'))
}

// =============================================================================
// BODY PARSING
// =============================================================================

fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ServerError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ServerError::BadRequest(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn error_response(error: &ServerError) -> HttpResponse {
    json_response(&ErrorBody::from(error), error.status_code())
}

fn json_response<T: Serialize>(data: &T, status: u16) -> HttpResponse {
    let json = serde_json::to_vec(data).unwrap_or_else(|_| b"{}".to_vec());
    let response = Response::from_data(json).with_status_code(StatusCode(status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
