//! Scripted JSON-RPC server for integration tests.
//!
//! Replies are queued per method and consumed in order. A
//! `get_notifications` call with nothing queued is held open until a reply is
//! pushed, like a long-poll on a quiet server. Any other method with nothing
//! queued gets a "method not found" error.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wobble_core::{ClientConfig, WobbleClient};

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    Result(Value),
    Error { code: i64, message: String },
    Status(u16),
    Raw(String),
}

/// A request as the server saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub request: Value,
}

impl RecordedCall {
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.request.get("params").and_then(|p| p.get(name))
    }
}

#[derive(Default)]
struct MockState {
    replies: Mutex<HashMap<String, VecDeque<MockReply>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockState {
    fn next_reply(&self, method: &str) -> Option<MockReply> {
        self.replies
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
    }
}

pub struct MockWobble {
    addr: SocketAddr,
    state: Arc<MockState>,
    task: tokio::task::JoinHandle<()>,
}

impl MockWobble {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/rpc", post(handle_rpc))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self { addr, state, task }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/rpc", self.addr)
    }

    pub fn client(&self) -> WobbleClient {
        let config = ClientConfig::new(&self.endpoint())
            .unwrap()
            .with_request_timeout(Duration::from_secs(5))
            .with_poll_timeout(Duration::from_secs(10));
        WobbleClient::new(config).unwrap()
    }

    pub fn reply(&self, method: &str, reply: MockReply) {
        self.state
            .replies
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn reply_result(&self, method: &str, result: Value) {
        self.reply(method, MockReply::Result(result));
    }

    pub fn calls(&self, method: &str) -> Vec<RecordedCall> {
        self.state
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == method)
            .cloned()
            .collect()
    }

    /// Wait until `method` has been called at least `count` times.
    pub async fn wait_for_calls(&self, method: &str, count: usize) -> Vec<RecordedCall> {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let calls = self.calls(method);
                if calls.len() >= count {
                    return calls;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap_or_else(|_| panic!("{} was not called {} times", method, count))
    }
}

impl Drop for MockWobble {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle_rpc(State(state): State<Arc<MockState>>, Json(request): Json<Value>) -> Response {
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let id = request["id"].clone();

    state.calls.lock().unwrap().push(RecordedCall {
        method: method.clone(),
        request: request.clone(),
    });

    let reply = loop {
        match state.next_reply(&method) {
            Some(reply) => break reply,
            None if method == "get_notifications" => {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            None => {
                break MockReply::Error {
                    code: -32601,
                    message: "Method not found".to_string(),
                }
            }
        }
    };

    match reply {
        MockReply::Result(result) => {
            Json(json!({"jsonrpc": "2.0", "id": id, "result": result})).into_response()
        }
        MockReply::Error { code, message } => Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": code, "message": message}
        }))
        .into_response(),
        MockReply::Status(status) => StatusCode::from_u16(status).unwrap().into_response(),
        MockReply::Raw(body) => (StatusCode::OK, body).into_response(),
    }
}

pub fn notification(kind: &str, topic: &str, post: &str) -> Value {
    json!({"type": kind, "user_id": 7, "topic_id": topic, "post_id": post})
}

pub fn batch(messages: Vec<Value>, next_timestamp: f64) -> Value {
    json!({"messages": messages, "next_timestamp": next_timestamp})
}
