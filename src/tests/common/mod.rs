use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{
    extract::{Form, Query},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::settings::SettingsConfig;
use crate::config::watsonx::WatsonxConfig;
use crate::relay::Relay;
use crate::server::server::{router, AppState};
use crate::utils::constants::GENERATION_PATH;

pub const IAM_PATH: &str = "/identity/token";

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// What a stub endpoint saw.
#[derive(Clone, Default)]
pub struct Calls {
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: Value,
}

impl Calls {
    fn record(&self, request: RecordedRequest) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

/// IAM stub answering every exchange with `status` and `{"access_token": token}`.
/// The form body is recorded as a JSON object.
pub async fn spawn_iam_stub(status: StatusCode, token: &str) -> (JoinHandle<()>, SocketAddr, Calls) {
    let calls = Calls::default();
    let recorder = calls.clone();
    let reply = json!({
        "access_token": token,
        "refresh_token": "not_supported",
        "token_type": "Bearer",
        "expires_in": 3600
    });
    let router = Router::new().route(
        IAM_PATH,
        post(move |Form(form): Form<HashMap<String, String>>| {
            let recorder = recorder.clone();
            let reply = reply.clone();
            async move {
                recorder.record(RecordedRequest {
                    query: HashMap::new(),
                    authorization: None,
                    body: json!(form),
                });
                (status, Json(reply))
            }
        }),
    );
    let (handle, addr) = spawn_axum(router).await;
    (handle, addr, calls)
}

/// Generation stub replying `status` + `reply` and recording every request.
pub async fn spawn_generation_stub(status: StatusCode, reply: Value) -> (JoinHandle<()>, SocketAddr, Calls) {
    let calls = Calls::default();
    let recorder = calls.clone();
    let router = Router::new().route(
        GENERATION_PATH,
        post(
            move |Query(query): Query<HashMap<String, String>>, headers: HeaderMap, Json(body): Json<Value>| {
                let recorder = recorder.clone();
                let reply = reply.clone();
                async move {
                    recorder.record(RecordedRequest {
                        query,
                        authorization: headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_owned),
                        body,
                    });
                    (status, Json(reply))
                }
            },
        ),
    );
    let (handle, addr) = spawn_axum(router).await;
    (handle, addr, calls)
}

pub fn watsonx_config(iam_base: &str, generation_base: &str) -> WatsonxConfig {
    WatsonxConfig::new(
        "test-api-key",
        "proj-42",
        generation_base,
        &format!("{}{}", iam_base, IAM_PATH),
    )
}

pub fn build_relay(iam_base: &str, generation_base: &str) -> Relay {
    Relay::new(watsonx_config(iam_base, generation_base), build_reqwest_client())
}

/// Serve the full relay router on an ephemeral port.
pub async fn spawn_relay(relay: Relay) -> (JoinHandle<()>, SocketAddr) {
    let state = AppState::new(relay).await;
    spawn_axum(router(&SettingsConfig::default(), state)).await
}

/// Log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
