#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::routing::any;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub owner: String,
    pub repo: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
struct StubState {
    responses: Arc<HashMap<String, (u16, String)>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local stand-in for the GitHub repos endpoint.
///
/// Repositories without a canned response get `200 {}`.
pub struct StubGitHub {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubGitHub {
    pub async fn start(responses: &[(&str, u16, &str)]) -> anyhow::Result<Self> {
        let responses = responses
            .iter()
            .map(|(repo, status, body)| (repo.to_string(), (*status, body.to_string())))
            .collect::<HashMap<_, _>>();

        let state = StubState {
            responses: Arc::new(responses),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();

        let app = Router::new()
            .route("/repos/:owner/:repo", any(handle_repo))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(StubGitHub { addr, requests })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle_repo(
    State(state): State<StubState>,
    Path((owner, repo)): Path<(String, String)>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        owner,
        repo: repo.clone(),
        authorization: header("authorization"),
        accept: header("accept"),
        body,
    });

    let (status, body) = state
        .responses
        .get(&repo)
        .cloned()
        .unwrap_or((200, "{}".to_string()));

    (StatusCode::from_u16(status).unwrap(), body)
}
