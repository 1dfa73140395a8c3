use std::{
    net::IpAddr,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

pub const SUBMIT_ROUTE: &str = "/submit";

pub async fn start_server(host: IpAddr, port: u16, access_key: String) -> anyhow::Result<()> {
    info!("Starting web3forms testing server on {host}:{port}");
    info!("Submit endpoint: http://{host}:{port}{SUBMIT_ROUTE}");
    info!("Access key: {access_key:?}");
    info!("Submissions with botcheck set are rejected");

    let router = FakeWeb3Forms::new(access_key).router();

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

/// In-memory stand-in for the web3forms submit API which records every
/// accepted submission.
#[derive(Debug)]
pub struct FakeWeb3Forms {
    access_key: String,
    submissions: Mutex<Vec<ReceivedSubmission>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedSubmission {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub botcheck: bool,
}

#[derive(Debug, Serialize)]
struct SubmitResponse {
    success: bool,
    message: &'static str,
}

impl FakeWeb3Forms {
    pub fn new(access_key: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            access_key: access_key.into(),
            submissions: Default::default(),
        })
    }

    pub fn router(self: &Arc<Self>) -> Router {
        Router::new()
            .route(SUBMIT_ROUTE, routing::post(submit))
            .with_state(Arc::clone(self))
    }

    /// Returns the submissions accepted so far.
    pub fn submissions(&self) -> Vec<ReceivedSubmission> {
        self.submissions
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }
}

async fn submit(
    State(state): State<Arc<FakeWeb3Forms>>,
    headers: HeaderMap,
    Json(submission): Json<ReceivedSubmission>,
) -> (StatusCode, Json<SubmitResponse>) {
    let reply = |status, success, message| (status, Json(SubmitResponse { success, message }));

    let accepts_json = headers
        .get(header::ACCEPT)
        .and_then(|x| x.to_str().ok())
        .is_some_and(|x| x.contains("application/json"));
    if !accepts_json {
        return reply(StatusCode::NOT_ACCEPTABLE, false, "Only JSON responses are supported");
    }

    if submission.access_key != state.access_key {
        return reply(StatusCode::UNAUTHORIZED, false, "Invalid Access Key");
    }

    if submission.botcheck {
        return reply(StatusCode::OK, false, "Spam detected");
    }

    if [&submission.name, &submission.email, &submission.message]
        .iter()
        .any(|x| x.is_empty())
    {
        return reply(StatusCode::BAD_REQUEST, false, "Missing required fields");
    }

    state
        .submissions
        .lock()
        .unwrap_or_else(|err| err.into_inner())
        .push(submission);

    reply(StatusCode::OK, true, "Email sent successfully!")
}
