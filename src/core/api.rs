//! HTTP + WebSocket API for GestureText
//!
//! Endpoints:
//! - POST /classify - Stateless classification of one frame
//! - POST /session/new - Create new session
//! - GET /session/{id} - Get session status
//! - POST /session/{id}/frame - Process one frame
//! - POST /session/{id}/reset - Clear the display (new capture session)
//! - DELETE /session/{id} - Stop and drop the session
//! - WS /ws/{id} - Live updates
//! - GET /health - Health check

use axum::{
    extract::{Path, Query, State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{info, warn};

use crate::core::{GestureClassifier, GestureSession};
use crate::types::{
    FrameInput, FrameOutput, GestureResult, LandmarkError, RuleSet, StabilizerConfig,
};

/// Session state
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub engine: GestureSession,
    pub update_tx: broadcast::Sender<FrameOutput>,
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, Session>>,
    pub default_rule_set: RuleSet,
    /// Stabilizer policy for sessions created in the default rule set
    pub default_config: StabilizerConfig,
}

/// Create new session request
#[derive(Debug, Default, Deserialize)]
pub struct NewSessionRequest {
    pub mode: Option<RuleSet>,
    pub threshold: Option<f32>,
    pub history: Option<usize>,
}

/// Create new session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub websocket_url: String,
    pub mode: RuleSet,
    pub config: StabilizerConfig,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub mode: RuleSet,
    pub current_word: String,
    pub history: Vec<String>,
    pub last_label: String,
    pub last_confidence: f32,
    pub frame_count: u64,
    pub accepted_count: u64,
}

/// Stateless classification query
#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub mode: Option<RuleSet>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
}

/// Create the API router. `default_config` applies to new sessions that
/// keep `default_rule_set`; other modes start from their own preset.
pub fn create_router(default_rule_set: RuleSet, default_config: StabilizerConfig) -> Router {
    let state = Arc::new(AppState {
        sessions: RwLock::new(HashMap::new()),
        default_rule_set,
        default_config,
    });

    Router::new()
        .route("/health", get(health))
        .route("/classify", post(classify))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session).delete(delete_session))
        .route("/session/:id/frame", post(add_frame))
        .route("/session/:id/reset", post(reset_session))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
    })
}

/// Classify one frame without a session
async fn classify(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClassifyQuery>,
    Json(frame): Json<FrameInput>,
) -> Result<Json<GestureResult>, StatusCode> {
    let classifier = GestureClassifier::new(query.mode.unwrap_or(state.default_rule_set));
    let result = classifier.classify_frame(frame).map_err(reject_landmarks)?;
    Ok(Json(result))
}

/// Create new session
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewSessionRequest>,
) -> Result<Json<NewSessionResponse>, StatusCode> {
    let mode = req.mode.unwrap_or(state.default_rule_set);
    let preset = if mode == state.default_rule_set {
        state.default_config
    } else {
        StabilizerConfig::for_rule_set(mode)
    };
    let config = StabilizerConfig::new(
        req.threshold.unwrap_or(preset.threshold),
        req.history.unwrap_or(preset.capacity),
    )
    .map_err(|e| {
        warn!(error = %e, "rejected session config");
        StatusCode::BAD_REQUEST
    })?;

    let session_id = generate_session_id();
    let (tx, _) = broadcast::channel(100);

    let session = Session {
        id: session_id.clone(),
        engine: GestureSession::new(mode, config),
        update_tx: tx,
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), session);
    info!(session = %session_id, %mode, "session created");

    Ok(Json(NewSessionResponse {
        session_id: session_id.clone(),
        websocket_url: format!("/ws/{}", session_id),
        mode,
        config,
    }))
}

/// Get session status
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let engine = &session.engine;
    let display = engine.display();
    let last = engine.last_result();

    Ok(Json(SessionStatusResponse {
        session_id: session.id.clone(),
        mode: engine.rule_set(),
        current_word: display.current_word.clone(),
        history: display.history.iter().cloned().collect(),
        last_label: last.label.as_str().to_string(),
        last_confidence: last.confidence,
        frame_count: engine.frame_count(),
        accepted_count: engine.accepted_count(),
    }))
}

/// Process one frame for a session
async fn add_frame(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(frame): Json<FrameInput>,
) -> Result<Json<FrameOutput>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let hands = frame.into_hands().map_err(reject_landmarks)?;
    let output = session.engine.process(&hands);

    // No subscribers is fine
    let _ = session.update_tx.send(output.clone());

    Ok(Json(output))
}

/// Clear the display of a session
async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FrameOutput>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    session.engine.start();
    Ok(Json(session.engine.current_output()))
}

/// Stop and remove a session
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    let mut sessions = state.sessions.write().await;
    match sessions.remove(&id) {
        Some(mut session) => {
            session.engine.stop();
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let rx = session.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Handle WebSocket connection: forward frames until either side closes
async fn handle_websocket(socket: WebSocket, mut rx: broadcast::Receiver<FrameOutput>) {
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            update = rx.recv() => {
                let update = match update {
                    Ok(update) => update,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "websocket client lagging");
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                let json = serde_json::to_string(&update).unwrap_or_default();
                if sender.send(Message::Text(json)).await.is_err() {
                    break;
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }
}

fn reject_landmarks(err: LandmarkError) -> StatusCode {
    warn!(error = %err, "rejected malformed landmarks");
    StatusCode::UNPROCESSABLE_ENTITY
}

/// Generate session ID
fn generate_session_id() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("session_{:x}", nanos as u64)
}

/// Run the API server
pub async fn run_server(
    addr: &str,
    default_rule_set: RuleSet,
    default_config: StabilizerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(default_rule_set, default_config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        mode = %default_rule_set,
        threshold = default_config.threshold,
        history = default_config.capacity,
        "gesturetext API listening"
    );
    println!("✋ GestureText API running on {}", addr);
    println!("  POST   /classify           - Classify one frame");
    println!("  POST   /session/new        - Create session");
    println!("  GET    /session/:id        - Get status");
    println!("  POST   /session/:id/frame  - Process frame");
    println!("  POST   /session/:id/reset  - Clear display");
    println!("  DELETE /session/:id        - End session");
    println!("  WS     /ws/:id             - Live updates");
    println!("  GET    /health             - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
