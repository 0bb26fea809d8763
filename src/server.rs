use std::{any::Any, sync::Arc, time::Instant};

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tokio::{
    net::TcpListener,
    signal::unix::{SignalKind, signal},
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::{
    classifier::{ClassificationRequest, ClassificationResult, CrisisClassifier, GuidanceCatalog},
    config::{Config, ServerConfig, UploadLimits},
    ingress::{
        EmergencyPayload, IngressError, IngressErrorKind, UploadBatch, VoicePayload,
        error::{INTERNAL_ERROR_MESSAGE, malformed_request},
        text_request,
        upload::MESSAGE_FIELD,
        voice_request,
    },
    session::{InMemorySessionLog, NoopSessionRecorder, SessionLogEntry, SessionRecorder},
};

pub const SERVICE_NAME: &str = "crisis-guide";

#[derive(Clone)]
pub struct AppState {
    pub classifier: CrisisClassifier,
    pub recorder: Arc<dyn SessionRecorder>,
    pub uploads: UploadLimits,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        classifier: CrisisClassifier,
        recorder: Arc<dyn SessionRecorder>,
        uploads: UploadLimits,
    ) -> Self {
        Self {
            classifier,
            recorder,
            uploads,
            started_at: Instant::now(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.guidance.catalog_path {
            Some(path) => GuidanceCatalog::load(path)
                .with_context(|| format!("failed to load guidance catalog {}", path.display()))?,
            None => GuidanceCatalog::builtin(),
        };

        let recorder: Arc<dyn SessionRecorder> =
            match (config.session.enabled, config.session.max_entries) {
                (false, _) => Arc::new(NoopSessionRecorder),
                (true, Some(max_entries)) => {
                    Arc::new(InMemorySessionLog::with_capacity_limit(max_entries))
                }
                (true, None) => Arc::new(InMemorySessionLog::new()),
            };

        Ok(Self::new(
            CrisisClassifier::new(catalog),
            recorder,
            config.uploads,
        ))
    }

    pub async fn classify_and_record(&self, request: ClassificationRequest) -> ClassificationResult {
        let result = self.classifier.classify_request(&request);
        tracing::info!(
            target: "classifier",
            category = result.r#type.as_str(),
            severity = result.severity.as_str(),
            call_emergency = result.call_emergency,
            mode = request.mode.as_str(),
            image_count = request.image_count,
            "classification_completed"
        );

        self.recorder
            .record(SessionLogEntry::from_request(
                &request,
                result.severity,
                result.timestamp,
            ))
            .await;
        result
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_seconds: f64,
}

#[derive(Debug, Serialize)]
pub struct SessionLogView {
    pub entries: Vec<SessionLogEntry>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SessionLogCleared {
    pub cleared: usize,
}

pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let body_limit = DefaultBodyLimit::max(state.uploads.body_limit_bytes());

    let router = Router::new()
        .route("/api/health", get(health))
        .route("/api/emergency", post(classify_text))
        .route("/api/emergency/upload", post(classify_upload))
        .route("/api/emergency/voice", post(classify_voice))
        .route("/api/session-log", get(list_session_log).delete(clear_session_log))
        .layer(body_limit)
        .with_state(state);

    with_edge_layers(router, server)
}

/// Static fallback, CORS, request tracing and the panic boundary around `router`.
pub fn with_edge_layers(mut router: Router, server: &ServerConfig) -> Router {
    if let Some(static_dir) = &server.static_dir {
        router = router.fallback_service(ServeDir::new(static_dir));
    }
    if server.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

pub async fn run(config: Config, state: AppState) -> Result<()> {
    let router = build_router(state, &config.server);
    let listener = TcpListener::bind(config.server.listen_addr)
        .await
        .with_context(|| format!("unable to bind {}", config.server.listen_addr))?;
    let local_addr = listener
        .local_addr()
        .context("unable to read bound listener address")?;

    let mut sigint =
        signal(SignalKind::interrupt()).context("unable to listen for SIGINT (Ctrl+C)")?;
    let mut sigterm = signal(SignalKind::terminate()).context("unable to listen for SIGTERM")?;

    tracing::info!(target: "server", addr = %local_addr, "server_listening");
    eprintln!("{SERVICE_NAME} listening on http://{local_addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let signal_name = tokio::select! {
                _ = sigint.recv() => "SIGINT",
                _ = sigterm.recv() => "SIGTERM",
            };
            tracing::info!(target: "server", signal = signal_name, "shutdown_requested");
            eprintln!("received {signal_name}; draining connections");
        })
        .await
        .context("http server failed")?;

    eprintln!("{SERVICE_NAME} stopped");
    Ok(())
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
    })
}

async fn classify_text(
    State(state): State<AppState>,
    payload: Result<Json<EmergencyPayload>, JsonRejection>,
) -> Result<Json<ClassificationResult>, IngressError> {
    let Json(payload) = payload.map_err(|rejection| malformed_request(rejection.body_text()))?;
    let request = text_request(payload)?;
    Ok(Json(state.classify_and_record(request).await))
}

async fn classify_voice(
    State(state): State<AppState>,
    payload: Result<Json<VoicePayload>, JsonRejection>,
) -> Result<Json<ClassificationResult>, IngressError> {
    let Json(payload) = payload.map_err(|rejection| malformed_request(rejection.body_text()))?;
    let request = voice_request(payload)?;
    Ok(Json(state.classify_and_record(request).await))
}

async fn classify_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassificationResult>, IngressError> {
    let mut multipart = multipart.map_err(|rejection| malformed_request(rejection.body_text()))?;
    let mut batch = UploadBatch::new(state.uploads);

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.file_name().is_some() {
            batch.admit_file(field.content_type())?;
            let mut received = 0usize;
            while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                received = received.saturating_add(chunk.len());
                batch.check_file_size(received)?;
            }
        } else if field.name() == Some(MESSAGE_FIELD) {
            let message = field.text().await.map_err(multipart_error)?;
            batch.set_message(message);
        }
    }

    let request = batch.into_request()?;
    Ok(Json(state.classify_and_record(request).await))
}

async fn list_session_log(State(state): State<AppState>) -> Json<SessionLogView> {
    let entries = state.recorder.list_all().await;
    Json(SessionLogView {
        count: entries.len(),
        entries,
    })
}

async fn clear_session_log(State(state): State<AppState>) -> Json<SessionLogCleared> {
    let cleared = state.recorder.clear().await;
    tracing::info!(target: "session", cleared, "session_log_cleared");
    Json(SessionLogCleared { cleared })
}

fn multipart_error(err: MultipartError) -> IngressError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return IngressError::new(
            IngressErrorKind::FileTooLarge,
            "Upload exceeds the allowed size",
        );
    }
    malformed_request(err.body_text())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(target: "server", panic = detail, "handler_panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}
