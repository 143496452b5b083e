//! HTTP API endpoints for the BACAI gateway.
//!
//! Requests are validated, completed with a detected language and subject
//! when the caller omitted them, forwarded to the model service, and the
//! answer is relayed back with routing metadata.
//!
//! # Endpoints
//!
//! - `GET /` - Service descriptor
//! - `POST /api/solve` - Solve an exercise
//! - `POST /api/explain` - Explain a concept
//! - `POST /api/converse` - Tutoring conversation turn
//! - `GET /api/data/subjects`, `/levels`, `/curriculum` - Reference data
//! - `POST /api/data/upload` - Curriculum check for exercise batches
//! - `GET /api/health`, `/detailed`, `/ready`, `/live` - Health checks
//!
//! # Example
//!
//! ```no_run
//! use bacai_gateway::{create_router, AppState, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(Config::default())?;
//! let router = create_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8787").await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, request::Parts, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bacai_lang::{
    classify, detect, validate_curriculum_alignment, DetailLevel, Difficulty, Language, Level,
    SolveMode, Subject, TutorMode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::catalog::{self, LevelEntry, SubjectEntry};
use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::model::{
    ConversePayload, DependencyStatus, ExplainPayload, ModelClient, ModelRequest, RequestType,
    SolvePayload,
};

/// Service name reported by the health endpoints.
pub const SERVICE_NAME: &str = "bacai-api";

/// Gateway version reported by `/` and the health endpoints.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const fn default_true() -> bool {
    true
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for `POST /api/solve`.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    /// Exercise text. Must not be blank.
    pub exercise: String,
    /// Academic subject; classified from the exercise when omitted.
    #[serde(default)]
    pub subject: Option<Subject>,
    /// Education level; `secondary_lycee` when omitted.
    #[serde(default)]
    pub level: Option<Level>,
    /// Language; detected from the exercise when omitted.
    #[serde(default)]
    pub language: Option<Language>,
    /// Presentation mode.
    #[serde(default)]
    pub mode: SolveMode,
    /// Whether to ground the answer in local cultural context.
    #[serde(default = "default_true")]
    pub cultural_context: bool,
}

/// Request body for `POST /api/explain`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainRequest {
    /// Concept to explain. Must not be blank.
    pub concept: String,
    /// Academic subject of the concept.
    pub subject: Subject,
    /// Education level.
    #[serde(default)]
    pub level: Level,
    /// Language; detected from the concept when omitted.
    #[serde(default)]
    pub language: Option<Language>,
    /// Depth of the explanation.
    #[serde(default)]
    pub detail_level: DetailLevel,
    /// Whether to include worked examples.
    #[serde(default = "default_true")]
    pub examples: bool,
    /// Whether to ground the answer in local cultural context.
    #[serde(default = "default_true")]
    pub cultural_context: bool,
}

/// Request body for `POST /api/converse`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverseRequest {
    /// The learner's message. Must not be blank.
    pub message: String,
    /// Conversation to continue.
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Conversation subject.
    #[serde(default)]
    pub subject: Subject,
    /// Language; detected from the message when omitted.
    #[serde(default)]
    pub language: Option<Language>,
    /// Tutor tone.
    #[serde(default)]
    pub tutor_mode: TutorMode,
    /// Whether to reason step by step.
    #[serde(default = "default_true")]
    pub step_by_step: bool,
}

/// Request body for `POST /api/data/upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    /// Exercises to check against the curriculum.
    pub exercises: Vec<UploadExercise>,
}

/// One exercise in an upload batch. Identifiers are free-form strings and
/// checked against the curriculum rather than rejected at parse time.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadExercise {
    /// Subject identifier.
    pub subject: String,
    /// Level identifier.
    pub level: String,
    /// Language code.
    pub language: String,
    /// Exercise text.
    pub exercise: String,
    /// Reference solution.
    #[serde(default)]
    pub solution: Option<String>,
    /// Difficulty tag.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Successful response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// Endpoint-specific payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Routing and timing metadata attached to relayed answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Wall-clock time spent handling the request, in milliseconds.
    pub processing_time: u64,
    /// Model identifier reported by the model service.
    pub model_used: String,
    /// Language used for the request (given or detected).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_detected: Option<Language>,
    /// Subject used for the request (given or classified).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_detected: Option<Subject>,
    /// When the response was produced.
    pub timestamp: DateTime<Utc>,
}

/// `data` of a successful solve response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveData {
    /// Solution relayed from the model service.
    pub solution: serde_json::Value,
    /// Subject used.
    pub subject: Subject,
    /// Level used.
    pub level: Level,
    /// Language used.
    pub language: Language,
    /// Presentation mode.
    pub mode: SolveMode,
    /// Routing metadata.
    pub metadata: ResponseMetadata,
}

/// `data` of a successful explain response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainData {
    /// Explanation relayed from the model service.
    pub explanation: serde_json::Value,
    /// The explained concept.
    pub concept: String,
    /// Subject used.
    pub subject: Subject,
    /// Level used.
    pub level: Level,
    /// Language used.
    pub language: Language,
    /// Depth of the explanation.
    pub detail_level: DetailLevel,
    /// Routing metadata.
    pub metadata: ResponseMetadata,
}

/// `data` of a successful converse response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverseData {
    /// Reply relayed from the model service.
    pub response: serde_json::Value,
    /// Conversation identifier assigned by the model service.
    pub conversation_id: Option<String>,
    /// Subject used.
    pub subject: Subject,
    /// Language used.
    pub language: Language,
    /// Routing metadata.
    pub metadata: ResponseMetadata,
}

/// `data` of the subjects endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectsData {
    /// The academic subjects.
    pub subjects: Vec<SubjectEntry>,
}

/// `data` of the levels endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelsData {
    /// The education levels.
    pub levels: Vec<LevelEntry>,
}

/// Response body of the upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Counts.
    pub data: UploadData,
}

/// Counts reported by the upload endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadData {
    /// Number of exercises received.
    pub received: usize,
    /// Number of exercises processed (nothing is stored, so always 0).
    pub processed: usize,
    /// Curriculum-aligned exercises awaiting processing.
    pub pending: usize,
    /// Exercises whose subject, level or language is not in the curriculum.
    pub rejected: usize,
}

/// Overall health as reported by the health endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Everything reachable.
    Healthy,
    /// The model service is unreachable.
    Degraded,
}

/// Response body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true`.
    pub success: bool,
    /// Overall status.
    pub status: HealthStatus,
    /// When the check ran.
    pub timestamp: DateTime<Utc>,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Deployment environment.
    pub environment: String,
}

/// Dependencies probed by `GET /api/health/detailed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dependencies {
    /// Model service reachability.
    pub model_service: DependencyStatus,
}

/// Process metrics reported by `GET /api/health/detailed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Seconds since the gateway state was created.
    pub uptime: i64,
}

/// Response body of `GET /api/health/detailed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Basic health fields.
    #[serde(flatten)]
    pub health: HealthResponse,
    /// Probed dependencies.
    pub dependencies: Dependencies,
    /// Process metrics.
    pub metrics: HealthMetrics,
}

/// Response body of `GET /api/health/ready`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Always `true`.
    pub success: bool,
    /// Whether the gateway accepts traffic.
    pub ready: bool,
    /// When the check ran.
    pub timestamp: DateTime<Utc>,
}

/// Response body of `GET /api/health/live`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveResponse {
    /// Always `true`.
    pub success: bool,
    /// Whether the process is alive.
    pub alive: bool,
    /// When the check ran.
    pub timestamp: DateTime<Utc>,
}

/// Error response body returned on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Description of the error.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
    /// Additional detail, localized when the request language is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the HTTP server.
///
/// Immutable after construction; handlers share it through an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration.
    pub config: Config,
    /// Model service client.
    pub model: ModelClient,
    /// When the state was created, for uptime reporting.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates a new `AppState` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the model service client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let model = ModelClient::new(&config)?;
        Ok(Self {
            config,
            model,
            started_at: Utc::now(),
        })
    }
}

// ============================================================================
// API Error Type
// ============================================================================

/// Internal error type for API handlers.
#[derive(Debug)]
enum ApiError {
    /// The request body is malformed or fails validation.
    Validation(String),
    /// The model service could not produce an answer.
    Model {
        error: GatewayError,
        request_type: RequestType,
        language: Language,
    },
}

impl ApiError {
    fn model(error: GatewayError, request: &ModelRequest) -> Self {
        Self::Model {
            error,
            request_type: request.request_type(),
            language: request.language(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    success: false,
                    error: "Validation failed".to_string(),
                    code: "VALIDATION_ERROR".to_string(),
                    message: Some(message),
                },
            ),
            Self::Model {
                error,
                request_type,
                language,
            } => {
                let error = match error {
                    GatewayError::ModelService { message, .. } => message,
                    other => other.to_string(),
                };
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse {
                        success: false,
                        error,
                        code: "MODEL_ERROR".to_string(),
                        message: Some(request_type.fallback_message(language).to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Rejects empty or whitespace-only text fields.
fn require_text(field: &str, value: &str) -> std::result::Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Rejects `general` where an academic subject is required.
fn require_academic(subject: Subject) -> std::result::Result<(), ApiError> {
    if !subject.is_academic() {
        return Err(ApiError::Validation(format!(
            "subject '{subject}' is not an academic subject"
        )));
    }
    Ok(())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// Router Setup
// ============================================================================

/// Returns `true` if `origin` matches `pattern`, where a single `*` in the
/// pattern matches any run of characters.
#[must_use]
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    match pattern.split_once('*') {
        None => pattern == origin,
        Some((prefix, suffix)) => {
            origin.len() >= prefix.len() + suffix.len()
                && origin.starts_with(prefix)
                && origin.ends_with(suffix)
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let patterns = origins.to_vec();
    cors.allow_origin(AllowOrigin::predicate(
        move |origin: &HeaderValue, _parts: &Parts| {
            origin
                .to_str()
                .is_ok_and(|origin| patterns.iter().any(|p| origin_matches(p, origin)))
        },
    ))
}

/// Creates the HTTP router with all endpoints.
///
/// The router carries:
/// - The service descriptor at `/` and all API routes under `/api`
/// - A JSON 404 fallback
/// - CORS restricted to the configured origins
/// - Tracing middleware for request logging
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    let api_routes = Router::new()
        .route("/solve", post(handle_solve))
        .route("/explain", post(handle_explain))
        .route("/converse", post(handle_converse))
        .route("/data/subjects", get(handle_subjects))
        .route("/data/levels", get(handle_levels))
        .route("/data/curriculum", get(handle_curriculum))
        .route("/data/upload", post(handle_upload))
        .route("/health", get(handle_health))
        .route("/health/detailed", get(handle_health_detailed))
        .route("/health/ready", get(handle_ready))
        .route("/health/live", get(handle_live));

    Router::new()
        .route("/", get(handle_root))
        .nest("/api", api_routes)
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

// ============================================================================
// Relay Handlers
// ============================================================================

/// Handler for `POST /api/solve`.
async fn handle_solve(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<SolveRequest>, JsonRejection>,
) -> std::result::Result<Json<ApiResponse<SolveData>>, ApiError> {
    let started = Instant::now();
    let Json(request) = payload?;
    require_text("exercise", &request.exercise)?;
    if let Some(subject) = request.subject {
        require_academic(subject)?;
    }

    let language = request.language.unwrap_or_else(|| detect(&request.exercise));
    let subject = request
        .subject
        .unwrap_or_else(|| classify(&request.exercise, language));
    let level = request.level.unwrap_or_default();

    info!(
        %language,
        %subject,
        language_given = request.language.is_some(),
        subject_given = request.subject.is_some(),
        "Solve request"
    );

    let model_request = ModelRequest::Solve(SolvePayload {
        exercise: request.exercise,
        subject,
        level,
        language,
        mode: request.mode,
        cultural_context: request.cultural_context,
    });

    let response = state
        .model
        .process(&model_request)
        .await
        .map_err(|e| ApiError::model(e, &model_request))?;
    let solution = response
        .content(RequestType::Solve)
        .map_err(|e| ApiError::model(e, &model_request))?;

    Ok(ApiResponse::ok(SolveData {
        solution,
        subject,
        level,
        language,
        mode: request.mode,
        metadata: ResponseMetadata {
            processing_time: elapsed_ms(started),
            model_used: response.model_used(),
            language_detected: Some(language),
            subject_detected: Some(subject),
            timestamp: Utc::now(),
        },
    }))
}

/// Handler for `POST /api/explain`.
async fn handle_explain(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ExplainRequest>, JsonRejection>,
) -> std::result::Result<Json<ApiResponse<ExplainData>>, ApiError> {
    let started = Instant::now();
    let Json(request) = payload?;
    require_text("concept", &request.concept)?;
    require_academic(request.subject)?;

    let language = request.language.unwrap_or_else(|| detect(&request.concept));

    info!(
        %language,
        subject = %request.subject,
        language_given = request.language.is_some(),
        "Explain request"
    );

    let model_request = ModelRequest::Explain(ExplainPayload {
        concept: request.concept.clone(),
        subject: request.subject,
        level: request.level,
        language,
        detail_level: request.detail_level,
        examples: request.examples,
        cultural_context: request.cultural_context,
    });

    let response = state
        .model
        .process(&model_request)
        .await
        .map_err(|e| ApiError::model(e, &model_request))?;
    let explanation = response
        .content(RequestType::Explain)
        .map_err(|e| ApiError::model(e, &model_request))?;

    Ok(ApiResponse::ok(ExplainData {
        explanation,
        concept: request.concept,
        subject: request.subject,
        level: request.level,
        language,
        detail_level: request.detail_level,
        metadata: ResponseMetadata {
            processing_time: elapsed_ms(started),
            model_used: response.model_used(),
            language_detected: Some(language),
            subject_detected: None,
            timestamp: Utc::now(),
        },
    }))
}

/// Handler for `POST /api/converse`.
async fn handle_converse(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ConverseRequest>, JsonRejection>,
) -> std::result::Result<Json<ApiResponse<ConverseData>>, ApiError> {
    let started = Instant::now();
    let Json(request) = payload?;
    require_text("message", &request.message)?;

    let language = request.language.unwrap_or_else(|| detect(&request.message));

    info!(
        %language,
        subject = %request.subject,
        conversation_id = ?request.conversation_id,
        "Converse request"
    );

    let model_request = ModelRequest::Converse(ConversePayload {
        message: request.message,
        conversation_id: request.conversation_id,
        subject: request.subject,
        language,
        tutor_mode: request.tutor_mode,
        step_by_step: request.step_by_step,
    });

    let response = state
        .model
        .process(&model_request)
        .await
        .map_err(|e| ApiError::model(e, &model_request))?;
    let reply = response
        .content(RequestType::Converse)
        .map_err(|e| ApiError::model(e, &model_request))?;

    Ok(ApiResponse::ok(ConverseData {
        response: reply,
        conversation_id: response.conversation_id(),
        subject: request.subject,
        language,
        metadata: ResponseMetadata {
            processing_time: elapsed_ms(started),
            model_used: response.model_used(),
            language_detected: None,
            subject_detected: None,
            timestamp: Utc::now(),
        },
    }))
}

// ============================================================================
// Data Handlers
// ============================================================================

/// Handler for `GET /api/data/subjects`.
async fn handle_subjects() -> Json<ApiResponse<SubjectsData>> {
    ApiResponse::ok(SubjectsData {
        subjects: catalog::subjects(),
    })
}

/// Handler for `GET /api/data/levels`.
async fn handle_levels() -> Json<ApiResponse<LevelsData>> {
    ApiResponse::ok(LevelsData {
        levels: catalog::levels(),
    })
}

/// Handler for `GET /api/data/curriculum`.
async fn handle_curriculum() -> Json<ApiResponse<serde_json::Value>> {
    ApiResponse::ok(catalog::curriculum())
}

/// Handler for `POST /api/data/upload`.
///
/// Nothing is stored; the batch is only checked against the curriculum.
async fn handle_upload(
    payload: std::result::Result<Json<UploadRequest>, JsonRejection>,
) -> std::result::Result<Json<UploadResponse>, ApiError> {
    let Json(request) = payload?;

    let received = request.exercises.len();
    let pending = request
        .exercises
        .iter()
        .filter(|e| validate_curriculum_alignment(&e.subject, &e.level, &e.language))
        .count();
    let rejected = received - pending;

    if rejected > 0 {
        warn!(received, rejected, "Upload batch contains misaligned exercises");
    } else {
        info!(received, "Upload batch received");
    }

    Ok(Json(UploadResponse {
        success: true,
        message: format!("Received {received} exercises for processing"),
        data: UploadData {
            received,
            processed: 0,
            pending,
            rejected,
        },
    }))
}

// ============================================================================
// Health Handlers
// ============================================================================

fn basic_health(config: &Config, status: HealthStatus) -> HealthResponse {
    HealthResponse {
        success: true,
        status,
        timestamp: Utc::now(),
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        environment: config.environment.clone(),
    }
}

/// Handler for `GET /api/health`.
async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(basic_health(&state.config, HealthStatus::Healthy))
}

/// Handler for `GET /api/health/detailed`.
///
/// Probes the model service; an unreachable service degrades the status.
async fn handle_health_detailed(State(state): State<Arc<AppState>>) -> Json<DetailedHealthResponse> {
    let model_service = state.model.probe_health().await;
    let status = if model_service == DependencyStatus::Unreachable {
        warn!(url = %state.model.base_url(), "Model service unreachable");
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    Json(DetailedHealthResponse {
        health: basic_health(&state.config, status),
        dependencies: Dependencies { model_service },
        metrics: HealthMetrics {
            uptime: (Utc::now() - state.started_at).num_seconds(),
        },
    })
}

/// Handler for `GET /api/health/ready`.
async fn handle_ready() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        success: true,
        ready: true,
        timestamp: Utc::now(),
    })
}

/// Handler for `GET /api/health/live`.
async fn handle_live() -> Json<LiveResponse> {
    Json(LiveResponse {
        success: true,
        alive: true,
        timestamp: Utc::now(),
    })
}

// ============================================================================
// Descriptor & Fallback
// ============================================================================

/// Handler for `GET /`.
async fn handle_root() -> Json<serde_json::Value> {
    let languages: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
    let subjects: Vec<&str> = Subject::ACADEMIC.iter().map(|s| s.as_str()).collect();

    Json(serde_json::json!({
        "name": "BACAI API",
        "version": VERSION,
        "description": "Mauritanian AI Educational System API",
        "endpoints": {
            "solve": "/api/solve",
            "explain": "/api/explain",
            "converse": "/api/converse",
            "data": "/api/data",
            "health": "/api/health"
        },
        "supported_languages": languages,
        "supported_subjects": subjects
    }))
}

/// Fallback for unknown routes.
async fn handle_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Endpoint not found".to_string(),
            code: "NOT_FOUND".to_string(),
            message: None,
        }),
    )
}

// ============================================================================
// Tests
// ============================================================================
