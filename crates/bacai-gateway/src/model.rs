//! Client for the external model inference service.
//!
//! Every request is a single `POST {base}/api/process` carrying a bearer
//! token and a JSON payload tagged with `request_type`. The client never
//! retries; failures are classified into [`ModelErrorKind`] and surfaced to
//! the handler, which answers with a localized fallback message.

use bacai_lang::{DetailLevel, Language, Level, SolveMode, Subject, TutorMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{GatewayError, ModelErrorKind, Result};

/// Path of the processing endpoint on the model service.
const PROCESS_PATH: &str = "/api/process";

/// Path of the health endpoint on the model service.
const HEALTH_PATH: &str = "/health";

/// Longest error body quoted back in an error message.
const MAX_ERROR_BODY: usize = 512;

// ============================================================================
// Payloads
// ============================================================================

/// The three kinds of work the model service performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Solve an exercise.
    Solve,
    /// Explain a concept.
    Explain,
    /// Continue a tutoring conversation.
    Converse,
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solve => write!(f, "solve"),
            Self::Explain => write!(f, "explain"),
            Self::Converse => write!(f, "converse"),
        }
    }
}

impl RequestType {
    /// Apology returned to the caller when the model service cannot answer.
    #[must_use]
    pub const fn fallback_message(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Solve, Language::English) => {
                "I apologize, but I am currently unable to solve your problem. Please try again later."
            }
            (Self::Solve, Language::Arabic) => {
                "أعتذر، ولكن لا أستطيع حاليًا حل مشكلتك. يرجى المحاولة مرة أخرى لاحقًا."
            }
            (Self::Solve, Language::French) => {
                "Je suis désolé, mais je ne peux pas résoudre votre problème actuellement. Veuillez réessayer plus tard."
            }
            (Self::Explain, Language::English) => {
                "I apologize, but I am currently unable to provide explanations. Please try again later."
            }
            (Self::Explain, Language::Arabic) => {
                "أعتذر، ولكن لا أستطيع حاليًا تقديم شروحات. يرجى المحاولة مرة أخرى لاحقًا."
            }
            (Self::Explain, Language::French) => {
                "Je suis désolé, mais je ne peux pas fournir d'explications actuellement. Veuillez réessayer plus tard."
            }
            (Self::Converse, Language::English) => {
                "I apologize, but I am currently unavailable for conversation. Please try again later."
            }
            (Self::Converse, Language::Arabic) => {
                "أعتذر، ولكن لا أتوفر حاليًا للمحادثة. يرجى المحاولة مرة أخرى لاحقًا."
            }
            (Self::Converse, Language::French) => {
                "Je suis désolé, mais je ne suis pas disponible pour la conversation actuellement. Veuillez réessayer plus tard."
            }
        }
    }
}

/// Normalized `solve` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvePayload {
    /// Exercise text.
    pub exercise: String,
    /// Given or classified subject.
    pub subject: Subject,
    /// Education level.
    pub level: Level,
    /// Given or detected language.
    pub language: Language,
    /// Presentation mode.
    pub mode: SolveMode,
    /// Whether to ground the answer in local cultural context.
    pub cultural_context: bool,
}

/// Normalized `explain` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainPayload {
    /// Concept to explain.
    pub concept: String,
    /// Subject of the concept.
    pub subject: Subject,
    /// Education level.
    pub level: Level,
    /// Given or detected language.
    pub language: Language,
    /// Depth of the explanation.
    pub detail_level: DetailLevel,
    /// Whether to include worked examples.
    pub examples: bool,
    /// Whether to ground the answer in local cultural context.
    pub cultural_context: bool,
}

/// Normalized `converse` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversePayload {
    /// The learner's message.
    pub message: String,
    /// Conversation to continue, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Conversation subject.
    pub subject: Subject,
    /// Given or detected language.
    pub language: Language,
    /// Tutor tone.
    pub tutor_mode: TutorMode,
    /// Whether to reason step by step.
    pub step_by_step: bool,
}

/// Body sent to `POST /api/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request_type", rename_all = "lowercase")]
pub enum ModelRequest {
    /// Solve an exercise.
    Solve(SolvePayload),
    /// Explain a concept.
    Explain(ExplainPayload),
    /// Continue a conversation.
    Converse(ConversePayload),
}

impl ModelRequest {
    /// Returns the request type tag.
    #[must_use]
    pub const fn request_type(&self) -> RequestType {
        match self {
            Self::Solve(_) => RequestType::Solve,
            Self::Explain(_) => RequestType::Explain,
            Self::Converse(_) => RequestType::Converse,
        }
    }

    /// Returns the language the request is written in.
    #[must_use]
    pub const fn language(&self) -> Language {
        match self {
            Self::Solve(p) => p.language,
            Self::Explain(p) => p.language,
            Self::Converse(p) => p.language,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Body returned by `POST /api/process`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Whether the model service produced an answer.
    #[serde(default)]
    pub success: bool,
    /// The answer, when `success` is true.
    #[serde(default)]
    pub data: Option<ModelData>,
    /// Generation metadata.
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
    /// Error description, when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

/// Answer content. Exactly one of the content fields is expected, matching
/// the request type; values are relayed unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelData {
    /// Solution to a `solve` request.
    #[serde(default)]
    pub solution: Option<serde_json::Value>,
    /// Explanation for an `explain` request.
    #[serde(default)]
    pub explanation: Option<serde_json::Value>,
    /// Reply to a `converse` request.
    #[serde(default)]
    pub response: Option<serde_json::Value>,
    /// Conversation identifier assigned by the model service.
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Generation metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Identifier of the model that produced the answer.
    #[serde(default)]
    pub model_used: Option<String>,
}

impl ModelResponse {
    /// Identifier of the model used, or `"unknown"`.
    #[must_use]
    pub fn model_used(&self) -> String {
        self.metadata
            .as_ref()
            .and_then(|m| m.model_used.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Extracts the content field matching `request_type`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidResponse` model error when the field is missing or
    /// `null`.
    pub fn content(&self, request_type: RequestType) -> Result<serde_json::Value> {
        let data = self.data.as_ref();
        let (field, value) = match request_type {
            RequestType::Solve => ("solution", data.and_then(|d| d.solution.clone())),
            RequestType::Explain => ("explanation", data.and_then(|d| d.explanation.clone())),
            RequestType::Converse => ("response", data.and_then(|d| d.response.clone())),
        };
        value.filter(|v| !v.is_null()).ok_or_else(|| {
            GatewayError::model_service(
                ModelErrorKind::InvalidResponse,
                format!("model service response has no data.{field}"),
            )
        })
    }

    /// Conversation identifier returned by the model service.
    #[must_use]
    pub fn conversation_id(&self) -> Option<String> {
        self.data.as_ref().and_then(|d| d.conversation_id.clone())
    }
}

/// Reachability of the model service as seen by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    /// Responded with a 2xx status.
    Healthy,
    /// Responded with a non-2xx status.
    Unhealthy,
    /// Did not respond.
    Unreachable,
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the model service.
#[derive(Debug, Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    health_timeout: std::time::Duration,
}

impl ModelClient {
    /// Creates a client from the gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigValidationError` if the underlying HTTP
    /// client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("BACAI-API/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| {
                GatewayError::config_validation(
                    format!("failed to build HTTP client: {e}"),
                    "Check the TLS setup of the host",
                )
            })?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            token: config.model_service_token.clone(),
            health_timeout: config.health_timeout(),
        })
    }

    /// Base URL of the model service.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `request` to the model service.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError::ModelService` error when the service is
    /// unreachable, times out, answers with a non-2xx status, returns a body
    /// that is not a model response, or reports `success: false`.
    pub async fn process(&self, request: &ModelRequest) -> Result<ModelResponse> {
        let url = format!("{}{PROCESS_PATH}", self.base_url);
        let request_type = request.request_type();
        debug!(%url, %request_type, "Calling model service");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            warn!(status = status.as_u16(), %request_type, "Model service returned an error status");
            return Err(GatewayError::model_service(
                ModelErrorKind::from_status(status.as_u16()),
                format!("Model service error: {} - {body}", status.as_u16()),
            ));
        }

        let parsed: ModelResponse = response.json().await.map_err(|e| {
            GatewayError::model_service(
                ModelErrorKind::InvalidResponse,
                format!("failed to decode model service response: {e}"),
            )
        })?;

        if !parsed.success {
            let message = parsed
                .error
                .clone()
                .unwrap_or_else(|| "Model service unavailable".to_string());
            warn!(%request_type, error = %message, "Model service rejected the request");
            return Err(GatewayError::model_service(ModelErrorKind::Rejected, message));
        }

        Ok(parsed)
    }

    /// Probes `GET {base}/health` with the health timeout.
    pub async fn probe_health(&self) -> DependencyStatus {
        let url = format!("{}{HEALTH_PATH}", self.base_url);
        match self.http.get(&url).timeout(self.health_timeout).send().await {
            Ok(response) if response.status().is_success() => DependencyStatus::Healthy,
            Ok(response) => {
                debug!(status = response.status().as_u16(), "Model service health probe failed");
                DependencyStatus::Unhealthy
            }
            Err(e) => {
                debug!(error = %e, "Model service unreachable");
                DependencyStatus::Unreachable
            }
        }
    }
}

/// Maps a transport-level reqwest failure to a model error.
fn classify_transport_error(e: reqwest::Error) -> GatewayError {
    let kind = if e.is_timeout() {
        ModelErrorKind::Timeout
    } else {
        ModelErrorKind::Network
    };
    warn!(error = %e, %kind, "Model service call failed");
    GatewayError::model_service(kind, format!("Failed to connect to model service: {e}"))
}
