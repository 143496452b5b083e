//! Integration tests for the gateway against a fake model service.
//!
//! Both the gateway and the fake model service run on real sockets. The
//! fake service checks the bearer token and echoes the payload it received,
//! so the tests can see exactly what the gateway forwarded.

use std::net::TcpListener;
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use bacai_gateway::{create_router, AppState, Config, RequestType};
use bacai_lang::Language;
use serde_json::{json, Value};

const TOKEN: &str = "integration-token";

/// Helper to find an available port for testing.
fn find_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to port")
        .local_addr()
        .expect("Failed to get local addr")
        .port()
}

/// Serves `router` on a fresh local port and returns its base URL.
async fn spawn(router: Router) -> (String, tokio::task::JoinHandle<()>) {
    let port = find_available_port();
    let addr = format!("127.0.0.1:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://{addr}"), handle)
}

/// Fake model service handler.
///
/// Payloads whose text contains `REJECT` get `success: false`; `CRASH`
/// gets a 500; `EMPTY` gets a success with no content.
async fn fake_process(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "error": "bad token"})),
        );
    }

    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let text = ["exercise", "concept", "message"]
        .iter()
        .find_map(|k| body.get(*k).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string();

    if text.contains("CRASH") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "boom"})),
        );
    }
    if text.contains("REJECT") {
        return (
            StatusCode::OK,
            Json(json!({"success": false, "error": "model overloaded"})),
        );
    }
    if text.contains("EMPTY") {
        return (StatusCode::OK, Json(json!({"success": true, "data": {}})));
    }

    let echo = json!({"received": body, "user_agent": user_agent});
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": {
                "solution": echo,
                "explanation": echo,
                "response": echo,
                "conversation_id": "conv-42"
            },
            "metadata": {"model_used": "fake-model"}
        })),
    )
}

fn fake_model_router() -> Router {
    Router::new()
        .route("/api/process", post(fake_process))
        .route("/health", get(|| async { "ok" }))
}

/// Spawns a fake model service and a gateway pointed at it.
async fn spawn_gateway_with_token(token: &str) -> (String, Vec<tokio::task::JoinHandle<()>>) {
    let (model_url, model_handle) = spawn(fake_model_router()).await;

    let config = Config {
        model_service_url: model_url,
        model_service_token: token.to_string(),
        request_timeout_secs: 5,
        health_timeout_secs: 2,
        ..Default::default()
    };
    let state = AppState::new(config).expect("Failed to build state");
    let (gateway_url, gateway_handle) = spawn(create_router(state)).await;

    (gateway_url, vec![model_handle, gateway_handle])
}

async fn spawn_gateway() -> (String, Vec<tokio::task::JoinHandle<()>>) {
    spawn_gateway_with_token(TOKEN).await
}

async fn post_json(url: &str, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("Request failed");
    let status = StatusCode::from_u16(response.status().as_u16()).expect("Invalid status");
    let body = response.json().await.expect("Invalid JSON body");
    (status, body)
}

// ============================================================================
// Solve
// ============================================================================

#[tokio::test]
async fn test_solve_detects_arabic_mathematics() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) = post_json(
        &format!("{url}/api/solve"),
        json!({"exercise": "حل المعادلة التالية وأوجد الزاوية"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["language"], "ar");
    assert_eq!(data["subject"], "mathematics");
    assert_eq!(data["level"], "secondary_lycee");
    assert_eq!(data["mode"], "step-by-step");
    assert_eq!(data["metadata"]["model_used"], "fake-model");
    assert_eq!(data["metadata"]["language_detected"], "ar");
    assert_eq!(data["metadata"]["subject_detected"], "mathematics");

    let forwarded = &data["solution"]["received"];
    assert_eq!(forwarded["request_type"], "solve");
    assert_eq!(forwarded["language"], "ar");
    assert_eq!(forwarded["subject"], "mathematics");
    assert_eq!(forwarded["cultural_context"], true);
    assert!(data["solution"]["user_agent"]
        .as_str()
        .unwrap()
        .starts_with("BACAI-API/"));
}

#[tokio::test]
async fn test_solve_detects_french_sciences() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) = post_json(
        &format!("{url}/api/solve"),
        json!({"exercise": "Expérience de chimie: l'énergie libérée élève la température à 25°C"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["language"], "fr");
    assert_eq!(body["data"]["subject"], "sciences");
}

#[tokio::test]
async fn test_solve_detects_english_mathematics() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) = post_json(
        &format!("{url}/api/solve"),
        json!({"exercise": "Solve the equation 2x + 3 = 7 and find the number x"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["language"], "en");
    assert_eq!(body["data"]["subject"], "mathematics");
}

#[tokio::test]
async fn test_solve_explicit_fields_override_detection() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) = post_json(
        &format!("{url}/api/solve"),
        json!({
            "exercise": "Solve the equation 2x + 3 = 7",
            "language": "fr",
            "subject": "sciences",
            "level": "university",
            "mode": "answer-only",
            "cultural_context": false
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let forwarded = &body["data"]["solution"]["received"];
    assert_eq!(forwarded["language"], "fr");
    assert_eq!(forwarded["subject"], "sciences");
    assert_eq!(forwarded["level"], "university");
    assert_eq!(forwarded["mode"], "answer-only");
    assert_eq!(forwarded["cultural_context"], false);
}

#[tokio::test]
async fn test_solve_unmatched_text_routes_to_general() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) =
        post_json(&format!("{url}/api/solve"), json!({"exercise": "hello there"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["subject"], "general");
}

// ============================================================================
// Explain & Converse
// ============================================================================

#[tokio::test]
async fn test_explain_relays_explanation() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) = post_json(
        &format!("{url}/api/explain"),
        json!({"concept": "Photosynthesis", "subject": "sciences", "detail_level": "basic"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["concept"], "Photosynthesis");
    assert_eq!(data["language"], "en");
    assert_eq!(data["detail_level"], "basic");
    assert_eq!(data["explanation"]["received"]["request_type"], "explain");
    assert_eq!(data["explanation"]["received"]["examples"], true);
    assert!(data["metadata"].get("subject_detected").is_none());
}

#[tokio::test]
async fn test_converse_detects_language_and_returns_conversation_id() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) = post_json(
        &format!("{url}/api/converse"),
        json!({"message": "مرحبا، هل يمكنك مساعدتي في الدرس؟", "conversation_id": "conv-41"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["language"], "ar");
    assert_eq!(data["subject"], "general");
    assert_eq!(data["conversation_id"], "conv-42");
    let forwarded = &data["response"]["received"];
    assert_eq!(forwarded["request_type"], "converse");
    assert_eq!(forwarded["conversation_id"], "conv-41");
    assert_eq!(forwarded["tutor_mode"], "friendly");
}

// ============================================================================
// Model failures
// ============================================================================

#[tokio::test]
async fn test_model_rejection_returns_503_with_localized_fallback() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) = post_json(
        &format!("{url}/api/solve"),
        json!({"exercise": "REJECT this", "language": "fr"}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "MODEL_ERROR");
    assert_eq!(body["error"], "model overloaded");
    assert_eq!(
        body["message"],
        RequestType::Solve.fallback_message(Language::French)
    );
}

#[tokio::test]
async fn test_model_server_error_returns_503() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) = post_json(
        &format!("{url}/api/explain"),
        json!({"concept": "CRASH", "subject": "mathematics"}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Model service error: 500"));
}

#[tokio::test]
async fn test_model_missing_content_returns_503() {
    let (url, _handles) = spawn_gateway().await;

    let (status, body) =
        post_json(&format!("{url}/api/converse"), json!({"message": "EMPTY"})).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("data.response"));
}

#[tokio::test]
async fn test_wrong_token_returns_503() {
    let (url, _handles) = spawn_gateway_with_token("wrong-token").await;

    let (status, body) = post_json(
        &format!("{url}/api/solve"),
        json!({"exercise": "Solve the equation"}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Model service error: 401"));
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_detailed_health_reports_healthy_model_service() {
    let (url, _handles) = spawn_gateway().await;

    let body: Value = reqwest::get(format!("{url}/api/health/detailed"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["dependencies"]["model_service"], "healthy");
    assert_eq!(body["service"], "bacai-api");
}

#[tokio::test]
async fn test_concurrent_requests() {
    let (url, _handles) = spawn_gateway().await;

    let requests = (0..8).map(|i| {
        let url = format!("{url}/api/solve");
        tokio::spawn(async move {
            post_json(&url, json!({"exercise": format!("calculate the area {i}")})).await
        })
    });

    for handle in requests.collect::<Vec<_>>() {
        let (status, body) = handle.await.expect("Task panicked");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["subject"], "mathematics");
    }
}
