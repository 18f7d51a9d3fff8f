//! End-to-end API tests: drive the router directly with `oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

use medsift::api::{api_router, ApiContext};
use medsift::config::{ChatMode, Settings};

const BOUNDARY: &str = "medsift-test-boundary";

fn router_with(settings: Settings) -> Router {
    // Keep upload fixtures out of the real home directory.
    static DATA_DIR: std::sync::OnceLock<tempfile::TempDir> = std::sync::OnceLock::new();
    let dir = DATA_DIR.get_or_init(|| tempfile::tempdir().unwrap());
    std::env::set_var("MEDSIFT_DATA_DIR", dir.path());

    api_router(ApiContext::new(settings))
}

fn test_router() -> Router {
    router_with(Settings::default())
}

fn multipart_upload(file_name: &str, contents: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri("/api/v1/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn status_before_any_upload() {
    let app = test_router();
    let response = app.oneshot(get("/api/v1/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["has_report"], false);
    assert_eq!(json["has_summary"], false);
    assert_eq!(json["chat_messages"], 0);
}

#[tokio::test]
async fn summary_and_metrics_404_before_upload() {
    let app = test_router();
    for uri in ["/api/v1/summary", "/api/v1/metrics"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NO_REPORT");
    }
}

#[tokio::test]
async fn chat_before_upload_is_404() {
    let app = test_router();
    let response = app
        .oneshot(json_post("/api/v1/chat", serde_json::json!({"message": "hi"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upload_analyzes_and_serves_summary() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(multipart_upload(
            "report.txt",
            "Blood pressure 130 mmHg\nPatient stable",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let red_flags = json["summary"]["red_flags"].as_array().unwrap();
    assert!(
        red_flags[0]
            .as_str()
            .unwrap()
            .contains("Abnormal blood pressure"),
        "got: {red_flags:?}"
    );

    let response = app.oneshot(get("/api/v1/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["summary"]["key_findings"][0],
        "No key findings found in the report."
    );
}

#[tokio::test]
async fn metrics_returns_confidence_block() {
    let app = test_router();
    app.clone()
        .oneshot(multipart_upload("vitals.txt", "Heart rate 72 bpm\nMRI scheduled"))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/v1/metrics")).await.unwrap();
    let json = body_json(response).await;
    let metrics = &json["metrics"];
    assert!(metrics["diagnostic_confidence"].as_f64().unwrap() >= 0.0);
    assert_eq!(metrics["risk_levels"].as_array().unwrap().len(), 3);
    assert_eq!(
        metrics["measurement_accuracy"][0]["parameter"],
        "heart rate"
    );
    assert_eq!(metrics["test_results"][0]["test_type"], "MRI");
}

#[tokio::test]
async fn chat_answers_from_report_lines() {
    let app = test_router();
    app.clone()
        .oneshot(multipart_upload(
            "vitals.txt",
            "Heart rate: 72 bpm\nPatient discharged",
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_post(
            "/api/v1/chat",
            serde_json::json!({"message": "heart rate"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Heart rate: 72 bpm");
    assert_eq!(json["chat_history"].as_array().unwrap().len(), 2);
    assert_eq!(json["chat_history"][0]["role"], "user");
    assert_eq!(json["chat_history"][1]["role"], "assistant");

    let response = app.oneshot(get("/api/v1/chat-history")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["chat_history"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn new_upload_replaces_report_and_clears_history() {
    let app = test_router();
    app.clone()
        .oneshot(multipart_upload("a.txt", "Severe anemia suspected"))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_post("/api/v1/chat", serde_json::json!({"message": "anemia"})))
        .await
        .unwrap();

    app.clone()
        .oneshot(multipart_upload("b.txt", "Glucose 120 mg/dL"))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/api/v1/chat-history")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["chat_history"].as_array().unwrap().len(), 0);

    let response = app.oneshot(get("/api/v1/summary")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["summary"]["red_flags"][0], "No red flags found in the report.");
    assert!(json["summary"]["key_findings"][0]
        .as_str()
        .unwrap()
        .contains("Normal glucose"));
}

#[tokio::test]
async fn unreadable_upload_degrades_to_placeholder_summary() {
    let app = test_router();
    let response = app
        .clone()
        .oneshot(multipart_upload("data.csv", "a,b,c"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["summary"]["red_flags"][0], "No red flags found in the report.");
    assert_eq!(json["summary"]["confidence_metrics"]["diagnostic_confidence"], 0.0);

    let response = app.oneshot(get("/api/v1/status")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["has_report"], false); // empty text
    assert_eq!(json["has_summary"], true);
}

#[tokio::test]
async fn upload_accepts_multi_megabyte_reports() {
    let app = test_router();
    // Well above axum's default 2 MB body limit, well below the 16 MB cap.
    let mut contents = String::with_capacity(3 * 1024 * 1024);
    while contents.len() < 3 * 1024 * 1024 {
        contents.push_str("Patient stable, vitals within normal limits.\n");
    }

    let response = app
        .oneshot(multipart_upload("big-report.txt", &contents))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn failed_remote_chat_still_records_user_turn() {
    // Remote mode without an API key: the advice client is absent, so the
    // chat turn fails with 502 — but the user's question must be kept.
    let app = router_with(Settings {
        chat_mode: ChatMode::Remote,
        ..Settings::default()
    });
    app.clone()
        .oneshot(multipart_upload("r.txt", "Impression: stable"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_post("/api/v1/chat", serde_json::json!({"message": "next steps?"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let response = app.oneshot(get("/api/v1/chat-history")).await.unwrap();
    let json = body_json(response).await;
    let history = json["chat_history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["role"], "user");
    assert_eq!(history[0]["content"], "next steps?");
}

#[tokio::test]
async fn upload_without_file_field_is_400() {
    let app = test_router();
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"other\"\r\n\r\n\
         value\r\n\
         --{BOUNDARY}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn advice_without_api_key_is_502() {
    let app = test_router();
    app.clone()
        .oneshot(multipart_upload("r.txt", "Impression: stable"))
        .await
        .unwrap();

    let response = app
        .oneshot(json_post("/api/v1/advice", serde_json::json!({"query": "next steps?"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "ADVICE_FAILED");
}
