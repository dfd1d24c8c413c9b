mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{app_state, StubGenerator, DETAILED_REPORT};
use mock_interview::create_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_router(stub: Arc<StubGenerator>) -> Router {
    create_router(app_state(stub))
}

async fn body_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn start_session(app: &Router) -> String {
    let req = Request::builder()
        .method("POST")
        .uri("/session/start")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp.into_body()).await;
    json["sessionId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = test_router(StubGenerator::replying(DETAILED_REPORT));
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_start_session_returns_question() {
    let app = test_router(StubGenerator::replying(DETAILED_REPORT));
    let req = Request::builder()
        .method("POST")
        .uri("/session/start")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp.into_body()).await;
    assert!(!json["sessionId"].as_str().unwrap().is_empty());
    assert_eq!(
        json["question"],
        "Given an array of integers, return indices of two numbers that add up to a target."
    );
}

#[tokio::test]
async fn test_transcript_append_and_read_back() {
    let app = test_router(StubGenerator::replying(DETAILED_REPORT));
    let id = start_session(&app).await;

    let lines = [
        ("AGENT", "How would you approach this?"),
        ("CANDIDATE", "I would use a hash map"),
        ("AGENT", "What's the complexity?"),
    ];
    for (speaker, text) in lines {
        let resp = app
            .clone()
            .oneshot(post_json(
                &format!("/session/{id}/transcript"),
                json!({"speaker": speaker, "text": text}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp.into_body()).await, json!({"success": true}));
    }

    let resp = app
        .oneshot(get(&format!("/session/{id}/transcripts")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    let expected: Vec<Value> = lines
        .iter()
        .map(|(speaker, text)| json!({"speaker": speaker, "text": text}))
        .collect();
    assert_eq!(json["transcripts"], Value::Array(expected));
}

#[tokio::test]
async fn test_code_is_last_write_wins() {
    let app = test_router(StubGenerator::replying(DETAILED_REPORT));
    let id = start_session(&app).await;

    for code in ["a", "b"] {
        let resp = app
            .clone()
            .oneshot(post_json(
                &format!("/session/{id}/code"),
                json!({ "code": code }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = app
        .oneshot(get(&format!("/session/{id}/code")))
        .await
        .unwrap();
    assert_eq!(body_json(resp.into_body()).await, json!({"code": "b"}));
}

#[tokio::test]
async fn test_unknown_session_is_404() {
    let app = test_router(StubGenerator::replying(DETAILED_REPORT));

    let requests = vec![
        post_json(
            "/session/missing/transcript",
            json!({"speaker": "CANDIDATE", "text": "hi"}),
        ),
        post_json("/session/missing/code", json!({"code": "x"})),
        get("/session/missing/code"),
        get("/session/missing/transcripts"),
        get("/session/missing/next-problem"),
        post_json("/evaluate", json!({"sessionId": "missing"})),
    ];

    for req in requests {
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(resp.into_body()).await,
            json!({"error": "Session not found"})
        );
    }
}

#[tokio::test]
async fn test_bad_bodies_are_400() {
    let app = test_router(StubGenerator::replying(DETAILED_REPORT));
    let id = start_session(&app).await;

    let resp = app
        .clone()
        .oneshot(post_json(
            &format!("/session/{id}/transcript"),
            json!({"speaker": "INTERVIEWER", "text": "hi"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // speaker roles are upper case only
    let resp = app
        .clone()
        .oneshot(post_json(
            &format!("/session/{id}/transcript"),
            json!({"speaker": "candidate", "text": "hi"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .clone()
        .oneshot(post_json(&format!("/session/{id}/code"), json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(post_json("/evaluate", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp.into_body()).await,
        json!({"error": "sessionId is required"})
    );
}

#[tokio::test]
async fn test_next_problem_until_exhausted() {
    let app = test_router(StubGenerator::replying(DETAILED_REPORT));
    let id = start_session(&app).await;
    let uri = format!("/session/{id}/next-problem");

    for expected_id in [2, 3, 4] {
        let resp = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["id"], expected_id);
        assert!(json["question"].is_string());
    }

    for _ in 0..2 {
        let resp = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp.into_body()).await,
            json!({"question": null, "message": "No more problems"})
        );
    }
}

#[tokio::test]
async fn test_evaluate_without_participation_then_404() {
    let stub = StubGenerator::replying(DETAILED_REPORT);
    let app = test_router(stub.clone());
    let id = start_session(&app).await;

    let resp = app
        .clone()
        .oneshot(post_json("/evaluate", json!({ "sessionId": id })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["overallScore"].as_f64(), Some(1.0));
    assert_eq!(json["improvements"][0]["issue"], "No participation");
    assert_eq!(stub.calls(), 0);

    let resp = app
        .oneshot(get(&format!("/session/{id}/code")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_evaluate_with_answer_calls_llm() {
    let stub = StubGenerator::replying(DETAILED_REPORT);
    let app = test_router(stub.clone());
    let id = start_session(&app).await;

    app.clone()
        .oneshot(post_json(
            &format!("/session/{id}/transcript"),
            json!({"speaker": "CANDIDATE", "text": "I would use a hash map"}),
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(post_json("/evaluate", json!({ "sessionId": id })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["overallScore"].as_f64(), Some(6.0));
    assert_eq!(json["communicationAnalysis"]["clarity"], "Clear");
    assert_eq!(stub.calls(), 1);

    let resp = app
        .oneshot(get(&format!("/session/{id}/transcripts")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_evaluate_failure_is_500() {
    let app = test_router(StubGenerator::failing());
    let id = start_session(&app).await;

    app.clone()
        .oneshot(post_json(
            &format!("/session/{id}/code"),
            json!({"code": "def two_sum(nums, target):\n    seen = {}"}),
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(post_json("/evaluate", json!({ "sessionId": id })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["error"], "Evaluation failed");
    assert!(json["message"].is_string());

    // still there for a retry
    let resp = app
        .oneshot(get(&format!("/session/{id}/code")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_livekit_token_validation_and_unconfigured() {
    let app = test_router(StubGenerator::replying(DETAILED_REPORT));

    let resp = app
        .clone()
        .oneshot(post_json("/livekit/token", json!({"sessionId": "abc"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp.into_body()).await,
        json!({"error": "sessionId and identity are required"})
    );

    let resp = app
        .oneshot(post_json(
            "/livekit/token",
            json!({"sessionId": "abc", "identity": "candidate"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_app_nests_under_base_path() {
    let state = app_state(StubGenerator::replying(DETAILED_REPORT));
    let app = mock_interview::create_app(state, "/api", &["http://localhost:3000".to_string()]);

    let resp = app.clone().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_app_base_path_without_leading_slash() {
    let state = app_state(StubGenerator::replying(DETAILED_REPORT));
    let app = mock_interview::create_app(state, "api/", &[]);

    let resp = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
