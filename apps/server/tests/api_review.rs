//! Review recording tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

#[tokio::test]
async fn test_correct_answer_updates_record() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/review")
        .json(&fixtures::review_request("mina", "vocab_0", true))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["item_id"], "vocab_0");
    assert_eq!(body["record"]["streak"], 1);
    assert_eq!(body["record"]["correct"], 1);
    assert_eq!(body["record"]["incorrect"], 0);
    assert!(body["record"]["lastSeen"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_wrong_answer_resets_streak() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    for _ in 0..3 {
        server
            .post("/api/review")
            .json(&fixtures::review_request("mina", "vocab_0", true))
            .await
            .assert_status_ok();
    }

    let response = server
        .post("/api/review")
        .json(&fixtures::review_request("mina", "vocab_0", false))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["record"]["streak"], 0);
    assert_eq!(body["record"]["correct"], 3);
    assert_eq!(body["record"]["incorrect"], 1);
}

/// Answers persist to disk: a second server over the same state dir sees
/// the history the first one wrote.
#[tokio::test]
async fn test_history_survives_across_requests() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    server
        .post("/api/review")
        .json(&fixtures::review_request("mina", "verb_1", true))
        .await
        .assert_status_ok();

    let blob = std::fs::read_to_string(ctx.state_path().join("mina_srs.json")).unwrap();
    let history: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(history["verb_1"]["streak"], 1);
    assert_eq!(history["verb_1"]["correct"], 1);
}

/// Compound ids from the conjugation drill are tracked independently of
/// the verb's own id.
#[tokio::test]
async fn test_compound_conjugation_ids_are_separate_entries() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    server
        .post("/api/review")
        .json(&fixtures::review_request("mina", "verb_0", true))
        .await
        .assert_status_ok();
    server
        .post("/api/review")
        .json(&fixtures::review_request("mina", "verb_0_past", false))
        .await
        .assert_status_ok();

    let blob = std::fs::read_to_string(ctx.state_path().join("mina_srs.json")).unwrap();
    let history: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(history["verb_0"]["streak"], 1);
    assert_eq!(history["verb_0_past"]["streak"], 0);
    assert_eq!(history["verb_0_past"]["incorrect"], 1);
}

/// A corrupt history blob is discarded, not fatal; the next answer starts
/// a fresh history.
#[tokio::test]
async fn test_corrupt_history_starts_fresh() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    std::fs::write(ctx.state_path().join("mina_srs.json"), "{ totally broken").unwrap();

    let response = server
        .post("/api/review")
        .json(&fixtures::review_request("mina", "vocab_0", true))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["record"]["streak"], 1);
}

#[tokio::test]
async fn test_empty_item_id_is_400() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/review")
        .json(&fixtures::review_request("mina", "", true))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_unknown_student_is_404() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/review")
        .json(&fixtures::review_request("nobody", "vocab_0", true))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
