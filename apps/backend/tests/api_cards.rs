//! Card evaluation API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::fixtures;
use common::TestContext;

#[tokio::test]
async fn test_enter_word_card() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cards/evaluate")
        .json(&fixtures::text_card_request("enter_word", "hello", "helo"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["type"], "text");
    assert_eq!(body["distance"], 1);
    assert_eq!(body["segments"][1]["classification"], "missing");
}

#[tokio::test]
async fn test_enter_word_card_with_overrides() {
    let server = TestContext::new().server();

    let mut request = fixtures::text_card_request("enter_word", "hello", "HELLO");
    request["overrides"] = json!({ "case_insensitive": false });

    let response = server.post("/api/cards/evaluate").json(&request).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["distance"], 5);
    assert_eq!(body["is_correct"], false);
}

#[tokio::test]
async fn test_translate_card_is_self_graded() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cards/evaluate")
        .json(&fixtures::text_card_request("translate", "dog", ""))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "type": "self_graded" }));
}

#[tokio::test]
async fn test_translation_comparison_card() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cards/evaluate")
        .json(&json!({
            "kind": "translation_comparison",
            "expected": { "comparison": { "1": 10, "2": 20 } },
            "answer": { "comparison": [
                { "slot_id": 1, "selected_word_id": 10 },
                { "slot_id": 2, "selected_word_id": 20 }
            ] },
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["type"], "comparison");
    assert_eq!(body["score"], 1.0);
    assert_eq!(body["should_repeat"], false);
}

#[tokio::test]
async fn test_sentence_card_is_not_supported() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cards/evaluate")
        .json(&fixtures::text_card_request(
            "sentence_to_studied_language",
            "I am here",
            "I here",
        ))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "unprocessable");
    assert_eq!(
        body["message"],
        "Unprocessable: card kind sentence_to_studied_language is not supported"
    );
}

#[tokio::test]
async fn test_answer_shape_mismatch() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cards/evaluate")
        .json(&json!({
            "kind": "enter_word",
            "expected": { "text": "hello" },
            "answer": { "comparison": [] },
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "unprocessable");
}
