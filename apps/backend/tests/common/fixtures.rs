//! Request bodies for integration tests.
#![allow(dead_code)]

use serde_json::{json, Value};

/// Body for the align and highlight endpoints.
pub fn answer_request(user: &str, correct: &str, case_insensitive: Option<bool>) -> Value {
    let mut body = json!({ "user": user, "correct": correct });
    if let Some(flag) = case_insensitive {
        body["case_insensitive"] = json!(flag);
    }
    body
}

/// Body for the comparison validate endpoint.
///
/// `submitted` pairs are (slot, selected word); `None` leaves the slot empty.
pub fn comparison_request(expected: &[(i64, i64)], submitted: &[(i64, Option<i64>)]) -> Value {
    let expected: serde_json::Map<String, Value> = expected
        .iter()
        .map(|(slot, word)| (slot.to_string(), json!(word)))
        .collect();
    let submitted: Vec<Value> = submitted
        .iter()
        .map(|(slot, word)| json!({ "slot_id": slot, "selected_word_id": word }))
        .collect();

    json!({ "expected": expected, "submitted": submitted })
}

/// Body for the card evaluate endpoint with a typed answer.
pub fn text_card_request(kind: &str, correct: &str, typed: &str) -> Value {
    json!({
        "kind": kind,
        "expected": { "text": correct },
        "answer": { "text": typed },
    })
}
