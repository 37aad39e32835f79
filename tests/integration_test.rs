use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let (app, _db) = common::create_test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn root_lists_endpoints() {
    let (app, _db) = common::create_test_app().await;

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Vocabulary Practice API");
    assert_eq!(body["endpoints"]["word"], "/api/word");
    assert_eq!(body["endpoints"]["validate"], "/api/validate-sentence");
    assert_eq!(body["endpoints"]["summary"], "/api/summary");
    assert_eq!(body["endpoints"]["history"], "/api/history");
    assert_eq!(body["endpoints"]["health"], "/health");
}

#[tokio::test]
async fn unknown_path_returns_json_404() {
    let (app, _db) = common::create_test_app().await;

    let response = app.oneshot(get("/nonexistent/path")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn random_word_on_empty_table_is_404() {
    let (app, _db) = common::create_test_app().await;

    let response = app.oneshot(get("/api/word")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn random_word_returns_a_seeded_word() {
    let (app, db) = common::create_test_app().await;
    common::insert_word(&db, "happy", "Feeling pleasure.", "Beginner").await;
    common::insert_word(&db, "journey", "An act of travelling.", "Beginner").await;

    let response = app.oneshot(get("/api/word")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let word = body["word"].as_str().unwrap();
    assert!(word == "happy" || word == "journey");
    assert!(body["id"].is_i64());
    assert!(body["definition"].is_string());
    assert!(body["difficulty_level"].is_string());
}

#[tokio::test]
async fn validate_sentence_scores_and_persists() {
    let (app, db) = common::create_test_app().await;
    let word_id = common::insert_word(&db, "happy", "Feeling pleasure.", "Beginner").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/validate-sentence",
            json!({"word_id": word_id, "sentence": "i am happy today"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    // 4 tokens + 2.0 for using the word
    assert_eq!(body["score"].as_f64(), Some(6.0));
    assert_eq!(body["level"], "Beginner");
    assert_eq!(body["corrected_sentence"], "I am happy today.");
    assert_eq!(
        body["suggestion"],
        "Good! You can add more detail to make it better."
    );

    let response = app.oneshot(get("/api/history")).await.unwrap();
    let history = read_json(response).await;
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["word"], "happy");
    assert_eq!(entries[0]["difficulty_level"], "Beginner");
    assert_eq!(entries[0]["sentence"], "i am happy today");
    assert_eq!(entries[0]["score"].as_f64(), Some(6.0));
    assert_eq!(entries[0]["corrected_sentence"], "I am happy today.");
    assert!(entries[0]["practiced_at"].is_string());
}

#[tokio::test]
async fn validate_sentence_unknown_word_writes_nothing() {
    let (app, _db) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/validate-sentence",
            json!({"word_id": 9999, "sentence": "this should not be stored"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/summary")).await.unwrap();
    let body = read_json(response).await;
    assert_eq!(body["total_practices"].as_i64(), Some(0));
}

#[tokio::test]
async fn validate_sentence_rejects_malformed_body() {
    let (app, _db) = common::create_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/validate-sentence")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn summary_empty_is_zero_filled() {
    let (app, _db) = common::create_test_app().await;

    let response = app.oneshot(get("/api/summary")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["total_practices"].as_i64(), Some(0));
    assert_eq!(body["average_score"].as_f64(), Some(0.0));
    assert_eq!(body["total_words_practiced"].as_i64(), Some(0));
    assert_eq!(body["level_distribution"]["Beginner"].as_i64(), Some(0));
    assert_eq!(body["level_distribution"]["Intermediate"].as_i64(), Some(0));
    assert_eq!(body["level_distribution"]["Advanced"].as_i64(), Some(0));
}

#[tokio::test]
async fn summary_aggregates_sessions() {
    let (app, db) = common::create_test_app().await;
    let happy = common::insert_word(&db, "happy", "Feeling pleasure.", "Beginner").await;
    let ephemeral = common::insert_word(&db, "ephemeral", "Short-lived.", "Advanced").await;

    // scores: 6.0, 3.0, 3.0
    for (word_id, sentence) in [
        (happy, "i am happy today"),
        (happy, "happy"),
        (ephemeral, "fame is fleeting"),
    ] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/validate-sentence",
                json!({"word_id": word_id, "sentence": sentence}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/api/summary")).await.unwrap();
    let body = read_json(response).await;

    assert_eq!(body["total_practices"].as_i64(), Some(3));
    assert!((body["average_score"].as_f64().unwrap() - 4.0).abs() < 1e-9);
    assert_eq!(body["total_words_practiced"].as_i64(), Some(2));
    assert_eq!(body["level_distribution"]["Beginner"].as_i64(), Some(2));
    assert_eq!(body["level_distribution"]["Intermediate"].as_i64(), Some(0));
    assert_eq!(body["level_distribution"]["Advanced"].as_i64(), Some(1));
}

#[tokio::test]
async fn history_respects_limit_and_recency() {
    let (app, db) = common::create_test_app().await;
    let word_id = common::insert_word(&db, "journey", "An act of travelling.", "Beginner").await;

    for sentence in ["one", "one two", "one two three"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/validate-sentence",
                json!({"word_id": word_id, "sentence": sentence}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/api/history?limit=2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    // newest first
    assert_eq!(entries[0]["sentence"], "one two three");
    assert_eq!(entries[1]["sentence"], "one two");
    assert!(entries[0]["id"].as_i64().unwrap() > entries[1]["id"].as_i64().unwrap());
}
