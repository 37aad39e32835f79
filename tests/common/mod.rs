use axum::Router;
use vocab_practice_backend::db::operations::words;
use vocab_practice_backend::db::Database;

/// Full application over a fresh in-memory database, plus the handle for
/// seeding test fixtures directly.
pub async fn create_test_app() -> (Router, Database) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory database setup failed");

    (vocab_practice_backend::create_app(db.clone()), db)
}

pub async fn insert_word(db: &Database, word: &str, definition: &str, level: &str) -> i64 {
    words::insert_word(db.pool(), word, Some(definition), level)
        .await
        .expect("insert word failed")
}
