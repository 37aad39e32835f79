use chrono::{NaiveDateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct NewPracticeSession<'a> {
    pub word_id: i64,
    pub user_sentence: &'a str,
    pub score: f64,
    pub feedback: &'a str,
    pub corrected_sentence: &'a str,
}

/// One practice attempt joined with its word, as served by the history
/// endpoint.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub id: i64,
    pub word: String,
    pub difficulty_level: String,
    pub user_sentence: String,
    pub score: f64,
    pub feedback: Option<String>,
    pub corrected_sentence: Option<String>,
    pub practiced_at: Option<NaiveDateTime>,
}

pub async fn insert_session(
    pool: &SqlitePool,
    session: &NewPracticeSession<'_>,
) -> Result<i64, sqlx::Error> {
    let practiced_at = Utc::now().naive_utc();

    let result = sqlx::query(
        r#"
        INSERT INTO "practice_sessions"
            ("word_id", "user_sentence", "score", "feedback", "corrected_sentence", "practiced_at")
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(session.word_id)
    .bind(session.user_sentence)
    .bind(session.score)
    .bind(session.feedback)
    .bind(session.corrected_sentence)
    .bind(practiced_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn recent_sessions(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<HistoryEntry>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT
            p."id", w."word", w."difficulty_level", p."user_sentence",
            p."score", p."feedback", p."corrected_sentence", p."practiced_at"
        FROM "practice_sessions" p
        JOIN "words" w ON w."id" = p."word_id"
        ORDER BY p."practiced_at" DESC, p."id" DESC
        LIMIT ?1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.iter().map(map_history_entry).collect()
}

pub async fn count_sessions(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "practice_sessions""#)
        .fetch_one(pool)
        .await
}

/// Mean score across all sessions; `None` when there are no rows.
pub async fn average_score(pool: &SqlitePool) -> Result<Option<f64>, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT AVG("score") FROM "practice_sessions""#)
        .fetch_one(pool)
        .await
}

pub async fn distinct_words_practiced(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(DISTINCT "word_id") FROM "practice_sessions""#)
        .fetch_one(pool)
        .await
}

/// Session counts grouped by the practiced word's difficulty level. Levels
/// with no sessions are absent here; the summary handler zero-fills them.
pub async fn sessions_by_level(pool: &SqlitePool) -> Result<Vec<(String, i64)>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT w."difficulty_level" AS "level", COUNT(p."id") AS "session_count"
        FROM "practice_sessions" p
        JOIN "words" w ON w."id" = p."word_id"
        GROUP BY w."difficulty_level"
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| Ok((row.try_get("level")?, row.try_get("session_count")?)))
        .collect()
}

fn map_history_entry(row: &SqliteRow) -> Result<HistoryEntry, sqlx::Error> {
    Ok(HistoryEntry {
        id: row.try_get("id")?,
        word: row.try_get("word")?,
        difficulty_level: row.try_get("difficulty_level")?,
        user_sentence: row.try_get("user_sentence")?,
        score: row.try_get("score")?,
        feedback: row.try_get("feedback")?,
        corrected_sentence: row.try_get("corrected_sentence")?,
        practiced_at: row.try_get("practiced_at")?,
    })
}
