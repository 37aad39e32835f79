use chrono::{NaiveDateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// A vocabulary entry. Rows are created by seeding (or operator tooling),
/// never by the API itself.
#[derive(Debug, Clone)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub definition: Option<String>,
    pub difficulty_level: String,
    pub created_at: Option<NaiveDateTime>,
}

pub async fn list_words(pool: &SqlitePool) -> Result<Vec<Word>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT "id", "word", "definition", "difficulty_level", "created_at"
        FROM "words"
        ORDER BY "id"
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(map_word).collect()
}

pub async fn get_word(pool: &SqlitePool, id: i64) -> Result<Option<Word>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT "id", "word", "definition", "difficulty_level", "created_at"
        FROM "words"
        WHERE "id" = ?1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(map_word).transpose()
}

pub async fn count_words(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "words""#)
        .fetch_one(pool)
        .await
}

pub async fn insert_word(
    pool: &SqlitePool,
    word: &str,
    definition: Option<&str>,
    difficulty_level: &str,
) -> Result<i64, sqlx::Error> {
    let created_at = Utc::now().naive_utc();

    let result = sqlx::query(
        r#"
        INSERT INTO "words" ("word", "definition", "difficulty_level", "created_at")
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(word)
    .bind(definition)
    .bind(difficulty_level)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

fn map_word(row: &SqliteRow) -> Result<Word, sqlx::Error> {
    Ok(Word {
        id: row.try_get("id")?,
        word: row.try_get("word")?,
        definition: row.try_get("definition")?,
        difficulty_level: row.try_get("difficulty_level")?,
        created_at: row.try_get("created_at")?,
    })
}
