use sqlx::SqlitePool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("migration {name} failed: {source}")]
    Failed {
        name: String,
        #[source]
        source: sqlx::Error,
    },
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

// Migration files in apply order. Applied names are recorded in
// `_migrations` so re-running on an existing database is a no-op.
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_init_schema",
    include_str!("../../sql/001_init_schema.sql"),
)];

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrationError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "_migrations" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "name" TEXT NOT NULL UNIQUE,
            "applied_at" TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    let applied: Vec<String> =
        sqlx::query_scalar(r#"SELECT "name" FROM "_migrations" ORDER BY "id""#)
            .fetch_all(pool)
            .await?;

    for &(name, sql) in MIGRATIONS {
        if applied.iter().any(|a| a.as_str() == name) {
            continue;
        }

        for statement in split_sql_statements(sql) {
            sqlx::query(&statement)
                .execute(pool)
                .await
                .map_err(|source| MigrationError::Failed {
                    name: name.to_string(),
                    source,
                })?;
        }

        sqlx::query(r#"INSERT INTO "_migrations" ("name") VALUES (?1)"#)
            .bind(name)
            .execute(pool)
            .await?;

        tracing::info!(migration = name, "applied migration");
    }

    Ok(())
}

// sqlx executes one statement per query, so the file is split on
// semicolons outside quoted strings/identifiers.
fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for ch in sql.chars() {
        match ch {
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            ';' if !in_single_quote && !in_double_quote => {
                let stmt = current.trim();
                if !stmt.is_empty() {
                    statements.push(stmt.to_string());
                }
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }

    let tail = current.trim();
    if !tail.is_empty() {
        statements.push(tail.to_string());
    }

    statements
}
