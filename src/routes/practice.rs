use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::db::operations::{practice, words};
use crate::response::AppError;
use crate::services::scoring;
use crate::state::AppState;

// Always reported in the summary, even with zero sessions. The label set on
// words is open-ended; anything else found in the data is reported as-is.
const SUMMARY_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

const DEFAULT_HISTORY_LIMIT: i64 = 20;

#[derive(Debug, Deserialize)]
pub struct ValidateSentenceRequest {
    pub word_id: i64,
    pub sentence: String,
}

#[derive(Serialize)]
pub struct ValidateSentenceResponse {
    score: f64,
    level: String,
    suggestion: &'static str,
    corrected_sentence: String,
}

/// POST /api/validate-sentence — score the sentence and record the attempt.
/// The word lookup happens first; an unknown id writes nothing.
pub async fn validate_sentence(
    State(state): State<AppState>,
    Json(request): Json<ValidateSentenceRequest>,
) -> Result<Json<ValidateSentenceResponse>, AppError> {
    let pool = state.db().pool();

    let Some(word) = words::get_word(pool, request.word_id).await? else {
        return Err(AppError::not_found("word not found"));
    };

    let evaluation =
        scoring::evaluate_sentence(&request.sentence, &word.word, &word.difficulty_level);

    practice::insert_session(
        pool,
        &practice::NewPracticeSession {
            word_id: word.id,
            user_sentence: &request.sentence,
            score: evaluation.score,
            feedback: evaluation.suggestion,
            corrected_sentence: &evaluation.corrected_sentence,
        },
    )
    .await?;

    Ok(Json(ValidateSentenceResponse {
        score: evaluation.score,
        level: evaluation.level,
        suggestion: evaluation.suggestion,
        corrected_sentence: evaluation.corrected_sentence,
    }))
}

#[derive(Serialize)]
pub struct SummaryResponse {
    total_practices: i64,
    average_score: f64,
    total_words_practiced: i64,
    level_distribution: BTreeMap<String, i64>,
}

/// GET /api/summary — aggregates computed freshly on each read.
pub async fn summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let pool = state.db().pool();

    let total_practices = practice::count_sessions(pool).await?;

    let mut level_distribution: BTreeMap<String, i64> = SUMMARY_LEVELS
        .iter()
        .map(|level| (level.to_string(), 0))
        .collect();

    if total_practices == 0 {
        return Ok(Json(SummaryResponse {
            total_practices: 0,
            average_score: 0.0,
            total_words_practiced: 0,
            level_distribution,
        }));
    }

    let average_score = practice::average_score(pool).await?.unwrap_or(0.0);
    let total_words_practiced = practice::distinct_words_practiced(pool).await?;

    for (level, count) in practice::sessions_by_level(pool).await? {
        level_distribution.insert(level, count);
    }

    Ok(Json(SummaryResponse {
        total_practices,
        average_score,
        total_words_practiced,
        level_distribution,
    }))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    limit: Option<i64>,
}

#[derive(Serialize)]
pub struct HistoryEntryResponse {
    id: i64,
    word: String,
    difficulty_level: String,
    sentence: String,
    score: f64,
    feedback: Option<String>,
    corrected_sentence: Option<String>,
    practiced_at: Option<String>,
}

/// GET /api/history?limit=N — most recent attempts, newest first.
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntryResponse>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT).max(0);

    let entries = practice::recent_sessions(state.db().pool(), limit).await?;

    let history = entries
        .into_iter()
        .map(|entry| HistoryEntryResponse {
            id: entry.id,
            word: entry.word,
            difficulty_level: entry.difficulty_level,
            sentence: entry.user_sentence,
            score: entry.score,
            feedback: entry.feedback,
            corrected_sentence: entry.corrected_sentence,
            practiced_at: entry
                .practiced_at
                .map(|at| at.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true)),
        })
        .collect();

    Ok(Json(history))
}
