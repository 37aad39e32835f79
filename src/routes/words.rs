use axum::extract::State;
use axum::Json;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::db::operations::words;
use crate::response::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct WordResponse {
    id: i64,
    word: String,
    definition: Option<String>,
    difficulty_level: String,
}

/// GET /api/word — one word chosen uniformly from the full set.
pub async fn random_word(State(state): State<AppState>) -> Result<Json<WordResponse>, AppError> {
    let all_words = words::list_words(state.db().pool()).await?;

    let Some(word) = all_words.choose(&mut rand::rng()) else {
        return Err(AppError::not_found("no words in database"));
    };

    Ok(Json(WordResponse {
        id: word.id,
        word: word.word.clone(),
        definition: word.definition.clone(),
        difficulty_level: word.difficulty_level.clone(),
    }))
}
