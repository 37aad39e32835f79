//! Deterministic sentence scoring. A stand-in for a real language model:
//! the score is driven by token count plus a bonus for actually using the
//! target word, and the "correction" is cosmetic.

pub const SUGGESTION_STRONG: &str = "Great job! Your sentence looks very natural.";
pub const SUGGESTION_GOOD: &str = "Good! You can add more detail to make it better.";
pub const SUGGESTION_RETRY: &str = "Try again. Check grammar and make a clearer sentence.";

#[derive(Debug, Clone, PartialEq)]
pub struct SentenceEvaluation {
    pub score: f64,
    pub level: String,
    pub suggestion: &'static str,
    pub corrected_sentence: String,
}

pub fn evaluate_sentence(sentence: &str, word: &str, difficulty_level: &str) -> SentenceEvaluation {
    let trimmed = sentence.trim();

    let word_count = trimmed.split_whitespace().count();
    let mut score = (word_count as f64).clamp(0.0, 10.0);

    if trimmed.to_lowercase().contains(&word.to_lowercase()) {
        score = (score + 2.0).min(10.0);
    }

    let score = round_to_tenth(score);

    let suggestion = if score >= 8.0 {
        SUGGESTION_STRONG
    } else if score >= 6.0 {
        SUGGESTION_GOOD
    } else {
        SUGGESTION_RETRY
    };

    SentenceEvaluation {
        score,
        level: difficulty_level.to_string(),
        suggestion,
        corrected_sentence: correct_sentence(trimmed),
    }
}

/// Uppercases the first character and guarantees a trailing period.
fn correct_sentence(trimmed: &str) -> String {
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut corrected: String = first.to_uppercase().chain(chars).collect();
    if !corrected.ends_with('.') {
        corrected.push('.');
    }
    corrected
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
