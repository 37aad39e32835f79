use crate::db::operations::words;
use crate::db::Database;

struct SeedWord {
    word: &'static str,
    definition: &'static str,
    difficulty_level: &'static str,
}

const STARTER_WORDS: &[SeedWord] = &[
    SeedWord {
        word: "happy",
        definition: "Feeling or showing pleasure or contentment.",
        difficulty_level: "Beginner",
    },
    SeedWord {
        word: "journey",
        definition: "An act of travelling from one place to another.",
        difficulty_level: "Beginner",
    },
    SeedWord {
        word: "curious",
        definition: "Eager to know or learn something.",
        difficulty_level: "Beginner",
    },
    SeedWord {
        word: "reluctant",
        definition: "Unwilling and hesitant; disinclined.",
        difficulty_level: "Intermediate",
    },
    SeedWord {
        word: "thorough",
        definition: "Complete with regard to every detail; not superficial.",
        difficulty_level: "Intermediate",
    },
    SeedWord {
        word: "persuade",
        definition: "Cause someone to do something through reasoning or argument.",
        difficulty_level: "Intermediate",
    },
    SeedWord {
        word: "ubiquitous",
        definition: "Present, appearing, or found everywhere.",
        difficulty_level: "Advanced",
    },
    SeedWord {
        word: "ephemeral",
        definition: "Lasting for a very short time.",
        difficulty_level: "Advanced",
    },
    SeedWord {
        word: "meticulous",
        definition: "Showing great attention to detail; very careful and precise.",
        difficulty_level: "Advanced",
    },
];

/// Inserts the starter word list on first run. Words are otherwise created
/// out-of-band; the API never writes to the `words` table.
pub async fn seed_starter_words(db: &Database) {
    if !seeding_enabled() {
        return;
    }

    let pool = db.pool();

    let existing = match words::count_words(pool).await {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(error = %err, "word count lookup failed, skipping seed");
            return;
        }
    };

    if existing > 0 {
        tracing::debug!(count = existing, "words table already populated");
        return;
    }

    let mut seeded = 0usize;
    for entry in STARTER_WORDS {
        match words::insert_word(
            pool,
            entry.word,
            Some(entry.definition),
            entry.difficulty_level,
        )
        .await
        {
            Ok(_) => seeded += 1,
            Err(err) => {
                tracing::warn!(error = %err, word = entry.word, "failed to seed word");
            }
        }
    }

    tracing::info!(count = seeded, "seeded starter words");
}

fn seeding_enabled() -> bool {
    std::env::var("SEED_WORDS")
        .map(|v| v != "false" && v != "0")
        .unwrap_or(true)
}
