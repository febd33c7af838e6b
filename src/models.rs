use serde::{Deserialize, Serialize};

/// How a flashcard entered the collection. Informational only; quiz
/// generation never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Ai,
    Manual,
    Default,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Ai => "ai",
            Source::Manual => "manual",
            Source::Default => "default",
        }
    }

    pub fn parse(s: &str) -> Option<Source> {
        match s {
            "ai" => Some(Source::Ai),
            "manual" => Some(Source::Manual),
            "default" => Some(Source::Default),
            _ => None,
        }
    }
}

/// One front/back vocabulary pair owned by the user.
///
/// `front` and `back` are guaranteed non-blank by the store boundary
/// (see `db::card`). `back` values are NOT unique across the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: u64,
    pub front: String,
    pub back: String,
    pub source: Source,
    pub created_at: u64,
    pub updated_at: u64,
}

/// One multiple-choice round, built fresh per question and discarded.
///
/// `options` holds up to 4 distinct display strings in randomized order;
/// `correct_answer` equals `flashcard.back` and always appears in `options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub flashcard: Flashcard,
    pub options: Vec<String>,
    pub correct_answer: String,
}
