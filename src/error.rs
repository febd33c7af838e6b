use thiserror::Error;

/// Errors surfaced by the quiz engine and the flashcard store.
///
/// A question with fewer than four options is deliberately NOT an error;
/// see [`crate::quiz::build_question`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("no flashcards available")]
    EmptyPool,

    #[error("flashcard {0} must not be blank")]
    BlankField(&'static str),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
