pub mod db;
pub mod distractors;
pub mod error;
pub mod export;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod session;

// Re-exports for convenience
pub use distractors::DISTRACTOR_TRANSLATIONS;
pub use error::Error;
pub use export::{export_cards, import_cards};
pub use models::{Flashcard, QuizQuestion, Source};
pub use quiz::{build_question, build_question_with_pool, random_card};
pub use session::QuizRound;
