use rand::seq::SliceRandom;
use rand::Rng;

use crate::distractors::DISTRACTOR_TRANSLATIONS;
use crate::error::Error;
use crate::models::{Flashcard, QuizQuestion};

/// Pick one flashcard uniformly at random.
///
/// Fails with [`Error::EmptyPool`] on an empty slice; the caller is
/// expected to surface an empty-state message.
pub fn random_card<'a, R: Rng>(cards: &'a [Flashcard], rng: &mut R) -> Result<&'a Flashcard, Error> {
    cards.choose(rng).ok_or(Error::EmptyPool)
}

/// Build a multiple-choice question for `target`.
///
/// The three distractors are drawn from the other cards' `back` values
/// plus [`DISTRACTOR_TRANSLATIONS`], never equal to the correct answer
/// and never duplicated. When fewer than three distinct distractors
/// exist the question simply carries fewer options; that is graceful
/// degradation, not an error.
pub fn build_question<R: Rng>(
    target: &Flashcard,
    all_cards: &[Flashcard],
    rng: &mut R,
) -> QuizQuestion {
    build_question_with_pool(target, all_cards, &DISTRACTOR_TRANSLATIONS, rng)
}

/// Same as [`build_question`] but with an explicit static distractor
/// pool, so callers (and tests) can substitute their own filler data.
pub fn build_question_with_pool<R: Rng>(
    target: &Flashcard,
    all_cards: &[Flashcard],
    static_pool: &[&str],
    rng: &mut R,
) -> QuizQuestion {
    let correct_answer = target.back.clone();

    // Other cards' backs first, then the static pool. The target is
    // excluded by id, not by value: a second card with the same back
    // is dropped by the correct-answer filter below instead.
    let mut candidates: Vec<String> = all_cards
        .iter()
        .filter(|card| card.id != target.id)
        .map(|card| card.back.clone())
        .collect();
    candidates.extend(static_pool.iter().map(|s| s.to_string()));
    candidates.retain(|translation| *translation != correct_answer);

    let mut shuffled = candidates.clone();
    shuffled.shuffle(rng);

    // Dedup in shuffle order, keeping the first 3 distinct values.
    let mut distractors: Vec<String> = Vec::with_capacity(3);
    for value in &shuffled {
        if distractors.len() == 3 {
            break;
        }
        if !distractors.contains(value) {
            distractors.push(value.clone());
        }
    }

    // Pool too small: walk the candidate list in order for anything
    // not picked yet, stopping when 3 are collected or it runs out.
    if distractors.len() < 3 {
        for value in &candidates {
            if distractors.len() == 3 {
                break;
            }
            if !distractors.contains(value) {
                distractors.push(value.clone());
            }
        }
    }

    let mut options = Vec::with_capacity(1 + distractors.len());
    options.push(correct_answer.clone());
    options.extend(distractors);
    options.shuffle(rng);

    QuizQuestion {
        flashcard: target.clone(),
        options,
        correct_answer,
    }
}
