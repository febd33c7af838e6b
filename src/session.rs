use rand::Rng;

use crate::error::Error;
use crate::logger;
use crate::models::{Flashcard, QuizQuestion};
use crate::quiz::{build_question, random_card};

/// State for one quiz sitting: the card pool, the question on screen
/// and the running score. Owns no rendering; a UI layer drives it.
#[derive(Debug, Default)]
pub struct QuizRound {
    cards: Vec<Flashcard>,
    current: Option<QuizQuestion>,
    selected_answer: Option<String>,
    show_result: bool,
    questions_answered: usize,
    correct_answers: usize,
}

impl QuizRound {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        QuizRound {
            cards,
            ..Default::default()
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current.as_ref()
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn show_result(&self) -> bool {
        self.show_result
    }

    pub fn questions_answered(&self) -> usize {
        self.questions_answered
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    /// Draw a fresh question from the pool, discarding the previous
    /// one. Fails with [`Error::EmptyPool`] when the collection holds
    /// no cards.
    pub fn next_question<R: Rng>(&mut self, rng: &mut R) -> Result<(), Error> {
        let target = random_card(&self.cards, rng)?.clone();
        let question = build_question(&target, &self.cards, rng);

        logger::log(&format!(
            "Generated question for card {} with {} options",
            target.id,
            question.options.len()
        ));

        self.current = Some(question);
        self.selected_answer = None;
        self.show_result = false;
        Ok(())
    }

    /// Record the user's pick and update the tally. Returns whether the
    /// pick was correct, or `None` when there is no open question —
    /// once a result is showing, further picks are ignored.
    pub fn select_answer(&mut self, choice: &str) -> Option<bool> {
        let (card_id, correct_answer) = match &self.current {
            Some(question) if !self.show_result => {
                (question.flashcard.id, question.correct_answer.clone())
            }
            _ => return None,
        };

        self.selected_answer = Some(choice.to_string());
        self.show_result = true;
        self.questions_answered += 1;

        let correct = choice == correct_answer;
        if correct {
            self.correct_answers += 1;
        }

        logger::log(&format!(
            "Answer for card {}: {}",
            card_id,
            if correct { "correct" } else { "incorrect" }
        ));

        Some(correct)
    }

    pub fn reset_stats(&mut self) {
        self.questions_answered = 0;
        self.correct_answers = 0;
    }

    pub fn accuracy(&self) -> f64 {
        if self.questions_answered == 0 {
            0.0
        } else {
            self.correct_answers as f64 / self.questions_answered as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn card(id: u64, front: &str, back: &str) -> Flashcard {
        Flashcard {
            id,
            front: front.to_string(),
            back: back.to_string(),
            source: Source::Manual,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn round() -> QuizRound {
        QuizRound::new(vec![
            card(1, "Hello", "Cześć"),
            card(2, "World", "Świat"),
            card(3, "Cat", "Kot"),
            card(4, "Dog", "Pies"),
        ])
    }

    #[test]
    fn test_next_question_sets_current() {
        let mut round = round();
        let mut rng = StdRng::seed_from_u64(1);

        round.next_question(&mut rng).unwrap();

        let question = round.current_question().unwrap();
        assert_eq!(question.options.len(), 4);
        assert!(question.options.contains(&question.correct_answer));
        assert!(!round.show_result());
        assert!(round.selected_answer().is_none());
    }

    #[test]
    fn test_next_question_empty_collection_fails() {
        let mut round = QuizRound::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);

        let result = round.next_question(&mut rng);
        assert!(matches!(result, Err(Error::EmptyPool)));
        assert!(round.current_question().is_none());
    }

    #[test]
    fn test_select_correct_answer_tallies() {
        let mut round = round();
        let mut rng = StdRng::seed_from_u64(2);
        round.next_question(&mut rng).unwrap();

        let correct = round.current_question().unwrap().correct_answer.clone();
        assert_eq!(round.select_answer(&correct), Some(true));
        assert_eq!(round.questions_answered(), 1);
        assert_eq!(round.correct_answers(), 1);
        assert!(round.show_result());
        assert_eq!(round.selected_answer(), Some(correct.as_str()));
    }

    #[test]
    fn test_select_wrong_answer_tallies() {
        let mut round = round();
        let mut rng = StdRng::seed_from_u64(3);
        round.next_question(&mut rng).unwrap();

        assert_eq!(round.select_answer("definitely not a translation"), Some(false));
        assert_eq!(round.questions_answered(), 1);
        assert_eq!(round.correct_answers(), 0);
    }

    #[test]
    fn test_second_pick_for_same_question_is_ignored() {
        let mut round = round();
        let mut rng = StdRng::seed_from_u64(4);
        round.next_question(&mut rng).unwrap();

        let correct = round.current_question().unwrap().correct_answer.clone();
        assert_eq!(round.select_answer("wrong"), Some(false));
        assert_eq!(round.select_answer(&correct), None);
        assert_eq!(round.questions_answered(), 1);
        assert_eq!(round.correct_answers(), 0);
        assert_eq!(round.selected_answer(), Some("wrong"));
    }

    #[test]
    fn test_select_answer_without_question() {
        let mut round = round();
        assert_eq!(round.select_answer("Cześć"), None);
        assert_eq!(round.questions_answered(), 0);
    }

    #[test]
    fn test_next_question_clears_previous_selection() {
        let mut round = round();
        let mut rng = StdRng::seed_from_u64(5);
        round.next_question(&mut rng).unwrap();
        round.select_answer("wrong");

        round.next_question(&mut rng).unwrap();
        assert!(round.selected_answer().is_none());
        assert!(!round.show_result());
        // Tallies carry over between questions.
        assert_eq!(round.questions_answered(), 1);
    }

    #[test]
    fn test_reset_stats_and_accuracy() {
        let mut round = round();
        let mut rng = StdRng::seed_from_u64(6);

        assert_eq!(round.accuracy(), 0.0);

        round.next_question(&mut rng).unwrap();
        let correct = round.current_question().unwrap().correct_answer.clone();
        round.select_answer(&correct);

        round.next_question(&mut rng).unwrap();
        round.select_answer("wrong");

        assert_eq!(round.questions_answered(), 2);
        assert_eq!(round.correct_answers(), 1);
        assert_eq!(round.accuracy(), 0.5);

        round.reset_stats();
        assert_eq!(round.questions_answered(), 0);
        assert_eq!(round.correct_answers(), 0);
        assert_eq!(round.accuracy(), 0.0);
    }
}
