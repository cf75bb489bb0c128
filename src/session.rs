use crate::logger;
use crate::models::{AnswerResult, QuizSession, QuizState, WordPair};
use crate::utils::byte_offset;
use crate::word_bank::WordBank;
use rand::Rng;
use rand::seq::SliceRandom;

/// User intents fed into [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    SelectCategory(String),
    Submit(String),
    Advance,
    ReturnToCategories,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Trimmed, case-insensitive exact match against the target term.
pub fn evaluate_answer(input: &str, pair: &WordPair) -> bool {
    normalize(input) == normalize(&pair.target_term)
}

/// Applies one action and returns the next state. Actions that do not apply
/// to the current state leave it unchanged.
pub fn reduce<R: Rng + ?Sized>(
    state: QuizState,
    action: QuizAction,
    word_bank: &WordBank,
    rng: &mut R,
) -> QuizState {
    match action {
        QuizAction::SelectCategory(category) => match word_bank.words(&category) {
            Some(words) => {
                let session = QuizSession::start(&category, words, rng);
                logger::log(&format!(
                    "Selected category {} ({} words)",
                    category,
                    session.len()
                ));
                if session.is_complete() {
                    QuizState::Complete(session)
                } else {
                    QuizState::InProgress(session)
                }
            }
            None => {
                logger::log(&format!("Ignoring unknown category {}", category));
                state
            }
        },
        QuizAction::Submit(input) => match state {
            QuizState::InProgress(mut session) => {
                session.submit(&input);
                QuizState::InProgress(session)
            }
            other => other,
        },
        QuizAction::Advance => match state {
            QuizState::InProgress(mut session) => {
                if session.advance() && session.is_complete() {
                    logger::log(&format!(
                        "Completed {} with score {}/{}",
                        session.category,
                        session.score,
                        session.len()
                    ));
                    QuizState::Complete(session)
                } else {
                    QuizState::InProgress(session)
                }
            }
            other => other,
        },
        QuizAction::ReturnToCategories => {
            if let Some(session) = state.session() {
                logger::log(&format!(
                    "Returning to categories from {} at {}/{}",
                    session.category,
                    session.position,
                    session.len()
                ));
            }
            QuizState::NotStarted
        }
    }
}

impl QuizSession {
    /// Fresh session over a uniformly shuffled copy of `words`.
    pub fn start<R: Rng + ?Sized>(category: &str, words: &[WordPair], rng: &mut R) -> Self {
        let mut sequence = words.to_vec();
        sequence.shuffle(rng);
        Self {
            category: category.to_string(),
            sequence,
            position: 0,
            score: 0,
            last_result: AnswerResult::Unanswered,
            input_buffer: String::new(),
            cursor_position: 0,
            celebrating: false,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.sequence.len()
    }

    pub fn current_word(&self) -> Option<&WordPair> {
        self.sequence.get(self.position)
    }

    /// Input is frozen once the current word has been answered correctly.
    pub fn is_locked(&self) -> bool {
        self.last_result == AnswerResult::Correct
    }

    /// Judges `input` against the current word. Every wrong attempt costs a
    /// point, including repeats on the same word.
    pub fn submit(&mut self, input: &str) -> AnswerResult {
        if self.is_locked() {
            return self.last_result;
        }
        let Some(word) = self.current_word() else {
            return self.last_result;
        };

        if evaluate_answer(input, word) {
            self.score += 1;
            self.last_result = AnswerResult::Correct;
            self.celebrating = true;
        } else {
            self.score -= 1;
            self.last_result = AnswerResult::Incorrect;
        }

        logger::log(&format!(
            "{} {}/{}: {:?} -> {:?}, score {}",
            self.category,
            self.position + 1,
            self.len(),
            input,
            self.last_result,
            self.score
        ));
        self.last_result
    }

    /// Moves to the next word. Returns false (and changes nothing) unless the
    /// current answer is correct.
    pub fn advance(&mut self) -> bool {
        if !self.is_locked() || self.is_complete() {
            return false;
        }
        self.position += 1;
        self.last_result = AnswerResult::Unanswered;
        self.celebrating = false;
        self.input_buffer.clear();
        self.cursor_position = 0;
        true
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_locked() {
            return;
        }
        self.clamp_cursor();
        let idx = byte_offset(&self.input_buffer, self.cursor_position);
        self.input_buffer.insert(idx, c);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) {
        if self.is_locked() {
            return;
        }
        self.clamp_cursor();
        if self.cursor_position > 0 {
            let idx = byte_offset(&self.input_buffer, self.cursor_position - 1);
            self.input_buffer.remove(idx);
            self.cursor_position -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.is_locked() {
            return;
        }
        self.clamp_cursor();
        if self.cursor_position < self.input_len() {
            let idx = byte_offset(&self.input_buffer, self.cursor_position);
            self.input_buffer.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.is_locked() {
            return;
        }
        self.clamp_cursor();
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.is_locked() {
            return;
        }
        self.cursor_position = (self.cursor_position + 1).min(self.input_len());
    }

    pub fn move_cursor_home(&mut self) {
        if !self.is_locked() {
            self.cursor_position = 0;
        }
    }

    pub fn move_cursor_end(&mut self) {
        if !self.is_locked() {
            self.cursor_position = self.input_len();
        }
    }

    fn input_len(&self) -> usize {
        self.input_buffer.chars().count()
    }

    fn clamp_cursor(&mut self) {
        self.cursor_position = self.cursor_position.min(self.input_len());
    }
}
