use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    #[serde(rename = "english")]
    pub source_term: String,
    #[serde(rename = "swedish")]
    pub target_term: String,
}

impl WordPair {
    pub fn new(source_term: impl Into<String>, target_term: impl Into<String>) -> Self {
        Self {
            source_term: source_term.into(),
            target_term: target_term.into(),
        }
    }
}

/// Outcome of the latest submission at the current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerResult {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub category: String,
    pub sequence: Vec<WordPair>,
    pub position: usize,
    pub score: i32,
    pub last_result: AnswerResult,
    pub input_buffer: String,
    /// Char index into `input_buffer`, not a byte offset.
    pub cursor_position: usize,
    pub celebrating: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    NotStarted,
    InProgress(QuizSession),
    Complete(QuizSession),
}

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Quiz,
    Summary,
}

impl QuizState {
    pub fn app_state(&self) -> AppState {
        match self {
            QuizState::NotStarted => AppState::Menu,
            QuizState::InProgress(_) => AppState::Quiz,
            QuizState::Complete(_) => AppState::Summary,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match self {
            QuizState::NotStarted => None,
            QuizState::InProgress(session) | QuizState::Complete(session) => Some(session),
        }
    }
}
