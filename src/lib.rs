pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod session;
pub mod terminal;
pub mod ui;
pub mod utils;
pub mod word_bank;

mod ui_tests;

// Re-exports for convenience
pub use app::App;
pub use config::QuizConfig;
pub use error::QuizError;
pub use models::{AnswerResult, AppState, QuizSession, QuizState, WordPair};
pub use session::{evaluate_answer, reduce, QuizAction};
pub use ui::{draw, draw_menu, draw_quiz, draw_summary};
pub use word_bank::WordBank;
