pub mod layout;
mod menu;
mod quiz;
mod summary;

use crate::app::App;
use crate::models::QuizState;
use ratatui::Frame;

pub use layout::{calculate_menu_chunks, calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::draw_quiz;
pub use summary::draw_summary;

pub fn draw(f: &mut Frame, app: &App) {
    match &app.quiz {
        QuizState::NotStarted => draw_menu(f, &app.word_bank, app.selected_category),
        QuizState::InProgress(session) => draw_quiz(f, session),
        QuizState::Complete(session) => draw_summary(f, session),
    }
}
