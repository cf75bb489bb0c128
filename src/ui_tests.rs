#[cfg(test)]
mod ui_render_tests {
    use crate::app::App;
    use crate::models::{AnswerResult, QuizSession, QuizState, WordPair};
    use crate::session::QuizAction;
    use crate::ui;
    use crate::word_bank::WordBank;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};
    use std::collections::BTreeMap;

    fn test_app() -> App {
        let mut categories = BTreeMap::new();
        categories.insert(
            "Animals".to_string(),
            vec![WordPair::new("dog", "hund"), WordPair::new("cat", "katt")],
        );
        categories.insert("Food".to_string(), vec![WordPair::new("egg", "ägg")]);
        App::new(
            WordBank::new(categories).unwrap(),
            ChaCha8Rng::seed_from_u64(21),
        )
    }

    fn session_with(result: AnswerResult, score: i32) -> QuizSession {
        QuizSession {
            category: "Animals".to_string(),
            sequence: vec![WordPair::new("dog", "hund"), WordPair::new("cat", "katt")],
            position: 0,
            score,
            last_result: result,
            input_buffer: String::new(),
            cursor_position: 0,
            celebrating: result == AnswerResult::Correct,
        }
    }

    /// Renders the app and returns the screen as one string per row.
    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui::draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_menu_lists_every_category() {
        let app = test_app();
        let rows = render(&app);
        assert!(screen_contains(&rows, "Choose a Category"));
        assert!(screen_contains(&rows, "Animals"));
        assert!(screen_contains(&rows, "(2 words)"));
        assert!(screen_contains(&rows, "Food"));
        assert!(screen_contains(&rows, "> Animals"));
    }

    #[test]
    fn test_quiz_view_shows_word_score_and_progress() {
        let mut app = test_app();
        app.dispatch(QuizAction::SelectCategory("Animals".to_string()));
        let word = app
            .quiz
            .session()
            .and_then(QuizSession::current_word)
            .unwrap()
            .source_term
            .clone();

        let rows = render(&app);
        assert!(screen_contains(&rows, "Score: 0"));
        assert!(screen_contains(&rows, "1/2"));
        assert!(screen_contains(&rows, &word));
        assert!(screen_contains(&rows, "Translate to Swedish"));
        assert!(screen_contains(&rows, "Enter Submit"));
        assert!(!screen_contains(&rows, "Next"));
    }

    #[test]
    fn test_incorrect_answer_feedback() {
        let mut app = test_app();
        app.quiz = QuizState::InProgress(session_with(AnswerResult::Incorrect, -1));
        let rows = render(&app);
        assert!(screen_contains(&rows, "Incorrect, try again"));
        assert!(screen_contains(&rows, "Score: -1"));
        assert!(!screen_contains(&rows, "Next"));
    }

    #[test]
    fn test_correct_answer_offers_next() {
        let mut app = test_app();
        let mut session = session_with(AnswerResult::Correct, 1);
        session.input_buffer = "hund".to_string();
        app.quiz = QuizState::InProgress(session);

        let rows = render(&app);
        assert!(screen_contains(&rows, "Correct! Well done!"));
        assert!(screen_contains(&rows, "→/Enter Next"));
        assert!(screen_contains(&rows, "hund"));
        assert!(!screen_contains(&rows, "Translate to Swedish"));
    }

    #[test]
    fn test_correct_answer_after_celebration_settles() {
        let mut app = test_app();
        let mut session = session_with(AnswerResult::Correct, 1);
        session.celebrating = false;
        app.quiz = QuizState::InProgress(session);

        let rows = render(&app);
        assert!(screen_contains(&rows, "Correct!"));
        assert!(!screen_contains(&rows, "Well done"));
        assert!(screen_contains(&rows, "→/Enter Next"));
    }

    #[test]
    fn test_long_answer_scrolls_to_keep_cursor_in_field() {
        let mut app = test_app();
        let mut session = session_with(AnswerResult::Unanswered, 0);
        session.input_buffer = format!("{}END", "x".repeat(90));
        session.cursor_position = 93;
        app.quiz = QuizState::InProgress(session);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
        let layout = ui::calculate_quiz_chunks(ratatui::layout::Rect::new(0, 0, 80, 24));
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, layout.answer_area.x + layout.answer_area.width - 2);
        assert_eq!(cursor.y, layout.answer_area.y + 1);

        let rows = render(&app);
        let answer_row = &rows[usize::from(layout.answer_area.y + 1)];
        assert!(answer_row.contains("xxxEND"));
    }

    #[test]
    fn test_huge_answer_buffer_renders_without_overflow() {
        let mut app = test_app();
        let mut session = session_with(AnswerResult::Unanswered, 0);
        session.input_buffer = "a".repeat(65_535);
        session.cursor_position = 65_535;
        app.quiz = QuizState::InProgress(session);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
        let layout = ui::calculate_quiz_chunks(ratatui::layout::Rect::new(0, 0, 80, 24));
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < layout.answer_area.x + layout.answer_area.width);
        assert_eq!(cursor.y, layout.answer_area.y + 1);
    }

    #[test]
    fn test_completion_view_shows_final_score() {
        let mut app = test_app();
        let mut session = session_with(AnswerResult::Unanswered, 1);
        session.position = 2;
        app.quiz = QuizState::Complete(session);

        let rows = render(&app);
        assert!(screen_contains(&rows, "Quiz Completed!"));
        assert!(screen_contains(&rows, "You scored: 1/2"));
        assert!(screen_contains(&rows, "Try Another Category"));
    }

    #[test]
    fn test_negative_final_score_is_rendered() {
        let mut app = test_app();
        let mut session = session_with(AnswerResult::Unanswered, -3);
        session.position = 2;
        app.quiz = QuizState::Complete(session);

        let rows = render(&app);
        assert!(screen_contains(&rows, "You scored: -3/2"));
    }

    #[test]
    fn test_cursor_follows_multibyte_input() {
        let mut app = test_app();
        let mut session = session_with(AnswerResult::Unanswered, 0);
        session.input_buffer = "häs".to_string();
        session.cursor_position = 3;
        app.quiz = QuizState::InProgress(session);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
        let layout = ui::calculate_quiz_chunks(ratatui::layout::Rect::new(0, 0, 80, 24));
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, layout.answer_area.x + 1 + 3);
        assert_eq!(cursor.y, layout.answer_area.y + 1);
    }
}
