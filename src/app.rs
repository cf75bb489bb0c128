use crate::logger;
use crate::models::{AppState, QuizState};
use crate::session::{QuizAction, reduce};
use crate::word_bank::WordBank;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand_chacha::ChaCha8Rng;

pub struct App {
    pub word_bank: WordBank,
    pub quiz: QuizState,
    pub selected_category: usize,
    pub should_quit: bool,
    rng: ChaCha8Rng,
}

impl App {
    pub fn new(word_bank: WordBank, rng: ChaCha8Rng) -> Self {
        Self {
            word_bank,
            quiz: QuizState::NotStarted,
            selected_category: 0,
            should_quit: false,
            rng,
        }
    }

    pub fn app_state(&self) -> AppState {
        self.quiz.app_state()
    }

    pub fn dispatch(&mut self, action: QuizAction) {
        let state = std::mem::take(&mut self.quiz);
        self.quiz = reduce(state, action, &self.word_bank, &mut self.rng);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            logger::log("Ctrl+C pressed, exiting");
            self.should_quit = true;
            return;
        }

        match self.app_state() {
            AppState::Menu => self.handle_menu_input(key),
            AppState::Quiz => self.handle_quiz_input(key),
            AppState::Summary => self.handle_summary_input(key),
        }
    }

    fn handle_menu_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.selected_category = self.selected_category.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_category < self.word_bank.len().saturating_sub(1) {
                    self.selected_category += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(name) = self.word_bank.category_at(self.selected_category) {
                    let name = name.to_string();
                    self.dispatch(QuizAction::SelectCategory(name));
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_quiz_input(&mut self, key: KeyEvent) {
        // The celebration banner lasts until the next key.
        let locked = match &mut self.quiz {
            QuizState::InProgress(session) => {
                session.celebrating = false;
                session.is_locked()
            }
            _ => return,
        };

        match key.code {
            KeyCode::Esc => self.dispatch(QuizAction::ReturnToCategories),
            KeyCode::Enter | KeyCode::Right if locked => self.dispatch(QuizAction::Advance),
            KeyCode::Enter => {
                let input = match &self.quiz {
                    QuizState::InProgress(session) => session.input_buffer.clone(),
                    _ => return,
                };
                self.dispatch(QuizAction::Submit(input));
            }
            code => {
                let QuizState::InProgress(session) = &mut self.quiz else {
                    return;
                };
                match code {
                    KeyCode::Left => session.move_cursor_left(),
                    KeyCode::Right => session.move_cursor_right(),
                    KeyCode::Home => session.move_cursor_home(),
                    KeyCode::End => session.move_cursor_end(),
                    KeyCode::Backspace => session.backspace(),
                    KeyCode::Delete => session.delete(),
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        session.insert_char(c)
                    }
                    _ => {}
                }
            }
        }
    }

    fn handle_summary_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => {
                self.dispatch(QuizAction::ReturnToCategories)
            }
            _ => {}
        }
    }
}
