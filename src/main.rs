use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use vocab_quiz::terminal::{restore_terminal, setup_terminal};
use vocab_quiz::{logger, ui, App, QuizConfig, QuizError, WordBank};

fn main() -> Result<(), QuizError> {
    let config = QuizConfig::from_env()?;
    if let Some(path) = &config.log_path
        && let Err(e) = logger::init(path)
    {
        eprintln!("Debug log disabled, cannot open {}: {}", path.display(), e);
    }

    let word_bank = WordBank::bundled()?;
    logger::log(&format!(
        "Starting with {} categories, {} words, seed {:?}",
        word_bank.len(),
        word_bank.word_count(),
        config.seed
    ));

    let mut app = App::new(word_bank, config.rng());

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    let restored = restore_terminal();

    logger::log("Exiting");
    result.and(restored.map_err(QuizError::from))
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), QuizError> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}
