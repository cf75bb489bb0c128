use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus alternate screen. A failure part-way through undoes what
/// was already switched on before the error is returned.
pub fn setup_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let terminal = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    if terminal.is_err() {
        let _ = restore_terminal();
    }
    terminal
}

/// Runs every restore step even if an earlier one fails.
pub fn restore_terminal() -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen, Show),
    ])
}

/// The first error among already-evaluated steps, or `Ok` if all succeeded.
pub fn first_error<I>(results: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    results
        .into_iter()
        .fold(Ok(()), |first, result| first.and(result))
}
