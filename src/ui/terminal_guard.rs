//! Terminal setup and guaranteed restore.
//!
//! The terminal is put back into cooked mode when the guard drops and also
//! from the panic hook, so a panic never leaves the shell in raw mode.

use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalGuard {
    /// Set while the terminal is in UI mode; cleared once restored.
    active: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn install() -> Self {
        let active = Arc::new(Mutex::new(true));
        let hook_active = Arc::clone(&active);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&hook_active);
            default_hook(info);
        }));
        Self { active }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.active);
    }
}

fn restore_once(active: &Mutex<bool>) {
    let mut active = active.lock();
    if !*active {
        return;
    }
    *active = false;
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Enter raw mode and the alternate screen with bracketed paste, so a pasted
/// link arrives as one event instead of a burst of key presses.
pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::install();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok((terminal, guard))
}
