//! Raw-mode alternate screen that frames are drawn on

use std::io::{self, Stdout, Write};
use crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, warn};

use crate::{runtime::Screen, view::Frame};

/// Owns the terminal while the timer runs. Dropping it restores the
/// original screen and cooked mode.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Switch to raw mode on the alternate screen with the cursor hidden
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut terminal = Self { out: io::stdout() };
        execute!(terminal.out, EnterAlternateScreen, Hide)?;
        debug!("Terminal switched to raw mode");
        Ok(terminal)
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(self.out, LeaveAlternateScreen, Show)?;
        terminal::disable_raw_mode()
    }
}

impl Screen for Terminal {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        for line in &frame.lines {
            queue!(self.out, Print(line), MoveToNextLine(1))?;
        }
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}
