//! Raw-mode terminal renderer for the demo binary.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.entered {
            execute!(self.stdout, cursor::Show, LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;
            self.entered = false;
        }
        Ok(())
    }

    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        queue!(self.stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
