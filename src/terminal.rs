use crate::colors::ColorPair;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};

/// Terminal abstraction for rendering
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
    session: bool,
}

/// A single cell in the terminal buffer
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
        }
    }
}

impl Cell {
    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        *self == Cell::default()
    }
}

impl Terminal {
    /// Take over the terminal: raw mode (no echo), alternate screen, hidden cursor
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;

        enable_raw_mode()?;
        if let Err(e) = execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        log::debug!("entered terminal session at {}x{}", width, height);

        Ok(Self {
            width,
            height,
            buffer: blank_buffer(width, height),
            session: true,
        })
    }

    /// A buffer of the given size that never touches the tty
    pub fn offscreen(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            buffer: blank_buffer(width, height),
            session: false,
        }
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Match the buffer to new terminal dimensions
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        log::debug!("resize {}x{} -> {}x{}", self.width, self.height, width, height);
        self.width = width;
        self.height = height;
        self.buffer = blank_buffer(width, height);
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        for row in &mut self.buffer {
            row.fill(Cell::default());
        }
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        if self.session {
            execute!(stdout(), Clear(ClearType::All))?;
        }
        Ok(())
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buffer.get(y as usize)?.get(x as usize)
    }

    /// Set a character at position; anything off-screen is dropped
    pub fn set(&mut self, x: i32, y: i32, ch: char, pair: Option<ColorPair>) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Cell {
                ch,
                fg: pair.map(|p| p.fg),
                bg: pair.map(|p| p.bg),
            };
        }
    }

    /// Set a string starting at position
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, pair: Option<ColorPair>) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x.saturating_add(i as i32), y, ch, pair);
        }
    }

    /// Render the entire buffer to screen
    pub fn present(&self) -> io::Result<()> {
        if !self.session {
            return Ok(());
        }

        let mut stdout = stdout().lock();
        let mut current: (Option<Color>, Option<Color>) = (None, None);

        for (y, row) in self.buffer.iter().enumerate() {
            queue!(stdout, MoveTo(0, y as u16))?;

            for cell in row {
                if (cell.fg, cell.bg) != current {
                    queue!(stdout, ResetColor)?;
                    if let Some(fg) = cell.fg {
                        queue!(stdout, SetForegroundColor(fg))?;
                    }
                    if let Some(bg) = cell.bg {
                        queue!(stdout, SetBackgroundColor(bg))?;
                    }
                    current = (cell.fg, cell.bg);
                }
                queue!(stdout, Print(cell.ch))?;
            }
        }

        queue!(stdout, ResetColor)?;
        stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.session {
            let _ = execute!(stdout(), ResetColor, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            log::debug!("terminal restored");
        }
    }
}

fn blank_buffer(width: u16, height: u16) -> Vec<Vec<Cell>> {
    vec![vec![Cell::default(); width as usize]; height as usize]
}
