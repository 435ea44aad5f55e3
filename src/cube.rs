//! Rotating textured cube animation

use crate::config::SceneConfig;
use crate::raster;
use crate::scene;
use crate::surface::Surface;
use crate::terminal::Terminal;
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

/// Scene constants plus the tick counter, threaded through every frame
pub struct CubeRenderer {
    config: SceneConfig,
    elapsed: u64,
}

impl CubeRenderer {
    pub fn new(config: SceneConfig) -> Self {
        Self { config, elapsed: 0 }
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Draw the current tick into the buffer and return the faces in draw order
    pub fn frame(&self, term: &mut Terminal) -> Vec<Surface> {
        term.clear();
        let mut surfaces = scene::assemble(self.elapsed, &self.config);
        scene::depth_sort(&mut surfaces);
        raster::draw_all(term, &surfaces, &self.config);
        surfaces
    }

    /// Rotation is tied to frame count, not wall-clock time
    pub fn advance(&mut self) {
        self.elapsed += 1;
    }

    /// Animate until interrupted
    pub fn run(&mut self, term: &mut Terminal) -> io::Result<()> {
        loop {
            let (width, height) = crossterm::terminal::size().unwrap_or(term.size());

            if (width, height) != term.size() {
                term.resize(width, height);
                term.clear_screen()?;
            }

            self.frame(term);
            term.present()?;

            // Frame pacing doubles as the wait for an interrupt
            if pace(self.config.frame_delay, term, next_event)? == Pace::Interrupted {
                log::info!("interrupted after {} frames", self.elapsed);
                break;
            }

            self.advance();
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Pace {
    Elapsed,
    Interrupted,
}

/// Wait out the whole frame delay, applying resizes as they arrive.
///
/// `wait` blocks for at most the given timeout and returns `None` once it
/// expires.
fn pace<F>(delay: Duration, term: &mut Terminal, mut wait: F) -> io::Result<Pace>
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let deadline = Instant::now() + delay;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(Pace::Elapsed);
        }

        match wait(remaining)? {
            None => return Ok(Pace::Elapsed),
            Some(Event::Key(key)) if is_interrupt(&key) => return Ok(Pace::Interrupted),
            Some(Event::Resize(w, h)) => {
                term.resize(w, h);
                term.clear_screen()?;
            }
            Some(_) => {}
        }
    }
}

fn next_event(timeout: Duration) -> io::Result<Option<Event>> {
    if poll(timeout)? {
        read().map(Some)
    } else {
        Ok(None)
    }
}

/// Raw mode swallows SIGINT, so Ctrl+C arrives as a key
fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
