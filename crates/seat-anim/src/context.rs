//! `RenderContext` — terminal ownership, frame cache, pacing.

use std::collections::HashMap;
use std::io::{self, Stdout, Write};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::error::AnimResult;
use crate::frame::{FRAME_HEIGHT, FrameKey, compose};
use crate::sink::FrameTarget;

/// Owns the terminal for the duration of an animation.
///
/// Composed frames are cached by [`FrameKey`], so each distinct picture is
/// built once per run.  Dropping the context leaves the alternate screen,
/// shows the cursor, and disables raw mode.
pub struct RenderContext {
    out:         Stdout,
    frame_delay: Duration,
    cache:       HashMap<FrameKey, Vec<String>>,
}

impl RenderContext {
    /// Take over the terminal.  `frame_delay` of zero draws without pausing.
    pub fn open(frame_delay: Duration) -> AnimResult<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }
        tracing::debug!(delay_ms = frame_delay.as_millis() as u64, "animation terminal opened");
        Ok(Self { out, frame_delay, cache: HashMap::new() })
    }

    /// Distinct frames composed so far.
    pub fn cached_frames(&self) -> usize {
        self.cache.len()
    }
}

impl FrameTarget for RenderContext {
    fn draw(&mut self, key: &FrameKey, status: &str) -> AnimResult<()> {
        let lines = self
            .cache
            .entry(key.clone())
            .or_insert_with(|| compose(key).lines());

        // Raw mode: no implicit carriage return, so position every row.
        queue!(self.out, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        queue!(self.out, MoveTo(0, FRAME_HEIGHT as u16), Print(status))?;
        queue!(self.out, MoveTo(0, FRAME_HEIGHT as u16 + 1), Print("q / Esc to stop"))?;
        self.out.flush()?;
        Ok(())
    }

    fn pace(&mut self) -> AnimResult<ControlFlow<()>> {
        let deadline = Instant::now() + self.frame_delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(ControlFlow::Continue(()));
            }
            if let Event::Key(key) = event::read()? {
                if is_stop_key(&key) {
                    tracing::info!("animation interrupted by user");
                    return Ok(ControlFlow::Break(()));
                }
            }
            if remaining.is_zero() {
                return Ok(ControlFlow::Continue(()));
            }
        }
    }
}

impl Drop for RenderContext {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub(crate) fn is_stop_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
