//! Renderer that draws frames to the terminal while a sort runs

use crate::config::Config;
use crate::snapshot::{FrameHistory, Renderer, Snapshot};
use crate::sorting::Algorithm;
use crate::ui::app::Mode;
use crate::ui::panes::{render_screen, Screen};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::thread;
use std::time::Duration;

/// Draws each frame, blocks for the per-frame delay and records the frame
///
/// The first drawing error stops further drawing; the sort itself keeps
/// going and the error is handed back by [`TerminalRenderer::finish`].
pub struct TerminalRenderer<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    algorithm: Algorithm,
    size: usize,
    delay: Duration,
    max_value: u32,
    message: String,
    history: FrameHistory,
    frames: usize,
    dropped: usize,
    error: Option<io::Error>,
}

impl<'t, B: Backend> TerminalRenderer<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>, config: &Config, history_limit: usize) -> Self {
        TerminalRenderer {
            terminal,
            algorithm: config.algorithm,
            size: config.size,
            delay: config.delay(),
            max_value: config.max_value,
            message: format!("Sorting with {}...", config.algorithm),
            history: FrameHistory::new(history_limit),
            frames: 0,
            dropped: 0,
            error: None,
        }
    }

    /// Frames drawn so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Hand back the recorded frames and the first drawing error, if any
    pub fn finish(self) -> (FrameHistory, Option<io::Error>) {
        if self.dropped > 0 {
            log::warn!("{} frames were not recorded for replay", self.dropped);
        }
        (self.history, self.error)
    }

    fn draw(&mut self, snapshot: &Snapshot) {
        let screen = Screen {
            snapshot,
            algorithm: self.algorithm,
            size: self.size,
            delay_ms: self.delay.as_millis() as u64,
            max_value: self.max_value,
            mode: Mode::Sorting,
            message: &self.message,
            current_frame: self.frames,
            total_frames: None,
            is_playing: false,
        };

        if let Err(e) = self.terminal.draw(|f| render_screen(f, &screen)) {
            log::error!("drawing failed: {}", e);
            self.error = Some(e);
        }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<'_, B> {
    fn render(&mut self, snapshot: Snapshot) {
        if self.error.is_none() {
            self.draw(&snapshot);
        }
        self.frames += 1;

        if self.history.push(snapshot).is_err() {
            self.dropped += 1;
        }

        thread::sleep(self.delay);
    }
}
