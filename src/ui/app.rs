//! Main TUI application state and logic

use crate::config::HISTORY_LIMIT_BYTES;
use crate::session::Session;
use crate::snapshot::{FrameHistory, Snapshot};
use crate::sorting::SortStats;
use crate::ui::panes::{render_screen, Screen};
use crate::ui::renderer::TerminalRenderer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Array size change per key press
const SIZE_STEP: usize = 10;

/// Delay change per key press (milliseconds)
const DELAY_STEP: u64 = 10;

/// What the app is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Showing the current array, settings can change
    Idle,
    /// A sort is running; input is not read
    Sorting,
    /// Stepping through the frames of the last run
    Review,
}

/// The main application state
pub struct App {
    /// Array, configuration and random source
    pub session: Session,

    pub mode: Mode,

    /// Frames recorded during the last sort
    pub history: FrameHistory,

    /// Position in `history` while reviewing
    pub position: usize,

    /// Counters from the last sort
    pub last_stats: Option<SortStats>,

    /// Set by the `s` key, picked up by the event loop
    pub sort_requested: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether replay is advancing on its own
    pub is_playing: bool,

    /// Last time a frame was advanced during replay
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            mode: Mode::Idle,
            history: FrameHistory::new(HISTORY_LIMIT_BYTES),
            position: 0,
            last_stats: None,
            sort_requested: false,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.sort_requested {
                self.sort_requested = false;
                self.run_sort(terminal)?;

                // Keys pressed during the run are discarded, the controls were locked
                while event::poll(Duration::ZERO)? {
                    event::read()?;
                }
                continue;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.session.config().delay() {
                if self.position + 1 < self.history.len() {
                    self.position += 1;
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Short poll so replay keeps moving
            if event::poll(Duration::from_millis(10))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Sort the session array, drawing every frame, then switch to review
    pub fn run_sort<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.mode = Mode::Sorting;
        self.is_playing = false;

        let config = self.session.config().clone();
        let mut renderer = TerminalRenderer::new(terminal, &config, HISTORY_LIMIT_BYTES);
        let stats = self.session.sort(&mut renderer);
        let (history, error) = renderer.finish();

        self.history = history;
        self.position = self.history.len().saturating_sub(1);
        self.last_stats = Some(stats);
        self.mode = Mode::Review;
        self.status_message = format!("{} done: {}", config.algorithm, stats);

        match error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Frame shown right now: the replay position, or the live array
    pub fn current_snapshot(&self) -> Snapshot {
        match self.mode {
            Mode::Review => self
                .history
                .get(self.position)
                .cloned()
                .unwrap_or_else(|| self.session.snapshot()),
            Mode::Idle | Mode::Sorting => self.session.snapshot(),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let snapshot = self.current_snapshot();
        let config = self.session.config();
        let (current_frame, total_frames) = match self.mode {
            Mode::Review => (self.position, Some(self.history.len())),
            Mode::Idle | Mode::Sorting => (0, None),
        };

        let screen = Screen {
            snapshot: &snapshot,
            algorithm: config.algorithm,
            size: config.size,
            delay_ms: config.delay_ms,
            max_value: config.max_value,
            mode: self.mode,
            message: &self.status_message,
            current_frame,
            total_frames,
            is_playing: self.is_playing,
        };
        render_screen(frame, &screen);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.sort_requested = true;
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                self.session.generate_new_array();
                self.leave_review("Generated a new array".to_string());
            }
            KeyCode::Char('a') => {
                let next = self.session.algorithm().next();
                self.session.set_algorithm(next);
                self.leave_review(format!("Selected {}", next));
            }
            KeyCode::Char('A') => {
                let prev = self.session.algorithm().prev();
                self.session.set_algorithm(prev);
                self.leave_review(format!("Selected {}", prev));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let size = self.session.config().size.saturating_add(SIZE_STEP);
                self.session.set_size(size);
                self.leave_review(format!("Size {}", self.session.config().size));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let size = self.session.config().size.saturating_sub(SIZE_STEP);
                self.session.set_size(size);
                self.leave_review(format!("Size {}", self.session.config().size));
            }
            KeyCode::Char(']') => {
                let delay = self.session.config().delay_ms.saturating_add(DELAY_STEP);
                self.session.set_delay_ms(delay);
                self.status_message = format!("Delay {} ms", self.session.config().delay_ms);
            }
            KeyCode::Char('[') => {
                let delay = self.session.config().delay_ms.saturating_sub(DELAY_STEP);
                self.session.set_delay_ms(delay);
                self.status_message = format!("Delay {} ms", self.session.config().delay_ms);
            }
            _ if self.mode == Mode::Review => self.handle_review_key(key),
            _ => {}
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        match key.code {
            // Number keys step forward N frames directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.step_by(n as isize);
                self.status_message = format!("Stepped forward {} frame(s)", stepped);
            }
            KeyCode::Left => {
                self.is_playing = false;
                if self.step_by(-1) == 0 {
                    self.status_message = "Already at the first frame".to_string();
                } else {
                    self.status_message = "Stepped backward".to_string();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.step_by(1) == 0 {
                    self.status_message = "Already at the last frame".to_string();
                } else {
                    self.status_message = "Stepped forward".to_string();
                }
            }
            KeyCode::Char(' ') => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        if self.position + 1 >= self.history.len() {
                            self.position = 0;
                        }
                        self.last_play_time = Instant::now();
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.position = self.history.len().saturating_sub(1);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.position = 0;
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Move the replay position by `delta` frames, clamped; returns frames moved
    fn step_by(&mut self, delta: isize) -> usize {
        let last = self.history.len().saturating_sub(1);
        let target = if delta < 0 {
            self.position.saturating_sub(delta.unsigned_abs())
        } else {
            (self.position + delta as usize).min(last)
        };
        let moved = target.abs_diff(self.position);
        self.position = target;
        moved
    }

    /// Back to the live array after a settings change
    fn leave_review(&mut self, message: String) {
        self.mode = Mode::Idle;
        self.is_playing = false;
        self.history.clear();
        self.position = 0;
        self.status_message = message;
    }
}
