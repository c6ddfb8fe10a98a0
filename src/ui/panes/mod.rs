//! TUI pane rendering modules
//!
//! - [`controls`]: current algorithm, size and delay, plus the color legend
//! - [`bars`]: the bar chart of one snapshot
//! - [`status`]: status bar with keybindings and run state
//!
//! [`render_screen`] lays the three out; both the idle event loop and the
//! renderer used during a sort draw through it.

pub mod bars;
pub mod controls;
pub mod status;

pub use bars::render_bars_pane;
pub use controls::render_controls;
pub use status::render_status_bar;

use crate::snapshot::Snapshot;
use crate::sorting::Algorithm;
use crate::ui::app::Mode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Everything needed to draw one full screen
pub struct Screen<'a> {
    pub snapshot: &'a Snapshot,
    pub algorithm: Algorithm,
    pub size: usize,
    pub delay_ms: u64,
    pub max_value: u32,
    pub mode: Mode,
    pub message: &'a str,
    pub current_frame: usize,
    /// `None` while the total is still unknown
    pub total_frames: Option<usize>,
    pub is_playing: bool,
}

/// Render controls (top), bars (middle) and the status bar (bottom)
pub fn render_screen(frame: &mut Frame, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_controls(
        frame,
        chunks[0],
        screen.algorithm,
        screen.size,
        screen.delay_ms,
        screen.mode == Mode::Sorting,
    );
    render_bars_pane(frame, chunks[1], screen.snapshot, screen.max_value);
    render_status_bar(
        frame,
        chunks[2],
        screen.message,
        screen.mode,
        screen.current_frame,
        screen.total_frames,
        screen.is_playing,
    );
}
