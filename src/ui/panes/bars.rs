//! Bar chart of the array
//!
//! Each element owns a run of terminal columns (`i * width / len` up to the
//! next element's start). Runs of two or more columns keep their last column
//! blank as a gap. Heights are scaled against the largest possible value and
//! drawn in eighth-cell steps.

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// One terminal column of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Column {
    /// Filled height in eighths of a cell (0 for gaps)
    eighths: u64,
    color: Color,
}

/// Render the bar chart pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot, max_value: u32) {
    let block = Block::default()
        .title(format!(" {} bars ", snapshot.values().len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = bar_lines(snapshot, max_value, inner.width, inner.height);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Lay out the chart as `height` lines of `width` cells
pub fn bar_lines(snapshot: &Snapshot, max_value: u32, width: u16, height: u16) -> Vec<Line<'static>> {
    let values = snapshot.values();
    if values.is_empty() || width == 0 || height == 0 {
        return Vec::new();
    }

    let columns = layout_columns(snapshot, max_value.max(1), width as usize, height as u64);

    (0..height as u64)
        .map(|row| {
            let floor = (height as u64 - 1 - row) * 8;
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run = String::new();
            let mut run_color = None;

            for column in &columns {
                let filled = column.eighths.saturating_sub(floor).min(8) as usize;
                let color = (filled > 0).then_some(column.color);
                if color != run_color && !run.is_empty() {
                    spans.push(styled_run(std::mem::take(&mut run), run_color));
                }
                run_color = color;
                run.push_str(EIGHTHS[filled]);
            }
            if !run.is_empty() {
                spans.push(styled_run(run, run_color));
            }

            Line::from(spans)
        })
        .collect()
}

fn styled_run(text: String, color: Option<Color>) -> Span<'static> {
    match color {
        Some(color) => Span::styled(text, Style::default().fg(color)),
        None => Span::raw(text),
    }
}

fn layout_columns(snapshot: &Snapshot, max_value: u32, width: usize, height: u64) -> Vec<Column> {
    let values = snapshot.values();
    let len = values.len();
    let total = height * 8;
    let mut columns = Vec::with_capacity(width);

    for (i, &value) in values.iter().enumerate() {
        let start = i * width / len;
        let end = (i + 1) * width / len;
        let color = DEFAULT_THEME.role_color(snapshot.role_at(i));
        // Never let a non-zero value disappear entirely
        let eighths = (value as u64 * total / max_value as u64).clamp(1, total);

        for col in start..end {
            let is_gap = end - start >= 2 && col == end - 1;
            columns.push(Column {
                eighths: if is_gap { 0 } else { eighths },
                color,
            });
        }
    }

    columns
}
