//! Status bar rendering with keybindings and state indicators

use crate::ui::app::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `total_frames` is `None` while a sort is still producing frames.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    mode: Mode,
    current_frame: usize,
    total_frames: Option<usize>,
    is_playing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: frame counter and message
    let frame_text = match (mode, total_frames) {
        (Mode::Idle, _) => " Ready ".to_string(),
        (_, Some(total)) => format!(" Frame {}/{} ", current_frame + 1, total),
        (_, None) => format!(" Frame {}/? ", current_frame + 1),
    };

    let left_spans = vec![
        Span::styled(
            frame_text,
            Style::default()
                .bg(if mode == Mode::Sorting {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds, only the replay ones once a run has been recorded
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    if mode == Mode::Review {
        right_spans.extend([
            Span::styled(" ←/→ ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ⎵ ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ↵ / ⌫ ", key_style),
            Span::styled(" end/start ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
        ]);
    }
    right_spans.push(Span::styled("q", key_style));
    right_spans.push(Span::styled(" quit ", desc_style));

    let badge = |text: &'static str, bg: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    let is_at_start = current_frame == 0;
    let is_at_end = total_frames.is_some_and(|total| current_frame + 1 >= total);

    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(match mode {
        Mode::Sorting => badge(" ⏳ SORTING ", DEFAULT_THEME.secondary),
        Mode::Idle => badge(" READY ", DEFAULT_THEME.primary),
        Mode::Review if is_playing => badge(" ▶ PLAYING ", DEFAULT_THEME.secondary),
        Mode::Review if is_at_end => badge(" END ", DEFAULT_THEME.error),
        Mode::Review if is_at_start => badge(" START ", DEFAULT_THEME.success),
        Mode::Review => badge(" REPLAY ", DEFAULT_THEME.primary),
    });

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
