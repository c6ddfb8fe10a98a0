//! Control panel: current settings and the color legend

use crate::snapshot::Role;
use crate::sorting::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the two-line control panel at the top
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    size: usize,
    delay_ms: u64,
    locked: bool,
) {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = if locked {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD)
    };
    let key = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let sep = Span::styled(" │ ", label);

    let settings = Line::from(vec![
        Span::styled(" Algorithm: ", label),
        Span::styled(format!("◀ {} ▶", algorithm), value),
        Span::raw(" "),
        Span::styled(" a ", key),
        sep.clone(),
        Span::styled("Size: ", label),
        Span::styled(size.to_string(), value),
        Span::raw(" "),
        Span::styled(" -/+ ", key),
        sep.clone(),
        Span::styled("Delay: ", label),
        Span::styled(format!("{} ms", delay_ms), value),
        Span::raw(" "),
        Span::styled(" [/] ", key),
        sep,
        Span::styled(" g ", key),
        Span::styled(" generate ", label),
        Span::styled(" s ", key),
        Span::styled(" sort ", label),
    ]);

    let mut legend = vec![Span::styled(" ", label)];
    for role in Role::ALL {
        legend.push(Span::styled("■ ", Style::default().fg(DEFAULT_THEME.role_color(role))));
        legend.push(Span::styled(format!("{}  ", role), label));
    }

    frame.render_widget(Paragraph::new(vec![settings, Line::from(legend)]), area);
}
