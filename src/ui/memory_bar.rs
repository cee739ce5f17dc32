use crate::ui::theme::Theme;
use crate::util::human::{clamp_pct, fmt_pct};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn render_memory_bar(f: &mut Frame, area: Rect, gauge: Option<(f64, &str)>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled("Memory", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 { return; }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let (fill, label) = match gauge {
        Some((fill, label)) if !label.is_empty() => (fill, label),
        _ => (0.0, "waiting for first reading…"),
    };

    let bar = Gauge::default()
        .gauge_style(theme.memory)
        .ratio(clamp_pct(fill) / 100.0)
        .label(fmt_pct(fill));
    f.render_widget(bar, rows[0]);
    f.render_widget(Paragraph::new(Span::styled(label.to_string(), theme.text)), rows[1]);
}
