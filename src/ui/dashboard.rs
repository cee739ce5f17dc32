use crate::app::App;
use crate::ui::{footer::render_footer, memory_bar::render_memory_bar, volume_list::render_volume_list};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// header (1) | volumes | memory (4) | footer (1)
pub fn render(f: &mut Frame, app: &mut App) {
    let area  = f.area();
    let theme = app.theme.clone();

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);

    let now   = Local::now().format("%H:%M:%S").to_string();
    let left  = format!(" drivescope - {} ", app.theme_variant.name());
    let right = format!(" {} ", now);
    let pad   = (area.width as usize).saturating_sub(left.chars().count() + right.len());
    let header = Line::from(vec![
        Span::styled(left, theme.title),
        Span::styled(" ".repeat(pad), theme.text_dim),
        Span::styled(right, theme.text_dim),
    ]);
    f.render_widget(Paragraph::new(header), root[0]);

    render_volume_list(f, root[1], &app.view, &mut app.list_state, &theme);
    render_memory_bar(f, root[2], app.view.gauge(), &theme);
    render_footer(f, root[3], app.view.status.as_deref(), &theme);
}
