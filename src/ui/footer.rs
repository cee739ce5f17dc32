use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEYS: [(&str, &str); 5] = [
    ("q", "Quit"),
    ("↑↓/jk", "Move"),
    ("g/G", "Top/Bot"),
    ("Enter", "Select"),
    ("t", "Theme"),
];

pub fn render_footer(f: &mut Frame, area: Rect, status: Option<&str>, theme: &Theme) {
    let mut spans: Vec<Span> = vec![Span::styled(" ", theme.footer_bg)];

    for (key, desc) in KEYS {
        spans.push(Span::styled(format!(" {} ", key), theme.footer_key));
        spans.push(Span::styled(format!("{}  ", desc), theme.footer_text));
    }

    if let Some(msg) = status {
        spans.push(Span::styled("  \u{2502}  ", theme.footer_text));
        spans.push(Span::styled(msg.to_string(), theme.status));
    }

    let para = Paragraph::new(Line::from(spans)).style(theme.footer_bg);
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeVariant;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn enter_is_labelled_as_a_selection() {
        let theme = Theme::for_variant(ThemeVariant::Default);
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_footer(f, area, Some("Selected Disk1"), &theme)
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let row: String = (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.contains(" Enter Select"), "{}", row);
        assert!(!row.contains("Open"), "{}", row);
        assert!(row.contains("Selected Disk1"), "{}", row);
    }
}
