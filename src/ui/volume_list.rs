use crate::surface::{Node, VolumeEntry};
use crate::ui::theme::Theme;
use crate::view::ViewState;
use crate::util::human::{clamp_pct, fmt_pct};
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render_volume_list(
    f: &mut Frame,
    area: Rect,
    view: &ViewState,
    state: &mut ListState,
    theme: &Theme,
) {
    let volume_count = view.volume_count();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(format!("Volumes  ({} total)", volume_count), theme.title));

    // Borders and the highlight symbol take 4 cells from every row.
    let content = (area.width as usize).saturating_sub(4);

    let items: Vec<ListItem> = view
        .volumes
        .iter()
        .map(|(_, node)| match node {
            Node::AllVolumes   => all_volumes_row(theme),
            Node::Volume(e)    => volume_row(e, content, theme),
            Node::Gauge { .. } => ListItem::new(Line::default()),
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected)
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, state);
}

fn all_volumes_row(theme: &Theme) -> ListItem<'static> {
    ListItem::new(Text::from(vec![
        Line::from(Span::styled("  ▤ All Volumes", theme.title)),
        Line::default(),
    ]))
}

const NAME_W:  usize = 16;
const MOUNT_W: usize = 20;
const FS_W:    usize = 7;

fn volume_row(e: &VolumeEntry, content: usize, theme: &Theme) -> ListItem<'static> {
    let style = theme.usage_style(e.fill);
    let flag  = if e.inconsistent { "  ?" } else { "" };

    // The label always gets its room; the text columns share what is left.
    let label_w = e.label.chars().count() + flag.len();
    let (name_w, mount_w, fs_w) = column_widths(content.saturating_sub(4 + label_w));

    let head = Line::from(vec![
        Span::styled(format!("  {} ", e.kind.glyph()), theme.text_dim),
        Span::styled(fit(&e.name, name_w), theme.text),
        Span::styled(fit(&e.mount_point, mount_w), theme.text_dim),
        Span::styled(fit(&e.file_system, fs_w), theme.text_dim),
        Span::styled(e.label.clone(), style),
        Span::styled(flag, theme.warn),
    ]);
    // indent (4) + bar + " 100%" (5)
    let bar = Line::from(vec![
        Span::styled("    ", theme.text),
        Span::styled(usage_bar(e.fill, content.saturating_sub(9)), style),
        Span::styled(format!(" {:>4}", fmt_pct(e.fill)), style),
    ]);
    ListItem::new(Text::from(vec![head, bar]))
}

/// Widths for name, mount and filesystem, dropping columns from the right.
fn column_widths(room: usize) -> (usize, usize, usize) {
    if room >= NAME_W + MOUNT_W + FS_W {
        (NAME_W, MOUNT_W, FS_W)
    } else if room >= NAME_W + MOUNT_W {
        (NAME_W, MOUNT_W, 0)
    } else {
        (room.min(NAME_W), 0, 0)
    }
}

/// Left-aligned in `width` cells, cut short so one blank cell always follows.
fn fit(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let cut: String = s.chars().take(width - 1).collect();
    format!("{:<width$}", cut, width = width)
}

/// Proportional text bar, `width` cells wide.
pub fn usage_bar(pct: f64, width: usize) -> String {
    let filled = ((clamp_pct(pct) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
