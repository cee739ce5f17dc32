use ratatui::style::{Color, Modifier, Style};

const fn rgb(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >>  8) & 0xFF) as u8,
        ( hex        & 0xFF) as u8,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeVariant {
    Default,
    Dracula,
    Gruvbox,
    Nord,
}

impl ThemeVariant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Dracula => "Dracula",
            Self::Gruvbox => "Gruvbox",
            Self::Nord    => "Nord",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Default => Self::Dracula,
            Self::Dracula => Self::Gruvbox,
            Self::Gruvbox => Self::Nord,
            Self::Nord    => Self::Default,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::Dracula,
            "gruvbox" => Self::Gruvbox,
            "nord"    => Self::Nord,
            _         => Self::Default,
        }
    }
}

#[derive(Clone)]
pub struct Theme {
    pub border:         Style,
    pub border_focused: Style,
    pub title:          Style,
    pub text:           Style,
    pub text_dim:       Style,
    pub selected:       Style,
    pub status:         Style,
    pub warn:           Style,
    pub memory:         Style,
    pub usage_low:      Style,
    pub usage_mid:      Style,
    pub usage_high:     Style,
    pub usage_full:     Style,
    pub footer_bg:      Style,
    pub footer_key:     Style,
    pub footer_text:    Style,
}

/// Palette entries a variant is built from.
struct Palette {
    border:    Color,
    accent:    Color,
    fg:        Color,
    dim:       Color,
    bar_bg:    Color,
    select:    Color,
    select_fg: Color,
    green:     Color,
    yellow:    Color,
    orange:    Color,
    red:       Color,
    blue:      Color,
}

impl Theme {
    pub fn for_variant(v: ThemeVariant) -> Self {
        let p = match v {
            ThemeVariant::Default => Palette {
                border: Color::DarkGray, accent: Color::Cyan, fg: Color::White,
                dim: Color::DarkGray, bar_bg: Color::DarkGray,
                select: Color::Cyan, select_fg: Color::Black,
                green: Color::Green, yellow: Color::Yellow, orange: Color::LightRed,
                red: Color::Red, blue: Color::Blue,
            },
            // https://draculatheme.com/
            ThemeVariant::Dracula => Palette {
                border: rgb(0x6272a4), accent: rgb(0xbd93f9), fg: rgb(0xf8f8f2),
                dim: rgb(0x6272a4), bar_bg: rgb(0x44475a),
                select: rgb(0xff79c6), select_fg: rgb(0x282a36),
                green: rgb(0x50fa7b), yellow: rgb(0xf1fa8c), orange: rgb(0xffb86c),
                red: rgb(0xff5555), blue: rgb(0x8be9fd),
            },
            // https://github.com/morhetz/gruvbox
            ThemeVariant::Gruvbox => Palette {
                border: rgb(0x504945), accent: rgb(0x83a598), fg: rgb(0xebdbb2),
                dim: rgb(0xa89984), bar_bg: rgb(0x3c3836),
                select: rgb(0xd79921), select_fg: rgb(0x282828),
                green: rgb(0xb8bb26), yellow: rgb(0xfabd2f), orange: rgb(0xfe8019),
                red: rgb(0xfb4934), blue: rgb(0x83a598),
            },
            // https://www.nordtheme.com/
            ThemeVariant::Nord => Palette {
                border: rgb(0x4c566a), accent: rgb(0x88c0d0), fg: rgb(0xe5e9f0),
                dim: rgb(0x4c566a), bar_bg: rgb(0x3b4252),
                select: rgb(0x88c0d0), select_fg: rgb(0x2e3440),
                green: rgb(0xa3be8c), yellow: rgb(0xebcb8b), orange: rgb(0xd08770),
                red: rgb(0xbf616a), blue: rgb(0x81a1c1),
            },
        };
        Self::from_palette(&p)
    }

    fn from_palette(p: &Palette) -> Self {
        Self {
            border:         Style::default().fg(p.border),
            border_focused: Style::default().fg(p.accent),
            title:          Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
            text:           Style::default().fg(p.fg),
            text_dim:       Style::default().fg(p.dim),
            selected:       Style::default().fg(p.select_fg).bg(p.select),
            status:         Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            warn:           Style::default().fg(p.yellow),
            memory:         Style::default().fg(p.blue).bg(p.bar_bg),
            usage_low:      Style::default().fg(p.green).bg(p.bar_bg),
            usage_mid:      Style::default().fg(p.yellow).bg(p.bar_bg),
            usage_high:     Style::default().fg(p.orange).bg(p.bar_bg),
            usage_full:     Style::default().fg(p.red).bg(p.bar_bg).add_modifier(Modifier::BOLD),
            footer_bg:      Style::default().bg(p.bar_bg).fg(p.fg),
            footer_key:     Style::default().bg(p.bar_bg).fg(p.accent).add_modifier(Modifier::BOLD),
            footer_text:    Style::default().bg(p.bar_bg).fg(p.dim),
        }
    }

    /// Fill colour for a 0–100 usage value.
    pub fn usage_style(&self, pct: f64) -> Style {
        if      pct >= 95.0 { self.usage_full }
        else if pct >= 75.0 { self.usage_high }
        else if pct >= 50.0 { self.usage_mid  }
        else                 { self.usage_low  }
    }
}
