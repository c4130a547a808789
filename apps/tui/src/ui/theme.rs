use ratatui::style::Color;
use skillchart_core::chart::Rgb;
use skillchart_core::ViewSettings;

/// Terminal colors for light and dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub inactive: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub const fn light() -> Self {
        Self {
            background: Color::Reset,
            text: Color::White,
            muted: Color::Gray,
            border: Color::Cyan,
            accent: Color::Yellow,
            highlight_fg: Color::White,
            highlight_bg: Color::Rgb(0, 0, 238),
            inactive: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            text: Color::Rgb(249, 250, 251),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(75, 85, 99),
            accent: Color::Rgb(251, 191, 36),
            highlight_fg: Color::Rgb(17, 24, 39),
            highlight_bg: Color::Rgb(147, 197, 253),
            inactive: Color::Rgb(55, 65, 81),
            error: Color::Rgb(248, 113, 113),
            success: Color::Rgb(74, 222, 128),
        }
    }

    pub const fn for_settings(settings: &ViewSettings) -> Self {
        if settings.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}
