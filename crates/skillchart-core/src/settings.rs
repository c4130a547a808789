use serde::{Deserialize, Serialize};

use crate::chart::{RevealTiming, SvgOptions, SvgTheme};
use crate::locale::{text, Locale, UiText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    #[default]
    Rose,
    Flower,
}

impl ChartStyle {
    pub const ALL: [Self; 2] = [Self::Rose, Self::Flower];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rose => "rose",
            Self::Flower => "flower",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "rose" => Some(Self::Rose),
            "flower" => Some(Self::Flower),
            _ => None,
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Rose => text(UiText::RoseChart, locale),
            Self::Flower => text(UiText::FlowerChart, locale),
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Rose => 0,
            Self::Flower => 1,
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Self::Rose => Self::Flower,
            Self::Flower => Self::Rose,
        }
    }
}

/// Presentation state shared by every renderer. Skill state lives on the
/// board; nothing here changes a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSettings {
    pub locale: Locale,
    pub dark_mode: bool,
    pub chart_style: ChartStyle,
}

impl ViewSettings {
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            dark_mode: false,
            chart_style: ChartStyle::Rose,
        }
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggle();
        self.locale
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn toggle_chart_style(&mut self) -> ChartStyle {
        self.chart_style = self.chart_style.toggle();
        self.chart_style
    }

    pub const fn dark_mode_text(&self) -> &'static str {
        if self.dark_mode {
            text(UiText::DarkModeOn, self.locale)
        } else {
            text(UiText::DarkModeOff, self.locale)
        }
    }

    pub const fn svg_options(&self, timing: RevealTiming) -> SvgOptions {
        SvgOptions {
            theme: SvgTheme::for_mode(self.dark_mode),
            locale: self.locale,
            timing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_flip_back_and_forth() {
        let mut settings = ViewSettings::default();
        assert_eq!(settings.toggle_locale(), Locale::Ko);
        assert_eq!(settings.toggle_locale(), Locale::En);
        assert!(settings.toggle_dark_mode());
        assert_eq!(settings.dark_mode_text(), "Dark mode on");
        assert_eq!(settings.toggle_chart_style(), ChartStyle::Flower);
        assert_eq!(settings.toggle_chart_style(), ChartStyle::Rose);
    }

    #[test]
    fn chart_style_parses_and_labels() {
        assert_eq!(ChartStyle::parse(" Flower "), Some(ChartStyle::Flower));
        assert_eq!(ChartStyle::parse("pie"), None);
        assert_eq!(ChartStyle::Rose.label(Locale::Ko), "로즈");
    }

    #[test]
    fn svg_options_follow_dark_mode() {
        let mut settings = ViewSettings::new(Locale::Ko);
        settings.toggle_dark_mode();
        let options = settings.svg_options(RevealTiming::Instant);
        assert_eq!(options.theme, SvgTheme::dark());
        assert_eq!(options.locale, Locale::Ko);
    }
}
