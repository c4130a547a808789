use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::SkillRecord;
use crate::domain::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Ko];

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Self::En),
            "ko" | "korean" | "kr" => Some(Self::Ko),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ko => "한국어",
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ko,
            Self::Ko => Self::En,
        }
    }
}

/// Text that is either a single string or keyed by locale code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Localized {
    Plain(String),
    ByLocale(BTreeMap<String, String>),
}

impl Localized {
    /// Requested locale, then the default locale, then whatever entry exists.
    pub fn resolve(&self, locale: Locale) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::ByLocale(entries) => entries
                .get(locale.code())
                .or_else(|| entries.get(Locale::default().code()))
                .or_else(|| entries.values().next())
                .map_or("", String::as_str),
        }
    }

    pub fn has_locale(&self, locale: Locale) -> bool {
        match self {
            Self::Plain(_) => locale == Locale::default(),
            Self::ByLocale(entries) => entries.contains_key(locale.code()),
        }
    }
}

impl From<&str> for Localized {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

pub fn describe(record: &SkillRecord, locale: Locale) -> &str {
    record.description.resolve(locale)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiText {
    AppTitle,
    Subtitle,
    YourScore,
    Level,
    Description,
    Weight,
    Active,
    ActivateAll,
    DeactivateAll,
    Layers,
    Petals,
    RoseChart,
    FlowerChart,
    NoSkills,
    DarkModeOn,
    DarkModeOff,
    ExportSaved,
    ExportFailed,
}

pub const fn text(key: UiText, locale: Locale) -> &'static str {
    match locale {
        Locale::En => english(key),
        Locale::Ko => korean(key),
    }
}

const fn english(key: UiText) -> &'static str {
    match key {
        UiText::AppTitle => "SkillChart",
        UiText::Subtitle => "Developer Skills Evaluator",
        UiText::YourScore => "Your Score",
        UiText::Level => "Level",
        UiText::Description => "Description",
        UiText::Weight => "Weight",
        UiText::Active => "Active",
        UiText::ActivateAll => "Activate all",
        UiText::DeactivateAll => "Deactivate all",
        UiText::Layers => "layers",
        UiText::Petals => "petals",
        UiText::RoseChart => "Rose",
        UiText::FlowerChart => "Flower",
        UiText::NoSkills => "No skills in this category",
        UiText::DarkModeOn => "Dark mode on",
        UiText::DarkModeOff => "Dark mode off",
        UiText::ExportSaved => "Exported",
        UiText::ExportFailed => "Export failed",
    }
}

const fn korean(key: UiText) -> &'static str {
    match key {
        UiText::AppTitle => "SkillChart",
        UiText::Subtitle => "개발자 역량 평가",
        UiText::YourScore => "내 점수",
        UiText::Level => "레벨",
        UiText::Description => "설명",
        UiText::Weight => "가중치",
        UiText::Active => "활성",
        UiText::ActivateAll => "모두 활성화",
        UiText::DeactivateAll => "모두 비활성화",
        UiText::Layers => "겹",
        UiText::Petals => "꽃잎",
        UiText::RoseChart => "로즈",
        UiText::FlowerChart => "플라워",
        UiText::NoSkills => "이 카테고리에 항목이 없습니다",
        UiText::DarkModeOn => "다크 모드 켜짐",
        UiText::DarkModeOff => "다크 모드 꺼짐",
        UiText::ExportSaved => "내보내기 완료",
        UiText::ExportFailed => "내보내기 실패",
    }
}

pub const fn level_label(level: Level, locale: Locale) -> &'static str {
    match locale {
        Locale::En => level.label(),
        Locale::Ko => match level {
            Level::Beginner => "초급",
            Level::Intermediate => "중급",
            Level::Advanced => "고급",
            Level::Expert => "전문가",
        },
    }
}
