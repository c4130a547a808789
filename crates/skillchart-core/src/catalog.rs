use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{deserialize_level, serialize_level, Level};
use crate::locale::{Locale, Localized};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no categories")]
    Empty,
    #[error("category at position {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),
}

/// One checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    #[serde(
        deserialize_with = "deserialize_level",
        serialize_with = "serialize_level",
        default
    )]
    pub level: Option<Level>,
    pub description: Localized,
    pub weight: u32,
    #[serde(default)]
    pub active: bool,
}

impl SkillRecord {
    pub fn new(level: Level, description: impl Into<String>, active: bool) -> Self {
        Self {
            level: Some(level),
            description: Localized::Plain(description.into()),
            weight: level.weight(),
            active,
        }
    }

    pub fn weight_matches_level(&self) -> bool {
        self.level.map_or(true, |level| level.weight() == self.weight)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: Localized,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

impl Category {
    pub fn label(&self, locale: Locale) -> &str {
        self.label.resolve(locale)
    }
}

/// Serialized shape of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
}

/// A record whose weight disagrees with its level's weight class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMismatch {
    pub category: String,
    pub position: usize,
    pub level: Level,
    pub weight: u32,
}

/// Static category tables; boards copy from here and never write back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(source)?;
        Self::from_document(document)
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        if document.categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (position, category) in document.categories.iter().enumerate() {
            if category.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let catalog = Self {
            categories: document.categories,
        };

        for mismatch in catalog.weight_mismatches() {
            warn!(
                category = %mismatch.category,
                position = mismatch.position,
                level = mismatch.level.as_str(),
                weight = mismatch.weight,
                "skill weight does not match its level"
            );
        }
        debug!(categories = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.id.eq_ignore_ascii_case(id))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn weight_mismatches(&self) -> Vec<WeightMismatch> {
        self.categories
            .iter()
            .flat_map(|category| {
                category
                    .skills
                    .iter()
                    .enumerate()
                    .filter(|(_, skill)| !skill.weight_matches_level())
                    .filter_map(move |(position, skill)| {
                        Some(WeightMismatch {
                            category: category.id.clone(),
                            position,
                            level: skill.level?,
                            weight: skill.weight,
                        })
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads_all_categories() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog
            .categories()
            .iter()
            .map(|category| category.id.as_str())
            .collect();
        assert_eq!(ids, vec!["backend", "dataScience", "python", "sql", "llm"]);
        assert!(catalog.weight_mismatches().is_empty());
    }

    #[test]
    fn builtin_backend_has_thirty_five_skills() {
        let catalog = Catalog::builtin().unwrap();
        let backend = catalog.get(0).unwrap();
        assert_eq!(backend.skills.len(), 35);
        assert_eq!(backend.label(Locale::Ko), "백엔드");
    }

    #[test]
    fn unknown_level_parses_as_none() {
        let catalog = Catalog::from_json(
            r#"{"categories":[{"id":"misc","label":"Misc","skills":[
                {"level":"Guru","description":"Knows everything","weight":16,"active":true}
            ]}]}"#,
        )
        .unwrap();
        let skill = &catalog.get(0).unwrap().skills[0];
        assert_eq!(skill.level, None);
        assert!(skill.weight_matches_level());
    }

    #[test]
    fn mismatched_weight_is_reported_not_rejected() {
        let catalog = Catalog::from_json(
            r#"{"categories":[{"id":"misc","label":"Misc","skills":[
                {"level":"Expert","description":"Underweighted","weight":2}
            ]}]}"#,
        )
        .unwrap();
        let mismatches = catalog.weight_mismatches();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].level, Level::Expert);
        assert_eq!(mismatches[0].weight, 2);
        assert!(!catalog.get(0).unwrap().skills[0].active);
    }

    #[test]
    fn rejects_empty_and_duplicate_catalogs() {
        assert!(matches!(
            Catalog::from_json(r#"{"categories":[]}"#),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            Catalog::from_json(
                r#"{"categories":[{"id":"a","label":"A"},{"id":"a","label":"Again"}]}"#
            ),
            Err(CatalogError::DuplicateCategory(id)) if id == "a"
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"categories":[{"id":" ","label":"Blank"}]}"#),
            Err(CatalogError::EmptyId(0))
        ));
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn position_lookup_ignores_case() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.position("DataScience"), Some(1));
        assert_eq!(catalog.position("rust"), None);
    }
}
