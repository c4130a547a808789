use std::env;
use std::path::PathBuf;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use dotenv::dotenv;
use skillchart_core::{Catalog, Locale, SwitchPolicy};
use tracing::debug;

pub const DEFAULT_EXPORT_DIR: &str = "./exports";
pub const DEFAULT_LOG_DIR: &str = ".";

/// Settings resolved from `.env`, the process environment and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub category: Option<String>,
    pub locale: Locale,
    pub catalog_path: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub switch_policy: SwitchPolicy,
    pub log_dir: PathBuf,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            category: None,
            locale: Locale::default(),
            catalog_path: None,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            switch_policy: SwitchPolicy::default(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let locale = match value("SKILLCHART_LOCALE") {
            Some(raw) => Locale::parse(&raw).ok_or_else(|| eyre!("Unsupported locale: {raw}"))?,
            None => Locale::default(),
        };

        let switch_policy = match value("SKILLCHART_SWITCH_POLICY") {
            Some(raw) => SwitchPolicy::parse(&raw)
                .ok_or_else(|| eyre!("Unknown switch policy: {raw} (expected reset or remember)"))?,
            None => SwitchPolicy::default(),
        };

        let debug =
            value("DEBUG").is_some_and(|raw| raw == "1" || raw.eq_ignore_ascii_case("true"));

        Ok(Self {
            category: value("SKILLCHART_CATEGORY"),
            locale,
            catalog_path: value("SKILLCHART_CATALOG").map(PathBuf::from),
            export_dir: value("SKILLCHART_EXPORT_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR), PathBuf::from),
            switch_policy,
            log_dir: value("SKILLCHART_LOG_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from),
            debug,
        })
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.catalog_path else {
            return Catalog::builtin().wrap_err("Built-in catalog is invalid");
        };

        debug!(path = %path.display(), "loading catalog override");
        let source = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read catalog {}", path.display()))?;
        Catalog::from_json(&source).wrap_err_with(|| format!("Invalid catalog {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.export_dir, PathBuf::from("./exports"));
    }

    #[test]
    fn reads_every_key() {
        let config = config(&[
            ("SKILLCHART_CATEGORY", "sql"),
            ("SKILLCHART_LOCALE", "ko"),
            ("SKILLCHART_EXPORT_DIR", "/tmp/out"),
            ("SKILLCHART_SWITCH_POLICY", "remember"),
            ("SKILLCHART_LOG_DIR", "/tmp/logs"),
            ("DEBUG", "true"),
        ])
        .unwrap();

        assert_eq!(config.category.as_deref(), Some("sql"));
        assert_eq!(config.locale, Locale::Ko);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.switch_policy, SwitchPolicy::Remember);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
        assert!(config.debug);
    }

    #[test]
    fn rejects_unknown_locale_and_policy() {
        assert!(config(&[("SKILLCHART_LOCALE", "fr")]).is_err());
        assert!(config(&[("SKILLCHART_SWITCH_POLICY", "sometimes")]).is_err());
    }

    #[test]
    fn builtin_catalog_loads_without_override() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert!(catalog.position("python").is_some());
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/skillchart.json")),
            ..AppConfig::default()
        };
        assert!(config.load_catalog().is_err());
    }
}
