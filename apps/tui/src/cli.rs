use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "skillchart", version, about = "Skill checklist with a radial score chart")]
pub struct CliArgs {
    /// Print the score summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Category to open first
    #[arg(long, value_name = "ID")]
    pub category: Option<String>,

    /// Interface language (en, ko)
    #[arg(long, value_name = "CODE")]
    pub locale: Option<String>,

    /// Load categories from a JSON file instead of the built-in list
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<String>,

    /// Override the export directory
    #[arg(long = "export-dir", value_name = "PATH")]
    pub export_dir: Option<String>,

    /// Headless: also write the chart as SVG
    #[arg(long, value_name = "PATH")]
    pub svg: Option<String>,

    /// Keep toggles when switching between categories
    #[arg(long)]
    pub remember: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(category) = &self.category {
            std::env::set_var("SKILLCHART_CATEGORY", category);
        }
        if let Some(locale) = &self.locale {
            std::env::set_var("SKILLCHART_LOCALE", locale);
        }
        if let Some(catalog) = &self.catalog {
            std::env::set_var("SKILLCHART_CATALOG", catalog);
        }
        if let Some(dir) = &self.export_dir {
            std::env::set_var("SKILLCHART_EXPORT_DIR", dir);
        }
        if self.remember {
            std::env::set_var("SKILLCHART_SWITCH_POLICY", "remember");
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn parses_headless_flags() {
        let args = CliArgs::parse_from([
            "skillchart",
            "--headless",
            "--json",
            "--category",
            "python",
            "--svg",
            "chart.svg",
        ]);
        assert!(args.headless && args.json);
        assert_eq!(args.category.as_deref(), Some("python"));
        assert_eq!(args.svg.as_deref(), Some("chart.svg"));
        assert!(!args.remember);
    }

    #[test]
    fn help_lists_export_dir() {
        assert!(CliArgs::help_text().contains("--export-dir"));
    }
}
