// src/templates/mod.rs
//! Resume template catalog and canned content generation

pub mod catalog;
pub mod content;
pub mod placeholder;

pub use catalog::{ResumeTemplate, TemplateCatalog, TemplateCategory, ALL_TEMPLATES};
pub use content::{ContentLibrary, ContentSuggestionBundle, GeneratedContent};

use anyhow::Context;
use rand::Rng;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::error::Result;

const DEFAULT_CATALOG: &str = include_str!("../../catalog/default.toml");

/// On-disk layout of a catalog document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    templates: Vec<ResumeTemplate>,
    #[serde(default)]
    industries: Vec<ContentSuggestionBundle>,
}

/// Template catalog plus industry content, loaded once at startup
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    catalog: TemplateCatalog,
    content: ContentLibrary,
}

impl TemplateLibrary {
    pub fn new(catalog: TemplateCatalog, content: ContentLibrary) -> Self {
        Self { catalog, content }
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    /// Parse a catalog document. Both sections are required to be valid, either may be empty.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let document: CatalogDocument = toml::from_str(content)?;
        Ok(Self {
            catalog: TemplateCatalog::new(document.templates)?,
            content: ContentLibrary::new(document.industries)?,
        })
    }

    /// Load a catalog file; each non-empty section replaces the built-in one
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let document: CatalogDocument = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;

        let builtin = Self::builtin().context("Built-in catalog is invalid")?;

        let catalog = if document.templates.is_empty() {
            builtin.catalog
        } else {
            TemplateCatalog::new(document.templates)
                .with_context(|| format!("Invalid templates in {}", path.display()))?
        };

        let content = if document.industries.is_empty() {
            builtin.content
        } else {
            ContentLibrary::new(document.industries)
                .with_context(|| format!("Invalid industries in {}", path.display()))?
        };

        info!(
            "Loaded catalog from {}: {} templates, {} industries",
            path.display(),
            catalog.len(),
            content.industries().len()
        );

        Ok(Self { catalog, content })
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn content(&self) -> &ContentLibrary {
        &self.content
    }

    pub fn list_templates(
        &self,
        category: Option<&str>,
        search_text: Option<&str>,
    ) -> Vec<&ResumeTemplate> {
        self.catalog.list_templates(category, search_text)
    }

    pub fn get_content_suggestions(&self, industry: &str) -> Option<&ContentSuggestionBundle> {
        self.content.get_content_suggestions(industry)
    }

    pub fn generate_content<R: Rng + ?Sized>(
        &self,
        industry: &str,
        experience_band: &str,
        rng: &mut R,
    ) -> Option<GeneratedContent> {
        self.content.generate_content(industry, experience_band, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_loads() {
        let library = TemplateLibrary::builtin().unwrap();
        assert_eq!(library.catalog().len(), 8);
        assert_eq!(
            library.catalog().categories().len(),
            TemplateCategory::ALL.len()
        );
        assert_eq!(
            library.content().industries(),
            vec!["design", "finance", "healthcare", "marketing", "technology"]
        );
    }

    #[test]
    fn test_builtin_finance_listing() {
        let library = TemplateLibrary::builtin().unwrap();
        let names: Vec<&str> = library
            .list_templates(Some("Finance"), Some(""))
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Finance Professional"]);
    }

    #[test]
    fn test_builtin_bundles_fill_every_slot() {
        let library = TemplateLibrary::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        for industry in library.content().industries() {
            let content = library.generate_content(industry, "3-5", &mut rng).unwrap();
            assert_eq!(content.skills.len(), 10, "{}", industry);
            assert_eq!(content.achievements.len(), 3, "{}", industry);
            assert!(content.summary.contains("3-5"));
            assert!(!content.summary.contains('{'));
            assert!(content.achievements.iter().all(|a| !a.contains('{')));
        }
    }

    #[test]
    fn test_builtin_unknown_industry() {
        let library = TemplateLibrary::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(library.generate_content("astrology", "3-5", &mut rng).is_none());
        assert!(library.get_content_suggestions("astrology").is_none());
    }

    #[test]
    fn test_palette_must_have_three_colors() {
        let doc = r##"
            [[templates]]
            id = "two-tone"
            name = "Two Tone"
            description = "broken"
            category = "Minimal"
            colorPalette = ["#000", "#fff"]
        "##;
        assert!(matches!(
            TemplateLibrary::from_toml_str(doc),
            Err(Error::CatalogParse(_))
        ));
    }

    #[test]
    fn test_short_industry_pools_rejected_on_load() {
        let doc = r#"
            [[industries]]
            industry = "legal"
            summaryTemplates = ["Counsel with {years} years of practice."]
            skillPool = ["Contracts", "Litigation"]
            achievementTemplates = ["Won {number} appeals"]
        "#;
        assert!(matches!(
            TemplateLibrary::from_toml_str(doc),
            Err(Error::PoolTooSmall { pool: "skills", found: 2, .. })
        ));
    }

    #[test]
    fn test_summary_without_years_rejected_on_load() {
        let skills: Vec<String> = (1..=10).map(|i| format!("\"Skill {}\"", i)).collect();
        let doc = format!(
            r#"
            [[industries]]
            industry = "legal"
            summaryTemplates = ["Lawyer with a decade of practice."]
            skillPool = [{}]
            achievementTemplates = ["Won {{number}} appeals", "Saved ${{amount}}", "Cut filing time by {{days}} days"]
            "#,
            skills.join(", ")
        );
        assert!(matches!(
            TemplateLibrary::from_toml_str(&doc),
            Err(Error::MissingYearsPlaceholder { .. })
        ));
    }

    #[test]
    fn test_load_replaces_only_provided_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
            [[templates]]
            id = "solo"
            name = "Solo"
            description = "Only template"
            category = "Creative"
            colorPalette = ["#1", "#2", "#3"]
            "##
        )
        .unwrap();

        let library = TemplateLibrary::load(file.path()).unwrap();
        assert_eq!(library.catalog().len(), 1);
        assert!(library.catalog().template_exists("solo"));
        assert!(library.get_content_suggestions("finance").is_some());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(TemplateLibrary::load(Path::new("/nonexistent/catalog.toml")).is_err());
    }
}
