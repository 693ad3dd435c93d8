// src/templates/catalog.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::utils::{contains_ci, normalize_search};

/// Category value that disables category filtering
pub const ALL_TEMPLATES: &str = "All Templates";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateCategory {
    Professional,
    Finance,
    Technology,
    Creative,
    Executive,
    Academic,
    Healthcare,
    Minimal,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 8] = [
        TemplateCategory::Professional,
        TemplateCategory::Finance,
        TemplateCategory::Technology,
        TemplateCategory::Creative,
        TemplateCategory::Executive,
        TemplateCategory::Academic,
        TemplateCategory::Healthcare,
        TemplateCategory::Minimal,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            TemplateCategory::Professional => "Professional",
            TemplateCategory::Finance => "Finance",
            TemplateCategory::Technology => "Technology",
            TemplateCategory::Creative => "Creative",
            TemplateCategory::Executive => "Executive",
            TemplateCategory::Academic => "Academic",
            TemplateCategory::Healthcare => "Healthcare",
            TemplateCategory::Minimal => "Minimal",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    /// Primary, secondary, accent
    pub color_palette: [String; 3],
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub suitable_for: Vec<String>,
}

impl ResumeTemplate {
    /// `needle` must already be lowercase
    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.description, needle)
            || self.suitable_for.iter().any(|tag| contains_ci(tag, needle))
    }
}

/// Category filter resolved from caller input
enum CategoryFilter {
    Any,
    Only(TemplateCategory),
    Unknown,
}

impl CategoryFilter {
    fn resolve(category: Option<&str>) -> Self {
        match category.map(str::trim) {
            None | Some("") => CategoryFilter::Any,
            Some(name) if name.eq_ignore_ascii_case(ALL_TEMPLATES) => CategoryFilter::Any,
            Some(name) => match TemplateCategory::parse(name) {
                Some(category) => CategoryFilter::Only(category),
                None => {
                    warn!("Unrecognised template category filter: {}", name);
                    CategoryFilter::Unknown
                }
            },
        }
    }

    fn accepts(&self, template: &ResumeTemplate) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(category) => template.category == *category,
            CategoryFilter::Unknown => false,
        }
    }
}

/// Immutable, ordered set of resume templates
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<ResumeTemplate>,
}

impl TemplateCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(templates: Vec<ResumeTemplate>) -> Result<Self> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                return Err(Error::DuplicateTemplateId(template.id.clone()));
            }
        }
        Ok(Self { templates })
    }

    /// List templates matching an optional category and free-text search, in catalog order
    pub fn list_templates(
        &self,
        category: Option<&str>,
        search_text: Option<&str>,
    ) -> Vec<&ResumeTemplate> {
        let category = CategoryFilter::resolve(category);
        let needle = normalize_search(search_text);

        let matched: Vec<&ResumeTemplate> = self
            .templates
            .iter()
            .filter(|t| category.accepts(t))
            .filter(|t| needle.as_deref().map_or(true, |n| t.matches_search(n)))
            .collect();

        debug!(
            "Template listing matched {} of {}",
            matched.len(),
            self.templates.len()
        );
        matched
    }

    pub fn get_template(&self, template_id: &str) -> Option<&ResumeTemplate> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    pub fn template_exists(&self, template_id: &str) -> bool {
        self.get_template(template_id).is_some()
    }

    /// Categories that have at least one template, in enumeration order
    pub fn categories(&self) -> Vec<TemplateCategory> {
        TemplateCategory::ALL
            .into_iter()
            .filter(|c| self.templates.iter().any(|t| t.category == *c))
            .collect()
    }

    pub fn templates(&self) -> &[ResumeTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
