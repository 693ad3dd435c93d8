// src/templates/content.rs
//! Industry content bundles and the canned summary/skills/achievements generator

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::placeholder::{self, Placeholder};
use crate::error::{Error, Result};
use crate::utils::normalize_industry;

pub const SKILL_COUNT: usize = 10;
pub const ACHIEVEMENT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestionBundle {
    pub industry: String,
    pub summary_templates: Vec<String>,
    pub skill_pool: Vec<String>,
    pub achievement_templates: Vec<String>,
}

impl ContentSuggestionBundle {
    /// A bundle must fill every generated slot: summaries carry `{years}`, the skill
    /// and achievement pools are at least as long as the generated lists, and only
    /// known placeholders appear.
    pub fn validate(&self) -> Result<()> {
        if self.summary_templates.is_empty() {
            return Err(Error::EmptySummaryTemplates(self.industry.clone()));
        }

        if self.skill_pool.len() < SKILL_COUNT {
            return Err(self.pool_too_small("skills", self.skill_pool.len(), SKILL_COUNT));
        }

        if self.achievement_templates.len() < ACHIEVEMENT_COUNT {
            return Err(self.pool_too_small(
                "achievement templates",
                self.achievement_templates.len(),
                ACHIEVEMENT_COUNT,
            ));
        }

        if let Some(template) = self.summary_templates.iter().find(|t| {
            !placeholder::tokens(t)
                .into_iter()
                .any(|token| Placeholder::from_token(token) == Some(Placeholder::Years))
        }) {
            return Err(Error::MissingYearsPlaceholder {
                industry: self.industry.clone(),
                template: template.clone(),
            });
        }

        for template in self
            .summary_templates
            .iter()
            .chain(self.achievement_templates.iter())
        {
            if let Some(token) = placeholder::unknown_tokens(template).first() {
                return Err(Error::UnknownPlaceholder {
                    industry: self.industry.clone(),
                    template: template.clone(),
                    token: token.to_string(),
                });
            }
        }

        Ok(())
    }

    fn pool_too_small(&self, pool: &'static str, found: usize, required: usize) -> Error {
        Error::PoolTooSmall {
            industry: self.industry.clone(),
            pool,
            found,
            required,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub summary: String,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
}

/// Validated content bundles keyed by normalized industry
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    bundles: HashMap<String, ContentSuggestionBundle>,
}

impl ContentLibrary {
    pub fn new(bundles: Vec<ContentSuggestionBundle>) -> Result<Self> {
        let mut by_industry = HashMap::with_capacity(bundles.len());
        for bundle in bundles {
            bundle.validate()?;
            let key = normalize_industry(&bundle.industry);
            if by_industry.insert(key, bundle).is_some() {
                warn!("Industry bundle defined twice, keeping the last definition");
            }
        }
        Ok(Self {
            bundles: by_industry,
        })
    }

    pub fn get_content_suggestions(&self, industry: &str) -> Option<&ContentSuggestionBundle> {
        self.bundles.get(&normalize_industry(industry))
    }

    /// Catalogued industry keys, sorted
    pub fn industries(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Render a content bundle for `industry`. `None` when the industry is not catalogued.
    pub fn generate_content<R: Rng + ?Sized>(
        &self,
        industry: &str,
        experience_band: &str,
        rng: &mut R,
    ) -> Option<GeneratedContent> {
        let Some(bundle) = self.get_content_suggestions(industry) else {
            debug!("No content suggestions for industry: {}", industry);
            return None;
        };

        let summary_template = bundle.summary_templates.choose(rng)?;

        let mut value_for = |p: Placeholder| match p {
            Placeholder::Years => experience_band.to_string(),
            numeric => numeric.random_value(&mut *rng).unwrap_or_default(),
        };

        let summary = placeholder::fill(summary_template, &mut value_for);

        let achievements = bundle
            .achievement_templates
            .iter()
            .take(ACHIEVEMENT_COUNT)
            .map(|t| placeholder::fill(t, &mut value_for))
            .collect();

        let skills = bundle
            .skill_pool
            .iter()
            .take(SKILL_COUNT)
            .cloned()
            .collect();

        Some(GeneratedContent {
            summary,
            skills,
            achievements,
        })
    }
}
