// src/error.rs
//! Library error type shared by the template library and the listing engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate template id: {0}")]
    DuplicateTemplateId(String),

    #[error("Unknown placeholder {{{token}}} in {industry} template: {template}")]
    UnknownPlaceholder {
        industry: String,
        template: String,
        token: String,
    },

    #[error("Industry '{0}' has no summary templates")]
    EmptySummaryTemplates(String),

    #[error("Summary template for {industry} has no {{years}} placeholder: {template}")]
    MissingYearsPlaceholder { industry: String, template: String },

    #[error("Industry '{industry}' has {found} {pool}, at least {required} required")]
    PoolTooSmall {
        industry: String,
        pool: &'static str,
        found: usize,
        required: usize,
    },

    #[error("Invalid query spec: {0}")]
    InvalidSpec(String),

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Failed to parse records: {0}")]
    RecordParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
