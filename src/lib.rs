pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod models;
pub mod templates;
pub mod utils;

pub use error::{Error, Result};
pub use listing::{query, FilterSpec, ListableItem, Page, PageSpec, QueryEngine, SortSpec};
pub use templates::{GeneratedContent, ResumeTemplate, TemplateLibrary};
