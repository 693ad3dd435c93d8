// src/listing/spec.rs
//! Filter, sort and page parameters handed to the listing engine

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default)]
    pub free_text: Option<String>,
    /// Field name to exact match value; blank values are ignored
    #[serde(default)]
    pub facets: BTreeMap<String, String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = Some(text.into());
        self
    }

    pub fn with_facet(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets.insert(field.into(), value.into());
        self
    }

    /// Facets that actually constrain the result
    pub fn active_facets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facets
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}

/// Parse a `field=value` facet argument
pub fn parse_facet(raw: &str) -> Result<(String, String)> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| Error::InvalidSpec(format!("facet '{}' must be field=value", raw)))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(Error::InvalidSpec(format!("facet '{}' has no field name", raw)));
    }
    Ok((field.to_string(), value.to_string()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(Error::InvalidSpec(format!(
                "unknown sort direction '{}', use asc or desc",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Accepts `field`, `field:asc` or `field:desc`
impl FromStr for SortSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (field, direction) = match s.split_once(':') {
            Some((field, direction)) => (field, direction.parse()?),
            None => (s, SortDirection::Asc),
        };
        let field = field.trim();
        if field.is_empty() {
            return Err(Error::InvalidSpec(format!("sort '{}' has no field name", s)));
        }
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// One-based page request. Zero page numbers and sizes are rejected on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageSpec", rename_all = "camelCase")]
pub struct PageSpec {
    page: usize,
    page_size: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageSpec {
    page: usize,
    page_size: usize,
}

impl TryFrom<RawPageSpec> for PageSpec {
    type Error = Error;

    fn try_from(raw: RawPageSpec) -> Result<Self> {
        PageSpec::new(raw.page, raw.page_size)
    }
}

impl PageSpec {
    pub fn new(page: usize, page_size: usize) -> Result<Self> {
        if page == 0 {
            return Err(Error::InvalidArgument("page must be at least 1".to_string()));
        }
        if page_size == 0 {
            return Err(Error::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl fmt::Display for PageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} (size {})", self.page, self.page_size)
    }
}
