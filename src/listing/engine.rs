// src/listing/engine.rs
//! Filter -> sort -> paginate pipeline shared by every listing

use serde::Serialize;
use tracing::debug;

use super::item::ListableItem;
use super::spec::{FilterSpec, PageSpec, SortDirection, SortSpec};
use super::value::compare_optional;
use crate::utils::normalize_search;

/// One page of a listing plus the counts needed to render pagination
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page_items: Vec<T>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            page_items: self.page_items.into_iter().map(f).collect(),
            total_matched: self.total_matched,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.page_items.is_empty()
    }
}

impl<T: Clone> Page<&T> {
    pub fn cloned(self) -> Page<T> {
        self.map(T::clone)
    }
}

/// Listing query engine; holds only the set of free-text searchable fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryEngine {
    search_fields: Vec<String>,
}

impl QueryEngine {
    pub fn new<I, S>(search_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_fields: search_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Engine searching the item type's default fields
    pub fn for_item<T: ListableItem>() -> Self {
        Self::new(T::SEARCH_FIELDS.iter().copied())
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    /// Run the pipeline. Never mutates `items`; never fails.
    pub fn query<'a, T: ListableItem>(
        &self,
        items: &'a [T],
        filter: &FilterSpec,
        sort: Option<&SortSpec>,
        page: PageSpec,
    ) -> Page<&'a T> {
        let needle = normalize_search(filter.free_text.as_deref());
        let facets: Vec<(&str, &str)> = filter.active_facets().collect();

        let mut matched: Vec<&'a T> = items
            .iter()
            .filter(|item| {
                needle
                    .as_deref()
                    .map_or(true, |n| self.matches_text(*item, n))
            })
            .filter(|item| Self::matches_facets(*item, &facets))
            .collect();

        if let Some(sort) = sort {
            Self::sort(&mut matched, sort);
        }

        let total_matched = matched.len();
        let total_pages = total_matched.div_ceil(page.page_size()).max(1);
        let start = page.offset().min(total_matched);
        let end = start.saturating_add(page.page_size()).min(total_matched);
        let page_items: Vec<&'a T> = matched.drain(start..end).collect();

        debug!(
            "Listing query: {} items, {} matched, {} of {} pages, {} returned",
            items.len(),
            total_matched,
            page.page(),
            total_pages,
            page_items.len()
        );

        Page {
            page_items,
            total_matched,
            total_pages,
            page: page.page(),
            page_size: page.page_size(),
        }
    }

    fn matches_text<T: ListableItem>(&self, item: &T, needle: &str) -> bool {
        self.search_fields
            .iter()
            .filter_map(|name| item.field(name))
            .any(|value| value.contains_text(needle))
    }

    fn matches_facets<T: ListableItem>(item: &T, facets: &[(&str, &str)]) -> bool {
        facets.iter().all(|(name, expected)| {
            item.field(name)
                .map_or(false, |value| value.equals_facet(expected))
        })
    }

    /// Stable sort; ties keep input order in both directions
    fn sort<T: ListableItem>(items: &mut [&T], sort: &SortSpec) {
        let field = sort.field.as_str();
        items.sort_by(|a, b| {
            let ordering = compare_optional(a.field(field).as_ref(), b.field(field).as_ref());
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

/// Query with the item type's default searchable fields
pub fn query<'a, T: ListableItem>(
    items: &'a [T],
    filter: &FilterSpec,
    sort: Option<&SortSpec>,
    page: PageSpec,
) -> Page<&'a T> {
    QueryEngine::for_item::<T>().query(items, filter, sort, page)
}
