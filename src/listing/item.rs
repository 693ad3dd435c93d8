// src/listing/item.rs
use super::value::FieldValue;

/// Anything the listing engine can filter, sort and page.
///
/// Fields are looked up by name; returning `None` marks the field as absent on
/// this item, which the engine treats as "no match" when filtering and as the
/// smallest value when sorting.
pub trait ListableItem {
    /// Fields searched by free text when the caller does not name its own
    const SEARCH_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> &str;

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}
