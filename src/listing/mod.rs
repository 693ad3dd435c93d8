// src/listing/mod.rs
//! Generic search / facet / sort / paginate over in-memory collections

pub mod engine;
pub mod item;
pub mod record;
pub mod spec;
pub mod value;

pub use engine::{query, Page, QueryEngine};
pub use item::ListableItem;
pub use record::Record;
pub use spec::{parse_facet, FilterSpec, PageSpec, SortDirection, SortSpec};
pub use value::{FieldValue, Value};
