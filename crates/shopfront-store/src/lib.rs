#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod collection;
mod error;
pub mod model;
mod page;
mod query;
mod record;
mod search;
mod store;

pub use crate::collection::Collection;
pub use crate::error::{Error, Result};
pub use crate::page::Page;
pub use crate::query::{
    ALLOWED_PAGE_SIZES, DEFAULT_PAGE_SIZE, ListParams, ListQuery, QuerySchema, SortOrder,
};
pub use crate::record::{FieldValue, Record};
pub use crate::search::SearchFilter;
pub use crate::store::Store;
