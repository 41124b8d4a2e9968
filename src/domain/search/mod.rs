// src/domain/search/mod.rs
pub mod engine;
pub mod filter;
pub mod page;
pub mod request;
pub mod sort;
pub mod store;

pub use engine::SearchEngine;
pub use filter::SearchFilter;
pub use page::{PageInfo, SearchResult, UserWithCursor};
pub use request::{Pagination, SearchRequest};
pub use sort::{SortDirection, SortField, SortKey, SortSpec};
pub use store::UserStore;
