// src/domain/search/request.rs
use crate::domain::search::sort::SortKey;

/// Relay-style pagination bounds. `after`/`before` are opaque cursor strings;
/// `first`/`last` are the forward and backward window sizes. The engine does
/// not assume the caller pairs them correctly.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    pub after: Option<String>,
    pub before: Option<String>,
    pub first: Option<u64>,
    pub last: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Optional allow-list of encoded identifiers. Treated as a set; when
    /// non-empty the result is restricted to these documents.
    pub id_filter: Vec<String>,
    pub pagination: Pagination,
    /// Tie-break precedence follows input order, first key highest.
    pub sort_keys: Vec<SortKey>,
}
