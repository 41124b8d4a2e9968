// src/domain/search/page.rs
use crate::domain::search::request::Pagination;
use crate::domain::user::User;

/// Whether the requested window truncated the filtered set. These flags are
/// relative to the requested limits, not to the cursor position within the
/// full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// A result entry: the user paired with the opaque cursor locating it.
#[derive(Debug, Clone)]
pub struct UserWithCursor {
    pub user: User,
    pub cursor: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub users: Vec<UserWithCursor>,
    pub page_info: PageInfo,
    /// Size of the filtered-but-unpaginated set; cursor bounds and limits do
    /// not affect this number.
    pub total_count: u64,
}

/// Derive the page flags from the request shape and the total count alone,
/// independent of the fetched rows.
///
/// Combinations outside these rules (a cursor without any limit, no cursor
/// and no limit) fall through to false/false. That undercounts relative to
/// strict relay semantics, but it is the established behavior of this
/// contract and callers depend on it.
pub fn page_info(pagination: &Pagination, total_count: u64) -> PageInfo {
    let first_truncates = pagination.first.is_some_and(|first| first < total_count);
    let last_truncates = pagination.last.is_some_and(|last| last < total_count);

    if (pagination.after.is_some() && first_truncates)
        || (pagination.before.is_some() && last_truncates)
    {
        PageInfo {
            has_next_page: true,
            has_previous_page: true,
        }
    } else if pagination.after.is_none() && first_truncates {
        PageInfo {
            has_next_page: true,
            has_previous_page: false,
        }
    } else if pagination.before.is_none() && last_truncates {
        PageInfo {
            has_next_page: false,
            has_previous_page: true,
        }
    } else {
        PageInfo::default()
    }
}
