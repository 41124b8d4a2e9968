use crate::application::dto::UserWithCursorDto;
use crate::domain::search::SearchResult;
use serde::{Deserialize, Serialize};

/// Search page as exposed to the transport layer: entries plus the
/// window-truncation flags and the size of the filtered set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPageDto {
    pub users: Vec<UserWithCursorDto>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub total_count: u64,
}

impl From<SearchResult> for SearchPageDto {
    fn from(result: SearchResult) -> Self {
        Self {
            users: result.users.into_iter().map(Into::into).collect(),
            has_next_page: result.page_info.has_next_page,
            has_previous_page: result.page_info.has_previous_page,
            total_count: result.total_count,
        }
    }
}
