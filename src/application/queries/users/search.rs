use super::UserQueryService;
use crate::{
    application::{dto::SearchPageDto, error::ApplicationResult},
    domain::search::{Pagination, SearchRequest, SortKey},
};

pub struct SearchUsersQuery {
    pub ids: Vec<String>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub first: Option<u64>,
    pub last: Option<u64>,
    pub sort_keys: Vec<SortKey>,
}

impl UserQueryService {
    pub async fn search_users(&self, query: SearchUsersQuery) -> ApplicationResult<SearchPageDto> {
        let request = SearchRequest {
            id_filter: query.ids,
            pagination: Pagination {
                after: query.after,
                before: query.before,
                first: query.first,
                last: query.last,
            },
            sort_keys: query.sort_keys,
        };

        let result = self.engine.search(&request).await?;
        Ok(result.into())
    }
}
