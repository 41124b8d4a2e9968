mod get;
mod search;
mod service;

pub use get::{GetUserByEmailQuery, GetUserQuery};
pub use search::SearchUsersQuery;
pub use service::UserQueryService;
