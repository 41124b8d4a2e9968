// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{CreateUserCommand, DeleteUserCommand, UpdateUserCommand},
    dto::{SearchPageDto, UserDto, UserWithCursorDto},
    queries::users::{GetUserByEmailQuery, GetUserQuery, SearchUsersQuery},
};
use crate::domain::search::{SortDirection, SortField, SortKey};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchUsersParams {
    /// Comma-separated list of user cursors to restrict the result to.
    #[serde(default)]
    pub ids: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub first: Option<u64>,
    #[serde(default)]
    pub last: Option<u64>,
    /// Comma-separated `field` or `field:asc|desc` entries.
    #[serde(default)]
    pub sort: Option<String>,
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(request): Json<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<UserWithCursorDto>)> {
    let created = state
        .services
        .user_commands
        .create_user(CreateUserCommand {
            email: request.email,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user_by_email(
    Extension(state): Extension<HttpState>,
    Path(email): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user_by_email(GetUserByEmailQuery { email })
        .await
        .into_http()
        .map(Json)
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> HttpResult<Json<UserWithCursorDto>> {
    state
        .services
        .user_commands
        .update_user(UpdateUserCommand {
            id,
            email: request.email,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete_user(DeleteUserCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_users(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchUsersParams>,
) -> HttpResult<Json<SearchPageDto>> {
    let ids = params
        .ids
        .as_deref()
        .map(split_csv)
        .unwrap_or_default()
        .into_iter()
        .map(str::to_string)
        .collect();
    let sort_keys = parse_sort(params.sort.as_deref())?;

    state
        .services
        .user_queries
        .search_users(SearchUsersQuery {
            ids,
            after: params.after,
            before: params.before,
            first: params.first,
            last: params.last,
            sort_keys,
        })
        .await
        .into_http()
        .map(Json)
}

fn split_csv(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Parse `field:direction` pairs, defaulting the direction to ascending.
/// Field names are validated here so the search core only ever sees typed
/// sort keys.
fn parse_sort(raw: Option<&str>) -> HttpResult<Vec<SortKey>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let mut keys = Vec::new();
    for entry in split_csv(raw) {
        let mut parts = entry.splitn(2, ':');
        let field = parts.next().unwrap_or_default();
        let field: SortField = field
            .parse()
            .map_err(|_| HttpError::bad_request(format!("unknown sort field '{field}'")))?;

        let direction = match parts.next() {
            None | Some("asc") => SortDirection::Ascending,
            Some("desc") => SortDirection::Descending,
            Some(other) => {
                return Err(HttpError::bad_request(format!(
                    "unknown sort direction '{other}'"
                )));
            }
        };

        keys.push(SortKey::new(field, direction));
    }

    Ok(keys)
}
