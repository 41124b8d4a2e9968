use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, UserId},
};

pub struct GetUserQuery {
    pub id: String,
}

pub struct GetUserByEmailQuery {
    pub email: String,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let id = UserId::decode(&query.id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user '{}'", query.id)))?;

        Ok(user.into())
    }

    pub async fn get_user_by_email(
        &self,
        query: GetUserByEmailQuery,
    ) -> ApplicationResult<UserDto> {
        let email = Email::new(query.email)?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user with email '{email}'")))?;

        Ok(user.into())
    }
}
