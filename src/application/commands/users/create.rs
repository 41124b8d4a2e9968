use super::UserCommandService;
use crate::{
    application::{dto::UserWithCursorDto, error::ApplicationResult},
    domain::user::{Email, NewUser, UserId},
};

pub struct CreateUserCommand {
    pub email: String,
}

impl UserCommandService {
    /// Create a new user. The response carries the freshly minted cursor so
    /// callers can resume pagination from the new document.
    pub async fn create_user(
        &self,
        command: CreateUserCommand,
    ) -> ApplicationResult<UserWithCursorDto> {
        let email = Email::new(command.email)?;
        let new_user = NewUser::new(UserId::generate(), email, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        Ok(UserWithCursorDto::from_user(user))
    }
}
