use super::UserCommandService;
use crate::{
    application::{dto::UserWithCursorDto, error::ApplicationResult},
    domain::user::{Email, UserId, UserUpdate},
};

pub struct UpdateUserCommand {
    pub id: String,
    pub email: String,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserWithCursorDto> {
        let id = UserId::decode(&command.id)?;
        let email = Email::new(command.email)?;

        let update = UserUpdate::new(id, self.clock.now()).with_email(email);
        let user = self.user_repo.update(update).await?;

        Ok(UserWithCursorDto::from_user(user))
    }
}
