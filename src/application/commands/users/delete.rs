use super::UserCommandService;
use crate::{application::error::ApplicationResult, domain::user::UserId};

pub struct DeleteUserCommand {
    pub id: String,
}

impl UserCommandService {
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let id = UserId::decode(&command.id)?;
        self.user_repo.delete(id).await?;
        Ok(())
    }
}
