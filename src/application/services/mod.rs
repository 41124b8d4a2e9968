// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::users::UserCommandService, ports::time::Clock, queries::users::UserQueryService,
    },
    domain::{search::UserStore, user::UserRepository},
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        user_store: Arc<dyn UserStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&user_store),
        ));

        Self {
            user_commands,
            user_queries,
        }
    }
}
