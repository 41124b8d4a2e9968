use std::sync::Arc;

use crate::domain::{
    search::{SearchEngine, UserStore},
    user::UserRepository,
};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) engine: SearchEngine,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, store: Arc<dyn UserStore>) -> Self {
        Self {
            user_repo,
            engine: SearchEngine::new(store),
        }
    }
}
